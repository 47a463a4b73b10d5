// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// A returned quota definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaDefinition {
    /// An alpha-numeric value identifying the quota.
    pub id: String,
    /// The human-readable name of the quota.
    pub name: String,
    /// The type of the quota.
    pub r#type: String,
    /// The total app limit.
    pub number_of_apps: f64,
    /// The total service instances limit per app.
    pub number_of_service_instances: f64,
    /// Default number of instances per lite plan.
    pub default_number_of_instances_per_lite_plan: f64,
    /// The total instances limit per app.
    pub instances_per_app: f64,
    /// The total memory of app instance.
    pub instance_memory: String,
    /// The total app memory capacity.
    pub total_app_memory: String,
    /// The VSI limit.
    pub vsi_limit: f64,
    /// The resource quotas associated with a quota definition.
    pub resource_quotas: Vec<ResourceQuota>,
    /// The date when the quota was initially created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// The date when the quota was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A list of quota definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaDefinitionList {
    /// The list of quota definitions.
    pub resources: Vec<QuotaDefinition>,
}

/// A resource quota of a quota definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceQuota {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The human-readable name of the quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// The full CRN associated with the quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    /// The limit number of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
}

/// A newly created resource group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResCreateResourceGroup {
    /// An alpha-numeric value identifying the resource group.
    pub id: String,
    /// The full CRN (cloud resource name) associated with the resource group.
    pub crn: String,
}

/// A resource group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroup {
    /// An alpha-numeric value identifying the resource group.
    pub id: String,
    /// The full CRN (cloud resource name) associated with the resource group.
    pub crn: String,
    /// An alpha-numeric value identifying the account ID.
    pub account_id: String,
    /// The human-readable name of the resource group.
    pub name: String,
    /// The state of the resource group.
    pub state: String,
    /// Identify if this resource group is default of the account or not.
    pub default: bool,
    /// An alpha-numeric value identifying the quota ID associated with the
    /// resource group.
    pub quota_id: String,
    /// The URL to access the quota details that associated with the resource
    /// group.
    pub quota_url: String,
    /// The URL to access the payment methods details that associated with the
    /// resource group.
    pub payment_methods_url: String,
    /// An array of the resources that linked to the resource group.
    pub resource_linkages: Vec<serde_json::Value>,
    /// The URL to access the team details that associated with the resource
    /// group.
    pub teams_url: String,
    /// The date when the resource group was initially created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// The date when the resource group was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A list of resource groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroupList {
    /// The list of resource groups.
    pub resources: Vec<ResourceGroup>,
}

/// The request for [ResourceManager::get_account_quota_list][crate::client::ResourceManager::get_account_quota_list].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountQuotaListRequest {
    /// The ID of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl GetAccountQuotaListRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][Self::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][Self::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::get_resource_quota][crate::client::ResourceManager::get_resource_quota].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceQuotaRequest {
    /// The ID of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// The resource type, e.g. `service_instances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl GetResourceQuotaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][Self::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][Self::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][Self::resource_type].
    pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][Self::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::update_resource_quota][crate::client::ResourceManager::update_resource_quota].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceQuotaRequest {
    /// The ID of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// The resource type, e.g. `service_instances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl UpdateResourceQuotaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][Self::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][Self::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][Self::resource_type].
    pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][Self::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::delete_resource_quota][crate::client::ResourceManager::delete_resource_quota].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResourceQuotaRequest {
    /// The ID of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// The resource type, e.g. `service_instances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl DeleteResourceQuotaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][Self::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][Self::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][Self::resource_type].
    pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][Self::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::create_default_resource_quota][crate::client::ResourceManager::create_default_resource_quota].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDefaultResourceQuotaRequest {
    /// The resource type, e.g. `service_instances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl CreateDefaultResourceQuotaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][Self::resource_type].
    pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][Self::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::create_schema][crate::client::ResourceManager::create_schema].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchemaRequest {
    /// The resource type, e.g. `service_instances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl CreateSchemaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][Self::resource_type].
    pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][Self::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::get_schema][crate::client::ResourceManager::get_schema].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSchemaRequest {
    /// The resource type, e.g. `service_instances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl GetSchemaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][Self::resource_type].
    pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][Self::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::list_quota_definitions][crate::client::ResourceManager::list_quota_definitions].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuotaDefinitionsRequest {
}

impl ListQuotaDefinitionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [ResourceManager::get_quota_definition][crate::client::ResourceManager::get_quota_definition].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuotaDefinitionRequest {
    /// The ID of the quota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetQuotaDefinitionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Self::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::list_resource_groups][crate::client::ResourceManager::list_resource_groups].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourceGroupsRequest {
    /// The ID of the account that contains the resource groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// The date in the format `YYYY-MM` used to query the historical resource
    /// groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ListResourceGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][Self::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][Self::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [date][Self::date].
    pub fn set_date<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.date = Some(v.into());
        self
    }

    /// Sets or clears the value of [date][Self::date].
    pub fn set_or_clear_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.date = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::create_resource_group][crate::client::ResourceManager::create_resource_group].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceGroupRequest {
    /// The new name of the resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The account ID of the resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl CreateResourceGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][Self::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [account_id][Self::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][Self::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::get_resource_group][crate::client::ResourceManager::get_resource_group].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceGroupRequest {
    /// The short or long ID of the resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetResourceGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Self::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::update_resource_group][crate::client::ResourceManager::update_resource_group].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceGroupRequest {
    /// The short or long ID of the resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The new name of the resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The state of the resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl UpdateResourceGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Self::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][Self::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][Self::state].
    pub fn set_state<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets or clears the value of [state][Self::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.state = v.map(|x| x.into());
        self
    }
}

/// The request for [ResourceManager::delete_resource_group][crate::client::ResourceManager::delete_resource_group].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResourceGroupRequest {
    /// The short or long ID of the resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DeleteResourceGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Self::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = v.map(|x| x.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn resource_group() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ResourceGroup>(json!({
            "id": "rg-123",
            "crn": "crn:v1:bluemix:public:resource-controller::a/acct-1::resource-group:rg-123",
            "account_id": "acct-1",
            "name": "Default",
            "state": "ACTIVE",
            "default": true,
            "resource_linkages": [],
        }))?;
        assert!(got.default);
        assert_eq!(got.state, "ACTIVE");
        assert_eq!(got.quota_id, "");
        assert_eq!(got.created_at, None);
        Ok(())
    }

    #[test]
    fn quota_definition() -> anyhow::Result<()> {
        let got = serde_json::from_value::<QuotaDefinitionList>(json!({
            "resources": [{
                "id": "7ce89f4a-4381-4600-b814-3cd9a4f4bdf4",
                "name": "Trial Quota",
                "type": "trial",
                "number_of_apps": 100,
                "vsi_limit": 25,
                "resource_quotas": [{"_id": "q-1", "resource_id": "cloudant", "limit": 2.5}],
            }],
        }))?;
        let quota = &got.resources[0];
        assert_eq!(quota.r#type, "trial");
        assert_eq!(quota.number_of_apps, 100.0);
        assert_eq!(quota.resource_quotas[0].id.as_deref(), Some("q-1"));
        assert_eq!(quota.resource_quotas[0].limit, Some(2.5));
        Ok(())
    }

    #[test]
    fn update_resource_group_request() -> anyhow::Result<()> {
        let request = UpdateResourceGroupRequest::new()
            .set_id("rg-123")
            .set_name("renamed")
            .set_state("");
        let got = serde_json::to_value(request)?;
        assert_eq!(got, json!({"id": "rg-123", "name": "renamed", "state": ""}));
        Ok(())
    }
}
