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

/// Response body format for API key V1 REST requests.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyDetails {
    /// Context with key properties for problem determination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,

    /// Unique identifier of this API key.
    pub id: String,

    /// Version of the API key details object. Use this value in the `If-Match`
    /// header of update requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_tag: Option<String>,

    /// Cloud Resource Name of the item.
    pub crn: String,

    /// The API key cannot be changed if set to true.
    pub locked: bool,

    /// If set contains a date time string of the creation date in ISO format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// If set contains a date time string of the last modification date in ISO
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,

    /// Name of the API key.
    pub name: String,

    /// The optional description of the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The IAM ID of the user or service ID the API key belongs to.
    pub iam_id: String,

    /// ID of the account that this API key authenticates for.
    pub account_id: String,

    /// The API key value. Only returned when the API key is created.
    pub apikey: String,
}

/// Parameters for the API key in the Create service Id V1 REST request.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyInsideCreateServiceIdRequest {
    /// Name of the API key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The IAM ID of the service ID the API key belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iam_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// You can optionally passthrough the API key value for this API key. If
    /// passed, NO validation of that apiKey value is done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
}

impl ApiKeyInsideCreateServiceIdRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [iam_id][Self::iam_id].
    pub fn set_iam_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.iam_id = v.into();
        self
    }

    /// Sets the value of [account_id][Self::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets the value of [apikey][Self::apikey].
    pub fn set_apikey<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.apikey = Some(v.into());
        self
    }
}

/// Context with key properties for problem determination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionResponseContext {
    /// The request ID of the inbound REST request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

/// Response body format for the List API keys V1 REST request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListApiKeysResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ExceptionResponseContext>,

    /// The offset of the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Optional size of a single page. Default is 20 items per page. Valid
    /// range is 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Link to the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    /// Link to the previous available page. If `previous` property is not
    /// part of the response no previous page is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// Link to the next available page. If `next` property is not part of the
    /// response no next page is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// List of API keys based on the query paramters and the page size. The
    /// `apikeys` array is always part of the response but might be empty
    /// depending on the query parameter values provided.
    pub apikeys: Vec<ApiKeyDetails>,
}

/// Context with key properties for problem determination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseContext {
    /// The transaction ID of the inbound REST request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// The operation of the inbound REST request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

/// Response body format for service ID V1 REST requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceIdDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,

    /// Unique identifier of this service ID.
    pub id: String,

    /// Cloud wide identifier for identities of this service ID.
    pub iam_id: String,

    /// Version of the service ID details object. Use this value in the
    /// `If-Match` header of update requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_tag: Option<String>,

    /// Cloud Resource Name of the item.
    pub crn: String,

    /// The service ID cannot be changed if set to true.
    pub locked: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,

    /// ID of the account the service ID belongs to.
    pub account_id: String,

    /// Name of the service ID.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional list of CRNs of the service instances using this service ID.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unique_instance_crns: Vec<String>,

    /// The API key created together with the service ID, if any.
    pub apikey: ApiKeyDetails,
}

/// Response body format for the list service ID V1 REST request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceIdsList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ExceptionResponseContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// List of service IDs based on the query paramters and the page size. The
    /// `serviceids` array is always part of the response but might be empty
    /// depending on the query parameter values provided.
    pub serviceids: Vec<ServiceIdDetails>,
}

/// The request for [IamIdentity::list_api_keys][crate::client::IamIdentity::list_api_keys].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApiKeysRequest {
    /// Account ID of the API keys to query. If a service IAM ID is specified in
    /// `iam_id` then `account_id` must match the account of the IAM ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// IAM ID of the API keys to be queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    /// Optional size of a single page. Default is 20 items per page. Valid
    /// range is 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<String>,
    /// Optional Prev or Next page token returned from a previous query
    /// execution. Default is start with first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagetoken: Option<String>,
}

impl ListApiKeysRequest {
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

    /// Sets the value of [iam_id][Self::iam_id].
    pub fn set_iam_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.iam_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [iam_id][Self::iam_id].
    pub fn set_or_clear_iam_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.iam_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pagesize][Self::pagesize].
    pub fn set_pagesize<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.pagesize = Some(v.into());
        self
    }

    /// Sets or clears the value of [pagesize][Self::pagesize].
    pub fn set_or_clear_pagesize<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.pagesize = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pagetoken][Self::pagetoken].
    pub fn set_pagetoken<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.pagetoken = Some(v.into());
        self
    }

    /// Sets or clears the value of [pagetoken][Self::pagetoken].
    pub fn set_or_clear_pagetoken<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.pagetoken = v.map(|x| x.into());
        self
    }
}

/// The request for [IamIdentity::create_api_key][crate::client::IamIdentity::create_api_key].
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    /// Name of the API key. The name is not checked for uniqueness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The IAM ID of the user or service ID the API key belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    /// The optional description of the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The account ID of the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// A user-supplied API key value, when unset the service generates one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    /// Indicates if the API key is locked for further write operations. False
    /// by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_lock: Option<String>,
}

impl CreateApiKeyRequest {
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

    /// Sets the value of [iam_id][Self::iam_id].
    pub fn set_iam_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.iam_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [iam_id][Self::iam_id].
    pub fn set_or_clear_iam_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.iam_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][Self::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
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

    /// Sets the value of [apikey][Self::apikey].
    pub fn set_apikey<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.apikey = Some(v.into());
        self
    }

    /// Sets or clears the value of [apikey][Self::apikey].
    pub fn set_or_clear_apikey<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.apikey = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_lock][Self::entity_lock].
    pub fn set_entity_lock<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.entity_lock = Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_lock][Self::entity_lock].
    pub fn set_or_clear_entity_lock<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.entity_lock = v.map(|x| x.into());
        self
    }
}

/// The request for [IamIdentity::get_api_key_details][crate::client::IamIdentity::get_api_key_details].
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApiKeyDetailsRequest {
    /// API key value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_api_key: Option<String>,
}

impl GetApiKeyDetailsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [iam_api_key][Self::iam_api_key].
    pub fn set_iam_api_key<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.iam_api_key = Some(v.into());
        self
    }

    /// Sets or clears the value of [iam_api_key][Self::iam_api_key].
    pub fn set_or_clear_iam_api_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.iam_api_key = v.map(|x| x.into());
        self
    }
}

/// The request for [IamIdentity::get_api_key][crate::client::IamIdentity::get_api_key].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApiKeyRequest {
    /// Unique ID of the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetApiKeyRequest {
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

/// The request for [IamIdentity::update_api_key][crate::client::IamIdentity::update_api_key].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApiKeyRequest {
    /// Unique ID of the API key to be updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Version of the API key to be updated. Use `*` to skip the optimistic
    /// concurrency check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
    /// The name of the API key to update. Unset leaves the name unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The description of the API key to update. An empty string clears the
    /// description, unset leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateApiKeyRequest {
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

    /// Sets the value of [if_match][Self::if_match].
    pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][Self::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.if_match = v.map(|x| x.into());
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

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][Self::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }
}

/// The request for [IamIdentity::delete_api_key][crate::client::IamIdentity::delete_api_key].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApiKeyRequest {
    /// Unique ID of the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DeleteApiKeyRequest {
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

/// The request for [IamIdentity::lock_api_key][crate::client::IamIdentity::lock_api_key].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockApiKeyRequest {
    /// Unique ID of the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl LockApiKeyRequest {
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

/// The request for [IamIdentity::unlock_api_key][crate::client::IamIdentity::unlock_api_key].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockApiKeyRequest {
    /// Unique ID of the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl UnlockApiKeyRequest {
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

/// The request for [IamIdentity::list_service_ids][crate::client::IamIdentity::list_service_ids].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServiceIdsRequest {
    /// Account ID of the service IDs to query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Name of the service ID to query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional size of a single page. Default is 20 items per page. Valid
    /// range is 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<String>,
    /// Optional Prev or Next page token returned from a previous query
    /// execution. Default is start with first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagetoken: Option<String>,
    /// Optional sort property, valid values are `name`, `description`,
    /// `created_at` and `modified_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Optional sort order, valid values are `asc` and `desc`. Default is
    /// `asc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl ListServiceIdsRequest {
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

    /// Sets the value of [pagesize][Self::pagesize].
    pub fn set_pagesize<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.pagesize = Some(v.into());
        self
    }

    /// Sets or clears the value of [pagesize][Self::pagesize].
    pub fn set_or_clear_pagesize<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.pagesize = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pagetoken][Self::pagetoken].
    pub fn set_pagetoken<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.pagetoken = Some(v.into());
        self
    }

    /// Sets or clears the value of [pagetoken][Self::pagetoken].
    pub fn set_or_clear_pagetoken<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.pagetoken = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort][Self::sort].
    pub fn set_sort<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets or clears the value of [sort][Self::sort].
    pub fn set_or_clear_sort<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.sort = v.map(|x| x.into());
        self
    }

    /// Sets the value of [order][Self::order].
    pub fn set_order<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.order = Some(v.into());
        self
    }

    /// Sets or clears the value of [order][Self::order].
    pub fn set_or_clear_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.order = v.map(|x| x.into());
        self
    }
}

/// The request for [IamIdentity::create_service_id][crate::client::IamIdentity::create_service_id].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceIdRequest {
    /// ID of the account the service ID belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Name of the service ID. The name is not checked for uniqueness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The optional description of the service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional list of CRNs of the service instances using this service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_instance_crns: Option<Vec<String>>,
    /// An API key created together with the service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<crate::model::ApiKeyInsideCreateServiceIdRequest>,
    /// Indicates if the service ID is locked for further write operations.
    /// False by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_lock: Option<String>,
}

impl CreateServiceIdRequest {
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

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][Self::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unique_instance_crns][Self::unique_instance_crns].
    pub fn set_unique_instance_crns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.unique_instance_crns = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [apikey][Self::apikey].
    pub fn set_apikey<T: std::convert::Into<crate::model::ApiKeyInsideCreateServiceIdRequest>>(
        mut self,
        v: T,
    ) -> Self {
        self.apikey = Some(v.into());
        self
    }

    /// Sets or clears the value of [apikey][Self::apikey].
    pub fn set_or_clear_apikey<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ApiKeyInsideCreateServiceIdRequest>,
    {
        self.apikey = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_lock][Self::entity_lock].
    pub fn set_entity_lock<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.entity_lock = Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_lock][Self::entity_lock].
    pub fn set_or_clear_entity_lock<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.entity_lock = v.map(|x| x.into());
        self
    }
}

/// The request for [IamIdentity::get_service_id][crate::client::IamIdentity::get_service_id].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetServiceIdRequest {
    /// Unique ID of the service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetServiceIdRequest {
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

/// The request for [IamIdentity::update_service_id][crate::client::IamIdentity::update_service_id].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceIdRequest {
    /// Unique ID of the service ID to be updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Version of the service ID to be updated. Use `*` to skip the optimistic
    /// concurrency check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
    /// The name of the service ID to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The description of the service ID to update. An empty string clears the
    /// description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List of CRNs which point to the services connected to this service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_instance_crns: Option<Vec<String>>,
}

impl UpdateServiceIdRequest {
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

    /// Sets the value of [if_match][Self::if_match].
    pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][Self::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.if_match = v.map(|x| x.into());
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

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][Self::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unique_instance_crns][Self::unique_instance_crns].
    pub fn set_unique_instance_crns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.unique_instance_crns = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request for [IamIdentity::delete_service_id][crate::client::IamIdentity::delete_service_id].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceIdRequest {
    /// Unique ID of the service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DeleteServiceIdRequest {
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

/// The request for [IamIdentity::lock_service_id][crate::client::IamIdentity::lock_service_id].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockServiceIdRequest {
    /// Unique ID of the service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl LockServiceIdRequest {
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

/// The request for [IamIdentity::unlock_service_id][crate::client::IamIdentity::unlock_service_id].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockServiceIdRequest {
    /// Unique ID of the service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl UnlockServiceIdRequest {
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

// The API key values are secrets, they never appear in the `Debug` output.
const CENSORED: &str = "[censored]";

fn censor(v: &Option<String>) -> Option<&'static str> {
    v.as_ref().map(|_| CENSORED)
}

impl std::fmt::Debug for ApiKeyDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let apikey = if self.apikey.is_empty() { "" } else { CENSORED };
        f.debug_struct("ApiKeyDetails")
            .field("context", &self.context)
            .field("id", &self.id)
            .field("entity_tag", &self.entity_tag)
            .field("crn", &self.crn)
            .field("locked", &self.locked)
            .field("created_at", &self.created_at)
            .field("modified_at", &self.modified_at)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("iam_id", &self.iam_id)
            .field("account_id", &self.account_id)
            .field("apikey", &apikey)
            .finish()
    }
}

impl std::fmt::Debug for ApiKeyInsideCreateServiceIdRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyInsideCreateServiceIdRequest")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("iam_id", &self.iam_id)
            .field("account_id", &self.account_id)
            .field("apikey", &censor(&self.apikey))
            .finish()
    }
}

impl std::fmt::Debug for CreateApiKeyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateApiKeyRequest")
            .field("name", &self.name)
            .field("iam_id", &self.iam_id)
            .field("description", &self.description)
            .field("account_id", &self.account_id)
            .field("apikey", &censor(&self.apikey))
            .field("entity_lock", &self.entity_lock)
            .finish()
    }
}

impl std::fmt::Debug for GetApiKeyDetailsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetApiKeyDetailsRequest")
            .field("iam_api_key", &censor(&self.iam_api_key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_names() -> anyhow::Result<()> {
        let request = UpdateApiKeyRequest::new()
            .set_id("abc123")
            .set_if_match("*")
            .set_name("");
        let got = serde_json::to_value(request)?;
        assert_eq!(got, json!({"id": "abc123", "ifMatch": "*", "name": ""}));
        Ok(())
    }

    #[test]
    fn nested_models_use_wire_names() -> anyhow::Result<()> {
        let request = CreateServiceIdRequest::new()
            .set_account_id("acct-1")
            .set_name("my-service-id")
            .set_unique_instance_crns(["crn:v1:a", "crn:v1:b"])
            .set_apikey(
                ApiKeyInsideCreateServiceIdRequest::new()
                    .set_name("key")
                    .set_iam_id("iam-ServiceId-123"),
            );
        let got = serde_json::to_value(request)?;
        assert_eq!(
            got,
            json!({
                "accountId": "acct-1",
                "name": "my-service-id",
                "uniqueInstanceCrns": ["crn:v1:a", "crn:v1:b"],
                "apikey": {"name": "key", "iam_id": "iam-ServiceId-123"},
            })
        );
        Ok(())
    }

    #[test]
    fn debug_hides_api_keys() {
        let request = GetApiKeyDetailsRequest::new().set_iam_api_key("secret-value-1");
        let got = format!("{request:?}");
        assert!(!got.contains("secret-value-1"), "{got}");
        assert!(got.contains("[censored]"), "{got}");
        assert_eq!(
            format!("{:?}", GetApiKeyDetailsRequest::new()),
            "GetApiKeyDetailsRequest { iam_api_key: None }"
        );

        let request = CreateServiceIdRequest::new().set_apikey(
            ApiKeyInsideCreateServiceIdRequest::new()
                .set_name("key")
                .set_apikey("secret-value-2"),
        );
        let got = format!("{request:?}");
        assert!(!got.contains("secret-value-2"), "{got}");
        assert!(got.contains("key"), "{got}");

        let request = CreateApiKeyRequest::new().set_apikey("secret-value-3");
        let got = format!("{request:?}");
        assert!(!got.contains("secret-value-3"), "{got}");

        let details = ApiKeyDetails {
            id: "ApiKey-123".into(),
            apikey: "secret-value-4".into(),
            ..Default::default()
        };
        let got = format!("{details:?}");
        assert!(!got.contains("secret-value-4"), "{got}");
        assert!(got.contains("ApiKey-123"), "{got}");
    }

    #[test]
    fn embedded_key_skips_empty_strings() -> anyhow::Result<()> {
        let got = serde_json::to_value(ApiKeyInsideCreateServiceIdRequest::new().set_name("key"))?;
        assert_eq!(got, json!({"name": "key"}));
        Ok(())
    }

    #[test]
    fn set_or_clear() {
        let request = ListApiKeysRequest::new()
            .set_pagesize("10")
            .set_or_clear_pagesize(None::<String>);
        assert_eq!(request.pagesize, None);
        let request = request.set_or_clear_pagetoken(Some("next"));
        assert_eq!(request.pagetoken.as_deref(), Some("next"));
    }

    #[test]
    fn response_defaults() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ListApiKeysResponse>(json!({
            "limit": 20,
            "apikeys": [{
                "id": "ApiKey-123",
                "name": "my-key",
                "locked": true,
                "iam_id": "IBMid-123",
                "account_id": "acct-1",
                "unknown_field": "ignored",
            }],
        }))?;
        assert_eq!(got.limit, Some(20));
        assert_eq!(got.offset, None);
        let key = &got.apikeys[0];
        assert_eq!(key.id, "ApiKey-123");
        assert!(key.locked);
        assert_eq!(key.crn, "");
        assert_eq!(key.context, None);
        Ok(())
    }
}
