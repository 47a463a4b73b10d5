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

//! The operation descriptors for each endpoint in the service.

use gaxi::request::{FieldMapping, OperationDescriptor};
use http::Method;

const JSON: &str = "application/json";

pub(crate) static GET_ACCOUNT_QUOTA_LIST: OperationDescriptor =
    OperationDescriptor::new(
        "getAccountQuotaList",
        Method::GET,
        "/quota_definitions/accounts/{account_id}",
    )
    .with_required(&["accountId"])
    .with_path_params(&[FieldMapping::new("account_id", "accountId")])
    .with_accept(JSON);

pub(crate) static GET_RESOURCE_QUOTA: OperationDescriptor =
    OperationDescriptor::new(
        "getResourceQuota",
        Method::GET,
        "/quota_definitions/accounts/{account_id}/resource_types/{resource_type}",
    )
    .with_required(&["accountId", "resourceType"])
    .with_path_params(&[
        FieldMapping::new("account_id", "accountId"),
        FieldMapping::new("resource_type", "resourceType"),
    ])
    .with_accept(JSON);

pub(crate) static UPDATE_RESOURCE_QUOTA: OperationDescriptor =
    OperationDescriptor::new(
        "updateResourceQuota",
        Method::PUT,
        "/quota_definitions/accounts/{account_id}/resource_types/{resource_type}",
    )
    .with_required(&["accountId", "resourceType"])
    .with_path_params(&[
        FieldMapping::new("account_id", "accountId"),
        FieldMapping::new("resource_type", "resourceType"),
    ])
    .with_accept(JSON);

pub(crate) static DELETE_RESOURCE_QUOTA: OperationDescriptor =
    OperationDescriptor::new(
        "deleteResourceQuota",
        Method::DELETE,
        "/quota_definitions/accounts/{account_id}/resource_types/{resource_type}",
    )
    .with_required(&["accountId", "resourceType"])
    .with_path_params(&[
        FieldMapping::new("account_id", "accountId"),
        FieldMapping::new("resource_type", "resourceType"),
    ])
    .with_accept(JSON);

pub(crate) static CREATE_DEFAULT_RESOURCE_QUOTA: OperationDescriptor =
    OperationDescriptor::new(
        "createDefaultResourceQuota",
        Method::POST,
        "/quota_definitions/resource_types/{resource_type}",
    )
    .with_required(&["resourceType"])
    .with_path_params(&[FieldMapping::new("resource_type", "resourceType")])
    .with_accept(JSON);

pub(crate) static CREATE_SCHEMA: OperationDescriptor =
    OperationDescriptor::new(
        "createSchema",
        Method::POST,
        "/quota_definitions/resource_types/{resource_type}/schemas",
    )
    .with_required(&["resourceType"])
    .with_path_params(&[FieldMapping::new("resource_type", "resourceType")])
    .with_accept(JSON);

pub(crate) static GET_SCHEMA: OperationDescriptor =
    OperationDescriptor::new(
        "getSchema",
        Method::GET,
        "/quota_definitions/resource_types/{resource_type}/schemas",
    )
    .with_required(&["resourceType"])
    .with_path_params(&[FieldMapping::new("resource_type", "resourceType")])
    .with_accept(JSON);

pub(crate) static LIST_QUOTA_DEFINITIONS: OperationDescriptor =
    OperationDescriptor::new("listQuotaDefinitions", Method::GET, "/quota_definitions")
        .with_accept(JSON);

pub(crate) static GET_QUOTA_DEFINITION: OperationDescriptor =
    OperationDescriptor::new("getQuotaDefinition", Method::GET, "/quota_definitions/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_accept(JSON);

pub(crate) static LIST_RESOURCE_GROUPS: OperationDescriptor =
    OperationDescriptor::new("listResourceGroups", Method::GET, "/resource_groups")
        .with_query(&[
            FieldMapping::new("account_id", "accountId"),
            FieldMapping::new("date", "date"),
        ])
        .with_accept(JSON);

pub(crate) static CREATE_RESOURCE_GROUP: OperationDescriptor =
    OperationDescriptor::new("createResourceGroup", Method::POST, "/resource_groups")
        .with_body(&[
            FieldMapping::new("name", "name"),
            FieldMapping::new("account_id", "accountId"),
        ])
        .with_accept(JSON)
        .with_content_type(JSON);

pub(crate) static GET_RESOURCE_GROUP: OperationDescriptor =
    OperationDescriptor::new("getResourceGroup", Method::GET, "/resource_groups/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_accept(JSON);

pub(crate) static UPDATE_RESOURCE_GROUP: OperationDescriptor =
    OperationDescriptor::new("updateResourceGroup", Method::PATCH, "/resource_groups/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_body(&[
            FieldMapping::new("name", "name"),
            FieldMapping::new("state", "state"),
        ])
        .with_accept(JSON)
        .with_content_type(JSON);

pub(crate) static DELETE_RESOURCE_GROUP: OperationDescriptor =
    OperationDescriptor::new("deleteResourceGroup", Method::DELETE, "/resource_groups/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use gaxi::request::{Body, HeaderLayers, Parameters, RequestDescriptor, build};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    fn prepare<T: serde::Serialize>(
        op: &OperationDescriptor,
        request: T,
    ) -> gax::Result<RequestDescriptor> {
        let params = Parameters::new(request)?;
        params.validate(op.required)?;
        build(op, params, HeaderLayers::default())
    }

    #[test]
    fn get_resource_quota() -> TestResult {
        let got = prepare(
            &GET_RESOURCE_QUOTA,
            GetResourceQuotaRequest::new()
                .set_account_id("acct-1")
                .set_resource_type("cloudant"),
        )?;
        assert_eq!(
            got.path,
            "/quota_definitions/accounts/acct-1/resource_types/cloudant"
        );
        Ok(())
    }

    #[test]
    fn get_resource_quota_missing_all() {
        let err = prepare(&GET_RESOURCE_QUOTA, GetResourceQuotaRequest::new())
            .expect_err("both path parameters are required");
        assert_eq!(
            err.to_string(),
            "Missing required parameters: accountId, resourceType"
        );
    }

    #[test]
    fn list_resource_groups() -> TestResult {
        let got = prepare(
            &LIST_RESOURCE_GROUPS,
            ListResourceGroupsRequest::new()
                .set_account_id("acct-1")
                .set_date("2024-01"),
        )?;
        assert_eq!(
            got.query,
            vec![
                ("account_id".to_string(), "acct-1".to_string()),
                ("date".to_string(), "2024-01".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn create_resource_group() -> TestResult {
        let got = prepare(
            &CREATE_RESOURCE_GROUP,
            CreateResourceGroupRequest::new()
                .set_name("test1")
                .set_account_id("acct-1"),
        )?;
        let want = json!({"name": "test1", "account_id": "acct-1"});
        assert_eq!(got.body, Body::Json(want.as_object().cloned().unwrap_or_default()));
        assert_eq!(
            got.headers.get("content-type").and_then(|v| v.to_str().ok()),
            Some(JSON)
        );
        Ok(())
    }

    #[test]
    fn update_resource_group() -> TestResult {
        let got = prepare(
            &UPDATE_RESOURCE_GROUP,
            UpdateResourceGroupRequest::new().set_id("rg-123").set_state("ACTIVE"),
        )?;
        assert_eq!(got.method, Method::PATCH);
        assert_eq!(got.path, "/resource_groups/rg-123");
        let want = json!({"state": "ACTIVE"});
        assert_eq!(got.body, Body::Json(want.as_object().cloned().unwrap_or_default()));
        Ok(())
    }

    #[test]
    fn delete_resource_group() -> TestResult {
        let got = prepare(
            &DELETE_RESOURCE_GROUP,
            DeleteResourceGroupRequest::new().set_id("rg-123"),
        )?;
        assert_eq!(got.method, Method::DELETE);
        assert!(got.headers.get("accept").is_none(), "{:?}", got.headers);
        assert!(got.headers.get("content-type").is_none(), "{:?}", got.headers);
        assert_eq!(got.body, Body::Empty);
        Ok(())
    }
}
