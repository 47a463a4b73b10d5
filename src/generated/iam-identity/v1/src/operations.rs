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

pub(crate) static LIST_API_KEYS: OperationDescriptor =
    OperationDescriptor::new("listApiKeys", Method::GET, "/v1/apikeys")
        .with_query(&[
            FieldMapping::new("account_id", "accountId"),
            FieldMapping::new("iam_id", "iamId"),
            FieldMapping::new("pagesize", "pagesize"),
            FieldMapping::new("pagetoken", "pagetoken"),
        ])
        .with_accept(JSON);

pub(crate) static CREATE_API_KEY: OperationDescriptor =
    OperationDescriptor::new("createApiKey", Method::POST, "/v1/apikeys")
        .with_required(&["name", "iamId"])
        .with_body(&[
            FieldMapping::new("name", "name"),
            FieldMapping::new("iam_id", "iamId"),
            FieldMapping::new("description", "description"),
            FieldMapping::new("account_id", "accountId"),
            FieldMapping::new("apikey", "apikey"),
        ])
        .with_headers(&[FieldMapping::new("Entity-Lock", "entityLock")])
        .with_accept(JSON)
        .with_content_type(JSON);

pub(crate) static GET_API_KEY_DETAILS: OperationDescriptor =
    OperationDescriptor::new("getApiKeyDetails", Method::GET, "/v1/apikeys/details")
        .with_headers(&[FieldMapping::new("IAM-ApiKey", "iamApiKey")])
        .with_accept(JSON);

pub(crate) static GET_API_KEY: OperationDescriptor =
    OperationDescriptor::new("getApiKey", Method::GET, "/v1/apikeys/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_accept(JSON);

pub(crate) static UPDATE_API_KEY: OperationDescriptor =
    OperationDescriptor::new("updateApiKey", Method::PUT, "/v1/apikeys/{id}")
        .with_required(&["id", "ifMatch"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_body(&[
            FieldMapping::new("name", "name"),
            FieldMapping::new("description", "description"),
        ])
        .with_headers(&[FieldMapping::new("If-Match", "ifMatch")])
        .with_accept(JSON)
        .with_content_type(JSON);

pub(crate) static DELETE_API_KEY: OperationDescriptor =
    OperationDescriptor::new("deleteApiKey", Method::DELETE, "/v1/apikeys/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")]);

pub(crate) static LOCK_API_KEY: OperationDescriptor =
    OperationDescriptor::new("lockApiKey", Method::POST, "/v1/apikeys/{id}/lock")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")]);

pub(crate) static UNLOCK_API_KEY: OperationDescriptor =
    OperationDescriptor::new("unlockApiKey", Method::DELETE, "/v1/apikeys/{id}/lock")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")]);

pub(crate) static LIST_SERVICE_IDS: OperationDescriptor =
    OperationDescriptor::new("listServiceIds", Method::GET, "/v1/serviceids")
        .with_query(&[
            FieldMapping::new("account_id", "accountId"),
            FieldMapping::new("name", "name"),
            FieldMapping::new("pagesize", "pagesize"),
            FieldMapping::new("pagetoken", "pagetoken"),
            FieldMapping::new("sort", "sort"),
            FieldMapping::new("order", "order"),
        ])
        .with_accept(JSON);

pub(crate) static CREATE_SERVICE_ID: OperationDescriptor =
    OperationDescriptor::new("createServiceId", Method::POST, "/v1/serviceids")
        .with_required(&["accountId", "name"])
        .with_body(&[
            FieldMapping::new("account_id", "accountId"),
            FieldMapping::new("name", "name"),
            FieldMapping::new("description", "description"),
            FieldMapping::new("unique_instance_crns", "uniqueInstanceCrns"),
            FieldMapping::new("apikey", "apikey"),
        ])
        .with_headers(&[FieldMapping::new("Entity-Lock", "entityLock")])
        .with_accept(JSON)
        .with_content_type(JSON);

pub(crate) static GET_SERVICE_ID: OperationDescriptor =
    OperationDescriptor::new("getServiceId", Method::GET, "/v1/serviceids/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_accept(JSON);

pub(crate) static UPDATE_SERVICE_ID: OperationDescriptor =
    OperationDescriptor::new("updateServiceId", Method::PUT, "/v1/serviceids/{id}")
        .with_required(&["id", "ifMatch"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_body(&[
            FieldMapping::new("name", "name"),
            FieldMapping::new("description", "description"),
            FieldMapping::new("unique_instance_crns", "uniqueInstanceCrns"),
        ])
        .with_headers(&[FieldMapping::new("If-Match", "ifMatch")])
        .with_accept(JSON)
        .with_content_type(JSON);

pub(crate) static DELETE_SERVICE_ID: OperationDescriptor =
    OperationDescriptor::new("deleteServiceId", Method::DELETE, "/v1/serviceids/{id}")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")]);

pub(crate) static LOCK_SERVICE_ID: OperationDescriptor =
    OperationDescriptor::new("lockServiceId", Method::POST, "/v1/serviceids/{id}/lock")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_accept(JSON);

pub(crate) static UNLOCK_SERVICE_ID: OperationDescriptor =
    OperationDescriptor::new("unlockServiceId", Method::DELETE, "/v1/serviceids/{id}/lock")
        .with_required(&["id"])
        .with_path_params(&[FieldMapping::new("id", "id")])
        .with_accept(JSON);

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

    fn header<'a>(request: &'a RequestDescriptor, name: &str) -> Option<&'a str> {
        request.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn get_api_key() -> TestResult {
        let got = prepare(&GET_API_KEY, GetApiKeyRequest::new().set_id("abc123"))?;
        assert_eq!(got.method, Method::GET);
        assert_eq!(got.path, "/v1/apikeys/abc123");
        assert!(got.query.is_empty(), "{:?}", got.query);
        assert_eq!(header(&got, "accept"), Some(JSON));
        assert_eq!(got.body, Body::Empty);
        Ok(())
    }

    #[test]
    fn update_api_key_keeps_empty_strings() -> TestResult {
        let got = prepare(
            &UPDATE_API_KEY,
            UpdateApiKeyRequest::new()
                .set_id("abc123")
                .set_if_match("W/\"1-abc\"")
                .set_name(""),
        )?;
        assert_eq!(got.method, Method::PUT);
        assert_eq!(header(&got, "if-match"), Some("W/\"1-abc\""));
        assert_eq!(header(&got, "content-type"), Some(JSON));
        let want = json!({"name": ""});
        assert_eq!(got.body, Body::Json(want.as_object().cloned().unwrap_or_default()));
        Ok(())
    }

    #[test]
    fn update_api_key_requires_if_match() {
        let err = prepare(&UPDATE_API_KEY, UpdateApiKeyRequest::new().set_id("abc123"))
            .expect_err("if_match is required");
        assert!(err.is_missing_parameters(), "{err:?}");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["ifMatch".to_string()].as_slice())
        );
    }

    #[test]
    fn create_api_key() -> TestResult {
        let got = prepare(
            &CREATE_API_KEY,
            CreateApiKeyRequest::new()
                .set_name("my-key")
                .set_iam_id("IBMid-123")
                .set_entity_lock("true"),
        )?;
        assert_eq!(got.method, Method::POST);
        assert_eq!(got.path, "/v1/apikeys");
        assert_eq!(header(&got, "entity-lock"), Some("true"));
        let want = json!({"name": "my-key", "iam_id": "IBMid-123"});
        assert_eq!(got.body, Body::Json(want.as_object().cloned().unwrap_or_default()));
        Ok(())
    }

    #[test]
    fn create_api_key_reports_all_missing() {
        let err = prepare(&CREATE_API_KEY, CreateApiKeyRequest::new())
            .expect_err("name and iam_id are required");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["name".to_string(), "iamId".to_string()].as_slice())
        );
    }

    #[test]
    fn get_api_key_details() -> TestResult {
        let got = prepare(
            &GET_API_KEY_DETAILS,
            GetApiKeyDetailsRequest::new().set_iam_api_key("secret-value"),
        )?;
        assert_eq!(got.path, "/v1/apikeys/details");
        assert_eq!(header(&got, "iam-apikey"), Some("secret-value"));
        assert!(got.query.is_empty(), "{:?}", got.query);
        Ok(())
    }

    #[test]
    fn list_service_ids() -> TestResult {
        let got = prepare(
            &LIST_SERVICE_IDS,
            ListServiceIdsRequest::new()
                .set_account_id("acct-1")
                .set_sort("name")
                .set_order("asc"),
        )?;
        assert_eq!(got.path, "/v1/serviceids");
        assert_eq!(
            got.query,
            vec![
                ("account_id".to_string(), "acct-1".to_string()),
                ("sort".to_string(), "name".to_string()),
                ("order".to_string(), "asc".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn unlock_service_id() -> TestResult {
        let got = prepare(
            &UNLOCK_SERVICE_ID,
            UnlockServiceIdRequest::new().set_id("ServiceId-1/2"),
        )?;
        assert_eq!(got.method, Method::DELETE);
        assert_eq!(got.path, "/v1/serviceids/ServiceId-1%2F2/lock");
        Ok(())
    }
}
