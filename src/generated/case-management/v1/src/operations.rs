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
const MULTIPART: &str = "multipart/form-data";
const OCTET_STREAM: &str = "application/octet-stream";

pub(crate) static GET_CASES: OperationDescriptor =
    OperationDescriptor::new("getCases", Method::GET, "/case-management/v1/cases")
        .with_query(&[
            FieldMapping::new("offset", "offset"),
            FieldMapping::new("limit", "limit"),
            FieldMapping::new("search", "search"),
            FieldMapping::new("sort", "sort"),
            FieldMapping::new("status", "status"),
            FieldMapping::new("fields", "fields"),
        ])
        .with_accept(JSON);

pub(crate) static CREATE_CASE: OperationDescriptor =
    OperationDescriptor::new("createCase", Method::POST, "/case-management/v1/cases")
        .with_body(&[
            FieldMapping::new("type", "type"),
            FieldMapping::new("subject", "subject"),
            FieldMapping::new("description", "description"),
            FieldMapping::new("severity", "severity"),
            FieldMapping::new("eu", "eu"),
            FieldMapping::new("offering", "offering"),
            FieldMapping::new("resources", "resources"),
            FieldMapping::new("watchlist", "watchlist"),
            FieldMapping::new("invoice_number", "invoiceNumber"),
            FieldMapping::new("sla_credit_request", "slaCreditRequest"),
        ])
        .with_accept(JSON)
        .with_content_type(JSON);

pub(crate) static GET_CASE: OperationDescriptor =
    OperationDescriptor::new("getCase", Method::GET, "/case-management/v1/cases/{case_number}")
        .with_required(&["caseNumber"])
        .with_path_params(&[FieldMapping::new("case_number", "caseNumber")])
        .with_query(&[FieldMapping::new("fields", "fields")])
        .with_accept(JSON);

pub(crate) static UPDATE_CASE_STATUS: OperationDescriptor =
    OperationDescriptor::new(
        "updateCaseStatus",
        Method::PUT,
        "/case-management/v1/cases/{case_number}/status",
    )
    .with_required(&["caseNumber", "action"])
    .with_path_params(&[FieldMapping::new("case_number", "caseNumber")])
    .with_body(&[
        FieldMapping::new("action", "action"),
        FieldMapping::new("comment", "comment"),
        FieldMapping::new("resolution_code", "resolutionCode"),
    ])
    .with_accept(JSON)
    .with_content_type(JSON);

pub(crate) static ADD_COMMENT: OperationDescriptor =
    OperationDescriptor::new(
        "addComment",
        Method::PUT,
        "/case-management/v1/cases/{case_number}/comments",
    )
    .with_required(&["caseNumber", "comment"])
    .with_path_params(&[FieldMapping::new("case_number", "caseNumber")])
    .with_body(&[FieldMapping::new("comment", "comment")])
    .with_accept(JSON)
    .with_content_type(JSON);

pub(crate) static ADD_WATCHLIST: OperationDescriptor =
    OperationDescriptor::new(
        "addWatchlist",
        Method::PUT,
        "/case-management/v1/cases/{case_number}/watchlist",
    )
    .with_required(&["caseNumber"])
    .with_path_params(&[FieldMapping::new("case_number", "caseNumber")])
    .with_body(&[FieldMapping::new("watchlist", "watchlist")])
    .with_accept(JSON)
    .with_content_type(JSON);

pub(crate) static REMOVE_WATCHLIST: OperationDescriptor =
    OperationDescriptor::new(
        "removeWatchlist",
        Method::DELETE,
        "/case-management/v1/cases/{case_number}/watchlist",
    )
    .with_required(&["caseNumber"])
    .with_path_params(&[FieldMapping::new("case_number", "caseNumber")])
    .with_body(&[FieldMapping::new("watchlist", "watchlist")])
    .with_accept(JSON)
    .with_content_type(JSON);

pub(crate) static ADD_RESOURCE: OperationDescriptor =
    OperationDescriptor::new(
        "addResource",
        Method::PUT,
        "/case-management/v1/cases/{case_number}/resources",
    )
    .with_required(&["caseNumber"])
    .with_path_params(&[FieldMapping::new("case_number", "caseNumber")])
    .with_body(&[
        FieldMapping::new("crn", "crn"),
        FieldMapping::new("name", "name"),
        FieldMapping::new("type", "type"),
        FieldMapping::new("id", "id"),
        FieldMapping::new("note", "note"),
    ])
    .with_accept(JSON)
    .with_content_type(JSON);

pub(crate) static UPLOAD_FILE: OperationDescriptor =
    OperationDescriptor::new(
        "uploadFile",
        Method::PUT,
        "/case-management/v1/cases/{case_number}/attachments",
    )
    .with_required(&["caseNumber", "file"])
    .with_path_params(&[FieldMapping::new("case_number", "caseNumber")])
    .with_form(&[FieldMapping::new("file", "file")])
    .with_accept(JSON)
    .with_content_type(MULTIPART);

pub(crate) static DOWNLOAD_FILE: OperationDescriptor =
    OperationDescriptor::new(
        "downloadFile",
        Method::GET,
        "/case-management/v1/cases/{case_number}/attachments/{file_id}",
    )
    .with_required(&["caseNumber", "fileId"])
    .with_path_params(&[
        FieldMapping::new("case_number", "caseNumber"),
        FieldMapping::new("file_id", "fileId"),
    ])
    .with_accept(OCTET_STREAM);

pub(crate) static DELETE_FILE: OperationDescriptor =
    OperationDescriptor::new(
        "deleteFile",
        Method::DELETE,
        "/case-management/v1/cases/{case_number}/attachments/{file_id}",
    )
    .with_required(&["caseNumber", "fileId"])
    .with_path_params(&[
        FieldMapping::new("case_number", "caseNumber"),
        FieldMapping::new("file_id", "fileId"),
    ])
    .with_accept(JSON);

pub(crate) static GET_EU_SUPPORT: OperationDescriptor =
    OperationDescriptor::new(
        "getEuSupport",
        Method::GET,
        "/case-management/utilities/v1/eu-support",
    )
    .with_accept(JSON);

pub(crate) static GET_TECHNICAL_OFFERINGS: OperationDescriptor =
    OperationDescriptor::new(
        "getTechnicalOfferings",
        Method::GET,
        "/case-management/utilities/v1/offerings/technical",
    )
    .with_accept(JSON);

pub(crate) static GET_RESOLUTION_CODES: OperationDescriptor =
    OperationDescriptor::new(
        "getResolutionCodes",
        Method::GET,
        "/case-management/utilities/v1/constants/resolution-codes",
    )
    .with_accept(JSON);

pub(crate) static GET_STATUSES: OperationDescriptor =
    OperationDescriptor::new(
        "getStatuses",
        Method::GET,
        "/case-management/utilities/v1/constants/statuses",
    )
    .with_accept(JSON);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use gaxi::request::{Body, FilePart, HeaderLayers, Parameters, RequestDescriptor, build};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn prepare(op: &OperationDescriptor, params: Parameters) -> gax::Result<RequestDescriptor> {
        params.validate(op.required)?;
        build(op, params, HeaderLayers::default())
    }

    #[test]
    fn get_cases() -> TestResult {
        let request = GetCasesRequest::new()
            .set_offset(0)
            .set_limit(10)
            .set_status(["new", "in_progress"])
            .set_fields(["number", "short_description"]);
        let got = prepare(&GET_CASES, Parameters::new(request)?)?;
        assert_eq!(got.path, "/case-management/v1/cases");
        assert_eq!(
            got.query,
            vec![
                ("offset".to_string(), "0".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("status".to_string(), "new,in_progress".to_string()),
                ("fields".to_string(), "number,short_description".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn update_case_status() -> TestResult {
        let request = UpdateCaseStatusRequest::new()
            .set_case_number("TS001234")
            .set_action("resolve")
            .set_comment("fixed")
            .set_resolution_code(1);
        let got = prepare(&UPDATE_CASE_STATUS, Parameters::new(request)?)?;
        assert_eq!(got.method, Method::PUT);
        assert_eq!(got.path, "/case-management/v1/cases/TS001234/status");
        let want = json!({"action": "resolve", "comment": "fixed", "resolution_code": 1});
        assert_eq!(got.body, Body::Json(want.as_object().cloned().unwrap_or_default()));
        Ok(())
    }

    #[test]
    fn remove_watchlist_has_body() -> TestResult {
        let request = RemoveWatchlistRequest::new()
            .set_case_number("TS001234")
            .set_watchlist([UserIdAndRealm::new().set_realm("IBMid").set_user_id("a@example.com")]);
        let got = prepare(&REMOVE_WATCHLIST, Parameters::new(request)?)?;
        assert_eq!(got.method, Method::DELETE);
        let want = json!({"watchlist": [{"realm": "IBMid", "user_id": "a@example.com"}]});
        assert_eq!(got.body, Body::Json(want.as_object().cloned().unwrap_or_default()));
        Ok(())
    }

    #[test]
    fn add_resource_type_field() -> TestResult {
        let request = AddResourceRequest::new()
            .set_case_number("TS001234")
            .set_crn("crn:v1:bluemix:public:cloud-object-storage:global:a/123::")
            .set_type("Virtual Guest")
            .set_id(42);
        let got = prepare(&ADD_RESOURCE, Parameters::new(request)?)?;
        let want = json!({
            "crn": "crn:v1:bluemix:public:cloud-object-storage:global:a/123::",
            "type": "Virtual Guest",
            "id": 42,
        });
        assert_eq!(got.body, Body::Json(want.as_object().cloned().unwrap_or_default()));
        Ok(())
    }

    #[test]
    fn upload_file() -> TestResult {
        let request = UploadFileRequest::new().set_case_number("TS001234");
        let file = FilePart {
            data: bytes::Bytes::from_static(b"the quick brown fox"),
            content_type: Some("text/plain".to_string()),
            filename: Some("fox.txt".to_string()),
        };
        let params = Parameters::new(request)?.with_file("file", Some(file.clone()));
        let got = prepare(&UPLOAD_FILE, params)?;
        assert_eq!(got.path, "/case-management/v1/cases/TS001234/attachments");
        match got.body {
            Body::Multipart(parts) => {
                assert_eq!(parts.len(), 1);
                assert_eq!(parts[0].name, "file");
                assert_eq!(parts[0].file, file);
            }
            b => panic!("unexpected body {b:?}"),
        }
        Ok(())
    }

    #[test]
    fn upload_file_requires_file() -> TestResult {
        let request = UploadFileRequest::new().set_case_number("TS001234");
        let params = Parameters::new(request)?.with_file("file", None);
        let err = prepare(&UPLOAD_FILE, params).expect_err("the file is required");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["file".to_string()].as_slice())
        );
        Ok(())
    }

    #[test]
    fn download_file() -> TestResult {
        let request = DownloadFileRequest::new()
            .set_case_number("TS001234")
            .set_file_id("attachment 1");
        let got = prepare(&DOWNLOAD_FILE, Parameters::new(request)?)?;
        assert_eq!(
            got.path,
            "/case-management/v1/cases/TS001234/attachments/attachment%201"
        );
        assert_eq!(
            got.headers.get("accept").and_then(|v| v.to_str().ok()),
            Some(OCTET_STREAM)
        );
        Ok(())
    }

    #[test_case(&GET_EU_SUPPORT, "/case-management/utilities/v1/eu-support")]
    #[test_case(&GET_TECHNICAL_OFFERINGS, "/case-management/utilities/v1/offerings/technical")]
    #[test_case(&GET_RESOLUTION_CODES, "/case-management/utilities/v1/constants/resolution-codes")]
    #[test_case(&GET_STATUSES, "/case-management/utilities/v1/constants/statuses")]
    fn utilities(op: &OperationDescriptor, want: &str) -> TestResult {
        let got = prepare(op, Parameters::new(GetStatusesRequest::new())?)?;
        assert_eq!(got.method, Method::GET);
        assert_eq!(got.path, want);
        assert!(got.query.is_empty(), "{:?}", got.query);
        assert_eq!(got.body, Body::Empty);
        Ok(())
    }
}
