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


#[cfg(test)]
mod tests {
    use httptest::matchers::{contains, eq, json_decoded, key, not, request, url_decoded};
    use httptest::{Expectation, Server, all_of, responders::*};
    use ibm_cloud_case_management_v1::client::CaseManagement;
    use ibm_cloud_case_management_v1::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    async fn client(server: &Server) -> anyhow::Result<CaseManagement> {
        let client = CaseManagement::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_cases() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/case-management/v1/cases"),
                request::query(url_decoded(contains(("status", "new,in_progress")))),
                request::query(url_decoded(contains(("limit", "5")))),
                request::query(url_decoded(not(contains(key("offset"))))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "total_count": 1,
                "cases": [{"number": "TS001234", "status": "New", "priority": 3}],
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .get_cases()
            .set_status(["new", "in_progress"])
            .set_limit(5)
            .send()
            .await?;
        let list = response.into_body();
        assert_eq!(list.total_count, Some(1));
        assert_eq!(list.cases[0].number.as_deref(), Some("TS001234"));
        assert_eq!(list.cases[0].extra.get("priority"), Some(&json!(3)));
        Ok(())
    }

    #[tokio::test]
    async fn create_case() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/case-management/v1/cases"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "type": "technical",
                    "subject": "Hello",
                    "description": "World",
                    "severity": 4,
                    "offering": {
                        "name": "Cloud Object Storage",
                        "type": {"group": "crn_service_name", "key": "cloud-object-storage"},
                    },
                    "resources": [{"crn": "crn:v1:test"}],
                })))),
            ])
            .times(1)
            .respond_with(
                status_code(201).body(json!({"number": "TS001234", "severity": 4}).to_string()),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .create_case()
            .set_type("technical")
            .set_subject("Hello")
            .set_description("World")
            .set_severity(4)
            .set_offering(
                OfferingPayload::new().set_name("Cloud Object Storage").set_type(
                    OfferingPayloadType::new()
                        .set_group("crn_service_name")
                        .set_key("cloud-object-storage"),
                ),
            )
            .set_resources([ResourcePayload::new().set_crn("crn:v1:test")])
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(response.body().number.as_deref(), Some("TS001234"));
        Ok(())
    }

    #[tokio::test]
    async fn add_comment() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/case-management/v1/cases/TS001234/comments"),
                request::body(json_decoded(eq(json!({"comment": "any update?"})))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "value": "any update?",
                "added_by": {"realm": "IBMid", "user_id": "user@example.com"},
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .add_comment()
            .set_case_number("TS001234")
            .set_comment("any update?")
            .send()
            .await?;
        let comment = response.into_body();
        assert_eq!(comment.value.as_deref(), Some("any update?"));
        assert_eq!(
            comment.added_by.map(|u| u.user_id),
            Some("user@example.com".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn add_watchlist() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/case-management/v1/cases/TS001234/watchlist"),
                request::body(json_decoded(eq(json!({
                    "watchlist": [{"realm": "IBMid", "user_id": "a@example.com"}],
                })))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "added": [{"realm": "IBMid", "user_id": "a@example.com"}],
                "failed": [],
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .add_watchlist()
            .set_case_number("TS001234")
            .set_watchlist([UserIdAndRealm::new().set_realm("IBMid").set_user_id("a@example.com")])
            .send()
            .await?;
        assert_eq!(response.body().added.len(), 1);
        assert!(response.body().failed.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn upload_file() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/case-management/v1/cases/TS001234/attachments"),
                request::headers(contains((
                    "content-type",
                    httptest::matchers::matches("^multipart/form-data; boundary=")
                ))),
                request::body(httptest::matchers::matches("the quick brown fox")),
                request::body(httptest::matchers::matches(r#"filename="fox.txt""#)),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "id": "attachment-1",
                "filename": "fox.txt",
                "size_in_bytes": 19,
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .upload_file()
            .set_case_number("TS001234")
            .set_file(bytes::Bytes::from_static(b"the quick brown fox"))
            .set_file_content_type("text/plain")
            .set_filename("fox.txt")
            .send()
            .await?;
        let attachment = response.into_body();
        assert_eq!(attachment.id.as_deref(), Some("attachment-1"));
        assert_eq!(attachment.size_in_bytes, Some(19));
        Ok(())
    }

    #[tokio::test]
    async fn upload_file_without_file() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method("PUT"))
                .times(0)
                .respond_with(status_code(200)),
        );

        let client = client(&server).await?;
        let err = client
            .upload_file()
            .set_case_number("TS001234")
            .send()
            .await
            .expect_err("the file is required");
        assert!(err.is_missing_parameters(), "{err:?}");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["file".to_string()].as_slice())
        );
        Ok(())
    }

    #[tokio::test]
    async fn download_file() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/case-management/v1/cases/TS001234/attachments/attachment-1"
                ),
                request::headers(contains(("accept", "application/octet-stream"))),
            ])
            .times(1)
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/octet-stream")
                    .body(vec![0_u8, 1, 2, 255]),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .download_file()
            .set_case_number("TS001234")
            .set_file_id("attachment-1")
            .send()
            .await?;
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/octet-stream")
        );
        assert_eq!(response.into_body(), bytes::Bytes::from_static(&[0, 1, 2, 255]));
        Ok(())
    }

    #[tokio::test]
    async fn delete_file() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/case-management/v1/cases/TS001234/attachments/attachment-1",
            ))
            .times(1)
            .respond_with(json_encoded(json!({"attachments": [{"id": "attachment-2"}]}))),
        );

        let client = client(&server).await?;
        let response = client
            .delete_file()
            .set_case_number("TS001234")
            .set_file_id("attachment-1")
            .send()
            .await?;
        let ids = response
            .body()
            .attachments
            .iter()
            .filter_map(|a| a.id.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["attachment-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn get_statuses() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/case-management/utilities/v1/constants/statuses",
            ))
            .times(1)
            .respond_with(json_encoded(json!({"statuses": ["New", "In Progress"]}))),
        );

        let client = client(&server).await?;
        let response = client.get_statuses().send().await?;
        assert_eq!(response.body()["statuses"][1], json!("In Progress"));
        Ok(())
    }

    #[tokio::test]
    async fn update_case_status_missing_action() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method("PUT"))
                .times(0)
                .respond_with(status_code(200)),
        );

        let client = client(&server).await?;
        let err = client
            .update_case_status()
            .send()
            .await
            .expect_err("case_number and action are required");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["caseNumber".to_string(), "action".to_string()].as_slice())
        );
        Ok(())
    }
}
