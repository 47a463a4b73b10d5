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
    use ibm_cloud_iam_identity_v1::client::IamIdentity;
    use ibm_cloud_iam_identity_v1::model::ApiKeyInsideCreateServiceIdRequest;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    async fn client(server: &Server) -> anyhow::Result<IamIdentity> {
        let client = IamIdentity::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn list_api_keys() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/apikeys"),
                request::query(url_decoded(contains(("account_id", "acct-1")))),
                request::query(url_decoded(contains(("pagesize", "10")))),
                request::query(url_decoded(not(contains(key("pagetoken"))))),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(key("x-ibmcloud-sdk-analytics"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "limit": 10,
                "apikeys": [
                    {"id": "ApiKey-1", "name": "first", "iam_id": "IBMid-1", "account_id": "acct-1"},
                    {"id": "ApiKey-2", "name": "second", "iam_id": "IBMid-1", "account_id": "acct-1"},
                ],
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .list_api_keys()
            .set_account_id("acct-1")
            .set_pagesize("10")
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        let names = response
            .body()
            .apikeys
            .iter()
            .map(|k| k.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["first", "second"]);
        Ok(())
    }

    #[tokio::test]
    async fn analytics_header() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/serviceids/ServiceId-1"),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=iam_identity_services;service_version=v1;operation_id=getServiceId"
                ))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "ServiceId-1", "name": "svc"}))),
        );

        let client = client(&server).await?;
        let response = client.get_service_id().set_id("ServiceId-1").send().await?;
        assert_eq!(response.body().name, "svc");
        Ok(())
    }

    #[tokio::test]
    async fn update_api_key() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v1/apikeys/ApiKey-1"),
                request::headers(contains(("if-match", "W/\"1-abc\""))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"name": "renamed", "description": ""})))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "id": "ApiKey-1",
                "name": "renamed",
                "entity_tag": "2-def",
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .update_api_key()
            .set_id("ApiKey-1")
            .set_if_match("W/\"1-abc\"")
            .set_name("renamed")
            .set_description("")
            .send()
            .await?;
        assert_eq!(response.body().entity_tag.as_deref(), Some("2-def"));
        Ok(())
    }

    #[tokio::test]
    async fn get_api_key_details() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/apikeys/details"),
                request::headers(contains(("iam-apikey", "my-api-key-value"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "ApiKey-1", "locked": true}))),
        );

        let client = client(&server).await?;
        let response = client
            .get_api_key_details()
            .set_iam_api_key("my-api-key-value")
            .send()
            .await?;
        assert!(response.body().locked);
        Ok(())
    }

    #[tokio::test]
    async fn create_service_id() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/serviceids"),
                request::headers(contains(("entity-lock", "true"))),
                request::body(json_decoded(eq(json!({
                    "account_id": "acct-1",
                    "name": "my-service-id",
                    "apikey": {"name": "key"},
                })))),
            ])
            .times(1)
            .respond_with(status_code(201).body(
                json!({"id": "ServiceId-1", "iam_id": "iam-ServiceId-1", "locked": true})
                    .to_string(),
            )),
        );

        let client = client(&server).await?;
        let response = client
            .create_service_id()
            .set_account_id("acct-1")
            .set_name("my-service-id")
            .set_entity_lock("true")
            .set_apikey(ApiKeyInsideCreateServiceIdRequest::new().set_name("key"))
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(response.body().iam_id, "iam-ServiceId-1");
        Ok(())
    }

    #[tokio::test]
    async fn delete_api_key() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/apikeys/ApiKey-1"))
                .times(1)
                .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        let response = client.delete_api_key().set_id("ApiKey-1").send().await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn lock_and_unlock() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/apikeys/ApiKey-1/lock"))
                .times(1)
                .respond_with(status_code(204)),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/apikeys/ApiKey-1/lock"))
                .times(1)
                .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        client.lock_api_key().set_id("ApiKey-1").send().await?;
        client.unlock_api_key().set_id("ApiKey-1").send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_parameter_sends_nothing() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method("PUT"))
                .times(0)
                .respond_with(status_code(200)),
        );

        let client = client(&server).await?;
        let err = client
            .update_api_key()
            .set_name("renamed")
            .send()
            .await
            .expect_err("id and if_match are required");
        assert!(err.is_missing_parameters(), "{err:?}");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["id".to_string(), "ifMatch".to_string()].as_slice())
        );
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/apikeys/unknown"))
                .times(1)
                .respond_with(status_code(404).body(
                    json!({
                        "trace": "trace-404",
                        "errors": [{"code": "not_found", "message": "API key not found"}],
                        "status_code": 404,
                    })
                    .to_string(),
                )),
        );

        let client = client(&server).await?;
        let err = client
            .get_api_key()
            .set_id("unknown")
            .send()
            .await
            .expect_err("the service returns an error");
        assert_eq!(err.http_status_code(), Some(404));
        let details = err.service_error().expect("the error has details");
        assert_eq!(details.message(), "API key not found");
        assert_eq!(details.trace(), Some("trace-404"));
        Ok(())
    }

    #[tokio::test]
    async fn caller_headers() -> TestResult {
        use gax::options::RequestOptionsBuilder;
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/serviceids"),
                request::headers(contains(("x-correlation-id", "corr-123"))),
                request::headers(contains(("x-default", "from-builder"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"serviceids": []}))),
        );

        let client = IamIdentity::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_default_header(
                http::HeaderName::from_static("x-default"),
                http::HeaderValue::from_static("from-builder"),
            )
            .build()
            .await?;
        let response = client
            .list_service_ids()
            .with_header(
                http::HeaderName::from_static("x-correlation-id"),
                http::HeaderValue::from_static("corr-123"),
            )
            .send()
            .await?;
        assert!(response.body().serviceids.is_empty());
        Ok(())
    }
}
