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

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::RequestOptions;
    use http::Method;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_gax_internal::request::{FieldMapping, OperationDescriptor, Parameters};
    use ibm_cloud_gax_internal::http::ReqwestClient;
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const LIST: OperationDescriptor =
        OperationDescriptor::new("listThings", Method::GET, "/v1/things")
            .with_required(&["accountId"])
            .with_query(&[
                FieldMapping::new("account_id", "accountId"),
                FieldMapping::new("pagesize", "pagesize"),
                FieldMapping::new("include_history", "includeHistory"),
                FieldMapping::new("status", "status"),
                FieldMapping::new("pagetoken", "pagetoken"),
            ])
            .with_accept("application/json");

    async fn client(server: &Server) -> Result<ReqwestClient> {
        let client = echo_server::builder(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things"),
                request::query(url_decoded(contains(("account_id", "acct-1")))),
                request::query(url_decoded(contains(("pagesize", "10")))),
                request::query(url_decoded(contains(("include_history", "true")))),
                request::query(url_decoded(contains(("status", "new,in_progress")))),
                request::query(url_decoded(not(contains(key("pagetoken"))))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"things": []}))),
        );

        let client = client(&server).await?;
        let options = RequestOptions::default();
        let params = Parameters::new(json!({
            "accountId": "acct-1",
            "pagesize": 10,
            "includeHistory": true,
            "status": ["new", "in_progress"],
            "pagetoken": null,
        }))?;
        let request = client.prepare(&LIST, params, &echo_server::SDK_HEADER, &options)?;
        let response = client
            .execute::<serde_json::Value>(request, &options)
            .await?;
        assert_eq!(response.into_body(), json!({"things": []}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_parameter_sends_nothing() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things"))
                .times(0)
                .respond_with(status_code(200)),
        );

        let client = client(&server).await?;
        let options = RequestOptions::default();
        let params = Parameters::new(json!({"pagesize": 10}))?;
        let err = client
            .prepare(&LIST, params, &echo_server::SDK_HEADER, &options)
            .unwrap_err();
        assert!(err.is_missing_parameters(), "{err:?}");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["accountId".to_string()].as_slice())
        );
        Ok(())
    }
}
