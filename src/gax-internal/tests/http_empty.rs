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
    use http::{Method, StatusCode};
    use ibm_cloud_gax_internal::request::{OperationDescriptor, Parameters};
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const DELETE: OperationDescriptor =
        OperationDescriptor::new("delete", Method::DELETE, "/empty");

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Deleted {
        id: Option<String>,
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_content() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;

        let options = RequestOptions::default();
        let request = client.prepare(
            &DELETE,
            Parameters::new(json!({}))?,
            &echo_server::SDK_HEADER,
            &options,
        )?;
        let response = client.execute::<Deleted>(request, &options).await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.into_body().id, None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn raw_bytes() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;

        let options = RequestOptions::default();
        let request = client.prepare(
            &DELETE,
            Parameters::new(json!({}))?,
            &echo_server::SDK_HEADER,
            &options,
        )?;
        let response = client.execute_bytes(request, &options).await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.body().is_empty(), "{response:?}");
        Ok(())
    }
}
