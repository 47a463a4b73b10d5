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
    use ibm_cloud_gax_internal::request::{FieldMapping, OperationDescriptor, Parameters};
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const SLOW: OperationDescriptor =
        OperationDescriptor::new("slowEcho", Method::GET, "/echo")
            .with_query(&[FieldMapping::new("delay_ms", "delayMs")])
            .with_accept("application/json");

    async fn send(delay: Duration, timeout: Duration) -> Result<gax::Result<serde_json::Value>> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;

        let mut options = RequestOptions::default();
        options.set_attempt_timeout(timeout);
        let params = Parameters::new(json!({"delayMs": delay.as_millis() as u64}))?;
        let request = client.prepare(&SLOW, params, &echo_server::SDK_HEADER, &options)?;
        let response = client
            .execute::<serde_json::Value>(request, &options)
            .await
            .map(|r| r.into_body());
        Ok(response)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let got = send(Duration::from_millis(500), Duration::from_millis(50)).await?;
        let err = got.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn within_timeout() -> Result<()> {
        let got = send(Duration::from_millis(10), Duration::from_secs(10)).await?;
        let response = got?;
        assert_eq!(
            response.get("query"),
            Some(&json!({"delay_ms": "10"})),
            "{response:?}"
        );
        Ok(())
    }
}
