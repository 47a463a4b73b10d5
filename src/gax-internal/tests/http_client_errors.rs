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
    use ibm_cloud_gax_internal::request::{OperationDescriptor, Parameters};
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const ERROR: OperationDescriptor =
        OperationDescriptor::new("error", Method::GET, "/error")
            .with_accept("application/json");

    const PLAIN_ERROR: OperationDescriptor =
        OperationDescriptor::new("plainError", Method::GET, "/error/plain")
            .with_accept("application/json");

    fn test_credentials() -> auth::credentials::Credentials {
        auth::credentials::anonymous::Builder::new().build()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(test_credentials())
            .build()
            .await?;

        let options = RequestOptions::default();
        let request = client.prepare(
            &ERROR,
            Parameters::new(json!({}))?,
            &echo_server::SDK_HEADER,
            &options,
        )?;
        let err = client
            .execute::<serde_json::Value>(request, &options)
            .await
            .unwrap_err();
        assert_eq!(
            err.service_error(),
            Some(&echo_server::make_service_error()?),
            "{err:?}"
        );
        let details = err.service_error().unwrap();
        assert_eq!(details.message(), "this path always returns an error");
        assert_eq!(details.trace(), Some("echo-trace-123"));
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn plain_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(test_credentials())
            .build()
            .await?;

        let options = RequestOptions::default();
        let request = client.prepare(
            &PLAIN_ERROR,
            Parameters::new(json!({}))?,
            &echo_server::SDK_HEADER,
            &options,
        )?;
        let err = client
            .execute::<serde_json::Value>(request, &options)
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(err.service_error().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"upstream connect error"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> Result<()> {
        // Reserve a port and release it, nothing listens there afterwards.
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let endpoint = format!("http://{}", listener.local_addr()?);
        drop(listener);

        let client = echo_server::builder(endpoint)
            .with_credentials(test_credentials())
            .build()
            .await?;
        let options = RequestOptions::default();
        let request = client.prepare(
            &ERROR,
            Parameters::new(json!({}))?,
            &echo_server::SDK_HEADER,
            &options,
        )?;
        let err = client
            .execute::<serde_json::Value>(request, &options)
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }
}
