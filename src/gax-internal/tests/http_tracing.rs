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
    use std::sync::{Arc, Mutex};

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const GET: OperationDescriptor =
        OperationDescriptor::new("getEcho", Method::GET, "/echo/{id}")
            .with_required(&["id"])
            .with_path_params(&[FieldMapping::new("id", "id")])
            .with_accept("application/json");

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let mut inner = self.0.lock().map_err(|e| std::io::Error::other(e.to_string()))?;
            inner.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            let inner = self.0.lock().expect("buffer lock is never poisoned");
            String::from_utf8_lossy(&inner).to_string()
        }
    }

    #[tokio::test]
    async fn sending_request_is_logged() -> Result<()> {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        let options = RequestOptions::default();
        let request = client.prepare(
            &GET,
            Parameters::new(json!({"id": "abc 123"}))?,
            &echo_server::SDK_HEADER,
            &options,
        )?;
        let response = client
            .execute::<serde_json::Value>(request, &options)
            .await?
            .into_body();
        assert_eq!(response.get("path"), Some(&json!("/echo/abc%20123")));

        let logs = buffer.contents();
        assert!(logs.contains("sending request"), "{logs}");
        assert!(logs.contains("operation_id=\"getEcho\""), "{logs}");
        assert!(logs.contains("path=/echo/abc%20123"), "{logs}");
        assert!(logs.contains("method=GET"), "{logs}");
        Ok(())
    }
}
