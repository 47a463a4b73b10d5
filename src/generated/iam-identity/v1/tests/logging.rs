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
    use httptest::matchers::request;
    use httptest::{Expectation, Server, responders::*};
    use ibm_cloud_iam_identity_v1::client::IamIdentity;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type TestResult = anyhow::Result<()>;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            let guard = self.0.lock().expect("poisoned buffer");
            String::from_utf8_lossy(&guard).into_owned()
        }
    }

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("poisoned buffer").extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (Buffer, tracing::subscriber::DefaultGuard) {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (buffer, guard)
    }

    async fn traced_client(server: &Server) -> anyhow::Result<IamIdentity> {
        let client = IamIdentity::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_tracing()
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn with_tracing() -> TestResult {
        let (buffer, _guard) = capture();

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/serviceids/ServiceId-1"))
                .times(1)
                .respond_with(json_encoded(json!({"id": "ServiceId-1", "name": "traced"}))),
        );
        let client = traced_client(&server).await?;
        client.get_service_id().set_id("ServiceId-1").send().await?;

        let logs = buffer.contents();
        assert!(logs.contains("get_service_id"), "{logs}");
        assert!(logs.contains("return="), "{logs}");
        assert!(logs.contains("traced"), "{logs}");
        Ok(())
    }
    #[tokio::test]
    async fn api_keys_are_not_logged() -> TestResult {
        let (buffer, _guard) = capture();

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/apikeys/details"))
                .times(1)
                .respond_with(json_encoded(
                    json!({"id": "ApiKey-1", "apikey": "returned-key-value"}),
                )),
        );
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/apikeys"))
                .times(1)
                .respond_with(json_encoded(
                    json!({"id": "ApiKey-2", "apikey": "created-key-value"}),
                )),
        );
        let client = traced_client(&server).await?;
        let response = client
            .get_api_key_details()
            .set_iam_api_key("sent-key-value")
            .send()
            .await?;
        assert_eq!(response.body().apikey, "returned-key-value");
        client
            .create_api_key()
            .set_name("my-key")
            .set_iam_id("IBMid-123")
            .set_apikey("passthrough-key-value")
            .send()
            .await?;

        let logs = buffer.contents();
        assert!(logs.contains("get_api_key_details"), "{logs}");
        assert!(logs.contains("create_api_key"), "{logs}");
        assert!(logs.contains("[censored]"), "{logs}");
        for secret in [
            "sent-key-value",
            "returned-key-value",
            "created-key-value",
            "passthrough-key-value",
        ] {
            assert!(!logs.contains(secret), "{secret} found in {logs}");
        }
        Ok(())
    }
}
