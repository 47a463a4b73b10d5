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
    use ibm_cloud_case_management_v1::client::CaseManagement;
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

    #[tokio::test]
    async fn with_tracing() -> TestResult {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/case-management/utilities/v1/constants/statuses",
            ))
            .times(1)
            .respond_with(json_encoded(json!([{"name": "in_progress"}]))),
        );
        let client = CaseManagement::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_tracing()
            .build()
            .await?;
        client.get_statuses().send().await?;

        let logs = buffer.contents();
        assert!(logs.contains("get_statuses"), "{logs}");
        assert!(logs.contains("return="), "{logs}");
        assert!(logs.contains("in_progress"), "{logs}");
        Ok(())
    }
}
