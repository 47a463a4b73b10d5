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
    use httptest::matchers::{contains, request};
    use httptest::{Expectation, Server, all_of, responders::*};
    use ibm_cloud_case_management_v1::client::CaseManagement;
    use scoped_env::ScopedEnv;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    const AUTH_TYPE: &str = "CASE_MANAGEMENT_AUTH_TYPE";
    const USERNAME: &str = "CASE_MANAGEMENT_USERNAME";
    const PASSWORD: &str = "CASE_MANAGEMENT_PASSWORD";

    // These tests must run serially because they manipulate the environment.
    #[tokio::test]
    #[serial_test::serial]
    async fn basic_from_environment() -> TestResult {
        let _e1 = ScopedEnv::remove(AUTH_TYPE);
        let _e2 = ScopedEnv::remove("CASE_MANAGEMENT_BEARER_TOKEN");
        let _e3 = ScopedEnv::set(USERNAME, "user");
        let _e4 = ScopedEnv::set(PASSWORD, "pass");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/case-management/v1/cases/TS001234"),
                request::headers(contains(("authorization", "Basic dXNlcjpwYXNz"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"number": "TS001234"}))),
        );

        let client = CaseManagement::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        let response = client.get_case().set_case_number("TS001234").send().await?;
        assert_eq!(response.body().number.as_deref(), Some("TS001234"));
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn service_name_override() -> TestResult {
        let _e1 = ScopedEnv::remove(AUTH_TYPE);
        let _e2 = ScopedEnv::set("MY_SUPPORT_AUTH_TYPE", "bearertoken");
        let _e3 = ScopedEnv::set("MY_SUPPORT_BEARER_TOKEN", "support-token");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/case-management/v1/cases/TS001234"),
                request::headers(contains(("authorization", "Bearer support-token"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"number": "TS001234"}))),
        );

        let client = CaseManagement::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_service_name("my_support")
            .build()
            .await?;
        client.get_case().set_case_number("TS001234").send().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn unsupported_auth_type() {
        let _e1 = ScopedEnv::set(AUTH_TYPE, "iam");
        let err = CaseManagement::builder()
            .build()
            .await
            .expect_err("token exchange is not supported");
        assert!(err.is_credentials(), "{err:?}");
    }
}
