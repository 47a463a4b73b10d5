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
    use httptest::matchers::{contains, key, not, request};
    use httptest::{Expectation, Server, all_of, responders::*};
    use ibm_cloud_iam_identity_v1::client::IamIdentity;
    use scoped_env::ScopedEnv;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    const AUTH_TYPE: &str = "IAM_IDENTITY_SERVICES_AUTH_TYPE";
    const BEARER_TOKEN: &str = "IAM_IDENTITY_SERVICES_BEARER_TOKEN";

    // These tests must run serially because they manipulate the environment.
    #[tokio::test]
    #[serial_test::serial]
    async fn bearer_token_from_environment() -> TestResult {
        let _e1 = ScopedEnv::set(AUTH_TYPE, "bearertoken");
        let _e2 = ScopedEnv::set(BEARER_TOKEN, "test-token");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/apikeys/ApiKey-1"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "ApiKey-1"}))),
        );

        let client = IamIdentity::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        client.get_api_key().set_id("ApiKey-1").send().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn noauth_from_environment() -> TestResult {
        let _e1 = ScopedEnv::set(AUTH_TYPE, "noauth");
        let _e2 = ScopedEnv::remove(BEARER_TOKEN);
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/apikeys/ApiKey-1"),
                request::headers(not(contains(key("authorization")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "ApiKey-1"}))),
        );

        let client = IamIdentity::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        client.get_api_key().set_id("ApiKey-1").send().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn explicit_credentials_win() -> TestResult {
        let _e1 = ScopedEnv::set(AUTH_TYPE, "bearertoken");
        let _e2 = ScopedEnv::set(BEARER_TOKEN, "from-environment");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v1/apikeys/ApiKey-1"),
                request::headers(contains(("authorization", "Bearer explicit"))),
            ])
            .times(1)
            .respond_with(status_code(204)),
        );

        let client = IamIdentity::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::bearer_token::Builder::new("explicit").build()?)
            .build()
            .await?;
        client.delete_api_key().set_id("ApiKey-1").send().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn not_configured() {
        let _e1 = ScopedEnv::remove(AUTH_TYPE);
        let _e2 = ScopedEnv::remove(BEARER_TOKEN);
        let _e3 = ScopedEnv::remove("IAM_IDENTITY_SERVICES_USERNAME");
        let _e4 = ScopedEnv::remove("IAM_IDENTITY_SERVICES_APIKEY");
        let err = IamIdentity::builder()
            .build()
            .await
            .expect_err("no credentials in the environment");
        assert!(err.is_credentials(), "{err:?}");
    }
}
