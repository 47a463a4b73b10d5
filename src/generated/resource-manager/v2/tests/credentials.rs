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
    use ibm_cloud_resource_manager_v2::client::ResourceManager;
    use scoped_env::ScopedEnv;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    const AUTH_TYPE: &str = "RESOURCE_MANAGER_AUTH_TYPE";
    const BEARER_TOKEN: &str = "RESOURCE_MANAGER_BEARER_TOKEN";

    // These tests must run serially because they manipulate the environment.
    #[tokio::test]
    #[serial_test::serial]
    async fn bearer_token_from_environment() -> TestResult {
        let _e1 = ScopedEnv::set(AUTH_TYPE, "BearerToken");
        let _e2 = ScopedEnv::set(BEARER_TOKEN, "rm-token");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/resource_groups/rg-1"),
                request::headers(contains(("authorization", "Bearer rm-token"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "rg-1"}))),
        );

        let client = ResourceManager::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .build()
            .await?;
        client.get_resource_group().set_id("rg-1").send().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn missing_bearer_token() {
        let _e1 = ScopedEnv::set(AUTH_TYPE, "bearertoken");
        let _e2 = ScopedEnv::remove(BEARER_TOKEN);
        let err = ResourceManager::builder()
            .build()
            .await
            .expect_err("the bearer token is missing");
        assert!(err.is_credentials(), "{err:?}");
    }
}
