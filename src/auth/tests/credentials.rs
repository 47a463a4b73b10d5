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
    use http::header::AUTHORIZATION;
    use ibm_cloud_auth::credentials::{Credentials, from_environment};
    use scoped_env::ScopedEnv;

    static_assertions::assert_impl_all!(Credentials: Clone, Send, Sync, std::fmt::Debug);
    static_assertions::assert_impl_all!(ibm_cloud_auth::build_errors::Error: Send, Sync);

    #[tokio::test]
    #[serial_test::serial]
    async fn bearer_token_from_environment() -> anyhow::Result<()> {
        let _t = ScopedEnv::set("TEST_SERVICE_AUTH_TYPE", "bearerToken");
        let _b = ScopedEnv::set("TEST_SERVICE_BEARER_TOKEN", "env-token");
        let credentials = from_environment("test_service")?;
        let headers = credentials.headers().await?;
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| anyhow::anyhow!("missing authorization in {headers:?}"))?;
        assert_eq!(value.to_str()?, "Bearer env-token");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn hyphenated_service_name() -> anyhow::Result<()> {
        let _t = ScopedEnv::set("TEST_HYPHEN_SERVICE_AUTH_TYPE", "noauth");
        let credentials = from_environment("test-hyphen-service")?;
        let headers = credentials.headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn nothing_configured() {
        let _t = ScopedEnv::remove("TEST_EMPTY_SERVICE_AUTH_TYPE");
        let _b = ScopedEnv::remove("TEST_EMPTY_SERVICE_BEARER_TOKEN");
        let _u = ScopedEnv::remove("TEST_EMPTY_SERVICE_USERNAME");
        let _a = ScopedEnv::remove("TEST_EMPTY_SERVICE_APIKEY");
        let got = from_environment("test_empty_service");
        assert!(
            matches!(&got, Err(e) if e.is_not_configured()),
            "{got:?}"
        );
    }
}
