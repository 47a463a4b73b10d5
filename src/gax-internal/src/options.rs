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

pub use auth::credentials::Credentials;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub const LOGGING_VAR: &str = "IBM_CLOUD_RUST_LOGGING";

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Resolves the endpoint, an explicit value wins over the service default.
///
/// Any trailing `/` is removed, the operation paths start with `/`.
pub fn resolve_endpoint(config: &ClientConfig, default_endpoint: &str) -> String {
    let endpoint = config.endpoint.as_deref().unwrap_or(default_endpoint);
    endpoint.trim_end_matches('/').to_string()
}

/// Resolves the credentials, explicit credentials win over the environment.
pub fn resolve_credentials(
    config: &ClientConfig,
    default_service_name: &str,
) -> gax::client_builder::Result<Credentials> {
    if let Some(c) = config.cred.clone() {
        return Ok(c);
    }
    let service_name = config
        .service_name
        .as_deref()
        .unwrap_or(default_service_name);
    auth::credentials::from_environment(service_name).map_err(gax::client_builder::Error::cred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        let config = config;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test_case(None, "https://iam.cloud.ibm.com"; "default")]
    #[test_case(Some("https://private.iam.cloud.ibm.com"), "https://private.iam.cloud.ibm.com"; "explicit")]
    #[test_case(Some("http://localhost:8080/"), "http://localhost:8080"; "explicit with trailing slash")]
    #[test_case(Some("http://localhost:8080/v2//"), "http://localhost:8080/v2"; "many trailing slashes")]
    fn endpoint(explicit: Option<&str>, want: &str) {
        let mut config = ClientConfig::default();
        config.endpoint = explicit.map(str::to_string);
        assert_eq!(resolve_endpoint(&config, "https://iam.cloud.ibm.com/"), want);
    }

    #[test]
    #[serial_test::serial]
    fn explicit_credentials() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove("TEST_ONLY_SERVICE_AUTH_TYPE");
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        let _ = resolve_credentials(&config, "test_only_service")?;
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn environment_credentials() -> anyhow::Result<()> {
        let _e1 = ScopedEnv::set("TEST_ONLY_SERVICE_AUTH_TYPE", "noauth");
        let _e2 = ScopedEnv::remove("TEST_ONLY_OVERRIDE_AUTH_TYPE");
        let config = ClientConfig::default();
        let _ = resolve_credentials(&config, "test_only_service")?;

        let mut config = ClientConfig::default();
        config.service_name = Some("test_only_override".to_string());
        let err = resolve_credentials(&config, "test_only_service")
            .expect_err("nothing configured for the override");
        assert!(err.is_credentials(), "{err:?}");
        Ok(())
    }
}
