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

//! Basic authentication credentials.
//!
//! These credentials send a username and password, encoded as described in
//! [RFC 7617], in the `Authorization` header. This is the `basic`
//! authentication type.
//!
//! [RFC 7617]: https://datatracker.ietf.org/doc/html/rfc7617

use crate::Result;
use crate::build_errors::Error as BuilderError;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{BuildResult, Credentials};
use crate::headers_util::build_basic_headers;
use http::HeaderMap;
use std::sync::Arc;

struct BasicCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

/// A builder for basic authentication credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::basic::Builder;
/// let credentials = Builder::new("my-user", "my-password").build()?;
/// # Ok::<(), ibm_cloud_auth::build_errors::Error>(())
/// ```
pub struct Builder {
    username: String,
    password: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given username and password.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured username and
    /// password.
    ///
    /// Fails if either value is empty, or if either value is wrapped in curly
    /// braces or quotes. Such values are usually configuration templates that
    /// were never filled in.
    pub fn build(self) -> BuildResult<Credentials> {
        validate("username", &self.username)?;
        validate("password", &self.password)?;
        Ok(Credentials {
            inner: Arc::new(BasicCredentials {
                username: self.username,
                password: self.password,
            }),
        })
    }
}

fn validate(field: &'static str, value: &str) -> BuildResult<()> {
    if value.is_empty() {
        return Err(BuilderError::missing_field(field));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) || value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(BuilderError::invalid(format!(
            "the {field} must not start or end with curly braces or quotes"
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
impl CredentialsProvider for BasicCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_basic_headers(&self.username, &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use test_case::test_case;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let creds = Builder::new("user", "pass").build()?;
        let headers = creds.headers().await?;
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| anyhow::anyhow!("missing authorization in {headers:?}"))?;
        assert_eq!(value, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test_case("", "pass")]
    #[test_case("user", "")]
    fn missing(username: &str, password: &str) {
        let got = Builder::new(username, password).build();
        assert!(matches!(&got, Err(e) if e.is_missing_field()), "{got:?}");
    }

    #[test_case("{user}", "pass")]
    #[test_case("user", "\"pass\"")]
    #[test_case("user}", "pass")]
    #[test_case("user", "\"pass")]
    fn invalid(username: &str, password: &str) {
        let got = Builder::new(username, password).build();
        assert!(matches!(&got, Err(e) if e.is_invalid()), "{got:?}");
    }

    #[test]
    fn debug_censored() -> anyhow::Result<()> {
        let creds = Builder::new("user", "super-secret").build()?;
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        assert!(fmt.contains("user"), "{fmt}");
        Ok(())
    }
}
