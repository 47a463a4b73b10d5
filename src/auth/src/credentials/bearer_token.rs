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

//! Bearer token credentials.
//!
//! These credentials send a fixed token in the `Authorization` header. The
//! application is responsible for obtaining the token, and for creating new
//! credentials before the token expires. This is the `bearertoken`
//! authentication type.

use crate::Result;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{BuildResult, Credentials};
use crate::build_errors::Error as BuilderError;
use crate::headers_util::build_bearer_headers;
use http::HeaderMap;
use std::sync::Arc;

struct BearerTokenCredentials {
    token: String,
}

impl std::fmt::Debug for BearerTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenCredentials")
            .field("token", &"[censored]")
            .finish()
    }
}

/// A builder for credentials using a bearer token.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::bearer_token::Builder;
/// let credentials = Builder::new("my-token").build()?;
/// # Ok::<(), ibm_cloud_auth::build_errors::Error>(())
/// ```
pub struct Builder {
    token: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured token.
    ///
    /// Fails if the token is empty.
    pub fn build(self) -> BuildResult<Credentials> {
        if self.token.is_empty() {
            return Err(BuilderError::missing_field("bearer_token"));
        }
        Ok(Credentials {
            inner: Arc::new(BearerTokenCredentials { token: self.token }),
        })
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for BearerTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_bearer_headers(&self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let creds = Builder::new("test-token").build()?;
        let headers = creds.headers().await?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| anyhow::anyhow!("missing authorization in {headers:?}"))?;
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn empty_token() {
        let got = Builder::new("").build();
        assert!(matches!(&got, Err(e) if e.is_missing_field()), "{got:?}");
    }

    #[test]
    fn debug_censored() -> anyhow::Result<()> {
        let builder = Builder::new("super-secret-token");
        let fmt = format!("{builder:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");

        let creds = builder.build()?;
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");
        assert!(fmt.contains("[censored]"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_token() -> anyhow::Result<()> {
        let creds = Builder::new("bad\ntoken").build()?;
        let got = creds.headers().await;
        assert!(matches!(&got, Err(e) if !e.is_transient()), "{got:?}");
        Ok(())
    }
}
