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

use crate::Result;
use crate::build_errors::Error as BuilderError;
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

pub mod anonymous;
pub mod basic;
pub mod bearer_token;

/// The result type for credentials builders.
pub type BuildResult<T> = std::result::Result<T, BuilderError>;

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents the authenticator used by a client. The client asks the
/// credentials for the headers to attach to each request, and then adds those
/// headers after any default, operation, or caller-supplied headers.
///
/// Credentials are cheap to clone, all clones share the same underlying
/// implementation.
///
/// # Notes
///
/// Application developers who directly use the Auth SDK can use this type,
/// along with [Credentials::from()] to mock the credentials. Application
/// developers who use the client libraries directly should not need this
/// functionality.
#[derive(Clone, Debug)]
pub struct Credentials {
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do. They also need to derive `Clone`, as the transport clients
    // which hold them derive `Clone`. So a `Box` will not do.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Represents an authenticator, the source of the authentication headers.
///
/// Applications can implement this trait to provide custom authentication,
/// for example, to fetch tokens from an external vault.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::{Credentials, CredentialsProvider};
/// # use ibm_cloud_auth::errors::CredentialsError;
/// # use http::HeaderMap;
/// #[derive(Debug)]
/// struct MyAuthenticator;
/// impl CredentialsProvider for MyAuthenticator {
///     async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
///         let mut headers = HeaderMap::new();
///         headers.insert("x-my-auth", http::HeaderValue::from_static("secret"));
///         Ok(headers)
///     }
/// }
/// let credentials = Credentials::from(MyAuthenticator);
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    ///
    /// Different authenticators use different headers. The credentials
    /// construct the headers (and header values) that should be sent with a
    /// request.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Creates [Credentials] from the environment variables for `service_name`.
///
/// The environment variables use the service name, converted to upper case
/// and with `-` replaced by `_`, as a prefix. For example, with the
/// `iam_identity_services` service name the function reads:
///
/// * `IAM_IDENTITY_SERVICES_AUTH_TYPE`: one of `noauth`, `bearertoken`, or
///   `basic`. The value is case-insensitive.
/// * `IAM_IDENTITY_SERVICES_BEARER_TOKEN`: the token for `bearertoken`.
/// * `IAM_IDENTITY_SERVICES_USERNAME` and `IAM_IDENTITY_SERVICES_PASSWORD`:
///   the username and password for `basic`.
///
/// If the `*_AUTH_TYPE` variable is not set, the function uses `bearertoken`
/// when a bearer token is present, and `basic` when a username is present.
///
/// The `iam`, `container`, `vpc`, and `cp4d` types exchange the configured
/// secrets for short-lived tokens, this crate does not support them and
/// returns an error.
///
/// # Example
/// ```no_run
/// # use ibm_cloud_auth::credentials::from_environment;
/// let credentials = from_environment("iam_identity_services")?;
/// # Ok::<(), ibm_cloud_auth::build_errors::Error>(())
/// ```
pub fn from_environment(service_name: &str) -> BuildResult<Credentials> {
    from_lookup(service_name, |name| std::env::var(name).ok())
}

const AUTH_TYPE: &str = "AUTH_TYPE";
const BEARER_TOKEN: &str = "BEARER_TOKEN";
const USERNAME: &str = "USERNAME";
const PASSWORD: &str = "PASSWORD";
const APIKEY: &str = "APIKEY";

fn env_prefix(service_name: &str) -> String {
    service_name.to_uppercase().replace('-', "_")
}

fn from_lookup<F>(service_name: &str, lookup: F) -> BuildResult<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let prefix = env_prefix(service_name);
    let get = |suffix: &str| lookup(&format!("{prefix}_{suffix}")).filter(|v| !v.is_empty());

    let auth_type = match get(AUTH_TYPE) {
        Some(t) => t.to_lowercase(),
        None if get(BEARER_TOKEN).is_some() => "bearertoken".to_string(),
        None if get(USERNAME).is_some() => "basic".to_string(),
        None if get(APIKEY).is_some() => "iam".to_string(),
        None => return Err(BuilderError::not_configured(prefix)),
    };

    match auth_type.as_str() {
        "noauth" => Ok(anonymous::Builder::new().build()),
        "bearertoken" => {
            let token = get(BEARER_TOKEN).ok_or(BuilderError::missing_field("bearer_token"))?;
            bearer_token::Builder::new(token).build()
        }
        "basic" => {
            let username = get(USERNAME).ok_or(BuilderError::missing_field("username"))?;
            let password = get(PASSWORD).ok_or(BuilderError::missing_field("password"))?;
            basic::Builder::new(username, password).build()
        }
        "iam" | "container" | "vpc" | "cp4d" | "mcsp" => Err(BuilderError::not_supported(
            format!("{auth_type} requires a token exchange, use `bearertoken` with a pre-fetched token"),
        )),
        _ => Err(BuilderError::unknown_type(format!(
            "{auth_type}, expected one of `noauth`, `bearertoken`, or `basic`"
        ))),
    }
}
