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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The IBM Cloud client libraries for Rust use a generic
//! builder type to provide such functionality. The types in this module
//! implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.iam.cloud.ibm.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use http::{HeaderMap, HeaderName, HeaderValue};

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_gax::client_builder::examples;
/// use ibm_cloud_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("review the <SERVICE_NAME>_AUTH_TYPE environment variable");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the credentials from the
    /// environment.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create the credentials from the environment")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Cloud client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// To create a client with the default configuration just invoke the
/// `.build()` method:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder().build().await?;
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several method to modify the configuration
/// parameters, and then `.build()` the client:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://private.endpoint.com")
///     .with_service_name("my_iam")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint is the base URL of the service, all the operation paths
    /// are relative to it. Any trailing `/` is ignored.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("http://private.endpoint.com")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// // Here your code would fetch a tracing subscriber
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// The client libraries use the credentials to create the authentication
    /// headers attached to every request. If not set, the client creates
    /// credentials from the environment variables prefixed with the service
    /// name.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use examples::credentials::bearer_token;
    /// let client = Client::builder()
    ///     .with_credentials(
    ///         bearer_token::Builder::new("a-token").build())
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Overrides the service name.
    ///
    /// The service name selects the environment variables used to create the
    /// default credentials. For example, with the `my_iam` service name the
    /// client reads `MY_IAM_AUTH_TYPE`, `MY_IAM_BEARER_TOKEN`, and similar
    /// variables.
    pub fn with_service_name<V: Into<String>>(mut self, v: V) -> Self {
        self.config.service_name = Some(v.into());
        self
    }

    /// Adds a header sent with every request made by the client.
    ///
    /// Default headers have the lowest precedence. The SDK headers, the
    /// headers required by each operation, and any per-request headers replace
    /// default headers with the same name.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use http::{HeaderName, HeaderValue};
    /// let client = Client::builder()
    ///     .with_default_header(
    ///         HeaderName::from_static("x-correlation-id"),
    ///         HeaderValue::from_static("my-app"))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.default_headers.insert(name, value);
        self
    }

    /// Replaces all the headers sent with every request made by the client.
    pub fn with_default_headers(mut self, v: HeaderMap) -> Self {
        self.config.default_headers = v;
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to an IBM Cloud service. Each service
    /// has one or more client types. The default configuration for each client
    /// should work for most applications. But some applications may need to
    /// override the default endpoint, the default authentication credentials,
    /// or the headers attached to every request.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub service_name: Option<String>,
        pub default_headers: HeaderMap,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                service_name: None,
                default_headers: HeaderMap::new(),
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub token: String,
    }

    pub mod credentials {
        pub mod bearer_token {
            #[derive(Clone, Default)]
            pub struct Builder(super::super::Credentials);
            impl Builder {
                pub fn new<T: Into<String>>(token: T) -> Self {
                    Self(super::super::Credentials {
                        token: token.into(),
                    })
                }
                pub fn build(self) -> super::super::Credentials {
                    self.0
                }
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use http::{HeaderMap, HeaderName, HeaderValue};

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().build().await.unwrap();
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.cred, None);
            assert!(!config.tracing);
            assert!(config.service_name.is_none(), "{config:?}");
            assert!(config.default_headers.is_empty(), "{config:?}");
        }

        #[tokio::test]
        async fn endpoint() {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
        }

        #[tokio::test]
        async fn tracing() {
            let client = Client::builder().with_tracing().build().await.unwrap();
            let config = client.0;
            assert!(config.tracing);
        }

        #[tokio::test]
        async fn credentials() {
            let client = Client::builder()
                .with_credentials(credentials::bearer_token::Builder::new("test-token").build())
                .build()
                .await
                .unwrap();
            let config = client.0;
            let cred = config.cred.unwrap();
            assert_eq!(cred.token, "test-token");
        }

        #[tokio::test]
        async fn service_name() {
            let client = Client::builder()
                .with_service_name("my_iam")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.service_name.as_deref(), Some("my_iam"));
        }

        #[tokio::test]
        async fn default_headers() {
            let client = Client::builder()
                .with_default_header(
                    HeaderName::from_static("x-test-a"),
                    HeaderValue::from_static("a"),
                )
                .with_default_header(
                    HeaderName::from_static("x-test-b"),
                    HeaderValue::from_static("b"),
                )
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(
                config.default_headers.get("x-test-a"),
                Some(&HeaderValue::from_static("a"))
            );
            assert_eq!(
                config.default_headers.get("x-test-b"),
                Some(&HeaderValue::from_static("b"))
            );
        }

        #[tokio::test]
        async fn replace_default_headers() {
            let mut map = HeaderMap::new();
            map.insert("x-test-c", HeaderValue::from_static("c"));
            let client = Client::builder()
                .with_default_header(
                    HeaderName::from_static("x-test-a"),
                    HeaderValue::from_static("a"),
                )
                .with_default_headers(map.clone())
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.default_headers, map);
        }
    }
}
