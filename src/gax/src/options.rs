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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the behavior of some
//! calls. Applications sometimes change the timeout for an specific call, or
//! need to send additional headers. The `*Builder` returned by each client
//! method implements the [RequestOptionsBuilder] trait where applications can
//! override some defaults.

use http::{HeaderMap, HeaderName, HeaderValue};

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Adds a caller-supplied header to the request.
    ///
    /// Caller-supplied headers have the highest precedence, they replace any
    /// default, SDK, or operation header with the same name.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Gets the caller-supplied headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The IBM Cloud Client Libraries for Rust provide a builder for each
/// operation. These builders can be used to set the request parameters, e.g.,
/// the id of the resource targeted by the operation, as well as any options
/// affecting the request, such as additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for this request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Adds a header to this request.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::options::{RequestOptions, RequestOptionsBuilder};
    /// # use ibm_cloud_gax::options::internal::RequestBuilder;
    /// # #[derive(Default)]
    /// # struct Builder(RequestOptions);
    /// # impl RequestBuilder for Builder {
    /// #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
    /// # }
    /// use http::{HeaderName, HeaderValue};
    /// let mut builder = Builder::default()
    ///     .with_header(HeaderName::from_static("x-test"), HeaderValue::from_static("v"));
    /// assert!(builder.request_options().headers().contains_key("x-test"));
    /// ```
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().set_header(name, value);
        self
    }
}
