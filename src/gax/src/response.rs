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

//! Response types.
//!
//! This module contains types related to IBM Cloud service responses.
//! Notably it contains the `Response` type itself. Typically you'll import
//! this type.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use ibm_cloud_gax::Result;
//! # use ibm_cloud_gax::response::Response;
//! // A type representing an IBM Cloud resource, for example, an API key.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn make_ibm_cloud_request(id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = make_ibm_cloud_request("my-id").await?;
//! println!("status = {} {}", response.status(), response.status_text());
//! if let Some(etag) = response.headers().get("ETag") {
//!     // do something with the etag
//! }
//! let resource = response.body();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use ibm_cloud_gax::Result;
//! # use ibm_cloud_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents an IBM Cloud service response.
///
/// A response from an IBM Cloud service consists of a body (potentially the
/// unit type), the HTTP status, and some headers. Most applications only need
/// the body, but some applications use the `ETag` header for optimistic
/// concurrency control.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// The status is `200 OK` and there are no headers.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::response::Response;
    /// let response = Response::from("test-only");
    /// assert_eq!(response.status(), http::StatusCode::OK);
    /// assert!(response.headers().is_empty());
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::response::{Parts, Response};
    /// let parts = Parts::new().set_status(http::StatusCode::CREATED);
    /// let response = Response::from_parts(parts, "test-only");
    /// assert_eq!(response.status(), http::StatusCode::CREATED);
    /// assert_eq!(response.status_text(), "Created");
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the reason phrase for the HTTP status, e.g. `OK`.
    ///
    /// Empty when the status has no canonical reason phrase.
    pub fn status_text(&self) -> &'static str {
        self.parts.status_text()
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
///
/// The response parts, other than the body, consist of the HTTP status and the
/// headers.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status of the response.
    pub status: http::StatusCode,

    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Returns the reason phrase for [status][Parts::status].
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }

    /// Set the HTTP status.
    pub fn set_status<V>(mut self, v: V) -> Self
    where
        V: Into<http::StatusCode>,
    {
        self.status = v.into();
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use test_case::test_case;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.status_text(), "OK");
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::ETAG,
            http::HeaderValue::from_static("W/\"abc\""),
        );
        let parts = Parts::new()
            .set_status(StatusCode::CREATED)
            .set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.status(), StatusCode::CREATED);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
        assert_eq!(parts.status, StatusCode::CREATED);
    }

    #[test_case(StatusCode::OK, "OK")]
    #[test_case(StatusCode::CREATED, "Created")]
    #[test_case(StatusCode::NO_CONTENT, "No Content")]
    #[test_case(StatusCode::ACCEPTED, "Accepted")]
    fn status_text(status: StatusCode, want: &str) {
        let parts = Parts::new().set_status(status);
        assert_eq!(parts.status_text(), want);
    }

    #[test]
    fn status_text_unknown() -> anyhow::Result<()> {
        let parts = Parts::new().set_status(StatusCode::from_u16(599)?);
        assert_eq!(parts.status_text(), "");
        Ok(())
    }
}
