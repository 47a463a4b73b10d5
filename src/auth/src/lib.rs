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

//! IBM Cloud Client Libraries for Rust - Authentication
//!
//! This crate contains types and functions used to authenticate applications
//! with IBM Cloud services. The IBM Cloud client libraries for Rust use this
//! crate to attach the authentication headers to every request.
//!
//! The main type is [Credentials][credentials::Credentials]. Each variant
//! listed below has a builder, and [credentials::from_environment] selects a
//! variant using the environment variables for a given service:
//!
//! * [anonymous][credentials::anonymous]: sends no authentication headers.
//! * [bearer_token][credentials::bearer_token]: sends a fixed bearer token.
//! * [basic][credentials::basic]: sends a username and password.
//!
//! # Example
//! ```
//! # use ibm_cloud_auth::credentials::bearer_token;
//! # tokio_test::block_on(async {
//! let credentials = bearer_token::Builder::new("my-token").build()?;
//! let headers = credentials.headers().await?;
//! assert!(headers.contains_key(http::header::AUTHORIZATION));
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```

pub mod build_errors;
pub mod errors;

/// Types and functions to work with IBM Cloud authentication credentials.
pub mod credentials;

/// A `Result` alias where the `Err` case is
/// `ibm_cloud_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// Utility functions to build the authentication headers.
pub(crate) mod headers_util;
