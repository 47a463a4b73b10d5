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

//! IBM Cloud Client Libraries for Rust - Case Management API
//!
//! This crate contains traits, types, and functions to interact with the Case
//! Management API. Most applications will use the structs defined in the
//! [client] module. More specifically:
//!
//! * [CaseManagement](client/struct.CaseManagement.html)
//!
//! The client uses the credentials configured in the environment, see
//! [auth::credentials::from_environment] for details. The environment variables
//! use the `CASE_MANAGEMENT_` prefix.
//!
//! [auth::credentials::from_environment]: https://docs.rs/ibm-cloud-auth

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;

#[allow(rustdoc::invalid_html_tags)]
pub mod client;

pub mod stub;

pub(crate) mod operations;
pub(crate) mod tracing;
pub(crate) mod transport;

/// The default endpoint for the service.
pub const DEFAULT_SERVICE_URL: &str = "https://support-center.cloud.ibm.com";

/// The service name used to find the credentials in the environment.
pub const DEFAULT_SERVICE_NAME: &str = "case_management";
