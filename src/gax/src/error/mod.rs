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

//! Errors and error details returned by the client libraries.
//!
//! The IBM Cloud Client Libraries for Rust distinguish between errors detected
//! before a request is sent (e.g. missing required parameters), errors
//! trying to send the request or receive the response (e.g. cannot open a
//! connection), and errors returned by the service itself.

mod core_error;
mod credentials;
mod service_error;
pub use core_error::*;
pub use credentials::*;
pub use service_error::*;
