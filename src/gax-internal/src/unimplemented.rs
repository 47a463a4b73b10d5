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

pub const UNIMPLEMENTED: &str = concat!(
    "the stub traits provide a default implementation of each operation, so ",
    "services can gain new operations without breaking the applications that ",
    "implement the traits. The client libraries override every method. This ",
    "error only appears in test code that mocks the client libraries and ",
    "calls an operation the mock does not implement. If that is how you got ",
    "this error, implement the missing method in your mock."
);

/// The default implementation for each operation in the service stub traits.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!("{UNIMPLEMENTED}");
}
