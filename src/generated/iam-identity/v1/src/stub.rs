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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::IamIdentity].
///
/// Application developers may need to implement this trait to mock
/// `client::IamIdentity`. In other use-cases, application developers only
/// use `client::IamIdentity` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait IamIdentity: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::IamIdentity::list_api_keys].
    fn list_api_keys(
        &self,
        _req: crate::model::ListApiKeysRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListApiKeysResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::create_api_key].
    fn create_api_key(
        &self,
        _req: crate::model::CreateApiKeyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::get_api_key_details].
    fn get_api_key_details(
        &self,
        _req: crate::model::GetApiKeyDetailsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::get_api_key].
    fn get_api_key(
        &self,
        _req: crate::model::GetApiKeyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::update_api_key].
    fn update_api_key(
        &self,
        _req: crate::model::UpdateApiKeyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::delete_api_key].
    fn delete_api_key(
        &self,
        _req: crate::model::DeleteApiKeyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::lock_api_key].
    fn lock_api_key(
        &self,
        _req: crate::model::LockApiKeyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::unlock_api_key].
    fn unlock_api_key(
        &self,
        _req: crate::model::UnlockApiKeyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::list_service_ids].
    fn list_service_ids(
        &self,
        _req: crate::model::ListServiceIdsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ServiceIdsList>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::create_service_id].
    fn create_service_id(
        &self,
        _req: crate::model::CreateServiceIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::get_service_id].
    fn get_service_id(
        &self,
        _req: crate::model::GetServiceIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::update_service_id].
    fn update_service_id(
        &self,
        _req: crate::model::UpdateServiceIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::delete_service_id].
    fn delete_service_id(
        &self,
        _req: crate::model::DeleteServiceIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::lock_service_id].
    fn lock_service_id(
        &self,
        _req: crate::model::LockServiceIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::IamIdentity::unlock_service_id].
    fn unlock_service_id(
        &self,
        _req: crate::model::UnlockServiceIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
