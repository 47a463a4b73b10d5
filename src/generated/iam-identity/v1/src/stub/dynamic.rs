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

/// A dyn-compatible, crate-private version of [super::IamIdentity].
#[async_trait::async_trait]
pub trait IamIdentity: std::fmt::Debug + Send + Sync {
    async fn list_api_keys(
        &self,
        req: crate::model::ListApiKeysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListApiKeysResponse>>;

    async fn create_api_key(
        &self,
        req: crate::model::CreateApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>;

    async fn get_api_key_details(
        &self,
        req: crate::model::GetApiKeyDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>;

    async fn get_api_key(
        &self,
        req: crate::model::GetApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>;

    async fn update_api_key(
        &self,
        req: crate::model::UpdateApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>>;

    async fn delete_api_key(
        &self,
        req: crate::model::DeleteApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn lock_api_key(
        &self,
        req: crate::model::LockApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn unlock_api_key(
        &self,
        req: crate::model::UnlockApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_service_ids(
        &self,
        req: crate::model::ListServiceIdsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdsList>>;

    async fn create_service_id(
        &self,
        req: crate::model::CreateServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>;

    async fn get_service_id(
        &self,
        req: crate::model::GetServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>;

    async fn update_service_id(
        &self,
        req: crate::model::UpdateServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>;

    async fn delete_service_id(
        &self,
        req: crate::model::DeleteServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn lock_service_id(
        &self,
        req: crate::model::LockServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>;

    async fn unlock_service_id(
        &self,
        req: crate::model::UnlockServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>>;
}

/// All implementations of [super::IamIdentity] also implement [IamIdentity].
#[async_trait::async_trait]
impl<T: super::IamIdentity> IamIdentity for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_api_keys(
        &self,
        req: crate::model::ListApiKeysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListApiKeysResponse>> {
        T::list_api_keys(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_api_key(
        &self,
        req: crate::model::CreateApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        T::create_api_key(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_api_key_details(
        &self,
        req: crate::model::GetApiKeyDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        T::get_api_key_details(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_api_key(
        &self,
        req: crate::model::GetApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        T::get_api_key(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_api_key(
        &self,
        req: crate::model::UpdateApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        T::update_api_key(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_api_key(
        &self,
        req: crate::model::DeleteApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_api_key(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn lock_api_key(
        &self,
        req: crate::model::LockApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::lock_api_key(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn unlock_api_key(
        &self,
        req: crate::model::UnlockApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::unlock_api_key(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_service_ids(
        &self,
        req: crate::model::ListServiceIdsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdsList>> {
        T::list_service_ids(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_service_id(
        &self,
        req: crate::model::CreateServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        T::create_service_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_service_id(
        &self,
        req: crate::model::GetServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        T::get_service_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_service_id(
        &self,
        req: crate::model::UpdateServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        T::update_service_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_service_id(
        &self,
        req: crate::model::DeleteServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_service_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn lock_service_id(
        &self,
        req: crate::model::LockServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        T::lock_service_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn unlock_service_id(
        &self,
        req: crate::model::UnlockServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        T::unlock_service_id(self, req, options).await
    }
}
