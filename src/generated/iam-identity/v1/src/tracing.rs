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

/// Implements a [IamIdentity](super::stub::IamIdentity) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct IamIdentity<T>
where
    T: super::stub::IamIdentity + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> IamIdentity<T>
where
    T: super::stub::IamIdentity + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::IamIdentity for IamIdentity<T>
where
    T: super::stub::IamIdentity + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_api_keys(
        &self,
        req: crate::model::ListApiKeysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListApiKeysResponse>> {
        self.inner.list_api_keys(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_api_key(
        &self,
        req: crate::model::CreateApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        self.inner.create_api_key(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_api_key_details(
        &self,
        req: crate::model::GetApiKeyDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        self.inner.get_api_key_details(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_api_key(
        &self,
        req: crate::model::GetApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        self.inner.get_api_key(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_api_key(
        &self,
        req: crate::model::UpdateApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
        self.inner.update_api_key(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_api_key(
        &self,
        req: crate::model::DeleteApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_api_key(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn lock_api_key(
        &self,
        req: crate::model::LockApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.lock_api_key(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn unlock_api_key(
        &self,
        req: crate::model::UnlockApiKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.unlock_api_key(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_service_ids(
        &self,
        req: crate::model::ListServiceIdsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceIdsList>> {
        self.inner.list_service_ids(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_service_id(
        &self,
        req: crate::model::CreateServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        self.inner.create_service_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_service_id(
        &self,
        req: crate::model::GetServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        self.inner.get_service_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_service_id(
        &self,
        req: crate::model::UpdateServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        self.inner.update_service_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_service_id(
        &self,
        req: crate::model::DeleteServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_service_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn lock_service_id(
        &self,
        req: crate::model::LockServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        self.inner.lock_service_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn unlock_service_id(
        &self,
        req: crate::model::UnlockServiceIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
        self.inner.unlock_service_id(req, options).await
    }
}
