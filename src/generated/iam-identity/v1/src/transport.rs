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
use crate::operations;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::request::Parameters;

mod info {
    pub(crate) const SDK_HEADER: gaxi::api_header::SdkHeader = gaxi::api_header::SdkHeader {
        service_name: crate::DEFAULT_SERVICE_NAME,
        service_version: "v1",
    };
}

/// Implements [IamIdentity](super::stub::IamIdentity) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct IamIdentity {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for IamIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("IamIdentity")
            .field("inner", &self.inner)
            .finish()
    }
}

impl IamIdentity {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(
            config,
            crate::DEFAULT_SERVICE_URL,
            crate::DEFAULT_SERVICE_NAME,
        )
        .await?;
        Ok(Self { inner })
    }
}

impl super::stub::IamIdentity for IamIdentity {
    async fn list_api_keys(
        &self,
        req: crate::model::ListApiKeysRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListApiKeysResponse>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::LIST_API_KEYS,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn create_api_key(
        &self,
        req: crate::model::CreateApiKeyRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApiKeyDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::CREATE_API_KEY,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_api_key_details(
        &self,
        req: crate::model::GetApiKeyDetailsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApiKeyDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_API_KEY_DETAILS,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_api_key(
        &self,
        req: crate::model::GetApiKeyRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApiKeyDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_API_KEY,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn update_api_key(
        &self,
        req: crate::model::UpdateApiKeyRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApiKeyDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::UPDATE_API_KEY,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn delete_api_key(
        &self,
        req: crate::model::DeleteApiKeyRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::DELETE_API_KEY,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner
            .execute_bytes(request, &options)
            .await
            .map(discard_body)
    }

    async fn lock_api_key(
        &self,
        req: crate::model::LockApiKeyRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::LOCK_API_KEY,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner
            .execute_bytes(request, &options)
            .await
            .map(discard_body)
    }

    async fn unlock_api_key(
        &self,
        req: crate::model::UnlockApiKeyRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::UNLOCK_API_KEY,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner
            .execute_bytes(request, &options)
            .await
            .map(discard_body)
    }

    async fn list_service_ids(
        &self,
        req: crate::model::ListServiceIdsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceIdsList>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::LIST_SERVICE_IDS,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn create_service_id(
        &self,
        req: crate::model::CreateServiceIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceIdDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::CREATE_SERVICE_ID,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_service_id(
        &self,
        req: crate::model::GetServiceIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceIdDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_SERVICE_ID,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn update_service_id(
        &self,
        req: crate::model::UpdateServiceIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceIdDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::UPDATE_SERVICE_ID,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn delete_service_id(
        &self,
        req: crate::model::DeleteServiceIdRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::DELETE_SERVICE_ID,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner
            .execute_bytes(request, &options)
            .await
            .map(discard_body)
    }

    async fn lock_service_id(
        &self,
        req: crate::model::LockServiceIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceIdDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::LOCK_SERVICE_ID,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn unlock_service_id(
        &self,
        req: crate::model::UnlockServiceIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceIdDetails>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::UNLOCK_SERVICE_ID,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }
}

// The operations without a response model ignore the response body.
fn discard_body(response: Response<bytes::Bytes>) -> Response<()> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, ())
}
