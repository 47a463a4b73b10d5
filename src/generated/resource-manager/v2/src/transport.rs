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
        service_version: "v2",
    };
}

/// Implements [ResourceManager](super::stub::ResourceManager) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct ResourceManager {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for ResourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ResourceManager")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ResourceManager {
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

impl super::stub::ResourceManager for ResourceManager {
    async fn get_account_quota_list(
        &self,
        req: crate::model::GetAccountQuotaListRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_ACCOUNT_QUOTA_LIST,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_resource_quota(
        &self,
        req: crate::model::GetResourceQuotaRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_RESOURCE_QUOTA,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn update_resource_quota(
        &self,
        req: crate::model::UpdateResourceQuotaRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::UPDATE_RESOURCE_QUOTA,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn delete_resource_quota(
        &self,
        req: crate::model::DeleteResourceQuotaRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::DELETE_RESOURCE_QUOTA,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner
            .execute_bytes(request, &options)
            .await
            .map(discard_body)
    }

    async fn create_default_resource_quota(
        &self,
        req: crate::model::CreateDefaultResourceQuotaRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::CREATE_DEFAULT_RESOURCE_QUOTA,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn create_schema(
        &self,
        req: crate::model::CreateSchemaRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::CREATE_SCHEMA,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_schema(
        &self,
        req: crate::model::GetSchemaRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_SCHEMA,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn list_quota_definitions(
        &self,
        req: crate::model::ListQuotaDefinitionsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::QuotaDefinitionList>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::LIST_QUOTA_DEFINITIONS,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_quota_definition(
        &self,
        req: crate::model::GetQuotaDefinitionRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::QuotaDefinition>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_QUOTA_DEFINITION,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn list_resource_groups(
        &self,
        req: crate::model::ListResourceGroupsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ResourceGroupList>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::LIST_RESOURCE_GROUPS,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ResCreateResourceGroup>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::CREATE_RESOURCE_GROUP,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ResourceGroup>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_RESOURCE_GROUP,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn update_resource_group(
        &self,
        req: crate::model::UpdateResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ResourceGroup>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::UPDATE_RESOURCE_GROUP,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::DELETE_RESOURCE_GROUP,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner
            .execute_bytes(request, &options)
            .await
            .map(discard_body)
    }
}

// The operations without a response model ignore the response body.
fn discard_body(response: Response<bytes::Bytes>) -> Response<()> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, ())
}
