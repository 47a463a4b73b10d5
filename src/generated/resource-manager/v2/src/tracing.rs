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

/// Implements a [ResourceManager](super::stub::ResourceManager) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ResourceManager<T>
where
    T: super::stub::ResourceManager + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ResourceManager<T>
where
    T: super::stub::ResourceManager + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ResourceManager for ResourceManager<T>
where
    T: super::stub::ResourceManager + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_account_quota_list(
        &self,
        req: crate::model::GetAccountQuotaListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.get_account_quota_list(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_resource_quota(
        &self,
        req: crate::model::GetResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.get_resource_quota(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_resource_quota(
        &self,
        req: crate::model::UpdateResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.update_resource_quota(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_resource_quota(
        &self,
        req: crate::model::DeleteResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_resource_quota(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_default_resource_quota(
        &self,
        req: crate::model::CreateDefaultResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.create_default_resource_quota(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_schema(
        &self,
        req: crate::model::CreateSchemaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.create_schema(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_schema(
        &self,
        req: crate::model::GetSchemaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.get_schema(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_quota_definitions(
        &self,
        req: crate::model::ListQuotaDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QuotaDefinitionList>> {
        self.inner.list_quota_definitions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_quota_definition(
        &self,
        req: crate::model::GetQuotaDefinitionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QuotaDefinition>> {
        self.inner.get_quota_definition(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_resource_groups(
        &self,
        req: crate::model::ListResourceGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ResourceGroupList>> {
        self.inner.list_resource_groups(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ResCreateResourceGroup>> {
        self.inner.create_resource_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ResourceGroup>> {
        self.inner.get_resource_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_resource_group(
        &self,
        req: crate::model::UpdateResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ResourceGroup>> {
        self.inner.update_resource_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_resource_group(req, options).await
    }
}
