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

/// A dyn-compatible, crate-private version of [super::ResourceManager].
#[async_trait::async_trait]
pub trait ResourceManager: std::fmt::Debug + Send + Sync {
    async fn get_account_quota_list(
        &self,
        req: crate::model::GetAccountQuotaListRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn get_resource_quota(
        &self,
        req: crate::model::GetResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn update_resource_quota(
        &self,
        req: crate::model::UpdateResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn delete_resource_quota(
        &self,
        req: crate::model::DeleteResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn create_default_resource_quota(
        &self,
        req: crate::model::CreateDefaultResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn create_schema(
        &self,
        req: crate::model::CreateSchemaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn get_schema(
        &self,
        req: crate::model::GetSchemaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn list_quota_definitions(
        &self,
        req: crate::model::ListQuotaDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QuotaDefinitionList>>;

    async fn get_quota_definition(
        &self,
        req: crate::model::GetQuotaDefinitionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QuotaDefinition>>;

    async fn list_resource_groups(
        &self,
        req: crate::model::ListResourceGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResourceGroupList>>;

    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResCreateResourceGroup>>;

    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResourceGroup>>;

    async fn update_resource_group(
        &self,
        req: crate::model::UpdateResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResourceGroup>>;

    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;
}

/// All implementations of [super::ResourceManager] also implement [ResourceManager].
#[async_trait::async_trait]
impl<T: super::ResourceManager> ResourceManager for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_account_quota_list(
        &self,
        req: crate::model::GetAccountQuotaListRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::get_account_quota_list(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_resource_quota(
        &self,
        req: crate::model::GetResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::get_resource_quota(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_resource_quota(
        &self,
        req: crate::model::UpdateResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::update_resource_quota(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_resource_quota(
        &self,
        req: crate::model::DeleteResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_resource_quota(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_default_resource_quota(
        &self,
        req: crate::model::CreateDefaultResourceQuotaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::create_default_resource_quota(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_schema(
        &self,
        req: crate::model::CreateSchemaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::create_schema(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_schema(
        &self,
        req: crate::model::GetSchemaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::get_schema(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_quota_definitions(
        &self,
        req: crate::model::ListQuotaDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QuotaDefinitionList>> {
        T::list_quota_definitions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_quota_definition(
        &self,
        req: crate::model::GetQuotaDefinitionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QuotaDefinition>> {
        T::get_quota_definition(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_resource_groups(
        &self,
        req: crate::model::ListResourceGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResourceGroupList>> {
        T::list_resource_groups(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResCreateResourceGroup>> {
        T::create_resource_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResourceGroup>> {
        T::get_resource_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_resource_group(
        &self,
        req: crate::model::UpdateResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResourceGroup>> {
        T::update_resource_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_resource_group(self, req, options).await
    }
}
