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


//! Contains the ResourceManager client and related types.

/// Implements a client for the Resource Manager API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_resource_manager_v2::client::ResourceManager;
/// let client = ResourceManager::builder()
///     .with_endpoint("https://resource-controller.cloud.ibm.com/v2")
///     .build()
///     .await?;
/// // use `client` to make requests to the Resource Manager API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manage lifecycle of your Cloud resource groups using Resource Manager APIs.
/// The API also lists the quota definitions available to an account.
///
/// # Configuration
///
/// To configure `ResourceManager` use the `with_*` methods in the type returned
/// by [builder()][ResourceManager::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the public endpoint
///   (`https://resource-controller.cloud.ibm.com/v2`). Applications using a private endpoint or a
///   different region may want to override this default.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment variables prefixed with the service name, e.g.
///   `RESOURCE_MANAGER_AUTH_TYPE`. Applications using custom authentication may
///   need to override this default.
///
/// # Pooling and Cloning
///
/// `ResourceManager` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `ResourceManager` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// # Making Requests
/// ```
/// # use ibm_cloud_resource_manager_v2::client::ResourceManager;
/// async fn example(client: &ResourceManager) -> gax::Result<()> {
///     let response = client.get_resource_group().set_id("rg-123").send().await?;
///     println!("{:?}", response.body());
///     Ok(())
/// }
/// ```
///
/// [with_endpoint()]: super::builder::resource_manager::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::resource_manager::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct ResourceManager {
    inner: std::sync::Arc<dyn super::stub::dynamic::ResourceManager>,
}

impl ResourceManager {
    /// Returns a builder for [ResourceManager].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_resource_manager_v2::client::ResourceManager;
    /// let client = ResourceManager::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::resource_manager::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::resource_manager::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ResourceManager + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::ResourceManager>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ResourceManager> {
        super::transport::ResourceManager::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ResourceManager> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ResourceManager::new)
    }

    /// Returns the quotas of an account.
    pub fn get_account_quota_list(&self) -> super::builder::resource_manager::GetAccountQuotaList {
        super::builder::resource_manager::GetAccountQuotaList::new(self.inner.clone())
    }

    /// Returns the quota of an account for a resource type.
    pub fn get_resource_quota(&self) -> super::builder::resource_manager::GetResourceQuota {
        super::builder::resource_manager::GetResourceQuota::new(self.inner.clone())
    }

    /// Updates the quota of an account for a resource type.
    pub fn update_resource_quota(&self) -> super::builder::resource_manager::UpdateResourceQuota {
        super::builder::resource_manager::UpdateResourceQuota::new(self.inner.clone())
    }

    /// Deletes the quota of an account for a resource type.
    pub fn delete_resource_quota(&self) -> super::builder::resource_manager::DeleteResourceQuota {
        super::builder::resource_manager::DeleteResourceQuota::new(self.inner.clone())
    }

    /// Creates the default quota for a resource type.
    pub fn create_default_resource_quota(
        &self,
    ) -> super::builder::resource_manager::CreateDefaultResourceQuota {
        super::builder::resource_manager::CreateDefaultResourceQuota::new(self.inner.clone())
    }

    /// Creates the quota schema for a resource type.
    pub fn create_schema(&self) -> super::builder::resource_manager::CreateSchema {
        super::builder::resource_manager::CreateSchema::new(self.inner.clone())
    }

    /// Returns the quota schema for a resource type.
    pub fn get_schema(&self) -> super::builder::resource_manager::GetSchema {
        super::builder::resource_manager::GetSchema::new(self.inner.clone())
    }

    /// Returns the list of quota definitions.
    pub fn list_quota_definitions(&self) -> super::builder::resource_manager::ListQuotaDefinitions {
        super::builder::resource_manager::ListQuotaDefinitions::new(self.inner.clone())
    }

    /// Returns a quota definition.
    pub fn get_quota_definition(&self) -> super::builder::resource_manager::GetQuotaDefinition {
        super::builder::resource_manager::GetQuotaDefinition::new(self.inner.clone())
    }

    /// Returns the resource groups of an account.
    pub fn list_resource_groups(&self) -> super::builder::resource_manager::ListResourceGroups {
        super::builder::resource_manager::ListResourceGroups::new(self.inner.clone())
    }

    /// Creates a resource group in an account.
    pub fn create_resource_group(&self) -> super::builder::resource_manager::CreateResourceGroup {
        super::builder::resource_manager::CreateResourceGroup::new(self.inner.clone())
    }

    /// Returns a resource group.
    pub fn get_resource_group(&self) -> super::builder::resource_manager::GetResourceGroup {
        super::builder::resource_manager::GetResourceGroup::new(self.inner.clone())
    }

    /// Updates the name or state of a resource group.
    pub fn update_resource_group(&self) -> super::builder::resource_manager::UpdateResourceGroup {
        super::builder::resource_manager::UpdateResourceGroup::new(self.inner.clone())
    }

    /// Deletes a resource group.
    pub fn delete_resource_group(&self) -> super::builder::resource_manager::DeleteResourceGroup {
        super::builder::resource_manager::DeleteResourceGroup::new(self.inner.clone())
    }
}
