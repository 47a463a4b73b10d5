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


//! Contains the IamIdentity client and related types.

/// Implements a client for the IAM Identity Services API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_iam_identity_v1::client::IamIdentity;
/// let client = IamIdentity::builder()
///     .with_endpoint("https://iam.test.cloud.ibm.com")
///     .build()
///     .await?;
/// // use `client` to make requests to the IAM Identity Services API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The IAM Identity Service API allows for the management of account settings,
/// API keys, and service IDs. Both API keys and service IDs can be locked,
/// locked resources cannot be updated or deleted until they are unlocked.
///
/// # Configuration
///
/// To configure `IamIdentity` use the `with_*` methods in the type returned
/// by [builder()][IamIdentity::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the public endpoint
///   (`https://iam.test.cloud.ibm.com`). Applications using a private endpoint or a
///   different region may want to override this default.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment variables prefixed with the service name, e.g.
///   `IAM_IDENTITY_SERVICES_AUTH_TYPE`. Applications using custom authentication may
///   need to override this default.
///
/// # Pooling and Cloning
///
/// `IamIdentity` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `IamIdentity` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// # Making Requests
/// ```
/// # use ibm_cloud_iam_identity_v1::client::IamIdentity;
/// async fn example(client: &IamIdentity) -> gax::Result<()> {
///     let response = client.get_api_key().set_id("ApiKey-123").send().await?;
///     println!("{:?}", response.body());
///     Ok(())
/// }
/// ```
///
/// [with_endpoint()]: super::builder::iam_identity::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::iam_identity::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct IamIdentity {
    inner: std::sync::Arc<dyn super::stub::dynamic::IamIdentity>,
}

impl IamIdentity {
    /// Returns a builder for [IamIdentity].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_iam_identity_v1::client::IamIdentity;
    /// let client = IamIdentity::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::iam_identity::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::iam_identity::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::IamIdentity + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::IamIdentity>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::IamIdentity> {
        super::transport::IamIdentity::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::IamIdentity> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::IamIdentity::new)
    }

    /// Returns the list of API key details for a given service or user IAM ID.
    pub fn list_api_keys(&self) -> super::builder::iam_identity::ListApiKeys {
        super::builder::iam_identity::ListApiKeys::new(self.inner.clone())
    }

    /// Creates an API key for a UserID or service ID.
    pub fn create_api_key(&self) -> super::builder::iam_identity::CreateApiKey {
        super::builder::iam_identity::CreateApiKey::new(self.inner.clone())
    }

    /// Returns the details of an API key by its value.
    pub fn get_api_key_details(&self) -> super::builder::iam_identity::GetApiKeyDetails {
        super::builder::iam_identity::GetApiKeyDetails::new(self.inner.clone())
    }

    /// Returns the details of an API key.
    pub fn get_api_key(&self) -> super::builder::iam_identity::GetApiKey {
        super::builder::iam_identity::GetApiKey::new(self.inner.clone())
    }

    /// Updates properties of an API key.
    pub fn update_api_key(&self) -> super::builder::iam_identity::UpdateApiKey {
        super::builder::iam_identity::UpdateApiKey::new(self.inner.clone())
    }

    /// Deletes an API key.
    pub fn delete_api_key(&self) -> super::builder::iam_identity::DeleteApiKey {
        super::builder::iam_identity::DeleteApiKey::new(self.inner.clone())
    }

    /// Locks an API key.
    pub fn lock_api_key(&self) -> super::builder::iam_identity::LockApiKey {
        super::builder::iam_identity::LockApiKey::new(self.inner.clone())
    }

    /// Unlocks an API key.
    pub fn unlock_api_key(&self) -> super::builder::iam_identity::UnlockApiKey {
        super::builder::iam_identity::UnlockApiKey::new(self.inner.clone())
    }

    /// Returns a list of service IDs.
    pub fn list_service_ids(&self) -> super::builder::iam_identity::ListServiceIds {
        super::builder::iam_identity::ListServiceIds::new(self.inner.clone())
    }

    /// Creates a service ID for an IBM Cloud account.
    pub fn create_service_id(&self) -> super::builder::iam_identity::CreateServiceId {
        super::builder::iam_identity::CreateServiceId::new(self.inner.clone())
    }

    /// Returns the details of a service ID.
    pub fn get_service_id(&self) -> super::builder::iam_identity::GetServiceId {
        super::builder::iam_identity::GetServiceId::new(self.inner.clone())
    }

    /// Updates properties of a service ID.
    pub fn update_service_id(&self) -> super::builder::iam_identity::UpdateServiceId {
        super::builder::iam_identity::UpdateServiceId::new(self.inner.clone())
    }

    /// Deletes a service ID and its associated API keys.
    pub fn delete_service_id(&self) -> super::builder::iam_identity::DeleteServiceId {
        super::builder::iam_identity::DeleteServiceId::new(self.inner.clone())
    }

    /// Locks a service ID.
    pub fn lock_service_id(&self) -> super::builder::iam_identity::LockServiceId {
        super::builder::iam_identity::LockServiceId::new(self.inner.clone())
    }

    /// Unlocks a service ID.
    pub fn unlock_service_id(&self) -> super::builder::iam_identity::UnlockServiceId {
        super::builder::iam_identity::UnlockServiceId::new(self.inner.clone())
    }
}
