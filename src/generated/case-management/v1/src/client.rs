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


//! Contains the CaseManagement client and related types.

/// Implements a client for the Case Management API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_case_management_v1::client::CaseManagement;
/// let client = CaseManagement::builder()
///     .with_endpoint("https://support-center.cloud.ibm.com")
///     .build()
///     .await?;
/// // use `client` to make requests to the Case Management API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Use the Case Management API to create, view, update, and close support
/// cases. Cases also hold comments, watchlists, related resources, and file
/// attachments.
///
/// # Configuration
///
/// To configure `CaseManagement` use the `with_*` methods in the type returned
/// by [builder()][CaseManagement::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the public endpoint
///   (`https://support-center.cloud.ibm.com`). Applications using a private endpoint or a
///   different region may want to override this default.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment variables prefixed with the service name, e.g.
///   `CASE_MANAGEMENT_AUTH_TYPE`. Applications using custom authentication may
///   need to override this default.
///
/// # Pooling and Cloning
///
/// `CaseManagement` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `CaseManagement` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// # Making Requests
/// ```
/// # use ibm_cloud_case_management_v1::client::CaseManagement;
/// async fn example(client: &CaseManagement) -> gax::Result<()> {
///     let response = client.get_case().set_case_number("TS001234").send().await?;
///     println!("{:?}", response.body());
///     Ok(())
/// }
/// ```
///
/// [with_endpoint()]: super::builder::case_management::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::case_management::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct CaseManagement {
    inner: std::sync::Arc<dyn super::stub::dynamic::CaseManagement>,
}

impl CaseManagement {
    /// Returns a builder for [CaseManagement].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_case_management_v1::client::CaseManagement;
    /// let client = CaseManagement::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::case_management::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::case_management::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CaseManagement + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::CaseManagement>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CaseManagement> {
        super::transport::CaseManagement::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CaseManagement> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CaseManagement::new)
    }

    /// Returns a list of cases in the account.
    pub fn get_cases(&self) -> super::builder::case_management::GetCases {
        super::builder::case_management::GetCases::new(self.inner.clone())
    }

    /// Creates a support case to resolve an issue.
    pub fn create_case(&self) -> super::builder::case_management::CreateCase {
        super::builder::case_management::CreateCase::new(self.inner.clone())
    }

    /// Returns a case by its number.
    pub fn get_case(&self) -> super::builder::case_management::GetCase {
        super::builder::case_management::GetCase::new(self.inner.clone())
    }

    /// Marks a case as resolved, unresolved, or accepts a resolution.
    pub fn update_case_status(&self) -> super::builder::case_management::UpdateCaseStatus {
        super::builder::case_management::UpdateCaseStatus::new(self.inner.clone())
    }

    /// Adds a comment to a case.
    pub fn add_comment(&self) -> super::builder::case_management::AddComment {
        super::builder::case_management::AddComment::new(self.inner.clone())
    }

    /// Adds users to the watchlist of a case.
    pub fn add_watchlist(&self) -> super::builder::case_management::AddWatchlist {
        super::builder::case_management::AddWatchlist::new(self.inner.clone())
    }

    /// Removes users from the watchlist of a case.
    pub fn remove_watchlist(&self) -> super::builder::case_management::RemoveWatchlist {
        super::builder::case_management::RemoveWatchlist::new(self.inner.clone())
    }

    /// Adds a resource to a case.
    pub fn add_resource(&self) -> super::builder::case_management::AddResource {
        super::builder::case_management::AddResource::new(self.inner.clone())
    }

    /// Uploads an attachment to a case.
    pub fn upload_file(&self) -> super::builder::case_management::UploadFile {
        super::builder::case_management::UploadFile::new(self.inner.clone())
    }

    /// Downloads an attachment of a case.
    pub fn download_file(&self) -> super::builder::case_management::DownloadFile {
        super::builder::case_management::DownloadFile::new(self.inner.clone())
    }

    /// Removes an attachment from a case.
    pub fn delete_file(&self) -> super::builder::case_management::DeleteFile {
        super::builder::case_management::DeleteFile::new(self.inner.clone())
    }

    /// Returns the EU support data centers.
    pub fn get_eu_support(&self) -> super::builder::case_management::GetEuSupport {
        super::builder::case_management::GetEuSupport::new(self.inner.clone())
    }

    /// Returns the offerings available for technical cases.
    pub fn get_technical_offerings(
        &self,
    ) -> super::builder::case_management::GetTechnicalOfferings {
        super::builder::case_management::GetTechnicalOfferings::new(self.inner.clone())
    }

    /// Returns the codes used to resolve a case.
    pub fn get_resolution_codes(&self) -> super::builder::case_management::GetResolutionCodes {
        super::builder::case_management::GetResolutionCodes::new(self.inner.clone())
    }

    /// Returns the possible case statuses.
    pub fn get_statuses(&self) -> super::builder::case_management::GetStatuses {
        super::builder::case_management::GetStatuses::new(self.inner.clone())
    }
}
