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

pub mod resource_manager {
    use crate::Result;

    /// A builder for [ResourceManager][crate::client::ResourceManager].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_resource_manager_v2::*;
    /// # use builder::resource_manager::ClientBuilder;
    /// # use client::ResourceManager;
    /// let builder : ClientBuilder = ResourceManager::builder();
    /// let client = builder
    ///     .with_endpoint("https://resource-controller.cloud.ibm.com/v2")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::ResourceManager;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ResourceManager;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ResourceManager] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ResourceManager::get_account_quota_list][crate::client::ResourceManager::get_account_quota_list] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::GetAccountQuotaList;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAccountQuotaList {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAccountQuotaList(RequestBuilder<crate::model::GetAccountQuotaListRequest>);

    impl GetAccountQuotaList {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAccountQuotaListRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<serde_json::Value>> {
            (*self.0.stub)
                .get_account_quota_list(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::GetAccountQuotaListRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::GetAccountQuotaListRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAccountQuotaList {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::get_resource_quota][crate::client::ResourceManager::get_resource_quota] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::GetResourceQuota;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetResourceQuota {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetResourceQuota(RequestBuilder<crate::model::GetResourceQuotaRequest>);

    impl GetResourceQuota {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetResourceQuotaRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<serde_json::Value>> {
            (*self.0.stub)
                .get_resource_quota(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::GetResourceQuotaRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::GetResourceQuotaRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_type][crate::model::GetResourceQuotaRequest::resource_type].
        pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_type][crate::model::GetResourceQuotaRequest::resource_type].
        pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.resource_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetResourceQuota {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::update_resource_quota][crate::client::ResourceManager::update_resource_quota] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::UpdateResourceQuota;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateResourceQuota {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateResourceQuota(RequestBuilder<crate::model::UpdateResourceQuotaRequest>);

    impl UpdateResourceQuota {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateResourceQuotaRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<serde_json::Value>> {
            (*self.0.stub)
                .update_resource_quota(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::UpdateResourceQuotaRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::UpdateResourceQuotaRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_type][crate::model::UpdateResourceQuotaRequest::resource_type].
        pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_type][crate::model::UpdateResourceQuotaRequest::resource_type].
        pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.resource_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateResourceQuota {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::delete_resource_quota][crate::client::ResourceManager::delete_resource_quota] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::DeleteResourceQuota;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteResourceQuota {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteResourceQuota(RequestBuilder<crate::model::DeleteResourceQuotaRequest>);

    impl DeleteResourceQuota {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteResourceQuotaRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_resource_quota(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::DeleteResourceQuotaRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::DeleteResourceQuotaRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_type][crate::model::DeleteResourceQuotaRequest::resource_type].
        pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_type][crate::model::DeleteResourceQuotaRequest::resource_type].
        pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.resource_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteResourceQuota {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::create_default_resource_quota][crate::client::ResourceManager::create_default_resource_quota] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::CreateDefaultResourceQuota;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateDefaultResourceQuota {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateDefaultResourceQuota(
        RequestBuilder<crate::model::CreateDefaultResourceQuotaRequest>,
    );

    impl CreateDefaultResourceQuota {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDefaultResourceQuotaRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<serde_json::Value>> {
            (*self.0.stub)
                .create_default_resource_quota(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_type][crate::model::CreateDefaultResourceQuotaRequest::resource_type].
        pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_type][crate::model::CreateDefaultResourceQuotaRequest::resource_type].
        pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.resource_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDefaultResourceQuota {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::create_schema][crate::client::ResourceManager::create_schema] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::CreateSchema;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateSchema {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateSchema(RequestBuilder<crate::model::CreateSchemaRequest>);

    impl CreateSchema {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSchemaRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<serde_json::Value>> {
            (*self.0.stub)
                .create_schema(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_type][crate::model::CreateSchemaRequest::resource_type].
        pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_type][crate::model::CreateSchemaRequest::resource_type].
        pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.resource_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSchema {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::get_schema][crate::client::ResourceManager::get_schema] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::GetSchema;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetSchema {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSchema(RequestBuilder<crate::model::GetSchemaRequest>);

    impl GetSchema {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSchemaRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<serde_json::Value>> {
            (*self.0.stub)
                .get_schema(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_type][crate::model::GetSchemaRequest::resource_type].
        pub fn set_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_type][crate::model::GetSchemaRequest::resource_type].
        pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.resource_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSchema {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::list_quota_definitions][crate::client::ResourceManager::list_quota_definitions] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::ListQuotaDefinitions;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListQuotaDefinitions {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListQuotaDefinitions(RequestBuilder<crate::model::ListQuotaDefinitionsRequest>);

    impl ListQuotaDefinitions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListQuotaDefinitionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::QuotaDefinitionList>> {
            (*self.0.stub)
                .list_quota_definitions(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListQuotaDefinitions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::get_quota_definition][crate::client::ResourceManager::get_quota_definition] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::GetQuotaDefinition;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetQuotaDefinition {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetQuotaDefinition(RequestBuilder<crate::model::GetQuotaDefinitionRequest>);

    impl GetQuotaDefinition {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetQuotaDefinitionRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QuotaDefinition>> {
            (*self.0.stub)
                .get_quota_definition(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetQuotaDefinitionRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::GetQuotaDefinitionRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetQuotaDefinition {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::list_resource_groups][crate::client::ResourceManager::list_resource_groups] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::ListResourceGroups;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListResourceGroups {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListResourceGroups(RequestBuilder<crate::model::ListResourceGroupsRequest>);

    impl ListResourceGroups {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListResourceGroupsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ResourceGroupList>> {
            (*self.0.stub)
                .list_resource_groups(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::ListResourceGroupsRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::ListResourceGroupsRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [date][crate::model::ListResourceGroupsRequest::date].
        pub fn set_date<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.date = Some(v.into());
            self
        }

        /// Sets or clears the value of [date][crate::model::ListResourceGroupsRequest::date].
        pub fn set_or_clear_date<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.date = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListResourceGroups {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::create_resource_group][crate::client::ResourceManager::create_resource_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::CreateResourceGroup;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateResourceGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateResourceGroup(RequestBuilder<crate::model::CreateResourceGroupRequest>);

    impl CreateResourceGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateResourceGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ResCreateResourceGroup>> {
            (*self.0.stub)
                .create_resource_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::CreateResourceGroupRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateResourceGroupRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [account_id][crate::model::CreateResourceGroupRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::CreateResourceGroupRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateResourceGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::get_resource_group][crate::client::ResourceManager::get_resource_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::GetResourceGroup;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetResourceGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetResourceGroup(RequestBuilder<crate::model::GetResourceGroupRequest>);

    impl GetResourceGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetResourceGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ResourceGroup>> {
            (*self.0.stub)
                .get_resource_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetResourceGroupRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::GetResourceGroupRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetResourceGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::update_resource_group][crate::client::ResourceManager::update_resource_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::UpdateResourceGroup;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateResourceGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateResourceGroup(RequestBuilder<crate::model::UpdateResourceGroupRequest>);

    impl UpdateResourceGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateResourceGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ResourceGroup>> {
            (*self.0.stub)
                .update_resource_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::UpdateResourceGroupRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::UpdateResourceGroupRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::UpdateResourceGroupRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateResourceGroupRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [state][crate::model::UpdateResourceGroupRequest::state].
        pub fn set_state<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.state = Some(v.into());
            self
        }

        /// Sets or clears the value of [state][crate::model::UpdateResourceGroupRequest::state].
        pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.state = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateResourceGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ResourceManager::delete_resource_group][crate::client::ResourceManager::delete_resource_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_resource_manager_v2::builder;
    /// use builder::resource_manager::DeleteResourceGroup;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteResourceGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteResourceGroup(RequestBuilder<crate::model::DeleteResourceGroupRequest>);

    impl DeleteResourceGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ResourceManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteResourceGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_resource_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::DeleteResourceGroupRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::DeleteResourceGroupRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteResourceGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
