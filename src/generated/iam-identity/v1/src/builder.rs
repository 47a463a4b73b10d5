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

pub mod iam_identity {
    use crate::Result;

    /// A builder for [IamIdentity][crate::client::IamIdentity].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_iam_identity_v1::*;
    /// # use builder::iam_identity::ClientBuilder;
    /// # use client::IamIdentity;
    /// let builder : ClientBuilder = IamIdentity::builder();
    /// let client = builder
    ///     .with_endpoint("https://iam.test.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::IamIdentity;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = IamIdentity;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::IamIdentity] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [IamIdentity::list_api_keys][crate::client::IamIdentity::list_api_keys] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::ListApiKeys;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListApiKeys {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListApiKeys(RequestBuilder<crate::model::ListApiKeysRequest>);

    impl ListApiKeys {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListApiKeysRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<crate::model::ListApiKeysResponse>> {
            (*self.0.stub)
                .list_api_keys(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::ListApiKeysRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::ListApiKeysRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [iam_id][crate::model::ListApiKeysRequest::iam_id].
        pub fn set_iam_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [iam_id][crate::model::ListApiKeysRequest::iam_id].
        pub fn set_or_clear_iam_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.iam_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pagesize][crate::model::ListApiKeysRequest::pagesize].
        pub fn set_pagesize<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.pagesize = Some(v.into());
            self
        }

        /// Sets or clears the value of [pagesize][crate::model::ListApiKeysRequest::pagesize].
        pub fn set_or_clear_pagesize<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.pagesize = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pagetoken][crate::model::ListApiKeysRequest::pagetoken].
        pub fn set_pagetoken<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.pagetoken = Some(v.into());
            self
        }

        /// Sets or clears the value of [pagetoken][crate::model::ListApiKeysRequest::pagetoken].
        pub fn set_or_clear_pagetoken<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.pagetoken = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListApiKeys {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::create_api_key][crate::client::IamIdentity::create_api_key] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::CreateApiKey;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateApiKey {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateApiKey(RequestBuilder<crate::model::CreateApiKeyRequest>);

    impl CreateApiKey {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateApiKeyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
            (*self.0.stub)
                .create_api_key(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::CreateApiKeyRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateApiKeyRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [iam_id][crate::model::CreateApiKeyRequest::iam_id].
        pub fn set_iam_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [iam_id][crate::model::CreateApiKeyRequest::iam_id].
        pub fn set_or_clear_iam_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.iam_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::CreateApiKeyRequest::description].
        pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.description = Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::CreateApiKeyRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [account_id][crate::model::CreateApiKeyRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::CreateApiKeyRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [apikey][crate::model::CreateApiKeyRequest::apikey].
        pub fn set_apikey<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.apikey = Some(v.into());
            self
        }

        /// Sets or clears the value of [apikey][crate::model::CreateApiKeyRequest::apikey].
        pub fn set_or_clear_apikey<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.apikey = v.map(|x| x.into());
            self
        }

        /// Sets the value of [entity_lock][crate::model::CreateApiKeyRequest::entity_lock].
        pub fn set_entity_lock<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.entity_lock = Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_lock][crate::model::CreateApiKeyRequest::entity_lock].
        pub fn set_or_clear_entity_lock<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.entity_lock = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::get_api_key_details][crate::client::IamIdentity::get_api_key_details] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::GetApiKeyDetails;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetApiKeyDetails {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetApiKeyDetails(RequestBuilder<crate::model::GetApiKeyDetailsRequest>);

    impl GetApiKeyDetails {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetApiKeyDetailsRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
            (*self.0.stub)
                .get_api_key_details(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [iam_api_key][crate::model::GetApiKeyDetailsRequest::iam_api_key].
        pub fn set_iam_api_key<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_api_key = Some(v.into());
            self
        }

        /// Sets or clears the value of [iam_api_key][crate::model::GetApiKeyDetailsRequest::iam_api_key].
        pub fn set_or_clear_iam_api_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.iam_api_key = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetApiKeyDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::get_api_key][crate::client::IamIdentity::get_api_key] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::GetApiKey;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetApiKey {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetApiKey(RequestBuilder<crate::model::GetApiKeyRequest>);

    impl GetApiKey {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetApiKeyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
            (*self.0.stub)
                .get_api_key(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetApiKeyRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::GetApiKeyRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::update_api_key][crate::client::IamIdentity::update_api_key] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::UpdateApiKey;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateApiKey {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateApiKey(RequestBuilder<crate::model::UpdateApiKeyRequest>);

    impl UpdateApiKey {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateApiKeyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ApiKeyDetails>> {
            (*self.0.stub)
                .update_api_key(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::UpdateApiKeyRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::UpdateApiKeyRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateApiKeyRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateApiKeyRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::UpdateApiKeyRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateApiKeyRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::UpdateApiKeyRequest::description].
        pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.description = Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::UpdateApiKeyRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::delete_api_key][crate::client::IamIdentity::delete_api_key] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::DeleteApiKey;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteApiKey {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteApiKey(RequestBuilder<crate::model::DeleteApiKeyRequest>);

    impl DeleteApiKey {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteApiKeyRequest>>(mut self, v: V) -> Self {
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
                .delete_api_key(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::DeleteApiKeyRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::DeleteApiKeyRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::lock_api_key][crate::client::IamIdentity::lock_api_key] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::LockApiKey;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> LockApiKey {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct LockApiKey(RequestBuilder<crate::model::LockApiKeyRequest>);

    impl LockApiKey {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::LockApiKeyRequest>>(mut self, v: V) -> Self {
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
                .lock_api_key(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::LockApiKeyRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::LockApiKeyRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for LockApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::unlock_api_key][crate::client::IamIdentity::unlock_api_key] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::UnlockApiKey;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UnlockApiKey {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UnlockApiKey(RequestBuilder<crate::model::UnlockApiKeyRequest>);

    impl UnlockApiKey {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UnlockApiKeyRequest>>(mut self, v: V) -> Self {
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
                .unlock_api_key(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::UnlockApiKeyRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::UnlockApiKeyRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UnlockApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::list_service_ids][crate::client::IamIdentity::list_service_ids] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::ListServiceIds;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListServiceIds {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListServiceIds(RequestBuilder<crate::model::ListServiceIdsRequest>);

    impl ListServiceIds {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListServiceIdsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ServiceIdsList>> {
            (*self.0.stub)
                .list_service_ids(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::ListServiceIdsRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::ListServiceIdsRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::ListServiceIdsRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListServiceIdsRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pagesize][crate::model::ListServiceIdsRequest::pagesize].
        pub fn set_pagesize<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.pagesize = Some(v.into());
            self
        }

        /// Sets or clears the value of [pagesize][crate::model::ListServiceIdsRequest::pagesize].
        pub fn set_or_clear_pagesize<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.pagesize = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pagetoken][crate::model::ListServiceIdsRequest::pagetoken].
        pub fn set_pagetoken<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.pagetoken = Some(v.into());
            self
        }

        /// Sets or clears the value of [pagetoken][crate::model::ListServiceIdsRequest::pagetoken].
        pub fn set_or_clear_pagetoken<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.pagetoken = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort][crate::model::ListServiceIdsRequest::sort].
        pub fn set_sort<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.sort = Some(v.into());
            self
        }

        /// Sets or clears the value of [sort][crate::model::ListServiceIdsRequest::sort].
        pub fn set_or_clear_sort<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.sort = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order][crate::model::ListServiceIdsRequest::order].
        pub fn set_order<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.order = Some(v.into());
            self
        }

        /// Sets or clears the value of [order][crate::model::ListServiceIdsRequest::order].
        pub fn set_or_clear_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.order = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServiceIds {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::create_service_id][crate::client::IamIdentity::create_service_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::CreateServiceId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateServiceId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateServiceId(RequestBuilder<crate::model::CreateServiceIdRequest>);

    impl CreateServiceId {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateServiceIdRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
            (*self.0.stub)
                .create_service_id(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::CreateServiceIdRequest::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [account_id][crate::model::CreateServiceIdRequest::account_id].
        pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::CreateServiceIdRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateServiceIdRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::CreateServiceIdRequest::description].
        pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.description = Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::CreateServiceIdRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [unique_instance_crns][crate::model::CreateServiceIdRequest::unique_instance_crns].
        pub fn set_unique_instance_crns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.unique_instance_crns = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [apikey][crate::model::CreateServiceIdRequest::apikey].
        pub fn set_apikey<T: std::convert::Into<crate::model::ApiKeyInsideCreateServiceIdRequest>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.apikey = Some(v.into());
            self
        }

        /// Sets or clears the value of [apikey][crate::model::CreateServiceIdRequest::apikey].
        pub fn set_or_clear_apikey<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ApiKeyInsideCreateServiceIdRequest>,
        {
            self.0.request.apikey = v.map(|x| x.into());
            self
        }

        /// Sets the value of [entity_lock][crate::model::CreateServiceIdRequest::entity_lock].
        pub fn set_entity_lock<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.entity_lock = Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_lock][crate::model::CreateServiceIdRequest::entity_lock].
        pub fn set_or_clear_entity_lock<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.entity_lock = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::get_service_id][crate::client::IamIdentity::get_service_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::GetServiceId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetServiceId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetServiceId(RequestBuilder<crate::model::GetServiceIdRequest>);

    impl GetServiceId {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetServiceIdRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
            (*self.0.stub)
                .get_service_id(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetServiceIdRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::GetServiceIdRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::update_service_id][crate::client::IamIdentity::update_service_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::UpdateServiceId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateServiceId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateServiceId(RequestBuilder<crate::model::UpdateServiceIdRequest>);

    impl UpdateServiceId {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateServiceIdRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
            (*self.0.stub)
                .update_service_id(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::UpdateServiceIdRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::UpdateServiceIdRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateServiceIdRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateServiceIdRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::UpdateServiceIdRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateServiceIdRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::UpdateServiceIdRequest::description].
        pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.description = Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::UpdateServiceIdRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [unique_instance_crns][crate::model::UpdateServiceIdRequest::unique_instance_crns].
        pub fn set_unique_instance_crns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.unique_instance_crns = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::delete_service_id][crate::client::IamIdentity::delete_service_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::DeleteServiceId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteServiceId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteServiceId(RequestBuilder<crate::model::DeleteServiceIdRequest>);

    impl DeleteServiceId {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteServiceIdRequest>>(mut self, v: V) -> Self {
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
                .delete_service_id(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::DeleteServiceIdRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::DeleteServiceIdRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::lock_service_id][crate::client::IamIdentity::lock_service_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::LockServiceId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> LockServiceId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct LockServiceId(RequestBuilder<crate::model::LockServiceIdRequest>);

    impl LockServiceId {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::LockServiceIdRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
            (*self.0.stub)
                .lock_service_id(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::LockServiceIdRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::LockServiceIdRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for LockServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::unlock_service_id][crate::client::IamIdentity::unlock_service_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::UnlockServiceId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UnlockServiceId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UnlockServiceId(RequestBuilder<crate::model::UnlockServiceIdRequest>);

    impl UnlockServiceId {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::IamIdentity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UnlockServiceIdRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ServiceIdDetails>> {
            (*self.0.stub)
                .unlock_service_id(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::UnlockServiceIdRequest::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::UnlockServiceIdRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UnlockServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
