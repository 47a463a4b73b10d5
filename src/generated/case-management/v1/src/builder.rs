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

pub mod case_management {
    use crate::Result;

    /// A builder for [CaseManagement][crate::client::CaseManagement].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_case_management_v1::*;
    /// # use builder::case_management::ClientBuilder;
    /// # use client::CaseManagement;
    /// let builder : ClientBuilder = CaseManagement::builder();
    /// let client = builder
    ///     .with_endpoint("https://support-center.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::CaseManagement;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CaseManagement;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::CaseManagement] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [CaseManagement::get_cases][crate::client::CaseManagement::get_cases] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::GetCases;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetCases {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCases(RequestBuilder<crate::model::GetCasesRequest>);

    impl GetCases {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCasesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::CaseList>> {
            (*self.0.stub)
                .get_cases(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [offset][crate::model::GetCasesRequest::offset].
        pub fn set_offset<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
            self.0.request.offset = Some(v.into());
            self
        }

        /// Sets or clears the value of [offset][crate::model::GetCasesRequest::offset].
        pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.offset = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::GetCasesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::GetCasesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [search][crate::model::GetCasesRequest::search].
        pub fn set_search<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.search = Some(v.into());
            self
        }

        /// Sets or clears the value of [search][crate::model::GetCasesRequest::search].
        pub fn set_or_clear_search<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.search = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort][crate::model::GetCasesRequest::sort].
        pub fn set_sort<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.sort = Some(v.into());
            self
        }

        /// Sets or clears the value of [sort][crate::model::GetCasesRequest::sort].
        pub fn set_or_clear_sort<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.sort = v.map(|x| x.into());
            self
        }

        /// Sets the value of [status][crate::model::GetCasesRequest::status].
        pub fn set_status<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.status = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [fields][crate::model::GetCasesRequest::fields].
        pub fn set_fields<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.fields = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCases {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::create_case][crate::client::CaseManagement::create_case] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::CreateCase;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateCase {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateCase(RequestBuilder<crate::model::CreateCaseRequest>);

    impl CreateCase {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateCaseRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Case>> {
            (*self.0.stub)
                .create_case(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [type][crate::model::CreateCaseRequest::r#type].
        pub fn set_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.r#type = Some(v.into());
            self
        }

        /// Sets or clears the value of [type][crate::model::CreateCaseRequest::r#type].
        pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [subject][crate::model::CreateCaseRequest::subject].
        pub fn set_subject<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.subject = Some(v.into());
            self
        }

        /// Sets or clears the value of [subject][crate::model::CreateCaseRequest::subject].
        pub fn set_or_clear_subject<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.subject = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::CreateCaseRequest::description].
        pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.description = Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::CreateCaseRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [severity][crate::model::CreateCaseRequest::severity].
        pub fn set_severity<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
            self.0.request.severity = Some(v.into());
            self
        }

        /// Sets or clears the value of [severity][crate::model::CreateCaseRequest::severity].
        pub fn set_or_clear_severity<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.severity = v.map(|x| x.into());
            self
        }

        /// Sets the value of [eu][crate::model::CreateCaseRequest::eu].
        pub fn set_eu<T: std::convert::Into<crate::model::EuPayload>>(mut self, v: T) -> Self {
            self.0.request.eu = Some(v.into());
            self
        }

        /// Sets or clears the value of [eu][crate::model::CreateCaseRequest::eu].
        pub fn set_or_clear_eu<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::EuPayload>,
        {
            self.0.request.eu = v.map(|x| x.into());
            self
        }

        /// Sets the value of [offering][crate::model::CreateCaseRequest::offering].
        pub fn set_offering<T: std::convert::Into<crate::model::OfferingPayload>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.offering = Some(v.into());
            self
        }

        /// Sets or clears the value of [offering][crate::model::CreateCaseRequest::offering].
        pub fn set_or_clear_offering<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::OfferingPayload>,
        {
            self.0.request.offering = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resources][crate::model::CreateCaseRequest::resources].
        pub fn set_resources<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::ResourcePayload>,
        {
            self.0.request.resources = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [watchlist][crate::model::CreateCaseRequest::watchlist].
        pub fn set_watchlist<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::User>,
        {
            self.0.request.watchlist = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [invoice_number][crate::model::CreateCaseRequest::invoice_number].
        pub fn set_invoice_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.invoice_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [invoice_number][crate::model::CreateCaseRequest::invoice_number].
        pub fn set_or_clear_invoice_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.invoice_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sla_credit_request][crate::model::CreateCaseRequest::sla_credit_request].
        pub fn set_sla_credit_request<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.sla_credit_request = Some(v.into());
            self
        }

        /// Sets or clears the value of [sla_credit_request][crate::model::CreateCaseRequest::sla_credit_request].
        pub fn set_or_clear_sla_credit_request<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.sla_credit_request = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateCase {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::get_case][crate::client::CaseManagement::get_case] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::GetCase;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetCase {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCase(RequestBuilder<crate::model::GetCaseRequest>);

    impl GetCase {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCaseRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Case>> {
            (*self.0.stub)
                .get_case(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::GetCaseRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::GetCaseRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [fields][crate::model::GetCaseRequest::fields].
        pub fn set_fields<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            self.0.request.fields = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCase {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::update_case_status][crate::client::CaseManagement::update_case_status] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::UpdateCaseStatus;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateCaseStatus {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateCaseStatus(RequestBuilder<crate::model::UpdateCaseStatusRequest>);

    impl UpdateCaseStatus {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateCaseStatusRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Case>> {
            (*self.0.stub)
                .update_case_status(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::UpdateCaseStatusRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::UpdateCaseStatusRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [action][crate::model::UpdateCaseStatusRequest::action].
        pub fn set_action<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.action = Some(v.into());
            self
        }

        /// Sets or clears the value of [action][crate::model::UpdateCaseStatusRequest::action].
        pub fn set_or_clear_action<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.action = v.map(|x| x.into());
            self
        }

        /// Sets the value of [comment][crate::model::UpdateCaseStatusRequest::comment].
        pub fn set_comment<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.comment = Some(v.into());
            self
        }

        /// Sets or clears the value of [comment][crate::model::UpdateCaseStatusRequest::comment].
        pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.comment = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resolution_code][crate::model::UpdateCaseStatusRequest::resolution_code].
        pub fn set_resolution_code<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
            self.0.request.resolution_code = Some(v.into());
            self
        }

        /// Sets or clears the value of [resolution_code][crate::model::UpdateCaseStatusRequest::resolution_code].
        pub fn set_or_clear_resolution_code<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.resolution_code = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateCaseStatus {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::add_comment][crate::client::CaseManagement::add_comment] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::AddComment;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddComment {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddComment(RequestBuilder<crate::model::AddCommentRequest>);

    impl AddComment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddCommentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Comment>> {
            (*self.0.stub)
                .add_comment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::AddCommentRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::AddCommentRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [comment][crate::model::AddCommentRequest::comment].
        pub fn set_comment<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.comment = Some(v.into());
            self
        }

        /// Sets or clears the value of [comment][crate::model::AddCommentRequest::comment].
        pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.comment = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddComment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::add_watchlist][crate::client::CaseManagement::add_watchlist] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::AddWatchlist;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddWatchlist {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddWatchlist(RequestBuilder<crate::model::AddWatchlistRequest>);

    impl AddWatchlist {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddWatchlistRequest>>(mut self, v: V) -> Self {
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
        ) -> Result<gax::response::Response<crate::model::WatchlistAddResponse>> {
            (*self.0.stub)
                .add_watchlist(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::AddWatchlistRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::AddWatchlistRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [watchlist][crate::model::AddWatchlistRequest::watchlist].
        pub fn set_watchlist<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::UserIdAndRealm>,
        {
            self.0.request.watchlist = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddWatchlist {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::remove_watchlist][crate::client::CaseManagement::remove_watchlist] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::RemoveWatchlist;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RemoveWatchlist {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct RemoveWatchlist(RequestBuilder<crate::model::RemoveWatchlistRequest>);

    impl RemoveWatchlist {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveWatchlistRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Watchlist>> {
            (*self.0.stub)
                .remove_watchlist(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::RemoveWatchlistRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::RemoveWatchlistRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [watchlist][crate::model::RemoveWatchlistRequest::watchlist].
        pub fn set_watchlist<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::UserIdAndRealm>,
        {
            self.0.request.watchlist = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveWatchlist {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::add_resource][crate::client::CaseManagement::add_resource] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::AddResource;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddResource {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddResource(RequestBuilder<crate::model::AddResourceRequest>);

    impl AddResource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddResourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Resource>> {
            (*self.0.stub)
                .add_resource(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::AddResourceRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::AddResourceRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [crn][crate::model::AddResourceRequest::crn].
        pub fn set_crn<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.crn = Some(v.into());
            self
        }

        /// Sets or clears the value of [crn][crate::model::AddResourceRequest::crn].
        pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.crn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::AddResourceRequest::name].
        pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::AddResourceRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [type][crate::model::AddResourceRequest::r#type].
        pub fn set_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.r#type = Some(v.into());
            self
        }

        /// Sets or clears the value of [type][crate::model::AddResourceRequest::r#type].
        pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [id][crate::model::AddResourceRequest::id].
        pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets or clears the value of [id][crate::model::AddResourceRequest::id].
        pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [note][crate::model::AddResourceRequest::note].
        pub fn set_note<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.note = Some(v.into());
            self
        }

        /// Sets or clears the value of [note][crate::model::AddResourceRequest::note].
        pub fn set_or_clear_note<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.note = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddResource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::upload_file][crate::client::CaseManagement::upload_file] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::UploadFile;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UploadFile {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UploadFile(RequestBuilder<crate::model::UploadFileRequest>);

    impl UploadFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Attachment>> {
            (*self.0.stub)
                .upload_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::UploadFileRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::UploadFileRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [file][crate::model::UploadFileRequest::file].
        pub fn set_file<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.file = Some(v.into());
            self
        }

        /// Sets or clears the value of [file][crate::model::UploadFileRequest::file].
        pub fn set_or_clear_file<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.file = v.map(|x| x.into());
            self
        }

        /// Sets the value of [file_content_type][crate::model::UploadFileRequest::file_content_type].
        pub fn set_file_content_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.file_content_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [file_content_type][crate::model::UploadFileRequest::file_content_type].
        pub fn set_or_clear_file_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.file_content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [filename][crate::model::UploadFileRequest::filename].
        pub fn set_filename<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.filename = Some(v.into());
            self
        }

        /// Sets or clears the value of [filename][crate::model::UploadFileRequest::filename].
        pub fn set_or_clear_filename<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.filename = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::download_file][crate::client::CaseManagement::download_file] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::DownloadFile;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DownloadFile {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DownloadFile(RequestBuilder<crate::model::DownloadFileRequest>);

    impl DownloadFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DownloadFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<bytes::Bytes>> {
            (*self.0.stub)
                .download_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::DownloadFileRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::DownloadFileRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [file_id][crate::model::DownloadFileRequest::file_id].
        pub fn set_file_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.file_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [file_id][crate::model::DownloadFileRequest::file_id].
        pub fn set_or_clear_file_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.file_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DownloadFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::delete_file][crate::client::CaseManagement::delete_file] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::DeleteFile;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteFile {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteFile(RequestBuilder<crate::model::DeleteFileRequest>);

    impl DeleteFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::AttachmentList>> {
            (*self.0.stub)
                .delete_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [case_number][crate::model::DeleteFileRequest::case_number].
        pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.case_number = Some(v.into());
            self
        }

        /// Sets or clears the value of [case_number][crate::model::DeleteFileRequest::case_number].
        pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.case_number = v.map(|x| x.into());
            self
        }

        /// Sets the value of [file_id][crate::model::DeleteFileRequest::file_id].
        pub fn set_file_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.file_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [file_id][crate::model::DeleteFileRequest::file_id].
        pub fn set_or_clear_file_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.file_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::get_eu_support][crate::client::CaseManagement::get_eu_support] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::GetEuSupport;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEuSupport {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetEuSupport(RequestBuilder<crate::model::GetEuSupportRequest>);

    impl GetEuSupport {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetEuSupportRequest>>(mut self, v: V) -> Self {
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
                .get_eu_support(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetEuSupport {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::get_technical_offerings][crate::client::CaseManagement::get_technical_offerings] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::GetTechnicalOfferings;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetTechnicalOfferings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTechnicalOfferings(RequestBuilder<crate::model::GetTechnicalOfferingsRequest>);

    impl GetTechnicalOfferings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTechnicalOfferingsRequest>>(
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
                .get_technical_offerings(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTechnicalOfferings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::get_resolution_codes][crate::client::CaseManagement::get_resolution_codes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::GetResolutionCodes;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetResolutionCodes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetResolutionCodes(RequestBuilder<crate::model::GetResolutionCodesRequest>);

    impl GetResolutionCodes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetResolutionCodesRequest>>(
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
                .get_resolution_codes(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetResolutionCodes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CaseManagement::get_statuses][crate::client::CaseManagement::get_statuses] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_case_management_v1::builder;
    /// use builder::case_management::GetStatuses;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetStatuses {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetStatuses(RequestBuilder<crate::model::GetStatusesRequest>);

    impl GetStatuses {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CaseManagement>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetStatusesRequest>>(mut self, v: V) -> Self {
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
                .get_statuses(self.0.request, self.0.options)
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetStatuses {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
