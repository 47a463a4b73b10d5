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

/// A dyn-compatible, crate-private version of [super::CaseManagement].
#[async_trait::async_trait]
pub trait CaseManagement: std::fmt::Debug + Send + Sync {
    async fn get_cases(
        &self,
        req: crate::model::GetCasesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CaseList>>;

    async fn create_case(
        &self,
        req: crate::model::CreateCaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Case>>;

    async fn get_case(
        &self,
        req: crate::model::GetCaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Case>>;

    async fn update_case_status(
        &self,
        req: crate::model::UpdateCaseStatusRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Case>>;

    async fn add_comment(
        &self,
        req: crate::model::AddCommentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Comment>>;

    async fn add_watchlist(
        &self,
        req: crate::model::AddWatchlistRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WatchlistAddResponse>>;

    async fn remove_watchlist(
        &self,
        req: crate::model::RemoveWatchlistRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Watchlist>>;

    async fn add_resource(
        &self,
        req: crate::model::AddResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Resource>>;

    async fn upload_file(
        &self,
        req: crate::model::UploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Attachment>>;

    async fn download_file(
        &self,
        req: crate::model::DownloadFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<bytes::Bytes>>;

    async fn delete_file(
        &self,
        req: crate::model::DeleteFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AttachmentList>>;

    async fn get_eu_support(
        &self,
        req: crate::model::GetEuSupportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn get_technical_offerings(
        &self,
        req: crate::model::GetTechnicalOfferingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn get_resolution_codes(
        &self,
        req: crate::model::GetResolutionCodesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;

    async fn get_statuses(
        &self,
        req: crate::model::GetStatusesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>>;
}

/// All implementations of [super::CaseManagement] also implement [CaseManagement].
#[async_trait::async_trait]
impl<T: super::CaseManagement> CaseManagement for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_cases(
        &self,
        req: crate::model::GetCasesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CaseList>> {
        T::get_cases(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_case(
        &self,
        req: crate::model::CreateCaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Case>> {
        T::create_case(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_case(
        &self,
        req: crate::model::GetCaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Case>> {
        T::get_case(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_case_status(
        &self,
        req: crate::model::UpdateCaseStatusRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Case>> {
        T::update_case_status(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_comment(
        &self,
        req: crate::model::AddCommentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Comment>> {
        T::add_comment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_watchlist(
        &self,
        req: crate::model::AddWatchlistRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WatchlistAddResponse>> {
        T::add_watchlist(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_watchlist(
        &self,
        req: crate::model::RemoveWatchlistRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Watchlist>> {
        T::remove_watchlist(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_resource(
        &self,
        req: crate::model::AddResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Resource>> {
        T::add_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload_file(
        &self,
        req: crate::model::UploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Attachment>> {
        T::upload_file(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn download_file(
        &self,
        req: crate::model::DownloadFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<bytes::Bytes>> {
        T::download_file(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_file(
        &self,
        req: crate::model::DeleteFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AttachmentList>> {
        T::delete_file(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_eu_support(
        &self,
        req: crate::model::GetEuSupportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::get_eu_support(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_technical_offerings(
        &self,
        req: crate::model::GetTechnicalOfferingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::get_technical_offerings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_resolution_codes(
        &self,
        req: crate::model::GetResolutionCodesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::get_resolution_codes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_statuses(
        &self,
        req: crate::model::GetStatusesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<serde_json::Value>> {
        T::get_statuses(self, req, options).await
    }
}
