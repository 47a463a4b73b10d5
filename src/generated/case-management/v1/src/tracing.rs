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

/// Implements a [CaseManagement](super::stub::CaseManagement) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CaseManagement<T>
where
    T: super::stub::CaseManagement + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> CaseManagement<T>
where
    T: super::stub::CaseManagement + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::CaseManagement for CaseManagement<T>
where
    T: super::stub::CaseManagement + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_cases(
        &self,
        req: crate::model::GetCasesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CaseList>> {
        self.inner.get_cases(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_case(
        &self,
        req: crate::model::CreateCaseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Case>> {
        self.inner.create_case(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_case(
        &self,
        req: crate::model::GetCaseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Case>> {
        self.inner.get_case(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_case_status(
        &self,
        req: crate::model::UpdateCaseStatusRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Case>> {
        self.inner.update_case_status(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_comment(
        &self,
        req: crate::model::AddCommentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Comment>> {
        self.inner.add_comment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_watchlist(
        &self,
        req: crate::model::AddWatchlistRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WatchlistAddResponse>> {
        self.inner.add_watchlist(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_watchlist(
        &self,
        req: crate::model::RemoveWatchlistRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Watchlist>> {
        self.inner.remove_watchlist(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_resource(
        &self,
        req: crate::model::AddResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Resource>> {
        self.inner.add_resource(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upload_file(
        &self,
        req: crate::model::UploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Attachment>> {
        self.inner.upload_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn download_file(
        &self,
        req: crate::model::DownloadFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<bytes::Bytes>> {
        self.inner.download_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_file(
        &self,
        req: crate::model::DeleteFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AttachmentList>> {
        self.inner.delete_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_eu_support(
        &self,
        req: crate::model::GetEuSupportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.get_eu_support(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_technical_offerings(
        &self,
        req: crate::model::GetTechnicalOfferingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.get_technical_offerings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_resolution_codes(
        &self,
        req: crate::model::GetResolutionCodesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.get_resolution_codes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_statuses(
        &self,
        req: crate::model::GetStatusesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<serde_json::Value>> {
        self.inner.get_statuses(req, options).await
    }
}
