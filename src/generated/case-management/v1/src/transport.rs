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
use crate::operations;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::request::Parameters;

mod info {
    pub(crate) const SDK_HEADER: gaxi::api_header::SdkHeader = gaxi::api_header::SdkHeader {
        service_name: crate::DEFAULT_SERVICE_NAME,
        service_version: "v1",
    };
}

/// Implements [CaseManagement](super::stub::CaseManagement) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct CaseManagement {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for CaseManagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("CaseManagement")
            .field("inner", &self.inner)
            .finish()
    }
}

impl CaseManagement {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(
            config,
            crate::DEFAULT_SERVICE_URL,
            crate::DEFAULT_SERVICE_NAME,
        )
        .await?;
        Ok(Self { inner })
    }
}

impl super::stub::CaseManagement for CaseManagement {
    async fn get_cases(
        &self,
        req: crate::model::GetCasesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::CaseList>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_CASES,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn create_case(
        &self,
        req: crate::model::CreateCaseRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Case>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::CREATE_CASE,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_case(
        &self,
        req: crate::model::GetCaseRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Case>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_CASE,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn update_case_status(
        &self,
        req: crate::model::UpdateCaseStatusRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Case>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::UPDATE_CASE_STATUS,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn add_comment(
        &self,
        req: crate::model::AddCommentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Comment>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::ADD_COMMENT,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn add_watchlist(
        &self,
        req: crate::model::AddWatchlistRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::WatchlistAddResponse>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::ADD_WATCHLIST,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn remove_watchlist(
        &self,
        req: crate::model::RemoveWatchlistRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Watchlist>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::REMOVE_WATCHLIST,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn add_resource(
        &self,
        req: crate::model::AddResourceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Resource>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::ADD_RESOURCE,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn upload_file(
        &self,
        mut req: crate::model::UploadFileRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Attachment>> {
        let file = req.file.take().map(|data| gaxi::request::FilePart {
            data,
            content_type: req.file_content_type.take(),
            filename: req.filename.take(),
        });
        let params = Parameters::new(req)?.with_file("file", file);
        let request = self.inner.prepare(
            &operations::UPLOAD_FILE,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn download_file(
        &self,
        req: crate::model::DownloadFileRequest,
        options: RequestOptions,
    ) -> Result<Response<bytes::Bytes>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::DOWNLOAD_FILE,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute_bytes(request, &options).await
    }

    async fn delete_file(
        &self,
        req: crate::model::DeleteFileRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::AttachmentList>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::DELETE_FILE,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_eu_support(
        &self,
        req: crate::model::GetEuSupportRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_EU_SUPPORT,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_technical_offerings(
        &self,
        req: crate::model::GetTechnicalOfferingsRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_TECHNICAL_OFFERINGS,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_resolution_codes(
        &self,
        req: crate::model::GetResolutionCodesRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_RESOLUTION_CODES,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }

    async fn get_statuses(
        &self,
        req: crate::model::GetStatusesRequest,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let params = Parameters::new(req)?;
        let request = self.inner.prepare(
            &operations::GET_STATUSES,
            params,
            &info::SDK_HEADER,
            &options,
        )?;
        self.inner.execute(request, &options).await
    }
}
