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


#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use gax::response::{Parts, Response};
    use ibm_cloud_case_management_v1::client::CaseManagement;
    use ibm_cloud_case_management_v1::model::*;

    mockall::mock! {
        #[derive(Debug)]
        CaseManagement {}
        impl ibm_cloud_case_management_v1::stub::CaseManagement for CaseManagement {
            async fn download_file(&self, req: DownloadFileRequest, options: RequestOptions) -> gax::Result<Response<bytes::Bytes>>;
        }
    }

    static_assertions::assert_impl_all!(CaseManagement: Clone, std::fmt::Debug, Send, Sync);

    #[tokio::test]
    async fn from_stub() -> anyhow::Result<()> {
        let mut mock = MockCaseManagement::new();
        mock.expect_download_file()
            .withf(|req, _| {
                req.case_number.as_deref() == Some("TS001234")
                    && req.file_id.as_deref() == Some("attachment-1")
            })
            .times(1)
            .returning(|_, _| {
                Ok(Response::from_parts(
                    Parts::new(),
                    bytes::Bytes::from_static(b"contents"),
                ))
            });

        let client = CaseManagement::from_stub(mock);
        let response = client
            .download_file()
            .set_case_number("TS001234")
            .set_file_id("attachment-1")
            .send()
            .await?;
        assert_eq!(response.body().as_ref(), b"contents");
        Ok(())
    }
}
