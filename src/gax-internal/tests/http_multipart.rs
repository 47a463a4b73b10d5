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

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::RequestOptions;
    use http::Method;
    use ibm_cloud_gax_internal::request::{FieldMapping, FilePart, OperationDescriptor, Parameters};
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const UPLOAD: OperationDescriptor =
        OperationDescriptor::new("uploadEcho", Method::PUT, "/echo/{id}/attachments")
            .with_required(&["id", "file"])
            .with_path_params(&[FieldMapping::new("id", "id")])
            .with_form(&[FieldMapping::new("file", "file")])
            .with_accept("application/json")
            .with_content_type("multipart/form-data");

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn multipart_body() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;

        let file = FilePart {
            data: bytes::Bytes::from_static(b"the quick brown fox"),
            content_type: Some("text/plain".to_string()),
            filename: Some("fox.txt".to_string()),
        };
        let params = Parameters::new(json!({"id": "CS1234"}))?.with_file("file", Some(file));
        let options = RequestOptions::default();
        let request = client.prepare(&UPLOAD, params, &echo_server::SDK_HEADER, &options)?;
        let response = client
            .execute::<serde_json::Value>(request, &options)
            .await?
            .into_body();

        assert_eq!(response.get("path"), Some(&json!("/echo/CS1234/attachments")));
        let content_type = response
            .get("headers")
            .and_then(|h| h.get("content-type"))
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        assert!(
            content_type.starts_with("multipart/form-data; boundary="),
            "{content_type}"
        );
        let body = response
            .get("body")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        assert!(body.contains("the quick brown fox"), "{body}");
        assert!(body.contains(r#"name="file""#), "{body}");
        assert!(body.contains(r#"filename="fox.txt""#), "{body}");
        assert!(body.contains("text/plain"), "{body}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_file() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;

        let params = Parameters::new(json!({"id": "CS1234"}))?.with_file("file", None);
        let err = client
            .prepare(
                &UPLOAD,
                params,
                &echo_server::SDK_HEADER,
                &RequestOptions::default(),
            )
            .unwrap_err();
        assert_eq!(
            err.missing_parameters_names(),
            Some(["file".to_string()].as_slice())
        );
        Ok(())
    }
}
