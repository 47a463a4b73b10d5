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

use crate::api_header::SdkHeader;
use crate::request::{
    Body, HeaderLayers, OperationDescriptor, Parameters, RequestDescriptor, build,
};
use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceError};
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::HeaderValue;
use http::header::{CONTENT_TYPE, USER_AGENT};

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    default_headers: http::HeaderMap,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
        default_service_name: &str,
    ) -> gax::client_builder::Result<Self> {
        let cred = crate::options::resolve_credentials(&config, default_service_name)?;
        let endpoint = crate::options::resolve_endpoint(&config, default_endpoint);
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
            default_headers: config.default_headers,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validates `params` and builds the request for `op`.
    ///
    /// This runs before any I/O, a missing required parameter fails the call
    /// without contacting the service.
    pub fn prepare(
        &self,
        op: &OperationDescriptor,
        params: Parameters,
        sdk: &SdkHeader,
        options: &RequestOptions,
    ) -> Result<RequestDescriptor> {
        params.validate(op.required)?;
        let mut sdk_headers = sdk.headers(op.id);
        if let Some(prefix) = options.user_agent() {
            let value = format!("{prefix} {}", sdk.user_agent());
            sdk_headers.insert(
                USER_AGENT,
                HeaderValue::try_from(value).map_err(Error::ser)?,
            );
        }
        let layers = HeaderLayers {
            default: Some(&self.default_headers),
            sdk: sdk_headers,
        };
        build(op, params.with_headers(options.headers().clone()), layers)
    }

    /// Sends `request` and parses the response body as JSON.
    ///
    /// An empty body, as in `204 No Content`, returns `O::default()`.
    pub async fn execute<O: serde::de::DeserializeOwned + Default>(
        &self,
        request: RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<Response<O>> {
        let response = self.request_attempt(request, options).await?;
        self::to_http_response(response).await
    }

    /// Sends `request` and returns the response body unparsed.
    pub async fn execute_bytes(
        &self,
        request: RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<Response<bytes::Bytes>> {
        let response = self.request_attempt(request, options).await?;
        let (parts, body) = self::collect(response).await?;
        Ok(Response::from_parts(parts, body))
    }

    async fn request_attempt(
        &self,
        request: RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<reqwest::Response> {
        let RequestDescriptor {
            operation_id,
            method,
            path,
            query,
            body,
            mut headers,
        } = request;
        tracing::debug!(%method, %path, operation_id, "sending request");

        let mut builder = self
            .inner
            .request(method, format!("{}{path}", &self.endpoint));
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        builder = match body {
            Body::Empty => builder,
            Body::Json(fields) => builder.json(&fields),
            Body::Multipart(parts) => {
                // reqwest sets the content type, including the boundary.
                if headers
                    .get(CONTENT_TYPE)
                    .is_some_and(|v| v.as_bytes() == MULTIPART_FORM_DATA.as_bytes())
                {
                    headers.remove(CONTENT_TYPE);
                }
                builder.multipart(self::to_form(parts)?)
            }
        };
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }

        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        for (name, value) in auth_headers.iter() {
            headers.insert(name, value.clone());
        }
        builder = builder.headers(headers);

        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        Ok(response)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

fn to_form(parts: Vec<crate::request::FormPart>) -> Result<reqwest::multipart::Form> {
    parts.into_iter().try_fold(reqwest::multipart::Form::new(), |form, p| {
        let mut part = reqwest::multipart::Part::bytes(p.file.data.to_vec());
        if let Some(filename) = p.file.filename {
            part = part.file_name(filename);
        }
        if let Some(content_type) = p.file.content_type {
            part = part.mime_str(&content_type).map_err(Error::ser)?;
        }
        Ok(form.part(p.name, part))
    })
}

async fn collect(response: reqwest::Response) -> Result<(Parts, bytes::Bytes)> {
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();
    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    let parts = Parts::new()
        .set_status(parts.status)
        .set_headers(parts.headers);
    Ok((parts, body))
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match ServiceError::try_from(&body) {
        Ok(details) => {
            let details = if details.code() == 0 {
                details.set_code(status_code)
            } else {
                details
            };
            Error::service_with_http_metadata(details, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let (parts, content) = self::collect(response).await?;
    // Some operations, e.g. `204 No Content` responses, have an empty body.
    let body = if content.is_empty() {
        O::default()
    } else {
        serde_json::from_slice::<O>(&content).map_err(Error::deser)?
    };
    Ok(Response::from_parts(parts, body))
}
