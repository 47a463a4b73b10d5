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

//! Defines helpers functions to run ReqwestClient integration tests.
//!
//! Setting up integration tests is a bit complicated. So we refactor that code
//! to some helper functions.

use auth::credentials::Credentials;
use axum::{
    extract::Query,
    http::{HeaderMap, Method, StatusCode, Uri},
};
use serde_json::json;
use std::collections::HashMap;
use tokio::task::JoinHandle;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The service name used to find credentials in the environment.
pub const SERVICE_NAME: &str = "echo_service";

/// The SDK headers sent by the integration tests.
pub const SDK_HEADER: gaxi::api_header::SdkHeader = gaxi::api_header::SdkHeader {
    service_name: SERVICE_NAME,
    service_version: "v1",
};

pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new()
        .route("/echo", axum::routing::any(echo))
        .route("/echo/{*rest}", axum::routing::any(echo))
        .route("/empty", axum::routing::any(empty))
        .route("/error", axum::routing::any(error))
        .route("/error/plain", axum::routing::any(plain_error));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        // A failing test server aborts the test that started it.
        if let Err(e) = axum::serve(listener, app).await {
            panic!("error running echo server: {e}");
        }
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

pub fn builder(
    endpoint: impl Into<String>,
) -> gax::client_builder::ClientBuilder<Factory, Credentials> {
    gax::client_builder::internal::new_builder(Factory(endpoint.into()))
}

pub struct Factory(String);
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = gaxi::http::ReqwestClient;
    type Credentials = Credentials;
    async fn build(
        self,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config, &self.0, SERVICE_NAME).await
    }
}

/// The error details returned by the `/error` route.
pub fn make_service_error() -> Result<gax::error::ServiceError> {
    let payload = bytes::Bytes::from_owner(make_error_value().to_string());
    let details = gax::error::ServiceError::try_from(&payload)?;
    Ok(details.set_code(StatusCode::BAD_REQUEST.as_u16()))
}

async fn echo(
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> (StatusCode, String) {
    let response = echo_impl(method, uri, query, headers, body).await;
    match response {
        Err(e) => internal_error(e),
        Ok(s) => (StatusCode::OK, s),
    }
}

async fn echo_impl(
    method: Method,
    uri: Uri,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<String> {
    if let Some(delay) = query
        .get("delay_ms")
        .map(|s| s.parse::<u64>())
        .transpose()?
        .map(tokio::time::Duration::from_millis)
    {
        tokio::time::sleep(delay).await;
    }
    let query = serde_json::Value::Object(
        query
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect(),
    );
    let headers = headers_to_json(headers)?;
    let body = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(v) => v,
        Err(_) if body.is_empty() => serde_json::Value::Null,
        Err(_) => serde_json::Value::String(String::from_utf8_lossy(&body).to_string()),
    };
    let object = json!({
        "method": method.as_str(),
        "path": uri.path(),
        "headers": headers,
        "query": query,
        "body": body,
    });
    let body = serde_json::to_string(&object)?;
    Ok(body)
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn error() -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, make_error_value().to_string())
}

async fn plain_error() -> (StatusCode, String) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "upstream connect error".to_string(),
    )
}

fn make_error_value() -> serde_json::Value {
    json!({
        "trace": "echo-trace-123",
        "errors": [{
            "code": "bad_request",
            "message": "this path always returns an error",
            "more_info": "https://cloud.ibm.com/docs",
        }],
    })
}

fn headers_to_json(headers: HeaderMap) -> Result<serde_json::Value> {
    let to_dyn = |e| -> Box<dyn std::error::Error + 'static> { Box::new(e) };
    let headers = headers
        .into_iter()
        .map(|(k, v)| {
            (
                k.map(|h| h.to_string()).unwrap_or("__status__".to_string()),
                v.to_str().map(|s| serde_json::Value::String(s.to_string())),
            )
        })
        .map(|(k, v)| v.map(|s| (k, s)))
        .map(|r| r.map_err(to_dyn))
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::Value::Object(headers.into_iter().collect()))
}

fn internal_error(e: Box<dyn std::error::Error>) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}"))
}
