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

//! Telemetry header helpers.

use http::{HeaderMap, HeaderName, HeaderValue};

/// The header used by IBM Cloud to track SDK usage per operation.
pub const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

/// The product name used in the `User-Agent` header.
pub const SDK_NAME: &str = "ibm-cloud-rust-sdk";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Generated libraries create one static instance of this struct per service.
///
/// The headers identify the SDK, the service, and the operation. They are
/// diagnostic only, the service does not need them to process a request.
#[derive(Debug, PartialEq)]
pub struct SdkHeader {
    pub service_name: &'static str,
    pub service_version: &'static str,
}

impl SdkHeader {
    /// Format the `User-Agent` header value.
    pub fn user_agent(&self) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(rustc_version);
        format!(
            "{SDK_NAME}/{} (lang=rust; rustc={rustc_version})",
            build_info::PKG_VERSION
        )
    }

    /// Format the `X-IBMCloud-SDK-Analytics` header value for `operation_id`.
    pub fn analytics_value(&self, operation_id: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation_id}",
            self.service_name, self.service_version
        )
    }

    /// Computes the SDK headers for `operation_id`.
    ///
    /// Values that cannot be represented as a header are skipped, the headers
    /// are not required for the request to succeed.
    pub fn headers(&self, operation_id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(v) = HeaderValue::from_str(&self.user_agent()) {
            headers.insert(http::header::USER_AGENT, v);
        }
        if let Ok(v) = HeaderValue::from_str(&self.analytics_value(operation_id)) {
            headers.insert(HeaderName::from_static(ANALYTICS_HEADER), v);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const HEADER: SdkHeader = SdkHeader {
        service_name: "iam_identity",
        service_version: "v1",
    };

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(';')
            .filter_map(|kv| kv.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn user_agent() {
        let got = HEADER.user_agent();
        let prefix = format!("{SDK_NAME}/{} (", build_info::PKG_VERSION);
        assert!(got.starts_with(&prefix), "{got}");
        assert!(got.ends_with(')'), "{got}");

        let inner = got
            .strip_prefix(&prefix)
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or_default();
        let fields = breakdown(inner);
        assert_eq!(fields.get("lang").map(String::as_str), Some("rust"));
        let rustc = fields.get("rustc").map(String::as_str).unwrap_or_default();
        assert!(
            !rustc.is_empty() && build_info::RUSTC_VERSION.contains(rustc),
            "mismatched rustc version {} and {rustc}",
            build_info::RUSTC_VERSION
        );
    }

    #[test]
    fn analytics() {
        let got = HEADER.analytics_value("getApiKey");
        assert_eq!(
            got,
            "service_name=iam_identity;service_version=v1;operation_id=getApiKey"
        );
    }

    #[test]
    fn headers() {
        let got = HEADER.headers("listApiKeys");
        assert_eq!(got.len(), 2, "{got:?}");
        let ua = got
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok());
        assert_eq!(ua, Some(HEADER.user_agent().as_str()));
        let analytics = got.get("X-IBMCloud-SDK-Analytics").and_then(|v| v.to_str().ok());
        assert_eq!(
            analytics,
            Some("service_name=iam_identity;service_version=v1;operation_id=listApiKeys")
        );
    }
}
