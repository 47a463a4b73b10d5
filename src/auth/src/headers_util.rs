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
use crate::errors;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

/// Creates the headers for a bearer token.
pub(crate) fn build_bearer_headers(token: &str) -> Result<HeaderMap> {
    build_authorization_headers(format!("Bearer {token}"))
}

/// Creates the headers for basic authentication.
pub(crate) fn build_basic_headers(username: &str, password: &str) -> Result<HeaderMap> {
    let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
    build_authorization_headers(format!("Basic {encoded}"))
}

fn build_authorization_headers(value: String) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&value).map_err(errors::non_retryable)?;
    value.set_sensitive(true);
    let mut header_map = HeaderMap::new();
    header_map.insert(AUTHORIZATION, value);
    Ok(header_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn bearer_headers() -> anyhow::Result<()> {
        let headers = build_bearer_headers("test-token")?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| anyhow::anyhow!("missing authorization in {headers:?}"))?;
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn basic_headers() -> anyhow::Result<()> {
        let headers = build_basic_headers("Aladdin", "open sesame")?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| anyhow::anyhow!("missing authorization in {headers:?}"))?;
        assert_eq!(
            value,
            HeaderValue::from_static("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==")
        );
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn invalid_header_value() {
        let got = build_bearer_headers("bad\ntoken");
        let err = got.err();
        assert!(
            matches!(&err, Some(e) if !e.is_transient() && e.source().is_some()),
            "{err:?}"
        );
    }
}
