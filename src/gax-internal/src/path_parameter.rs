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

//! Substitution of path parameters.
//!
//! Operation paths are templates such as `/v1/apikeys/{id}`. Each placeholder
//! names a wire parameter, and the operation maps the wire name to a request
//! field. The required parameter checks run first, so an unresolved
//! placeholder indicates a mistake in the operation tables.

use crate::request::FieldMapping;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::{Map, Value};

// From RFC 3986 a path segment may contain `pchar`, everything else is
// escaped. Notably `/`, `?` and `#` are escaped.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the path placeholder {placeholder} in {template} has no value")]
    Unresolved {
        template: &'static str,
        placeholder: String,
    },
    #[error("the path placeholder {placeholder} in {template} is not closed")]
    Unterminated {
        template: &'static str,
        placeholder: String,
    },
}

/// Expands the placeholders in `template` using the values in `params`.
///
/// # Example
/// ```
/// # use ibm_cloud_gax_internal::path_parameter::expand;
/// # use ibm_cloud_gax_internal::request::FieldMapping;
/// let params = serde_json::json!({"caseNumber": "CS 123/4"});
/// let path = expand(
///     "/cases/{case_number}/status",
///     &[FieldMapping::new("case_number", "caseNumber")],
///     params.as_object(),
/// )?;
/// assert_eq!(path, "/cases/CS%20123%2F4/status");
/// # gax::Result::<()>::Ok(())
/// ```
pub fn expand(
    template: &'static str,
    mappings: &[FieldMapping],
    params: Option<&Map<String, Value>>,
) -> gax::Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let end = tail.find('}').ok_or_else(|| {
            gax::error::Error::binding(Error::Unterminated {
                template,
                placeholder: tail.to_string(),
            })
        })?;
        let placeholder = &tail[..end];
        let value = lookup(placeholder, mappings, params).ok_or_else(|| {
            gax::error::Error::binding(Error::Unresolved {
                template,
                placeholder: placeholder.to_string(),
            })
        })?;
        path.extend(utf8_percent_encode(&value, SEGMENT));
        rest = &tail[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

fn lookup(
    placeholder: &str,
    mappings: &[FieldMapping],
    params: Option<&Map<String, Value>>,
) -> Option<String> {
    let field = mappings
        .iter()
        .find(|m| m.wire == placeholder)
        .map(|m| m.field)
        .unwrap_or(placeholder);
    match params?.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, FieldMapping, expand};
    use serde_json::json;
    use std::error::Error as _;
    use test_case::test_case;

    const CASE: [FieldMapping; 2] = [
        FieldMapping::new("case_number", "caseNumber"),
        FieldMapping::new("file_id", "fileId"),
    ];

    #[test_case("/v1/apikeys", json!({}), "/v1/apikeys"; "no placeholders")]
    #[test_case("/cases/{case_number}", json!({"caseNumber": "CS123"}), "/cases/CS123"; "one placeholder")]
    #[test_case("/cases/{case_number}/attachments/{file_id}", json!({"caseNumber": "CS1", "fileId": "f-2"}), "/cases/CS1/attachments/f-2"; "two placeholders")]
    #[test_case("/cases/{case_number}", json!({"caseNumber": "a/b?c#d"}), "/cases/a%2Fb%3Fc%23d"; "escaped")]
    #[test_case("/cases/{case_number}", json!({"caseNumber": 42}), "/cases/42"; "number")]
    #[test_case("/v1/apikeys/{id}/lock", json!({"id": "ApiKey-1"}), "/v1/apikeys/ApiKey-1/lock"; "unmapped placeholder")]
    fn expands(
        template: &'static str,
        params: serde_json::Value,
        want: &str,
    ) -> anyhow::Result<()> {
        let got = expand(template, &CASE, params.as_object())?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case("/cases/{case_number}", json!({}); "absent")]
    #[test_case("/cases/{case_number}", json!({"caseNumber": null}); "null")]
    #[test_case("/cases/{case_number}", json!({"caseNumber": ["a"]}); "array")]
    fn unresolved(template: &'static str, params: serde_json::Value) {
        let err = expand(template, &CASE, params.as_object()).expect_err("should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::Unresolved { placeholder, .. }) if placeholder == "case_number"),
            "{err:?}"
        );
    }

    #[test]
    fn unterminated() {
        let err = expand("/cases/{case_number", &CASE, None).expect_err("should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::Unterminated { .. })),
            "{err:?}"
        );
    }
}
