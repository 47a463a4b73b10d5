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

//! Validation of required parameters.
//!
//! Every operation declares the parameters it cannot be sent without. The
//! checks run before any request is built, and report all the missing
//! parameters at once, in the order they are declared.

use serde_json::{Map, Value};

/// Returns the names in `required` that are absent from `params`.
///
/// A missing map is treated as an empty map. A JSON `null` counts as absent,
/// but empty strings, `false` and `0` are present values.
///
/// # Example
/// ```
/// # use ibm_cloud_gax_internal::required_parameter::missing_parameters;
/// let params = serde_json::json!({"id": "abc123", "ifMatch": null});
/// let missing = missing_parameters(params.as_object(), &["id", "ifMatch", "name"]);
/// assert_eq!(missing, vec!["ifMatch", "name"]);
/// ```
pub fn missing_parameters<'a>(
    params: Option<&Map<String, Value>>,
    required: &[&'a str],
) -> Vec<&'a str> {
    required
        .iter()
        .filter(|name| {
            params
                .and_then(|p| p.get(**name))
                .is_none_or(Value::is_null)
        })
        .copied()
        .collect()
}

/// Fails with [Error::missing_parameters][gax::error::Error::missing_parameters]
/// if any of the `required` parameters is absent.
pub fn validate(params: Option<&Map<String, Value>>, required: &[&str]) -> gax::Result<()> {
    let missing = missing_parameters(params, required);
    if missing.is_empty() {
        return Ok(());
    }
    Err(gax::error::Error::missing_parameters(missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({}), &[], &[]; "nothing required")]
    #[test_case(json!({"id": "abc"}), &["id"], &[]; "all present")]
    #[test_case(json!({}), &["id", "ifMatch"], &["id", "ifMatch"]; "all missing")]
    #[test_case(json!({"ifMatch": "*"}), &["id", "ifMatch"], &["id"]; "first missing")]
    #[test_case(json!({"id": null}), &["id"], &["id"]; "null is missing")]
    #[test_case(json!({"name": ""}), &["name"], &[]; "empty string is present")]
    #[test_case(json!({"flag": false, "count": 0}), &["flag", "count"], &[]; "falsy values are present")]
    fn missing(params: Value, required: &[&str], want: &[&str]) {
        let got = missing_parameters(params.as_object(), required);
        assert_eq!(got, want);
    }

    #[test]
    fn missing_keeps_declaration_order() {
        let params = json!({"b": 1});
        let got = missing_parameters(params.as_object(), &["d", "c", "b", "a"]);
        assert_eq!(got, vec!["d", "c", "a"]);
    }

    #[test]
    fn absent_map() {
        let got = missing_parameters(None, &["caseNumber", "fileId"]);
        assert_eq!(got, vec!["caseNumber", "fileId"]);
        let got = missing_parameters(None, &[]);
        assert!(got.is_empty(), "{got:?}");
    }

    #[test]
    fn validate_success() -> anyhow::Result<()> {
        let params = json!({"accountId": "a", "resourceType": "r"});
        validate(params.as_object(), &["accountId", "resourceType"])?;
        Ok(())
    }

    #[test]
    fn validate_error() {
        let params = json!({"accountId": "a"});
        let err = validate(params.as_object(), &["accountId", "resourceType", "id"])
            .expect_err("missing parameters should fail");
        assert!(err.is_missing_parameters(), "{err:?}");
        assert_eq!(
            err.missing_parameters_names(),
            Some(["resourceType".to_string(), "id".to_string()].as_slice())
        );
        assert_eq!(
            err.to_string(),
            "Missing required parameters: resourceType, id"
        );
    }
}
