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

//! Defines traits and helpers to serialize query parameters.
//!
//! The request structs are serialized to JSON before the request is built, so
//! query parameters arrive as [serde_json::Value]. IBM Cloud services expect
//! scalars in their natural text form and lists as a single comma separated
//! value, e.g., `status=new,in_progress`.
//!
//! The types are not intended for application developers to use. They are
//! public because each service crate uses these helpers.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    /// Appends the parameter to `query`, unless its value is unset.
    fn add(self, query: &mut Vec<(String, String)>, name: &str);
}

impl QueryParameter for serde_json::Value {
    fn add(self, query: &mut Vec<(String, String)>, name: &str) {
        if let Some(v) = format(self) {
            query.push((name.to_string(), v));
        }
    }
}

impl QueryParameter for Option<serde_json::Value> {
    fn add(self, query: &mut Vec<(String, String)>, name: &str) {
        if let Some(v) = self {
            v.add(query, name);
        }
    }
}

/// Formats a value for the query string, `None` means the value is omitted.
pub fn format(value: serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(a) => {
            let items = a.into_iter().filter_map(format).collect::<Vec<_>>();
            Some(items.join(","))
        }
        v @ Value::Object(_) => Some(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn added(value: serde_json::Value) -> Vec<(String, String)> {
        let mut query = Vec::new();
        value.add(&mut query, "name");
        query
    }

    fn pair(v: &str) -> Vec<(String, String)> {
        vec![("name".to_string(), v.to_string())]
    }

    #[test]
    fn object() {
        let value = json!({"a": 123, "b": "x"});
        assert_eq!(added(value), pair(r#"{"a":123,"b":"x"}"#));
    }

    #[test]
    fn array() {
        let value = json!(["new", "in_progress", "resolved"]);
        assert_eq!(added(value), pair("new,in_progress,resolved"));
    }

    #[test]
    fn array_skips_nulls() {
        let value = json!([1, null, 3]);
        assert_eq!(added(value), pair("1,3"));
    }

    #[test]
    fn null() {
        assert!(added(json!(null)).is_empty());
    }

    #[test]
    fn string() {
        assert_eq!(added(json!("abc123")), pair("abc123"));
    }

    #[test]
    fn empty_string() {
        assert_eq!(added(json!("")), pair(""));
    }

    #[test]
    fn number() {
        assert_eq!(added(json!(7.5)), pair("7.5"));
        assert_eq!(added(json!(100)), pair("100"));
    }

    #[test]
    fn boolean() {
        assert_eq!(added(json!(true)), pair("true"));
        assert_eq!(added(json!(false)), pair("false"));
    }

    #[test]
    fn optional() {
        let mut query = Vec::new();
        None::<serde_json::Value>.add(&mut query, "unset");
        Some(json!("v")).add(&mut query, "set");
        assert_eq!(query, vec![("set".to_string(), "v".to_string())]);
    }
}
