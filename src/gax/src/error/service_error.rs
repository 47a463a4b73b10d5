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

use serde::{Deserialize, Serialize};

/// The error details returned by IBM Cloud services.
///
/// IBM Cloud services report failures using a JSON envelope. The most common
/// shape is:
///
/// ```json
/// {
///   "trace": "9daee671-916a-4678-850b-10b911f0236d",
///   "errors": [
///     { "code": "not_found", "message": "API key not found", "more_info": "..." }
///   ],
///   "status_code": 404
/// }
/// ```
///
/// Some services use a flat shape, with a top-level `error`, `message`, or
/// `errorMessage` string. This type normalizes all of them.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::error::ServiceError;
/// let payload = bytes::Bytes::from_static(br#"{
///     "trace": "abc-123",
///     "errors": [{"code": "not_found", "message": "API key not found"}],
///     "status_code": 404
/// }"#);
/// let error = ServiceError::try_from(&payload).unwrap();
/// assert_eq!(error.code(), 404);
/// assert_eq!(error.message(), "API key not found");
/// assert_eq!(error.trace(), Some("abc-123"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceError {
    /// The HTTP status code reported by the service.
    pub code: u16,

    /// A human-readable description of the problem.
    pub message: String,

    /// The trace or transaction id, useful when contacting IBM Cloud support.
    pub trace: Option<String>,

    /// The detailed list of errors.
    pub errors: Vec<ErrorDetail>,
}

impl ServiceError {
    /// Returns the HTTP status code reported by the service.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the trace id, if any.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// Returns the detailed list of errors.
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// Sets the value of [code][ServiceError::code].
    pub fn set_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ServiceError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [trace][ServiceError::trace].
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = Some(v.into());
        self
    }

    /// Sets the value of [errors][ServiceError::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ErrorDetail>,
    {
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// One entry in the `errors` list of an IBM Cloud error envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ErrorDetail {
    /// A machine-readable error code, such as `not_found`.
    pub code: Option<String>,
    /// A human-readable description of this error.
    pub message: Option<String>,
    /// A link to more information about the error.
    pub more_info: Option<String>,
}

impl ErrorDetail {
    /// Sets the value of [code][ErrorDetail::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets the value of [message][ErrorDetail::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [more_info][ErrorDetail::more_info].
    pub fn set_more_info<T: Into<String>>(mut self, v: T) -> Self {
        self.more_info = Some(v.into());
        self
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
    #[serde(default)]
    trace: Option<String>,
    #[serde(default, rename = "transactionId")]
    transaction_id: Option<String>,
    #[serde(default)]
    status_code: Option<u16>,
}

impl Envelope {
    fn message(&self) -> Option<String> {
        if let Some(m) = self.errors.iter().find_map(|e| e.message.clone()) {
            return Some(m);
        }
        match &self.error {
            Some(serde_json::Value::String(s)) => return Some(s.clone()),
            Some(serde_json::Value::Array(a)) => {
                if let Some(s) = a
                    .iter()
                    .find_map(|v| v.get("message").and_then(|m| m.as_str()))
                {
                    return Some(s.to_string());
                }
            }
            _ => {}
        };
        self.message.clone().or_else(|| self.error_message.clone())
    }
}

impl TryFrom<&bytes::Bytes> for ServiceError {
    type Error = serde_json::Error;

    /// Parses an IBM Cloud error envelope.
    ///
    /// Fails if the payload is not JSON, or if it does not contain any of the
    /// fields used to describe an error.
    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        use serde::de::Error as _;
        let envelope = serde_json::from_slice::<Envelope>(value.as_ref())?;
        let message = envelope
            .message()
            .ok_or_else(|| serde_json::Error::custom("missing error message in payload"))?;
        Ok(ServiceError {
            code: envelope.status_code.unwrap_or_default(),
            message,
            trace: envelope.trace.or(envelope.transaction_id),
            errors: envelope.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn envelope_with_errors() -> anyhow::Result<()> {
        let payload = bytes::Bytes::from_static(
            br#"{
                "trace": "trace-123",
                "errors": [
                    {"code": "not_found", "message": "API key not found", "more_info": "https://cloud.ibm.com/apidocs"}
                ],
                "status_code": 404
            }"#,
        );
        let got = ServiceError::try_from(&payload)?;
        let want = ServiceError::default()
            .set_code(404_u16)
            .set_message("API key not found")
            .set_trace("trace-123")
            .set_errors([ErrorDetail::default()
                .set_code("not_found")
                .set_message("API key not found")
                .set_more_info("https://cloud.ibm.com/apidocs")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(r#"{"error": "flat error"}"#, "flat error")]
    #[test_case(r#"{"error": [{"message": "nested error"}]}"#, "nested error")]
    #[test_case(r#"{"message": "top message"}"#, "top message")]
    #[test_case(r#"{"errorMessage": "error message"}"#, "error message")]
    fn flat_envelopes(input: &'static str, want: &str) -> anyhow::Result<()> {
        let payload = bytes::Bytes::from_static(input.as_bytes());
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.message(), want);
        assert_eq!(got.code(), 0);
        Ok(())
    }

    #[test]
    fn transaction_id() -> anyhow::Result<()> {
        let payload =
            bytes::Bytes::from_static(br#"{"message": "m", "transactionId": "txn-123"}"#);
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.trace(), Some("txn-123"));
        Ok(())
    }

    #[test_case("not json")]
    #[test_case(r#"{"unrelated": 42}"#)]
    #[test_case(r#"["a", "b"]"#)]
    fn not_an_envelope(input: &'static str) {
        let payload = bytes::Bytes::from_static(input.as_bytes());
        let got = ServiceError::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }
}
