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

use super::CredentialsError;
use super::ServiceError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The application
/// may omit required parameters, the service may return an error, the
/// transport may be unable to connect to the service, or the request may
/// timeout before a response is received.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind, and accessors to query the most common error details. Applications
/// can query the error [source][std::error::Error::source] for deeper
/// information.
///
/// # Example
/// ```
/// use ibm_cloud_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_missing_parameters() => {
///         println!("fix the request, missing {:?}", e.missing_parameters_names());
///     },
///     Err(e) if matches!(e.service_error(), Some(_)) => {
///         println!("service error {e}, debug using {:?}", e.service_error());
///     },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::missing_parameters(["id"]))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error listing required parameters absent from a request.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::missing_parameters(["id", "if_match"]);
    /// assert!(error.is_missing_parameters());
    /// assert_eq!(error.to_string(), "Missing required parameters: id, if_match");
    /// ```
    pub fn missing_parameters<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ErrorKind::MissingParameters(names.into_iter().map(|s| s.into()).collect()),
            source: None,
        }
    }

    /// The request was missing one or more required parameters.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is sent to the service. The error lists every missing
    /// parameter, in the order the operation declares them.
    ///
    /// # Troubleshooting
    ///
    /// Set the parameters listed in [missing_parameters_names][Error::missing_parameters_names]
    /// and try again. Note that an empty string is a valid value, only unset
    /// (or `null`) parameters are reported.
    pub fn is_missing_parameters(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingParameters(_))
    }

    /// The names of the missing required parameters, if this is a
    /// [missing parameters][Error::is_missing_parameters] error.
    pub fn missing_parameters_names(&self) -> Option<&[String]> {
        match &self.kind {
            ErrorKind::MissingParameters(names) => Some(names.as_slice()),
            _ => None,
        }
    }

    /// The error details returned by the service, if any.
    ///
    /// IBM Cloud services return a JSON envelope describing the failure. The
    /// client libraries parse that envelope into a [ServiceError]. If the
    /// payload could not be parsed this returns `None`, use
    /// [http_payload][Error::http_payload] to examine the raw response.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().details),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The service completed the
    /// request, but the client library could not parse the response body.
    ///
    /// # Troubleshooting
    ///
    /// The client libraries tolerate unknown fields. The most common cause of
    /// this problem is an endpoint that does not belong to the service, for
    /// example, an HTML page returned by a proxy.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. The serialization is deterministic, this error will
    /// happen on future attempts with the same input data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only set when the payload could not be parsed as an IBM Cloud error
    /// envelope.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        details: ServiceError,
        status_code: Option<u16>,
        headers: Option<http::HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            details,
        };
        let kind = ErrorKind::Service(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot build a request from the given parameters.
    ///
    /// This indicates a required path parameter could not be expanded, or the
    /// request headers have invalid values.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// If true, the request parameters could not be mapped to a valid HTTP
    /// request.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authenticator. If you are
    /// using the default credentials, review the `<SERVICE_NAME>_AUTH_TYPE`
    /// and related environment variables.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include connection failures, read or write problems, and
    /// broken connections.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::MissingParameters(names), _) => {
                write!(f, "Missing required parameters: {}", names.join(", "))
            }
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request from its parameters {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.details.code, d.details.message
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    MissingParameters(Vec<String>),
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    details: ServiceError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use std::error::Error as StdError;

    fn test_source() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::InvalidData, "test-only-source")
    }

    fn json_headers() -> HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn missing_parameters() {
        let error = Error::missing_parameters(["id", "if_match"]);
        assert!(error.is_missing_parameters(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(
            error.missing_parameters_names(),
            Some(["id".to_string(), "if_match".to_string()].as_slice())
        );
        assert_eq!(
            error.to_string(),
            "Missing required parameters: id, if_match"
        );
        assert!(!error.is_binding(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn missing_single_parameter() {
        let error = Error::missing_parameters(vec!["id".to_string()]);
        assert_eq!(error.to_string(), "Missing required parameters: id");
    }

    #[test]
    fn service() {
        let details = ServiceError::default()
            .set_code(404_u16)
            .set_message("NOT FOUND");
        let error = Error::service_with_http_metadata(details.clone(), None, None);
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.service_error(), Some(&details));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert!(!error.is_missing_parameters(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(test_source());
        assert!(error.is_timeout(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            matches!(got, Some(e) if e.kind() == std::io::ErrorKind::InvalidData),
            "{error:?}"
        );
        assert!(error.to_string().contains("test-only-source"), "{error}");

        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(test_source());
        assert!(error.is_deserialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser(test_source());
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");
    }

    #[test]
    fn service_with_http_metadata() {
        let details = ServiceError::default()
            .set_code(404_u16)
            .set_message("NOT FOUND");
        let headers = json_headers();
        let error =
            Error::service_with_http_metadata(details.clone(), Some(404), Some(headers.clone()));
        assert_eq!(error.service_error(), Some(&details));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(test_source());
        assert!(error.is_binding(), "{error:?}");
        assert!(!error.is_missing_parameters(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");

        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn authentication() {
        let source = CredentialsError::from_msg(false, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
    }

    #[test]
    fn http() {
        let headers = json_headers();
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(502, json_headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(test_source());
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");
    }
}
