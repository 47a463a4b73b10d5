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

//! Errors created during credentials construction.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The credentials type is invalid or unknown.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    /// A required field was missing from the builder or the environment.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    /// A field has a value the credentials cannot use.
    pub fn is_invalid(&self) -> bool {
        matches!(self.0, ErrorKind::Invalid(_))
    }

    /// The credentials type is recognized, but this crate cannot create it.
    pub fn is_not_supported(&self) -> bool {
        matches!(self.0, ErrorKind::NotSupported(_))
    }

    /// No credentials are configured in the environment.
    pub fn is_not_configured(&self) -> bool {
        matches!(self.0, ErrorKind::NotConfigured(_))
    }

    /// The credential type is unknown or invalid.
    pub(crate) fn unknown_type<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::UnknownType(source.into()))
    }

    /// A required field was not set.
    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    /// A field value is not usable.
    pub(crate) fn invalid<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Invalid(source.into()))
    }

    /// The credential type requires functionality not in this crate.
    pub(crate) fn not_supported<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::NotSupported(source.into()))
    }

    /// Nothing configured for the given environment variable prefix.
    pub(crate) fn not_configured<T: Into<String>>(prefix: T) -> Error {
        Error(ErrorKind::NotConfigured(prefix.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("unknown or invalid credentials type {0}")]
    UnknownType(#[source] BoxError),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid credentials field {0}")]
    Invalid(#[source] BoxError),
    #[error("credentials type not supported: {0}")]
    NotSupported(#[source] BoxError),
    #[error("no credentials configured, set the {0}_AUTH_TYPE environment variable")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn constructors() {
        let error = Error::unknown_type("test message");
        assert!(error.is_unknown_type(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::missing_field("test field");
        assert!(error.is_missing_field(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("test field"), "{error}");

        let error = Error::invalid("test message");
        assert!(error.is_invalid(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::not_supported("test message");
        assert!(error.is_not_supported(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::not_configured("MY_SERVICE");
        assert!(error.is_not_configured(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("MY_SERVICE_AUTH_TYPE"), "{error}");
    }
}
