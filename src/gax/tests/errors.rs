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

#[cfg(test)]
mod tests {
    use ibm_cloud_gax::error::{CredentialsError, Error, ServiceError};
    use std::error::Error as _;

    static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
    static_assertions::assert_impl_all!(CredentialsError: Clone, Send, Sync, std::error::Error);
    static_assertions::assert_impl_all!(ServiceError: Clone, Send, Sync);
    static_assertions::assert_impl_all!(ibm_cloud_gax::client_builder::Error: Send, Sync);

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "other error")
        }
    }

    impl std::error::Error for LeafError {}

    #[test]
    fn downcast_source() -> anyhow::Result<()> {
        let error = Error::io(LeafError::default());
        let leaf = error
            .source()
            .and_then(|e| e.downcast_ref::<LeafError>())
            .ok_or_else(|| anyhow::anyhow!("missing source in {error:?}"))?;
        assert_eq!(leaf.hey(), "hey");
        Ok(())
    }

    #[test]
    fn service_error_from_payload() -> anyhow::Result<()> {
        let payload = bytes::Bytes::from_static(
            br#"{"trace": "t-1", "errors": [{"code": "conflict", "message": "entity tag mismatch"}], "status_code": 409}"#,
        );
        let details = ServiceError::try_from(&payload)?;
        let error = Error::service_with_http_metadata(details, Some(409), None);
        assert_eq!(error.http_status_code(), Some(409));
        let details = error
            .service_error()
            .ok_or_else(|| anyhow::anyhow!("missing details in {error:?}"))?;
        assert_eq!(details.message(), "entity tag mismatch");
        assert_eq!(details.errors()[0].code.as_deref(), Some("conflict"));
        assert!(error.to_string().contains("409"), "{error}");
        Ok(())
    }

    #[test]
    fn missing_parameters_round_trip_through_box() {
        let error: Box<dyn std::error::Error + Send + Sync> =
            Box::new(Error::missing_parameters(["case_number"]));
        assert_eq!(
            error.to_string(),
            "Missing required parameters: case_number"
        );
        let error = error.downcast::<Error>();
        assert!(
            matches!(&error, Ok(e) if e.is_missing_parameters()),
            "{error:?}"
        );
    }
}
