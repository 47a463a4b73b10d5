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
    use gax::options::RequestOptions;
    use gax::response::{Parts, Response};
    use ibm_cloud_iam_identity_v1::client::IamIdentity;
    use ibm_cloud_iam_identity_v1::model::*;
    use pretty_assertions::assert_eq;

    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        IamIdentity {}
        impl ibm_cloud_iam_identity_v1::stub::IamIdentity for IamIdentity {
            async fn get_api_key(&self, req: GetApiKeyRequest, options: RequestOptions) -> gax::Result<Response<ApiKeyDetails>>;
            async fn delete_service_id(&self, req: DeleteServiceIdRequest, options: RequestOptions) -> gax::Result<Response<()>>;
        }
    }

    static_assertions::assert_impl_all!(IamIdentity: Clone, std::fmt::Debug, Send, Sync);

    #[tokio::test]
    async fn from_stub() -> TestResult {
        let mut mock = MockIamIdentity::new();
        mock.expect_get_api_key()
            .withf(|req, _| req.id.as_deref() == Some("ApiKey-1"))
            .times(1)
            .returning(|req, _| {
                let details = ApiKeyDetails {
                    id: req.id.unwrap_or_default(),
                    name: "from-mock".to_string(),
                    ..Default::default()
                };
                Ok(Response::from_parts(Parts::new(), details))
            });

        let client = IamIdentity::from_stub(mock);
        let response = client.get_api_key().set_id("ApiKey-1").send().await?;
        assert_eq!(response.body().id, "ApiKey-1");
        assert_eq!(response.body().name, "from-mock");
        Ok(())
    }

    #[tokio::test]
    async fn options_reach_the_stub() -> TestResult {
        use gax::options::RequestOptionsBuilder;
        let mut mock = MockIamIdentity::new();
        mock.expect_delete_service_id()
            .withf(|_, options| {
                options.user_agent().as_deref() == Some("my-app/1.0")
                    && options.attempt_timeout() == &Some(std::time::Duration::from_secs(5))
            })
            .times(1)
            .returning(|_, _| Ok(Response::from_parts(Parts::new(), ())));

        let client = IamIdentity::from_stub(mock);
        client
            .delete_service_id()
            .set_id("ServiceId-1")
            .with_user_agent("my-app/1.0")
            .with_attempt_timeout(std::time::Duration::from_secs(5))
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn errors_reach_the_caller() {
        let mut mock = MockIamIdentity::new();
        mock.expect_get_api_key()
            .returning(|_, _| Err(gax::error::Error::missing_parameters(vec!["id".to_string()])));

        let client = IamIdentity::from_stub(mock);
        let err = client
            .get_api_key()
            .send()
            .await
            .expect_err("the mock returns an error");
        assert!(err.is_missing_parameters(), "{err:?}");
    }

    #[tokio::test]
    #[should_panic]
    async fn unimplemented_operation() {
        let client = IamIdentity::from_stub(MockIamIdentity::new());
        let _ = client.list_api_keys().send().await;
    }
}
