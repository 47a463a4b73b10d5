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
    use ibm_cloud_resource_manager_v2::client::ResourceManager;
    use ibm_cloud_resource_manager_v2::model::*;

    mockall::mock! {
        #[derive(Debug)]
        ResourceManager {}
        impl ibm_cloud_resource_manager_v2::stub::ResourceManager for ResourceManager {
            async fn get_resource_group(&self, req: GetResourceGroupRequest, options: RequestOptions) -> gax::Result<Response<ResourceGroup>>;
        }
    }

    static_assertions::assert_impl_all!(ResourceManager: Clone, std::fmt::Debug, Send, Sync);

    #[tokio::test]
    async fn from_stub() -> anyhow::Result<()> {
        let mut mock = MockResourceManager::new();
        mock.expect_get_resource_group()
            .withf(|req, _| req.id.as_deref() == Some("rg-1"))
            .times(1)
            .returning(|_, _| {
                let group = ResourceGroup {
                    id: "rg-1".to_string(),
                    state: "ACTIVE".to_string(),
                    ..Default::default()
                };
                Ok(Response::from_parts(Parts::new(), group))
            });

        let client = ResourceManager::from_stub(mock);
        let response = client.get_resource_group().set_id("rg-1").send().await?;
        assert_eq!(response.body().state, "ACTIVE");
        Ok(())
    }
}
