use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::models::crop::{Crop, CropId, CropPayload};
use crate::domain::models::jsonwebtoken::AuthContext;
use crate::domain::repositories::crop::{CropRepository, CropScope};
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::client::ApiClient;

pub struct CropRepositoryImpl {
    client: Arc<ApiClient>,
}

impl CropRepositoryImpl {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn collection(scope: CropScope) -> &'static str {
    match scope {
        CropScope::Own => "/crops/",
        CropScope::All => "/admin-api/crops/",
    }
}

fn crop_path(scope: CropScope, id: CropId) -> String {
    format!("{}{id}/", collection(scope))
}

#[async_trait]
impl CropRepository for CropRepositoryImpl {
    async fn list(&self, auth: &AuthContext, scope: CropScope) -> RepositoryResult<Vec<Crop>> {
        let request = self
            .client
            .request(Method::GET, collection(scope), Some(auth));

        Ok(self
            .client
            .fetch::<Option<Vec<Crop>>>(request)
            .await?
            .unwrap_or_default())
    }

    async fn create(&self, auth: &AuthContext, crop: CropPayload) -> RepositoryResult<Crop> {
        let request = self
            .client
            .request(Method::POST, collection(CropScope::Own), Some(auth))
            .json(&crop);

        self.client.fetch(request).await
    }

    async fn update(
        &self,
        auth: &AuthContext,
        scope: CropScope,
        id: CropId,
        crop: CropPayload,
    ) -> RepositoryResult<Crop> {
        let request = self
            .client
            .request(Method::PUT, &crop_path(scope, id), Some(auth))
            .json(&crop);

        self.client.fetch(request).await
    }

    async fn delete(
        &self,
        auth: &AuthContext,
        scope: CropScope,
        id: CropId,
    ) -> RepositoryResult<()> {
        let request = self
            .client
            .request(Method::DELETE, &crop_path(scope, id), Some(auth));

        self.client.execute(request).await
    }
}
