use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::models::farmer::{Farmer, FarmerFields, FarmerId, FarmerUpdate};
use crate::domain::models::jsonwebtoken::AuthContext;
use crate::domain::repositories::farmer::FarmerRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::client::ApiClient;

pub struct FarmerRepositoryImpl {
    client: Arc<ApiClient>,
}

impl FarmerRepositoryImpl {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

const FARMERS: &str = "/farmers/";

fn farmer_path(id: FarmerId) -> String {
    format!("{FARMERS}{id}/")
}

#[async_trait]
impl FarmerRepository for FarmerRepositoryImpl {
    async fn list(&self, auth: &AuthContext) -> RepositoryResult<Vec<Farmer>> {
        let request = self.client.request(Method::GET, FARMERS, Some(auth));

        Ok(self
            .client
            .fetch::<Option<Vec<Farmer>>>(request)
            .await?
            .unwrap_or_default())
    }

    async fn get(&self, auth: &AuthContext, id: FarmerId) -> RepositoryResult<Farmer> {
        let request = self
            .client
            .request(Method::GET, &farmer_path(id), Some(auth));

        self.client.fetch(request).await
    }

    async fn create(&self, auth: &AuthContext, fields: FarmerFields) -> RepositoryResult<Farmer> {
        let request = self
            .client
            .request(Method::POST, FARMERS, Some(auth))
            .json(&fields);

        self.client.fetch(request).await
    }

    async fn update(
        &self,
        auth: &AuthContext,
        id: FarmerId,
        update: FarmerUpdate,
    ) -> RepositoryResult<Farmer> {
        let request = self
            .client
            .request(Method::PUT, &farmer_path(id), Some(auth))
            .json(&update);

        self.client.fetch(request).await
    }

    async fn delete(&self, auth: &AuthContext, id: FarmerId) -> RepositoryResult<()> {
        let request = self
            .client
            .request(Method::DELETE, &farmer_path(id), Some(auth));

        self.client.execute(request).await
    }
}
