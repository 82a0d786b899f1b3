use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::models::dashboard::{DashboardStats, FarmerCropCount};
use crate::domain::models::jsonwebtoken::AuthContext;
use crate::domain::repositories::dashboard::DashboardRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::client::ApiClient;

pub struct DashboardRepositoryImpl {
    client: Arc<ApiClient>,
}

impl DashboardRepositoryImpl {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardRepository for DashboardRepositoryImpl {
    async fn stats(&self, auth: &AuthContext) -> RepositoryResult<DashboardStats> {
        let request = self
            .client
            .request(Method::GET, "/admin-api/dashboard/", Some(auth));

        self.client.fetch(request).await
    }

    async fn crops_per_farmer(&self, auth: &AuthContext) -> RepositoryResult<Vec<FarmerCropCount>> {
        let request = self
            .client
            .request(Method::GET, "/admin-api/crops-per-farmer/", Some(auth));

        Ok(self
            .client
            .fetch::<Option<Vec<FarmerCropCount>>>(request)
            .await?
            .unwrap_or_default())
    }
}
