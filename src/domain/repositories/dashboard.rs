use async_trait::async_trait;

use crate::domain::models::dashboard::{DashboardStats, FarmerCropCount};
use crate::domain::models::jsonwebtoken::AuthContext;

use super::repository::RepositoryResult;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn stats(&self, auth: &AuthContext) -> RepositoryResult<DashboardStats>;
    async fn crops_per_farmer(&self, auth: &AuthContext) -> RepositoryResult<Vec<FarmerCropCount>>;
}
