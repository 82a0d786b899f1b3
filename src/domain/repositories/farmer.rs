use async_trait::async_trait;

use crate::domain::models::farmer::{Farmer, FarmerFields, FarmerId, FarmerUpdate};
use crate::domain::models::jsonwebtoken::AuthContext;

use super::repository::RepositoryResult;

#[async_trait]
pub trait FarmerRepository: Send + Sync {
    async fn list(&self, auth: &AuthContext) -> RepositoryResult<Vec<Farmer>>;
    async fn get(&self, auth: &AuthContext, id: FarmerId) -> RepositoryResult<Farmer>;
    async fn create(&self, auth: &AuthContext, fields: FarmerFields) -> RepositoryResult<Farmer>;
    async fn update(
        &self,
        auth: &AuthContext,
        id: FarmerId,
        update: FarmerUpdate,
    ) -> RepositoryResult<Farmer>;
    async fn delete(&self, auth: &AuthContext, id: FarmerId) -> RepositoryResult<()>;
}
