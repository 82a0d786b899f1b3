use async_trait::async_trait;

use crate::domain::models::crop::{Crop, CropId, CropPayload};
use crate::domain::models::jsonwebtoken::AuthContext;

use super::repository::RepositoryResult;

/// Whose crops a call works on: the caller's own, or every farmer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropScope {
    Own,
    All,
}

#[async_trait]
pub trait CropRepository: Send + Sync {
    async fn list(&self, auth: &AuthContext, scope: CropScope) -> RepositoryResult<Vec<Crop>>;
    async fn create(&self, auth: &AuthContext, crop: CropPayload) -> RepositoryResult<Crop>;
    async fn update(
        &self,
        auth: &AuthContext,
        scope: CropScope,
        id: CropId,
        crop: CropPayload,
    ) -> RepositoryResult<Crop>;
    async fn delete(&self, auth: &AuthContext, scope: CropScope, id: CropId)
    -> RepositoryResult<()>;
}
