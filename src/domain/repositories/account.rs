use async_trait::async_trait;

use crate::domain::models::account::{Credentials, Session};
use crate::domain::models::farmer::FarmerFields;

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn login(&self, credentials: Credentials) -> RepositoryResult<Session>;
    async fn register(&self, fields: FarmerFields) -> RepositoryResult<()>;
}
