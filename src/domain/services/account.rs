use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Credentials, SignedIn};
use crate::domain::models::farmer::FarmerFields;

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn login(&self, credentials: Credentials) -> AppResult<SignedIn>;
    async fn register(&self, fields: FarmerFields) -> AppResult<()>;
}
