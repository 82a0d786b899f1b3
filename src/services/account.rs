use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Credentials, SignedIn},
    models::farmer::FarmerFields,
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;

pub static ROLE_MISSING: &str = "Login succeeded but role missing. Contact support.";

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn login(&self, credentials: Credentials) -> AppResult<SignedIn> {
        let session = self.repository.login(credentials).await?;

        let user = match session.user {
            Some(user) => user,
            None => return Err(AppError::BadGateway(ROLE_MISSING)),
        };

        let role = match user.role {
            Some(role) => role,
            None => {
                tracing::warn!(user = user.id, "login response carried no role");
                return Err(AppError::BadGateway(ROLE_MISSING));
            }
        };

        Ok(SignedIn {
            access: session.access,
            refresh: session.refresh,
            user,
            role,
        })
    }

    async fn register(&self, mut fields: FarmerFields) -> AppResult<()> {
        fields.role = None;

        Ok(self.repository.register(fields).await?)
    }
}
