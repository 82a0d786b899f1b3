use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::AppResult,
    models::farmer::{Farmer, FarmerId},
    models::jsonwebtoken::AuthContext,
    models::page::Page,
    repositories::farmer::FarmerRepository,
    services::farmer::{FARMERS_PAGE_SIZE, FarmerService},
};

pub struct FarmerServiceImpl {
    repository: Arc<dyn FarmerRepository>,
}

impl FarmerServiceImpl {
    pub fn new(repository: Arc<dyn FarmerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FarmerService for FarmerServiceImpl {
    async fn search(&self, auth: &AuthContext, query: &str, page: usize) -> AppResult<Page<Farmer>> {
        let farmers = self
            .repository
            .list(auth)
            .await?
            .into_iter()
            .filter(|farmer| farmer.matches(query))
            .collect();

        Ok(Page::slice(farmers, page, FARMERS_PAGE_SIZE))
    }

    async fn get(&self, auth: &AuthContext, id: FarmerId) -> AppResult<Farmer> {
        Ok(self.repository.get(auth, id).await?)
    }

    async fn delete(&self, auth: &AuthContext, id: FarmerId) -> AppResult<()> {
        self.repository.delete(auth, id).await?;

        tracing::info!(farmer = id, "farmer deleted");

        Ok(())
    }
}
