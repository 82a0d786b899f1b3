use std::sync::Arc;

use async_trait::async_trait;
use futures::try_join;

use crate::domain::{
    error::AppResult,
    models::dashboard::{ChartView, Dashboard, FarmerLimit},
    models::jsonwebtoken::AuthContext,
    repositories::dashboard::DashboardRepository,
    services::dashboard::DashboardService,
};

pub struct DashboardServiceImpl {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardServiceImpl {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DashboardService for DashboardServiceImpl {
    #[tracing::instrument(skip(self, auth))]
    async fn dashboard(
        &self,
        auth: &AuthContext,
        limit: FarmerLimit,
        view: ChartView,
    ) -> AppResult<Dashboard> {
        let (stats, series) = try_join!(
            self.repository.stats(auth),
            self.repository.crops_per_farmer(auth)
        )?;

        Ok(Dashboard::build(stats, series, limit, view))
    }
}
