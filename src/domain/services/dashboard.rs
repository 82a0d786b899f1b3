use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::dashboard::{ChartView, Dashboard, FarmerLimit};
use crate::domain::models::jsonwebtoken::AuthContext;

#[async_trait]
pub trait DashboardService: 'static + Sync + Send {
    async fn dashboard(
        &self,
        auth: &AuthContext,
        limit: FarmerLimit,
        view: ChartView,
    ) -> AppResult<Dashboard>;
}
