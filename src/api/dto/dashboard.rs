use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::models::dashboard::{ChartPoint, ChartView, Dashboard, FarmerLimit};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DashboardQuery {
    #[serde(default)]
    #[param(inline)]
    pub limit: FarmerLimit,
    #[serde(default)]
    #[param(inline)]
    pub view: ChartView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChartPointDTO {
    pub username: String,
    pub total_crops: u64,
    /// Bar label: the crop count, or the share with one decimal.
    #[schema(examples("66.7"))]
    pub display_value: String,
    pub value: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardDTO {
    pub total_farmers: u64,
    pub total_crops: u64,
    pub average_crops_per_farmer: f64,
    /// Percentage of farmers with at least one crop.
    pub active_farmer_share: f64,
    pub chart: Vec<ChartPointDTO>,
}

impl From<ChartPoint> for ChartPointDTO {
    fn from(point: ChartPoint) -> Self {
        ChartPointDTO {
            username: point.username,
            total_crops: point.total_crops,
            display_value: point.display_value,
            value: point.value,
        }
    }
}

impl From<Dashboard> for DashboardDTO {
    fn from(dashboard: Dashboard) -> Self {
        DashboardDTO {
            total_farmers: dashboard.stats.total_farmers,
            total_crops: dashboard.stats.total_crops,
            average_crops_per_farmer: dashboard.average_crops_per_farmer,
            active_farmer_share: dashboard.active_farmer_share,
            chart: dashboard.chart.into_iter().map(Into::into).collect(),
        }
    }
}
