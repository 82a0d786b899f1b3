use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_farmers: u64,
    #[serde(default)]
    pub total_crops: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FarmerCropCount {
    pub username: String,
    #[serde(default)]
    pub total_crops: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FarmerLimit {
    Top5,
    #[default]
    Top10,
    All,
}

impl FarmerLimit {
    fn take(self) -> usize {
        match self {
            FarmerLimit::Top5 => 5,
            FarmerLimit::Top10 => 10,
            FarmerLimit::All => usize::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartView {
    #[default]
    Absolute,
    Percentage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub username: String,
    pub total_crops: u64,
    pub display_value: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub chart: Vec<ChartPoint>,
    pub average_crops_per_farmer: f64,
    pub active_farmer_share: f64,
}

impl Dashboard {
    pub fn build(
        stats: DashboardStats,
        mut series: Vec<FarmerCropCount>,
        limit: FarmerLimit,
        view: ChartView,
    ) -> Self {
        let active = series.iter().filter(|row| row.total_crops > 0).count();

        let (average_crops_per_farmer, active_farmer_share) = match stats.total_farmers {
            0 => (0.0, 0.0),
            farmers => (
                round1(stats.total_crops as f64 / farmers as f64),
                round1(active as f64 / farmers as f64 * 100.0),
            ),
        };

        series.sort_by(|a, b| b.total_crops.cmp(&a.total_crops));
        series.truncate(limit.take());

        let chart = match view {
            ChartView::Absolute => series
                .into_iter()
                .map(|row| ChartPoint {
                    display_value: row.total_crops.to_string(),
                    value: row.total_crops as f64,
                    username: row.username,
                    total_crops: row.total_crops,
                })
                .collect(),
            ChartView::Percentage => {
                let total = match series.iter().map(|row| row.total_crops).sum::<u64>() {
                    0 => 1,
                    total => total,
                };

                series
                    .into_iter()
                    .map(|row| {
                        let percentage = row.total_crops as f64 / total as f64 * 100.0;
                        ChartPoint {
                            display_value: format!("{percentage:.1}"),
                            value: percentage,
                            username: row.username,
                            total_crops: row.total_crops,
                        }
                    })
                    .collect()
            }
        };

        Dashboard {
            stats,
            chart,
            average_crops_per_farmer,
            active_farmer_share,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
