use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::models::farmer::Farmer;
use crate::domain::models::page::Page;

#[derive(Debug, Serialize, ToSchema)]
pub struct FarmerDTO {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub location: String,
    #[schema(examples("2.5"))]
    pub farm_size: String,
    #[schema(examples("1990-04-21"))]
    pub date_of_birth: String,
    #[schema(examples("female"))]
    pub gender: String,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FarmerPageDTO {
    pub items: Vec<FarmerDTO>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Listing filter shared by the farmer and admin crop tables.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring filter.
    #[serde(default)]
    pub q: String,
    /// Zero-based page index.
    #[serde(default)]
    pub page: usize,
}

impl From<Farmer> for FarmerDTO {
    fn from(farmer: Farmer) -> Self {
        FarmerDTO {
            id: farmer.id,
            email: farmer.email,
            username: farmer.username,
            first_name: farmer.first_name,
            last_name: farmer.last_name,
            phone_number: farmer.phone_number,
            location: farmer.location,
            farm_size: farmer.farm_size,
            date_of_birth: farmer.date_of_birth,
            gender: farmer.gender,
            role: farmer.role,
        }
    }
}

impl From<Page<Farmer>> for FarmerPageDTO {
    fn from(page: Page<Farmer>) -> Self {
        let page = page.map(FarmerDTO::from);

        FarmerPageDTO {
            items: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}
