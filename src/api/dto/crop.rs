use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::validation::{has_crop_type, is_crop_name, is_planted_date};
use crate::domain::models::crop::{Crop, CropOwner, CropPayload};
use crate::domain::models::page::Page;

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[validate(schema(function = "has_crop_type", skip_on_field_errors = false))]
pub struct CropDTO {
    #[validate(custom(function = "is_crop_name"))]
    #[schema(examples("Maize"))]
    pub name: String,

    #[serde(rename = "type")]
    #[schema(examples("Cereal"))]
    pub kind: String,

    #[validate(range(min = 0.0, message = "Quantity cannot be negative"))]
    #[schema(examples(40.5))]
    pub quantity: f64,

    #[validate(custom(function = "is_planted_date"))]
    #[schema(examples("2024-03-01"))]
    pub planted_date: String,

    #[serde(default)]
    pub harvested: bool,

    /// Owning farmer. Only admins may reassign a crop.
    #[serde(default)]
    pub farmer: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CropResponseDTO {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: f64,
    pub planted_date: String,
    pub harvested: bool,
    pub farmer_id: Option<u64>,
    pub farmer_username: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CropPageDTO {
    pub items: Vec<CropResponseDTO>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl From<CropDTO> for CropPayload {
    fn from(crop: CropDTO) -> Self {
        CropPayload {
            name: crop.name.trim().to_string(),
            kind: crop.kind.trim().to_string(),
            quantity: crop.quantity,
            planted_date: crop.planted_date,
            harvested: crop.harvested,
            farmer: crop.farmer.map(CropOwner::Id),
        }
    }
}

impl From<Crop> for CropResponseDTO {
    fn from(crop: Crop) -> Self {
        let (farmer_id, farmer_username) = match crop.farmer {
            Some(CropOwner::Id(id)) => (Some(id), None),
            Some(CropOwner::Profile { id, username }) => (id, Some(username)),
            None => (None, None),
        };

        CropResponseDTO {
            id: crop.id,
            name: crop.name,
            kind: crop.kind,
            quantity: crop.quantity,
            planted_date: crop.planted_date,
            harvested: crop.harvested,
            farmer_id,
            farmer_username,
        }
    }
}

impl From<Page<Crop>> for CropPageDTO {
    fn from(page: Page<Crop>) -> Self {
        let page = page.map(CropResponseDTO::from);

        CropPageDTO {
            items: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}
