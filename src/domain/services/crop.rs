use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::crop::{Crop, CropId, CropPayload};
use crate::domain::models::jsonwebtoken::AuthContext;
use crate::domain::models::page::Page;

pub const CROPS_PAGE_SIZE: usize = 10;

#[async_trait]
pub trait CropService: 'static + Sync + Send {
    async fn list(&self, auth: &AuthContext) -> AppResult<Vec<Crop>>;
    async fn create(&self, auth: &AuthContext, crop: CropPayload) -> AppResult<Crop>;
    async fn update(&self, auth: &AuthContext, id: CropId, crop: CropPayload) -> AppResult<Crop>;
    async fn delete(&self, auth: &AuthContext, id: CropId) -> AppResult<()>;
    async fn toggle_harvested(&self, auth: &AuthContext, id: CropId) -> AppResult<Crop>;

    async fn search_all(&self, auth: &AuthContext, query: &str, page: usize)
    -> AppResult<Page<Crop>>;
    async fn update_any(&self, auth: &AuthContext, id: CropId, crop: CropPayload)
    -> AppResult<Crop>;
    async fn delete_any(&self, auth: &AuthContext, id: CropId) -> AppResult<()>;
}
