use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::farmer::{Farmer, FarmerId};
use crate::domain::models::jsonwebtoken::AuthContext;
use crate::domain::models::page::Page;

pub const FARMERS_PAGE_SIZE: usize = 8;

#[async_trait]
pub trait FarmerService: 'static + Sync + Send {
    async fn search(&self, auth: &AuthContext, query: &str, page: usize) -> AppResult<Page<Farmer>>;
    async fn get(&self, auth: &AuthContext, id: FarmerId) -> AppResult<Farmer>;
    async fn delete(&self, auth: &AuthContext, id: FarmerId) -> AppResult<()>;
}
