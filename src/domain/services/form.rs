use std::time::Instant;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::AppResult;
use crate::domain::form::AccountForm;
use crate::domain::models::farmer::{Farmer, FarmerFields, FarmerId};
use crate::domain::models::form::{Field, FormMode, ValidationMode};
use crate::domain::models::jsonwebtoken::AuthContext;

pub type FormId = Uuid;

/// An open account form, owned by the user who opened it.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub id: FormId,
    pub owner: u64,
    pub form: AccountForm,
    pub last_seen: Instant,
}

#[derive(Debug, Clone)]
pub struct OpenForm {
    pub mode: FormMode,
    pub farmer_id: Option<FarmerId>,
    pub initial: Option<FarmerFields>,
}

#[derive(Debug, Clone, Default)]
pub struct FormChanges {
    pub fields: Vec<(Field, String)>,
    pub validation_mode: Option<ValidationMode>,
}

#[derive(Debug, Clone)]
pub struct Submitted {
    pub farmer: Farmer,
    pub message: &'static str,
}

#[async_trait]
pub trait FarmerFormService: 'static + Sync + Send {
    async fn open(&self, auth: &AuthContext, request: OpenForm) -> AppResult<FormSession>;
    async fn get(&self, auth: &AuthContext, id: FormId) -> AppResult<FormSession>;
    async fn update(
        &self,
        auth: &AuthContext,
        id: FormId,
        changes: FormChanges,
    ) -> AppResult<FormSession>;
    async fn next(&self, auth: &AuthContext, id: FormId) -> AppResult<FormSession>;
    async fn back(&self, auth: &AuthContext, id: FormId) -> AppResult<FormSession>;
    async fn submit(&self, auth: &AuthContext, id: FormId) -> AppResult<Submitted>;
    async fn close(&self, auth: &AuthContext, id: FormId) -> AppResult<()>;
}
