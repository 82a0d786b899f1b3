use crate::domain::{error::AppResult, models::jsonwebtoken::Claims};

pub trait JsonWebTokenService: 'static + Sync + Send {
    fn validate_token(&self, token: &str) -> AppResult<Claims>;
}
