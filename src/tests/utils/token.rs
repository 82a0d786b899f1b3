use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use crate::domain::models::jsonwebtoken::Claims;

pub const TEST_SECRET: &str = "agtech-portal-test-secret";

/// An access token as the farm backend would sign it, valid for an hour.
pub fn access_token(user_id: u64) -> String {
    let claims = Claims {
        user_id,
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        token_type: Some("access".to_string()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}
