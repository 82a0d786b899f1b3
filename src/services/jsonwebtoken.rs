use crate::domain::error::{AppError, AppResult};
use crate::domain::models::jsonwebtoken::Claims;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies access tokens signed by the farm backend with its shared secret.
pub struct JsonWebTokenServiceImpl {
    decoding: DecodingKey,
    validation: Validation,
}

impl JsonWebTokenServiceImpl {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        JsonWebTokenServiceImpl {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl JsonWebTokenService for JsonWebTokenServiceImpl {
    fn validate_token(&self, token: &str) -> AppResult<Claims> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(token) => match token.claims.token_type.as_deref() {
                None | Some("access") => Ok(token.claims),
                Some(_) => Err(AppError::Unauthorized()),
            },
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature
                | ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => Err(AppError::Unauthorized()),
                _ => Err(AppError::InternalError().trace(&format!("{error:?}"))),
            },
        }
    }
}
