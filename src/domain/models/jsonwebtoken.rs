use serde::{Deserialize, Serialize};

/// Claims of the access tokens issued by the upstream backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Claims {
    pub user_id: u64,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// The caller's credentials, handed explicitly to every upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub token: String,
    pub claims: Claims,
}

impl AuthContext {
    pub fn user_id(&self) -> u64 {
        self.claims.user_id
    }
}
