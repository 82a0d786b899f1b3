use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Farmer,
}

impl Role {
    pub fn landing_route(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Farmer => "/farmer/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountUser {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Tokens handed out by a successful upstream login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: Option<AccountUser>,
}

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A completed login whose user carries a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub access: String,
    pub refresh: Option<String>,
    pub user: AccountUser,
    pub role: Role,
}
