use crate::api::dto::validation::{
    is_confirmed, is_date_of_birth, is_email, is_farm_size, is_first_name, is_gender,
    is_last_name, is_password, is_phone_number, is_username,
};
use crate::domain::models::account::{AccountUser, Credentials, Role, SignedIn};
use crate::domain::models::farmer::FarmerFields;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("grace@farm.io"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password required"))]
    #[schema(examples("Abcdef12"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDTO {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignedInDTO {
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub access: String,
    pub refresh: Option<String>,
    pub user: UserDTO,
    #[schema(examples("/farmer/dashboard"))]
    pub landing_route: String,
}

/// Farmer self-registration. Same rules as the create-mode account form.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[validate(schema(function = "is_confirmed", skip_on_field_errors = false))]
pub struct RegisterDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("grace@farm.io"))]
    pub email: String,

    #[validate(custom(function = "is_username"))]
    #[schema(examples("grace.o"))]
    pub username: String,

    #[validate(custom(function = "is_first_name"))]
    pub first_name: String,

    #[validate(custom(function = "is_last_name"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(custom(function = "is_phone_number"))]
    #[schema(examples("+256 700 123456"))]
    pub phone_number: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    #[validate(custom(function = "is_farm_size"))]
    #[schema(examples("2.5"))]
    pub farm_size: String,

    #[serde(default)]
    #[validate(custom(function = "is_date_of_birth"))]
    #[schema(examples("1990-04-21"))]
    pub date_of_birth: String,

    #[serde(default)]
    #[validate(custom(function = "is_gender"))]
    #[schema(examples("female"))]
    pub gender: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("Abcdef12"))]
    pub password: String,

    #[schema(examples("Abcdef12"))]
    pub confirm_password: String,
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email.trim().to_string(),
            password: credentials.password,
        }
    }
}

impl From<RegisterDTO> for FarmerFields {
    fn from(register: RegisterDTO) -> Self {
        FarmerFields {
            email: register.email.trim().to_string(),
            username: register.username.trim().to_string(),
            first_name: register.first_name,
            last_name: register.last_name,
            phone_number: register.phone_number,
            location: register.location,
            farm_size: register.farm_size,
            date_of_birth: register.date_of_birth,
            gender: register.gender,
            password: register.password,
            confirm_password: register.confirm_password,
            role: None,
        }
    }
}

impl UserDTO {
    fn new(user: AccountUser, role: Role) -> Self {
        UserDTO {
            id: user.id,
            email: user.email,
            username: user.username,
            role,
        }
    }
}

impl From<SignedIn> for SignedInDTO {
    fn from(signed_in: SignedIn) -> Self {
        SignedInDTO {
            access: signed_in.access,
            refresh: signed_in.refresh,
            landing_route: signed_in.role.landing_route().to_string(),
            user: UserDTO::new(signed_in.user, signed_in.role),
        }
    }
}
