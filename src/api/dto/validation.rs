use std::borrow::Cow;

use validator::ValidationError;

use crate::api::dto::account::RegisterDTO;
use crate::api::dto::crop::CropDTO;
use crate::domain::validation;

fn rule(error: Option<&'static str>) -> Result<(), ValidationError> {
    match error {
        Some(message) => Err(ValidationError::new("0").with_message(Cow::from(message))),
        None => Ok(()),
    }
}

/// Struct-level failure reported under `field` rather than `__all__`.
fn field_rule(field: &'static str, error: Option<&'static str>) -> Result<(), ValidationError> {
    rule(error).map_err(|mut error| {
        error.add_param(Cow::from("field"), &field);
        error
    })
}

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    rule(value.trim().is_empty().then_some(message))
}

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    rule(validation::email_error(email))
}

pub fn is_username(username: &str) -> Result<(), ValidationError> {
    rule(validation::username_error(username))
}

pub fn is_first_name(first_name: &str) -> Result<(), ValidationError> {
    required(first_name, "First name required")
}

pub fn is_last_name(last_name: &str) -> Result<(), ValidationError> {
    required(last_name, "Last name required")
}

pub fn is_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    rule(validation::phone_number_error(phone_number))
}

pub fn is_farm_size(farm_size: &str) -> Result<(), ValidationError> {
    rule(validation::farm_size_error(farm_size))
}

pub fn is_date_of_birth(date_of_birth: &str) -> Result<(), ValidationError> {
    rule(validation::date_of_birth_error(date_of_birth))
}

pub fn is_gender(gender: &str) -> Result<(), ValidationError> {
    rule(validation::gender_error(gender))
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    rule(validation::password_error(password))
}

pub fn is_crop_name(name: &str) -> Result<(), ValidationError> {
    required(name, "Name is required")
}

pub fn is_confirmed(register: &RegisterDTO) -> Result<(), ValidationError> {
    field_rule(
        "confirm_password",
        validation::confirm_password_error(&register.password, &register.confirm_password),
    )
}

pub fn has_crop_type(crop: &CropDTO) -> Result<(), ValidationError> {
    field_rule("type", crop.kind.trim().is_empty().then_some("Type is required"))
}

pub fn is_planted_date(planted_date: &str) -> Result<(), ValidationError> {
    match planted_date.is_empty() {
        true => rule(Some("Planted date is required")),
        false => rule(validation::date_of_birth_error(planted_date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_follow_the_form_rules() {
        let message = |result: Result<(), ValidationError>| {
            result.unwrap_err().message.map(|message| message.to_string())
        };

        assert_eq!(message(is_username("ab")).as_deref(), Some("3-30 chars, letters/numbers . _ - only"));
        assert_eq!(message(is_planted_date("")).as_deref(), Some("Planted date is required"));
        assert_eq!(message(is_planted_date("01/03/2024")).as_deref(), Some("Format: YYYY-MM-DD"));
        assert!(is_planted_date("2024-03-01").is_ok());
        assert!(is_phone_number("").is_ok());
    }

    #[test]
    fn test_struct_rules_name_their_field() {
        let crop = CropDTO {
            name: "Maize".to_string(),
            kind: "  ".to_string(),
            quantity: 1.0,
            planted_date: "2024-03-01".to_string(),
            harvested: false,
            farmer: None,
        };

        let error = has_crop_type(&crop).unwrap_err();

        assert_eq!(error.params["field"], "type");
        assert_eq!(error.message.as_deref(), Some("Type is required"));
    }
}
