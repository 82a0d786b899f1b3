use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::farmer::FarmerFields;
use crate::domain::models::form::{Field, FormMode, PasswordStrength, ValidationErrors};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").unwrap());

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]{3,30}$").unwrap());

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

static SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>_\-+=]"#).unwrap());

pub const GENDER_OPTIONS: [&str; 3] = ["male", "female", "other"];

pub fn email_error(email: &str) -> Option<&'static str> {
    let email = email.trim();

    if email.is_empty() {
        Some("Email is required")
    } else if !EMAIL_REGEX.is_match(email) {
        Some("Invalid email format")
    } else {
        None
    }
}

pub fn username_error(username: &str) -> Option<&'static str> {
    let username = username.trim();

    if username.is_empty() {
        Some("Username required")
    } else if !USERNAME_REGEX.is_match(username) {
        Some("3-30 chars, letters/numbers . _ - only")
    } else {
        None
    }
}

pub fn phone_number_error(phone_number: &str) -> Option<&'static str> {
    if phone_number.is_empty() {
        return None;
    }

    let digits = phone_number.chars().filter(char::is_ascii_digit).count();

    (!(7..=15).contains(&digits)).then_some("7-15 digits allowed")
}

pub fn farm_size_error(farm_size: &str) -> Option<&'static str> {
    if farm_size.is_empty() {
        return None;
    }

    // Whitespace-only input reads as zero. Only plain decimal notation counts,
    // so "inf" and "0x10" are both rejected.
    let trimmed = farm_size.trim();
    let valid = trimmed.is_empty()
        || trimmed
            .parse::<f64>()
            .is_ok_and(|value| value.is_finite() && value >= 0.0);

    (!valid).then_some("Must be a positive number")
}

pub fn date_of_birth_error(date_of_birth: &str) -> Option<&'static str> {
    (!date_of_birth.is_empty() && !DATE_REGEX.is_match(date_of_birth))
        .then_some("Format: YYYY-MM-DD")
}

pub fn gender_error(gender: &str) -> Option<&'static str> {
    (!gender.is_empty() && !GENDER_OPTIONS.contains(&gender)).then_some("Invalid selection")
}

pub fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password required")
    } else if password.chars().count() < 8 {
        Some("At least 8 characters")
    } else {
        None
    }
}

pub fn confirm_password_error(password: &str, confirm_password: &str) -> Option<&'static str> {
    if confirm_password.is_empty() {
        Some("Confirm password")
    } else if password != confirm_password {
        Some("Passwords do not match")
    } else {
        None
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

/// Checks every field relevant to `mode`. Email and both passwords are only
/// checked when creating an account.
pub fn validate(fields: &FarmerFields, mode: FormMode) -> ValidationErrors {
    let create = !mode.is_edit();

    let checks = [
        (Field::Email, create.then(|| email_error(&fields.email)).flatten()),
        (Field::Username, username_error(&fields.username)),
        (
            Field::FirstName,
            required(&fields.first_name, "First name required"),
        ),
        (Field::LastName, required(&fields.last_name, "Last name required")),
        (Field::PhoneNumber, phone_number_error(&fields.phone_number)),
        (Field::FarmSize, farm_size_error(&fields.farm_size)),
        (Field::DateOfBirth, date_of_birth_error(&fields.date_of_birth)),
        (Field::Gender, gender_error(&fields.gender)),
        (
            Field::Password,
            create.then(|| password_error(&fields.password)).flatten(),
        ),
        (
            Field::ConfirmPassword,
            create
                .then(|| confirm_password_error(&fields.password, &fields.confirm_password))
                .flatten(),
        ),
    ];

    let mut errors = ValidationErrors::new();

    for (field, error) in checks {
        if let Some(message) = error {
            errors.add(field, message);
        }
    }

    errors
}

pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Empty;
    }

    let score = [
        password.chars().count() >= 8,
        UPPERCASE.is_match(password),
        DIGIT.is_match(password),
        SYMBOL.is_match(password),
    ]
    .into_iter()
    .filter(|passed| *passed)
    .count();

    PasswordStrength::from_score(score as u8)
}
