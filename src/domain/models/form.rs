use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether the account form creates a new farmer or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn steps(self) -> &'static [Step] {
        match self {
            FormMode::Create => &[Step::Account, Step::Profile, Step::Security],
            FormMode::Edit => &[Step::Account, Step::Profile],
        }
    }

    pub fn is_edit(self) -> bool {
        self == FormMode::Edit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Username,
    FirstName,
    LastName,
    PhoneNumber,
    Location,
    FarmSize,
    DateOfBirth,
    Gender,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Email,
        Field::Username,
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Location,
        Field::FarmSize,
        Field::DateOfBirth,
        Field::Gender,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Username => "username",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::PhoneNumber => "phone_number",
            Field::Location => "location",
            Field::FarmSize => "farm_size",
            Field::DateOfBirth => "date_of_birth",
            Field::Gender => "gender",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    /// The step that owns this field in the given mode, if any.
    pub fn step(self, mode: FormMode) -> Option<Step> {
        mode.steps()
            .iter()
            .copied()
            .find(|step| step.fields(mode).contains(&self))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Account,
    Profile,
    Security,
}

impl Step {
    /// Fields gated by this step. Email is immutable once the account exists,
    /// so it only belongs to the account step while creating.
    pub fn fields(self, mode: FormMode) -> &'static [Field] {
        match (self, mode) {
            (Step::Account, FormMode::Create) => &[
                Field::Email,
                Field::Username,
                Field::FirstName,
                Field::LastName,
            ],
            (Step::Account, FormMode::Edit) => {
                &[Field::Username, Field::FirstName, Field::LastName]
            }
            (Step::Profile, _) => &[
                Field::PhoneNumber,
                Field::Location,
                Field::FarmSize,
                Field::DateOfBirth,
                Field::Gender,
            ],
            (Step::Security, FormMode::Create) => &[Field::Password, Field::ConfirmPassword],
            (Step::Security, FormMode::Edit) => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Account => "Account",
            Step::Profile => "Profile",
            Step::Security => "Security",
        }
    }
}

/// Controls when inline errors become visible for touched fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Live,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus<'a> {
    Valid,
    Invalid(&'a str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn status(&self, field: Field) -> FieldStatus<'_> {
        match self.get(field) {
            Some(message) => FieldStatus::Invalid(message),
            None => FieldStatus::Valid,
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        matches!(self.status(field), FieldStatus::Invalid(_))
    }

    pub fn any(&self, fields: &[Field]) -> bool {
        fields.iter().any(|field| self.contains(*field))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn retain(&mut self, mut keep: impl FnMut(Field) -> bool) {
        self.0.retain(|field, _| keep(*field));
    }
}

/// Advisory password strength shown next to the password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
    Excellent,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => PasswordStrength::Weak,
            1 => PasswordStrength::Fair,
            2 => PasswordStrength::Good,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::Excellent,
        }
    }

    pub fn score(self) -> u8 {
        match self {
            PasswordStrength::Empty | PasswordStrength::Weak => 0,
            PasswordStrength::Fair => 1,
            PasswordStrength::Good => 2,
            PasswordStrength::Strong => 3,
            PasswordStrength::Excellent => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Empty => "Empty",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::Excellent => "Excellent",
        }
    }
}
