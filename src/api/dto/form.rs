use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::farmer::FarmerDTO;
use crate::domain::models::farmer::FarmerFields;
use crate::domain::models::form::{Field, FormMode, Step, ValidationMode};
use crate::domain::services::form::{FormChanges, FormSession, OpenForm, Submitted};

/// Account form values. Passwords are accepted but never echoed back.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct FormFieldsDTO {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub location: String,
    pub farm_size: String,
    pub date_of_birth: String,
    pub gender: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct OpenFormDTO {
    pub mode: FormMode,
    /// Required when editing.
    #[serde(default)]
    pub farmer_id: Option<u64>,
    /// Initial values. Editing without them loads the farmer from the backend.
    #[serde(default)]
    pub fields: Option<FormFieldsDTO>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateFormDTO {
    /// New values keyed by field name. Each one marks its field as touched.
    #[serde(default)]
    #[schema(value_type = Object, example = json!({"username": "grace.o"}))]
    pub fields: BTreeMap<Field, String>,
    #[serde(default)]
    pub validation_mode: Option<ValidationMode>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StepDTO {
    pub step: Step,
    pub label: String,
    /// Set once a blocked action put every error on display.
    pub has_errors: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PasswordStrengthDTO {
    #[schema(examples("Good"))]
    pub label: String,
    #[schema(examples(3))]
    pub score: u8,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FormDTO {
    pub id: Uuid,
    pub mode: FormMode,
    pub farmer_id: Option<u64>,
    pub step: Step,
    pub step_index: usize,
    pub steps: Vec<StepDTO>,
    pub fields: FormFieldsDTO,
    pub touched: Vec<Field>,
    /// Inline errors currently shown, keyed by field name.
    #[schema(value_type = Object, example = json!({"username": "Username required"}))]
    pub errors: BTreeMap<Field, String>,
    pub validation_mode: ValidationMode,
    pub can_advance: bool,
    pub all_valid: bool,
    pub password_strength: Option<PasswordStrengthDTO>,
    pub alert: Option<String>,
    pub feedback: Option<String>,
    pub saving: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmittedDTO {
    #[schema(examples("Farmer created successfully."))]
    pub message: String,
    pub farmer: FarmerDTO,
}

impl From<FormFieldsDTO> for FarmerFields {
    fn from(fields: FormFieldsDTO) -> Self {
        FarmerFields {
            email: fields.email,
            username: fields.username,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone_number: fields.phone_number,
            location: fields.location,
            farm_size: fields.farm_size,
            date_of_birth: fields.date_of_birth,
            gender: fields.gender,
            password: fields.password,
            confirm_password: fields.confirm_password,
            role: None,
        }
    }
}

impl From<&FarmerFields> for FormFieldsDTO {
    fn from(fields: &FarmerFields) -> Self {
        FormFieldsDTO {
            email: fields.email.clone(),
            username: fields.username.clone(),
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone_number: fields.phone_number.clone(),
            location: fields.location.clone(),
            farm_size: fields.farm_size.clone(),
            date_of_birth: fields.date_of_birth.clone(),
            gender: fields.gender.clone(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl From<OpenFormDTO> for OpenForm {
    fn from(open: OpenFormDTO) -> Self {
        OpenForm {
            mode: open.mode,
            farmer_id: open.farmer_id,
            initial: open.fields.map(Into::into),
        }
    }
}

impl From<UpdateFormDTO> for FormChanges {
    fn from(update: UpdateFormDTO) -> Self {
        FormChanges {
            fields: update.fields.into_iter().collect(),
            validation_mode: update.validation_mode,
        }
    }
}

impl From<FormSession> for FormDTO {
    fn from(session: FormSession) -> Self {
        let form = &session.form;
        let visible = form.visible_errors();
        let flagged = form.flagged_steps();

        let steps = form
            .steps()
            .iter()
            .map(|step| StepDTO {
                step: *step,
                label: step.label().to_string(),
                has_errors: flagged.contains(step),
            })
            .collect();

        FormDTO {
            id: session.id,
            mode: form.mode(),
            farmer_id: form.target().farmer_id(),
            step: form.current_step(),
            step_index: form.step_index(),
            steps,
            fields: form.fields().into(),
            touched: Field::ALL
                .iter()
                .copied()
                .filter(|field| form.is_touched(*field))
                .collect(),
            errors: visible
                .iter()
                .map(|(field, message)| (field, message.to_string()))
                .collect(),
            validation_mode: form.validation_mode(),
            can_advance: form.can_advance(),
            all_valid: form.all_valid(),
            password_strength: form.password_strength().map(|strength| PasswordStrengthDTO {
                label: strength.label().to_string(),
                score: strength.score(),
            }),
            alert: form.alert().map(str::to_string),
            feedback: form.feedback().map(str::to_string),
            saving: form.is_saving(),
        }
    }
}

impl From<Submitted> for SubmittedDTO {
    fn from(submitted: Submitted) -> Self {
        SubmittedDTO {
            message: submitted.message.to_string(),
            farmer: submitted.farmer.into(),
        }
    }
}
