use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::models::farmer::{FarmerFields, FarmerId, FarmerUpdate};
use crate::domain::models::form::{
    Field, FormMode, PasswordStrength, Step, ValidationErrors, ValidationMode,
};
use crate::domain::validation::{password_strength, validate};

pub static NEXT_BLOCKED: &str = "Please fix the errors before continuing.";
pub static SUBMIT_BLOCKED: &str = "Please resolve all validation errors.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in progress")]
    Busy,
    #[error("Field `{0}` cannot be changed in this mode")]
    NotEditable(Field),
    #[error("Submit is only available from the final step")]
    NotTerminal,
    #[error("{0}")]
    Blocked(&'static str),
}

/// Which farmer the form writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(FarmerId),
}

impl FormTarget {
    pub fn mode(self) -> FormMode {
        match self {
            FormTarget::Create => FormMode::Create,
            FormTarget::Edit(_) => FormMode::Edit,
        }
    }

    pub fn farmer_id(self) -> Option<FarmerId> {
        match self {
            FormTarget::Create => None,
            FormTarget::Edit(id) => Some(id),
        }
    }
}

/// What gets handed to the farmer collaborator once every field passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    Create(FarmerFields),
    Update(FarmerId, FarmerUpdate),
}

impl SubmitPayload {
    pub fn map(target: FormTarget, fields: FarmerFields) -> Self {
        match target {
            FormTarget::Create => SubmitPayload::Create(fields),
            FormTarget::Edit(id) => SubmitPayload::Update(id, fields.into()),
        }
    }
}

/// Step controller for the multi-step farmer account form.
///
/// Validation errors are never stored: they are recomputed from the fields and
/// the mode on demand, so the only state kept here is navigation and display.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountForm {
    target: FormTarget,
    fields: FarmerFields,
    step: usize,
    touched: BTreeSet<Field>,
    show_all_errors: bool,
    validation_mode: ValidationMode,
    alert: Option<String>,
    feedback: Option<String>,
    saving: bool,
}

impl AccountForm {
    pub fn open(target: FormTarget, fields: FarmerFields) -> Self {
        AccountForm {
            target,
            fields,
            step: 0,
            touched: BTreeSet::new(),
            show_all_errors: false,
            validation_mode: ValidationMode::default(),
            alert: None,
            feedback: None,
            saving: false,
        }
    }

    pub fn target(&self) -> FormTarget {
        self.target
    }

    pub fn mode(&self) -> FormMode {
        self.target.mode()
    }

    pub fn fields(&self) -> &FarmerFields {
        &self.fields
    }

    pub fn steps(&self) -> &'static [Step] {
        self.mode().steps()
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> Step {
        self.steps()[self.step]
    }

    pub fn is_terminal(&self) -> bool {
        self.step + 1 == self.steps().len()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn errors(&self) -> ValidationErrors {
        validate(&self.fields, self.mode())
    }

    /// Errors the user should currently see next to the inputs.
    pub fn visible_errors(&self) -> ValidationErrors {
        let mut errors = self.errors();

        if !self.show_all_errors {
            let live = self.validation_mode == ValidationMode::Live;
            errors.retain(|field| live && self.touched.contains(&field));
        }

        errors
    }

    pub fn step_has_errors(&self, step: Step) -> bool {
        self.errors().any(step.fields(self.mode()))
    }

    /// Steps highlighted as failing once all errors are on display.
    pub fn flagged_steps(&self) -> Vec<Step> {
        if !self.show_all_errors {
            return Vec::new();
        }

        self.steps()
            .iter()
            .copied()
            .filter(|step| self.step_has_errors(*step))
            .collect()
    }

    pub fn can_advance(&self) -> bool {
        !self.step_has_errors(self.current_step())
    }

    pub fn all_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Advisory only; not shown while editing.
    pub fn password_strength(&self) -> Option<PasswordStrength> {
        (!self.mode().is_edit()).then(|| password_strength(&self.fields.password))
    }

    pub fn set_validation_mode(&mut self, mode: ValidationMode) -> Result<(), FormError> {
        self.ensure_idle()?;
        self.validation_mode = mode;
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: String) -> Result<(), FormError> {
        self.ensure_idle()?;

        if field.step(self.mode()).is_none() {
            return Err(FormError::NotEditable(field));
        }

        self.fields.set(field, value);
        self.touched.insert(field);
        Ok(())
    }

    /// Applies a batch of edits. Nothing changes unless every field in the
    /// batch is editable.
    pub fn apply(
        &mut self,
        mode: Option<ValidationMode>,
        changes: Vec<(Field, String)>,
    ) -> Result<(), FormError> {
        self.ensure_idle()?;

        if let Some(&(field, _)) = changes
            .iter()
            .find(|(field, _)| field.step(self.mode()).is_none())
        {
            return Err(FormError::NotEditable(field));
        }

        if let Some(mode) = mode {
            self.validation_mode = mode;
        }
        for (field, value) in changes {
            self.fields.set(field, value);
            self.touched.insert(field);
        }
        Ok(())
    }

    pub fn next(&mut self) -> Result<Step, FormError> {
        self.ensure_idle()?;

        if self.is_terminal() {
            return Ok(self.current_step());
        }

        if !self.can_advance() {
            self.show_all_errors = true;
            self.alert = Some(NEXT_BLOCKED.to_string());
            return Err(FormError::Blocked(NEXT_BLOCKED));
        }

        self.step += 1;
        Ok(self.current_step())
    }

    pub fn back(&mut self) -> Result<Step, FormError> {
        self.ensure_idle()?;

        self.alert = None;
        self.step = self.step.saturating_sub(1);
        Ok(self.current_step())
    }

    /// Re-validates every field and, if all pass, marks the form busy and
    /// returns the payload for the collaborator.
    pub fn begin_submit(&mut self) -> Result<SubmitPayload, FormError> {
        self.ensure_idle()?;

        if !self.is_terminal() {
            return Err(FormError::NotTerminal);
        }

        if !self.all_valid() {
            self.show_all_errors = true;
            self.alert = Some(SUBMIT_BLOCKED.to_string());
            if !self.mode().is_edit() {
                self.step = self.steps().len() - 1;
            }
            return Err(FormError::Blocked(SUBMIT_BLOCKED));
        }

        self.saving = true;
        self.feedback = None;

        Ok(SubmitPayload::map(self.target, self.fields.clone()))
    }

    /// Records a rejected submission. Fields and step are left untouched so the
    /// user can correct and resubmit.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.feedback = Some(message.into());
    }

    fn ensure_idle(&self) -> Result<(), FormError> {
        match self.saving {
            true => Err(FormError::Busy),
            false => Ok(()),
        }
    }
}
