use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::FormError;

use super::field::Field;
use super::notification::Notifier;
use super::record::{FormRecord, FormValues};
use super::validation::{ValidationErrors, ValidationSchema};

pub const DEFAULT_NOTIFICATION_TITLE: &str = "Form Submitted";

/// When field errors are recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Errors change only when the form is submitted.
    #[default]
    OnSubmit,
    /// Each change re-validates the edited field.
    OnChange,
}

impl ValidationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationMode::OnSubmit => "on-submit",
            ValidationMode::OnChange => "on-change",
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(FormRecord),
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Owns field values, the current error map, and submission handling.
pub struct FormController<N: Notifier> {
    values: FormValues,
    errors: ValidationErrors,
    schema: ValidationSchema,
    notifier: N,
    mode: ValidationMode,
    notification_title: String,
    revision: u64,
}

impl<N: Notifier> FormController<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            values: FormValues::default(),
            errors: ValidationErrors::default(),
            schema: ValidationSchema::interview(),
            notifier,
            mode: ValidationMode::default(),
            notification_title: DEFAULT_NOTIFICATION_TITLE.to_string(),
            revision: 0,
        }
    }

    pub fn with_config(config: &Config, notifier: N) -> Self {
        let mut controller = Self::new(notifier);
        controller.mode = config.validation_mode;
        controller.notification_title = config.notification_title.clone();
        controller
    }

    /// Stores `value` verbatim. Only validates in [`ValidationMode::OnChange`].
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        tracing::debug!(field = field.key(), "field updated");

        if self.mode == ValidationMode::OnChange {
            match self.schema.validate_field(field, self.values.get(field)) {
                Some(error) => self.errors.insert(error),
                None => self.errors.remove(field),
            }
        }
        self.bump();
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<Field, FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(field)
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    /// Incremented after every state change; renderers redraw when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validates all fields at once. A valid form is handed to the notifier
    /// and cleared; an invalid one keeps its values and records the errors.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = self.schema.validate(&self.values);
        let outcome = if errors.is_empty() {
            let record = FormRecord::from_values(&self.values);
            self.notifier.notify(&self.notification_title, &record.payload());
            tracing::info!("interview form submitted");
            self.values.clear();
            self.errors.clear();
            SubmitOutcome::Submitted(record)
        } else {
            tracing::debug!(invalid_fields = errors.len(), "submission rejected");
            self.errors = errors.clone();
            SubmitOutcome::Rejected(errors)
        };
        self.bump();
        outcome
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
