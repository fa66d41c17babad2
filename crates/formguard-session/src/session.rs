use formguard_schema::{
    FieldValues, Result, Schema, SchemaConfig, SchemaValidator, ValidationErrors,
};
use tracing::debug;

use crate::event::SubmitEvent;

/// Whether the last pass left errors for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No field errors.
    Clean,
    /// At least one field carries an error message.
    Invalid,
}

/// Which callback a submission guard invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

impl SubmitOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => "accepted",
            SubmitOutcome::Rejected => "rejected",
        }
    }
}

/// Owns the error map for one form and produces its submission guard.
#[derive(Debug, Clone)]
pub struct ValidationSession {
    validator: SchemaValidator,
    errors: ValidationErrors,
}

impl ValidationSession {
    /// Create a session for `schema` with default config.
    pub fn new(schema: Schema) -> Result<Self> {
        Self::with_config(schema, SchemaConfig::default())
    }

    /// Create a session with explicit config.
    pub fn with_config(schema: Schema, config: SchemaConfig) -> Result<Self> {
        let validator = SchemaValidator::with_config(schema, config)?;
        Ok(Self::from_validator(validator))
    }

    pub fn from_validator(validator: SchemaValidator) -> Self {
        Self {
            validator,
            errors: ValidationErrors::new(),
        }
    }

    /// Errors from the most recent pass.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn validator(&self) -> &SchemaValidator {
        &self.validator
    }

    pub fn state(&self) -> SessionState {
        if self.errors.is_empty() {
            SessionState::Clean
        } else {
            SessionState::Invalid
        }
    }

    /// Discard all errors from previous passes.
    pub fn reset_error(&mut self) {
        self.errors = ValidationErrors::new();
    }

    /// Reset, then validate every field. Returns `true` when any field failed.
    ///
    /// Errors from a pass aborted by a configuration error are discarded;
    /// the session is left clean.
    pub fn validate(&mut self, values: &FieldValues) -> Result<bool> {
        self.reset_error();
        let mut errors = ValidationErrors::new();
        let failed = self.validator.validate_all(values, &mut errors)?;
        self.errors = errors;
        debug!(failed, errors = self.errors.len(), "validation pass complete");
        Ok(failed)
    }

    /// Build a submission guard over a values snapshot.
    ///
    /// Each call of the guard prevents the event's default action, clears
    /// stale errors, validates, then runs `on_error` if any field failed or
    /// `on_success` otherwise. A configuration error is returned before
    /// either callback runs.
    pub fn handle_submit<'a, E, S, F>(
        &'a mut self,
        values: &'a FieldValues,
        mut on_success: S,
        mut on_error: F,
    ) -> impl FnMut(&mut E) -> Result<SubmitOutcome> + 'a
    where
        E: SubmitEvent,
        S: FnMut(&mut E) + 'a,
        F: FnMut(&mut E) + 'a,
    {
        move |event: &mut E| {
            event.prevent_default();

            if self.validate(values)? {
                on_error(event);
                return Ok(SubmitOutcome::Rejected);
            }

            on_success(event);
            Ok(SubmitOutcome::Accepted)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use formguard_constraint::{NumberField, StringArrayField, StringField};
    use formguard_schema::SchemaError;

    use super::*;
    use crate::event::{noop, FormSubmission};

    fn signup_schema() -> Schema {
        Schema::new()
            .field("userName", StringField::new().required("enter a user name"))
            .field(
                "password",
                StringField::new()
                    .required("enter a password")
                    .min_length(4, "password must be at least 4 characters"),
            )
    }

    fn invalid_values() -> FieldValues {
        FieldValues::new().with("userName", "").with("password", "abc")
    }

    fn valid_values() -> FieldValues {
        FieldValues::new()
            .with("userName", "alice")
            .with("password", "abcd")
    }

    #[test]
    fn new_session_is_clean() {
        let session = ValidationSession::new(signup_schema()).unwrap();
        assert_eq!(session.state(), SessionState::Clean);
        assert!(session.errors().is_empty());
        assert_eq!(session.validator().len(), 2);
    }

    #[test]
    fn reset_then_validate_leaves_no_stale_errors() {
        let mut session = ValidationSession::new(signup_schema()).unwrap();

        assert!(session.validate(&invalid_values()).unwrap());
        assert_eq!(session.errors().len(), 2);

        session.reset_error();
        assert_eq!(session.state(), SessionState::Clean);

        assert!(!session.validate(&valid_values()).unwrap());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn fixed_field_loses_its_error_on_next_pass() {
        let mut session = ValidationSession::new(signup_schema()).unwrap();
        session.validate(&invalid_values()).unwrap();

        let partly_fixed = FieldValues::new()
            .with("userName", "alice")
            .with("password", "abc");
        assert!(session.validate(&partly_fixed).unwrap());

        assert!(!session.errors().contains("userName"));
        assert!(session.errors().contains("password"));
    }

    #[test]
    fn guard_cycles_clean_invalid_clean() {
        let mut session = ValidationSession::new(signup_schema()).unwrap();
        let invalid = invalid_values();
        let valid = valid_values();
        let mut successes = 0;
        let mut failures = 0;

        {
            let mut guard = session.handle_submit(
                &invalid,
                |_: &mut FormSubmission| successes += 1,
                |_: &mut FormSubmission| failures += 1,
            );
            let mut event = FormSubmission::new("signup");
            assert_eq!(guard(&mut event).unwrap(), SubmitOutcome::Rejected);
            assert!(event.is_default_prevented());
        }
        assert_eq!((successes, failures), (0, 1));
        assert_eq!(session.state(), SessionState::Invalid);
        assert_eq!(session.errors().get("userName"), Some("enter a user name"));

        {
            let mut guard = session.handle_submit(
                &valid,
                |_: &mut FormSubmission| successes += 1,
                |_: &mut FormSubmission| failures += 1,
            );
            let mut event = FormSubmission::new("signup");
            assert_eq!(guard(&mut event).unwrap(), SubmitOutcome::Accepted);
            assert!(event.is_default_prevented());
        }
        assert_eq!((successes, failures), (1, 1));
        assert_eq!(session.state(), SessionState::Clean);
    }

    #[test]
    fn guard_is_reusable_for_the_same_snapshot() {
        let mut session = ValidationSession::new(signup_schema()).unwrap();
        let values = invalid_values();
        let mut failures = 0;

        {
            let mut guard = session.handle_submit(
                &values,
                |_: &mut FormSubmission| panic!("must not submit invalid values"),
                |_: &mut FormSubmission| failures += 1,
            );
            let mut event = FormSubmission::new("signup");
            guard(&mut event).unwrap();
            guard(&mut event).unwrap();
        }

        assert_eq!(failures, 2);
        assert_eq!(session.errors().len(), 2);
    }

    #[test]
    fn callbacks_receive_the_triggering_event() {
        let mut session = ValidationSession::new(signup_schema()).unwrap();
        let values = valid_values();
        let mut seen = None;

        {
            let mut guard = session.handle_submit(
                &values,
                |event: &mut FormSubmission| seen = Some(event.form().to_string()),
                noop,
            );
            guard(&mut FormSubmission::new("signup")).unwrap();
        }

        assert_eq!(seen.as_deref(), Some("signup"));
    }

    #[test]
    fn configuration_error_skips_both_callbacks() {
        let schema = Schema::new()
            .field("tags", StringArrayField::new().required("pick a tag"))
            .field("age", NumberField::new().required("enter an age"));
        let mut session = ValidationSession::new(schema).unwrap();
        session.validate(&FieldValues::new()).unwrap();
        assert_eq!(session.state(), SessionState::Invalid);

        let values = FieldValues::new().with("tags", "solo");
        let calls = Cell::new(0);
        let mut event = FormSubmission::new("tags");
        {
            let mut guard = session.handle_submit(
                &values,
                |_: &mut FormSubmission| calls.set(calls.get() + 1),
                |_: &mut FormSubmission| calls.set(calls.get() + 1),
            );
            assert!(matches!(
                guard(&mut event),
                Err(SchemaError::ShapeMismatch { .. })
            ));
        }

        assert_eq!(calls.get(), 0);
        assert!(event.is_default_prevented());
        assert_eq!(session.state(), SessionState::Clean);
    }

    #[test]
    fn aborted_pass_keeps_no_partial_errors() {
        let schema = Schema::new()
            .field("userName", StringField::new().required("enter a user name"))
            .field("tags", StringArrayField::new());
        let mut session = ValidationSession::new(schema).unwrap();
        let values = FieldValues::new().with("tags", "solo");

        assert!(matches!(
            session.validate(&values),
            Err(SchemaError::ShapeMismatch { ref field, .. }) if field == "tags"
        ));
        assert!(session.errors().is_empty());
        assert_eq!(session.state(), SessionState::Clean);
    }

    #[test]
    fn duplicate_schema_fields_fail_session_creation() {
        let schema = Schema::new()
            .field("userName", StringField::new())
            .field("userName", StringField::new());

        assert!(matches!(
            ValidationSession::new(schema),
            Err(SchemaError::DuplicateField(_))
        ));
    }

    #[test]
    fn outcome_names() {
        assert_eq!(SubmitOutcome::Accepted.as_str(), "accepted");
        assert_eq!(SubmitOutcome::Rejected.as_str(), "rejected");
    }
}
