use std::fmt;
use std::sync::Arc;

use formguard_constraint::{Constraint, FieldKind, FieldValue};
use tracing::{trace, warn};

use crate::error::{Result, SchemaError};
use crate::error_map::ErrorSink;

/// Binds one schema field to its constraint.
#[derive(Clone)]
pub struct FieldValidator {
    name: String,
    constraint: Arc<dyn Constraint>,
}

impl FieldValidator {
    pub fn new(name: impl Into<String>, constraint: Arc<dyn Constraint>) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.constraint.kind()
    }

    /// Validate a raw value; returns `true` when the field failed.
    ///
    /// A failure reports exactly one message to `sink`. A value the
    /// constraint cannot accept is a configuration error.
    pub fn validate(&self, raw: Option<&FieldValue>, sink: &mut dyn ErrorSink) -> Result<bool> {
        let outcome = self.constraint.check(raw).map_err(|source| {
            warn!(field = %self.name, error = %source, "field constraint rejected value shape");
            SchemaError::ShapeMismatch {
                field: self.name.clone(),
                source,
            }
        })?;

        match outcome {
            Some(message) => {
                trace!(field = %self.name, %message, "field failed validation");
                sink.report(&self.name, &message);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}
