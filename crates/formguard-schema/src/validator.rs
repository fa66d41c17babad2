use std::collections::HashSet;

use formguard_constraint::FieldKind;
use tracing::{debug, warn};

use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::error_map::ErrorSink;
use crate::field::FieldValidator;
use crate::schema::Schema;
use crate::values::FieldValues;

/// Runs every field validator of a schema over a values snapshot.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    fields: Vec<FieldValidator>,
    config: SchemaConfig,
}

impl SchemaValidator {
    /// Build a validator with default config.
    pub fn new(schema: Schema) -> Result<Self> {
        Self::with_config(schema, SchemaConfig::default())
    }

    /// Build a validator with explicit config.
    pub fn with_config(schema: Schema, config: SchemaConfig) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(schema.len());

        for (name, constraint) in schema.into_entries() {
            if !seen.insert(name.clone()) {
                return Err(SchemaError::DuplicateField(name));
            }
            fields.push(FieldValidator::new(name, constraint));
        }

        Ok(Self { fields, config })
    }

    /// Validate every field; returns `true` when at least one failed.
    ///
    /// All fields run even after a failure so every message is collected in
    /// one pass. Missing fields are validated as absent.
    pub fn validate_all(&self, values: &FieldValues, sink: &mut dyn ErrorSink) -> Result<bool> {
        if self.config.reject_unknown_fields {
            if let Some(unknown) = values.fields().find(|name| !self.has_field(name)) {
                warn!(field = unknown, "values contain undeclared field");
                return Err(SchemaError::UnknownField(unknown.to_string()));
            }
        }

        let mut failed = false;
        for field in &self.fields {
            failed |= field.validate(values.get(field.name()), sink)?;
        }

        debug!(fields = self.fields.len(), failed, "validated form values");
        Ok(failed)
    }

    /// Validate a single declared field.
    pub fn validate_field(
        &self,
        name: &str,
        values: &FieldValues,
        sink: &mut dyn ErrorSink,
    ) -> Result<bool> {
        let field = self
            .fields
            .iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| SchemaError::NotInSchema(name.to_string()))?;
        field.validate(values.get(name), sink)
    }

    /// Check if a field is declared.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name() == name)
    }

    /// Declared field names, in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldValidator::name)
    }

    /// Declared fields and kinds, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldKind)> {
        self.fields.iter().map(|field| (field.name(), field.kind()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }
}
