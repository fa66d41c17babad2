use std::fmt;
use std::sync::Arc;

use formguard_constraint::{Constraint, FieldKind};

/// Declared mapping of field name to constraint for one form.
///
/// Declaration order is preserved and drives validation order. Duplicate
/// names are caught when the schema is turned into a
/// [`SchemaValidator`](crate::SchemaValidator).
#[derive(Clone, Default)]
pub struct Schema {
    entries: Vec<(String, Arc<dyn Constraint>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field with its constraint.
    pub fn field<C>(mut self, name: impl Into<String>, constraint: C) -> Self
    where
        C: Constraint + 'static,
    {
        self.entries.push((name.into(), Arc::new(constraint)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names and declared kinds, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldKind)> {
        self.entries
            .iter()
            .map(|(name, constraint)| (name.as_str(), constraint.kind()))
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Arc<dyn Constraint>)> {
        self.entries
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields()).finish()
    }
}
