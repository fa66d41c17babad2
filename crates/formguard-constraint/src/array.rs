use crate::error::{ConstraintError, Result};
use crate::field::{FieldConstraint, FieldType};
use crate::value::{FieldKind, FieldValue};

/// Constraint over multi-value inputs (checkbox groups, multi-selects).
pub type StringArrayField = FieldConstraint<Vec<String>>;

impl FieldType for Vec<String> {
    const KIND: FieldKind = FieldKind::StringArray;

    fn coerce(raw: Option<&FieldValue>) -> Result<Option<Self>> {
        match raw {
            None => Ok(None),
            Some(FieldValue::TextList(items)) => Ok(Some(items.clone())),
            Some(other) => Err(ConstraintError::ShapeMismatch {
                expected: Self::KIND,
                found: other.shape_name(),
            }),
        }
    }
}

impl FieldConstraint<Vec<String>> {
    /// Fails on absent input or an empty list.
    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(items) if !items.is_empty() => None,
            _ => Some(message.clone()),
        })
    }

    pub fn min_items(self, min: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(items) if items.len() < min => Some(message.clone()),
            _ => None,
        })
    }

    pub fn max_items(self, max: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(items) if items.len() > max => Some(message.clone()),
            _ => None,
        })
    }

    pub fn no_blank_items(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(items) if items.iter().any(|item| item.trim().is_empty()) => {
                Some(message.clone())
            }
            _ => None,
        })
    }
}
