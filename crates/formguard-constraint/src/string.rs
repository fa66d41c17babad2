use crate::error::{ConstraintError, Result};
use crate::field::{FieldConstraint, FieldType};
use crate::value::{FieldKind, FieldValue};

/// Constraint over single-line text inputs.
pub type StringField = FieldConstraint<String>;

impl FieldType for String {
    const KIND: FieldKind = FieldKind::String;

    fn coerce(raw: Option<&FieldValue>) -> Result<Option<Self>> {
        match raw {
            None => Ok(None),
            Some(FieldValue::Text(text)) => Ok(Some(text.clone())),
            Some(FieldValue::Number(number)) => Ok(Some(number.to_string())),
            Some(other) => Err(ConstraintError::ShapeMismatch {
                expected: Self::KIND,
                found: other.shape_name(),
            }),
        }
    }
}

// Length rules count Unicode scalar values. Only `required` reports absence.
impl FieldConstraint<String> {
    /// Fails on absent input or the empty string.
    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(text) if !text.is_empty() => None,
            _ => Some(message.clone()),
        })
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(text) if text.chars().count() < min => Some(message.clone()),
            _ => None,
        })
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(text) if text.chars().count() > max => Some(message.clone()),
            _ => None,
        })
    }

    /// Accept only one of the listed options (exact match).
    pub fn one_of<I, S>(self, options: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let message = message.into();
        self.define(move |value| match value {
            Some(text) if !options.iter().any(|option| option == text) => Some(message.clone()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Constraint;

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn required_fails_on_empty_and_absent() {
        let field = StringField::new().required("enter a name");

        assert_eq!(field.validate(None), text("enter a name"));
        assert_eq!(field.validate(Some(&String::new())), text("enter a name"));
        assert_eq!(field.validate(Some(&"a".to_string())), None);
    }

    #[test]
    fn required_defers_to_later_rules() {
        let field = StringField::new()
            .required("required")
            .min_length(4, "too short");

        assert_eq!(field.validate(Some(&"abc".to_string())), text("too short"));
    }

    #[test]
    fn min_length_boundary() {
        let field = StringField::new().min_length(4, "too short");

        assert_eq!(field.validate(Some(&"abc".to_string())), text("too short"));
        assert_eq!(field.validate(Some(&"abcd".to_string())), None);
        assert_eq!(field.validate(Some(&"abcde".to_string())), None);
        assert_eq!(field.validate(None), None);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let field = StringField::new()
            .min_length(4, "too short")
            .max_length(4, "too long");

        assert_eq!(field.validate(Some(&"パスワード".to_string())), text("too long"));
        assert_eq!(field.validate(Some(&"ぱすわ".to_string())), text("too short"));
        assert_eq!(field.validate(Some(&"ぱすわど".to_string())), None);
    }

    #[test]
    fn one_of_matches_exactly() {
        let field = StringField::new().one_of(["all", "active", "completed"], "bad filter");

        assert_eq!(field.validate(Some(&"active".to_string())), None);
        assert_eq!(field.validate(Some(&"Active".to_string())), text("bad filter"));
        assert_eq!(field.validate(None), None);
    }

    #[test]
    fn coerces_numbers_and_rejects_lists() {
        let field = StringField::new().min_length(2, "too short");

        assert_eq!(field.check(Some(&FieldValue::Number(7.0))).unwrap(), text("too short"));
        assert_eq!(field.check(Some(&FieldValue::Number(42.0))).unwrap(), None);
        assert_eq!(
            field.check(Some(&FieldValue::from(vec!["a"]))),
            Err(ConstraintError::ShapeMismatch {
                expected: FieldKind::String,
                found: "text list",
            })
        );
    }
}
