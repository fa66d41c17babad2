use crate::error::{ConstraintError, Result};
use crate::field::{FieldConstraint, FieldType};
use crate::value::{FieldKind, FieldValue};

/// Constraint over numeric inputs.
///
/// Text that does not parse as a finite number is validated as absent, so a
/// `required` rule still fires on "abc".
pub type NumberField = FieldConstraint<f64>;

/// Parse text as a finite number. Surrounding whitespace is ignored.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Number;

    fn coerce(raw: Option<&FieldValue>) -> Result<Option<Self>> {
        match raw {
            None => Ok(None),
            Some(FieldValue::Number(number)) => Ok(Some(*number).filter(|n| n.is_finite())),
            Some(FieldValue::Text(text)) => Ok(parse_number(text)),
            Some(other) => Err(ConstraintError::ShapeMismatch {
                expected: Self::KIND,
                found: other.shape_name(),
            }),
        }
    }
}

impl FieldConstraint<f64> {
    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(_) => None,
            None => Some(message.clone()),
        })
    }

    pub fn min(self, min: f64, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(number) if *number < min => Some(message.clone()),
            _ => None,
        })
    }

    pub fn max(self, max: f64, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(number) if *number > max => Some(message.clone()),
            _ => None,
        })
    }

    pub fn integer(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.define(move |value| match value {
            Some(number) if number.fract() != 0.0 => Some(message.clone()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Constraint;

    #[test]
    fn parse_number_accepts_only_finite_numerics() {
        assert_eq!(parse_number(" 12 "), Some(12.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn non_numeric_text_is_treated_as_absent() {
        let field = NumberField::new().required("enter a number");

        let absent = field.check(None).unwrap();
        let garbage = field.check(Some(&FieldValue::from("abc"))).unwrap();

        assert_eq!(absent, Some("enter a number".to_string()));
        assert_eq!(garbage, absent);
        assert_eq!(field.check(Some(&FieldValue::from("5"))).unwrap(), None);
    }

    #[test]
    fn range_rules_skip_absent_values() {
        let field = NumberField::new().min(1.0, "too small").max(10.0, "too big");

        assert_eq!(field.validate(None), None);
        assert_eq!(field.validate(Some(&0.0)), Some("too small".to_string()));
        assert_eq!(field.validate(Some(&1.0)), None);
        assert_eq!(field.validate(Some(&10.0)), None);
        assert_eq!(field.validate(Some(&10.5)), Some("too big".to_string()));
    }

    #[test]
    fn integer_rejects_fractions() {
        let field = NumberField::new().integer("whole numbers only");

        assert_eq!(field.validate(Some(&3.0)), None);
        assert_eq!(
            field.validate(Some(&3.25)),
            Some("whole numbers only".to_string())
        );
    }

    #[test]
    fn lists_are_a_shape_mismatch() {
        let field = NumberField::new().required("required");
        let err = field.check(Some(&FieldValue::from(vec!["1"]))).unwrap_err();

        assert!(matches!(
            err,
            ConstraintError::ShapeMismatch {
                expected: FieldKind::Number,
                ..
            }
        ));
    }
}
