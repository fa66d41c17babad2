use crate::value::FieldKind;

/// Errors raised when a constraint is handed a value it was never declared for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    /// The raw value's shape cannot be coerced into the constraint's type.
    #[error("{expected} constraint cannot accept a {found} value")]
    ShapeMismatch {
        expected: FieldKind,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConstraintError>;
