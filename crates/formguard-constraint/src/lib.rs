//! Typed, ordered field constraints.
//!
//! A constraint is an ordered list of predicates over one value type.
//! Predicates run in registration order and the first message wins.
//!
//! - [`StringField`] for text inputs
//! - [`NumberField`] for numeric inputs (non-numeric text counts as absent)
//! - [`StringArrayField`] for multi-value inputs
//!
//! New value shapes plug in by implementing [`FieldType`]; the schema layer
//! only ever talks to the [`Constraint`] trait.

pub mod array;
pub mod error;
pub mod field;
pub mod number;
pub mod string;
pub mod value;

pub use array::StringArrayField;
pub use error::{ConstraintError, Result};
pub use field::{Constraint, FieldConstraint, FieldType, Predicate};
pub use number::{parse_number, NumberField};
pub use string::StringField;
pub use value::{FieldKind, FieldValue};
