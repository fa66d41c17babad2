use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value::{FieldKind, FieldValue};

/// A single rule: returns a message when the value is rejected.
pub type Predicate<T> = Arc<dyn Fn(Option<&T>) -> Option<String> + Send + Sync>;

/// Coercion contract between raw submitted values and a typed constraint.
///
/// Implementations decide which raw shapes normalize to `None` (validated
/// as absent) and which are a configuration error.
pub trait FieldType: Sized + Send + Sync + 'static {
    const KIND: FieldKind;

    fn coerce(raw: Option<&FieldValue>) -> Result<Option<Self>>;
}

/// Type-erased capability the schema layer validates through.
pub trait Constraint: Send + Sync {
    /// The value shape this constraint was declared for.
    fn kind(&self) -> FieldKind;

    /// Coerce `raw` and run the predicate chain.
    ///
    /// `Ok(Some(message))` is a field failure, `Err` a configuration error.
    fn check(&self, raw: Option<&FieldValue>) -> Result<Option<String>>;
}

/// Ordered predicate chain over values of type `T`.
///
/// Builders consume and return the constraint, so a declaration reads as a
/// chain. Cloning is cheap and shares the predicates, which are immutable.
pub struct FieldConstraint<T> {
    predicates: Vec<Predicate<T>>,
}

impl<T> FieldConstraint<T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate. Registering the same rule twice runs it twice.
    pub fn define<F>(mut self, predicate: F) -> Self
    where
        F: Fn(Option<&T>) -> Option<String> + Send + Sync + 'static,
    {
        self.predicates.push(Arc::new(predicate));
        self
    }

    /// Run predicates in registration order and return the first message.
    ///
    /// An empty message counts as a pass.
    pub fn validate(&self, value: Option<&T>) -> Option<String> {
        self.predicates
            .iter()
            .find_map(|predicate| predicate(value).filter(|message| !message.is_empty()))
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<T> Default for FieldConstraint<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldConstraint<T> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldConstraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConstraint")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl<T: FieldType> Constraint for FieldConstraint<T> {
    fn kind(&self) -> FieldKind {
        T::KIND
    }

    fn check(&self, raw: Option<&FieldValue>) -> Result<Option<String>> {
        let value = T::coerce(raw)?;
        Ok(self.validate(value.as_ref()))
    }
}
