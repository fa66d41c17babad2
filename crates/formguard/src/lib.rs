//! Schema-driven form validation with a reusable submission guard.
//!
//! formguard validates user-submitted form values before they reach network
//! or business logic: typed constraints per field, a schema validator that
//! collects every field error in one pass, and a session whose submit guard
//! blocks submission while any field fails.
//!
//! # Crate Structure
//!
//! - [`constraint`]: Typed constraints with first-failure-wins evaluation
//! - [`schema`]: Field and schema validators, error map, values snapshot
//! - [`session`]: Validation session and submission guard
//! - [`forms`]: Built-in form schemas
//!
//! # Example
//!
//! ```
//! use formguard::constraint::StringField;
//! use formguard::schema::{FieldValues, Schema};
//! use formguard::session::{noop, FormSubmission, SubmitOutcome, ValidationSession};
//!
//! let schema = Schema::new()
//!     .field("userName", StringField::new().required("enter a user name"));
//! let mut session = ValidationSession::new(schema).unwrap();
//! let values = FieldValues::new().with("userName", "");
//!
//! let mut submitted = false;
//! let outcome = {
//!     let mut guard = session.handle_submit(
//!         &values,
//!         |_: &mut FormSubmission| submitted = true,
//!         noop,
//!     );
//!     guard(&mut FormSubmission::new("login")).unwrap()
//! };
//!
//! assert_eq!(outcome, SubmitOutcome::Rejected);
//! assert!(!submitted);
//! assert_eq!(session.errors().get("userName"), Some("enter a user name"));
//! ```

pub mod forms;

/// Re-export constraint types.
pub mod constraint {
    pub use formguard_constraint::*;
}

/// Re-export schema types.
pub mod schema {
    pub use formguard_schema::*;
}

/// Re-export session types.
pub mod session {
    pub use formguard_session::*;
}
