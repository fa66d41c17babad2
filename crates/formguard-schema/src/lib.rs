//! Schema-driven validation of submitted form values.
//!
//! A [`Schema`] maps field names to typed constraints. A
//! [`SchemaValidator`] runs every field on each pass, collects one message
//! per failing field into an [`ErrorSink`], and reports whether anything
//! failed. Values whose shape disagrees with the declared constraint are a
//! configuration error, never a silent pass.

pub mod config;
pub mod error;
pub mod error_map;
pub mod field;
pub mod schema;
pub mod validator;
pub mod values;

pub use config::SchemaConfig;
pub use error::{Result, SchemaError};
pub use error_map::{ErrorSink, ValidationErrors};
pub use field::FieldValidator;
pub use schema::Schema;
pub use validator::SchemaValidator;
pub use values::FieldValues;
