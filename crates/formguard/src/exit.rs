use std::fmt;
use std::io;

use formguard_schema::SchemaError;

// Exit codes. DATA_INVALID means "submission rejected"; schema and
// value-shape bugs exit with INTERNAL.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => USAGE,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    let code = match &err {
        SchemaError::InvalidJson(_) => USAGE,
        SchemaError::ShapeMismatch { .. }
        | SchemaError::UnknownField(_)
        | SchemaError::DuplicateField(_)
        | SchemaError::NotInSchema(_) => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_errors_map_to_exit_codes() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(schema_error("x", SchemaError::InvalidJson(json)).code, USAGE);
        assert_eq!(
            schema_error("x", SchemaError::UnknownField("extra".into())).code,
            INTERNAL
        );
        assert_eq!(
            schema_error("x", SchemaError::DuplicateField("name".into())).code,
            INTERNAL
        );
    }

    #[test]
    fn shape_mismatch_is_not_a_rejection() {
        let source = formguard_constraint::ConstraintError::ShapeMismatch {
            expected: formguard_constraint::FieldKind::StringArray,
            found: "text",
        };
        let err = schema_error(
            "check tags",
            SchemaError::ShapeMismatch {
                field: "tags".into(),
                source,
            },
        );
        assert_eq!(err.code, INTERNAL);
        assert_ne!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("check tags: "));
    }

    #[test]
    fn io_errors_keep_context() {
        let err = io_error(
            "failed reading values.json",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.code, USAGE);
        assert_eq!(err.to_string(), "failed reading values.json: missing");
    }
}
