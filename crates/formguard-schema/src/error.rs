use formguard_constraint::ConstraintError;

/// Configuration errors: the schema and the submitted values disagree in a
/// way that indicates a programming bug rather than bad user input.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A field's constraint cannot accept the shape of the supplied value.
    #[error("field {field}: {source}")]
    ShapeMismatch {
        field: String,
        #[source]
        source: ConstraintError,
    },

    /// The same field name was declared twice.
    #[error("field {0} is declared more than once")]
    DuplicateField(String),

    /// The values carry a field the schema does not declare.
    #[error("values contain undeclared field {0}")]
    UnknownField(String),

    /// A single-field validation named a field the schema does not declare.
    #[error("no field named {0} in schema")]
    NotInSchema(String),

    /// The values document is not a JSON object of supported values.
    #[error("values are not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
