/// Controls schema validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaConfig {
    /// When true, values carrying a field the schema does not declare
    /// return `SchemaError::UnknownField` instead of being ignored.
    pub reject_unknown_fields: bool,
}
