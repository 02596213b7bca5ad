//! Form snapshot error types

// Fields are read by the thiserror Display derive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation from a raw snapshot
pub type GenerationResult<T> = Result<T, GenerationError>;

/// A form snapshot that cannot be turned into a config script
///
/// Raised at the validation boundary before any line is produced, so a failed
/// generation never leaves partial output behind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenerationError {
    /// The snapshot is not a JSON object
    #[error("form state must be an object, found {found}")]
    #[diagnostic(code(autoexec::not_an_object))]
    NotAnObject {
        /// JSON type that was found
        found: &'static str,
    },

    /// A field has the wrong JSON type
    #[error("field `{field}` must be {expected}, found {found}")]
    #[diagnostic(
        code(autoexec::invalid_field),
        help("fix or remove `{field}` in the form snapshot")
    )]
    InvalidField {
        /// Dotted path of the offending field
        field: String,
        /// Expected JSON type
        expected: &'static str,
        /// JSON type that was found
        found: &'static str,
    },

    /// A field the schema does not know about
    #[error("unknown field `{field}`")]
    #[diagnostic(
        code(autoexec::unknown_field),
        help("only fields declared in the form schema are accepted")
    )]
    UnknownField {
        /// Dotted path of the unknown field
        field: String,
    },
}

impl GenerationError {
    /// Create an invalid field error for `value`
    pub fn invalid(
        field: impl Into<String>,
        expected: &'static str,
        value: &serde_json::Value,
    ) -> Self {
        GenerationError::InvalidField {
            field: field.into(),
            expected,
            found: json_type(value),
        }
    }

    /// Create an unknown field error
    pub fn unknown(field: impl Into<String>) -> Self {
        GenerationError::UnknownField {
            field: field.into(),
        }
    }

    /// The offending field path, if the error concerns a single field
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            GenerationError::InvalidField { field, .. }
            | GenerationError::UnknownField { field } => Some(field),
            GenerationError::NotAnObject { .. } => None,
        }
    }
}

/// Human-readable JSON type name
#[must_use]
pub const fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
