use std::fmt;

use serde::Serialize;
use validator::ValidationErrors;

/// A single failed field check, suitable for reporting which field of which
/// entry broke the contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Load-time content errors. Both variants are unrecoverable: the data is
/// compiled into the artifact, so a violation is a configuration error, not
/// a transient failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// A required string field is empty on the named entry.
    MissingField {
        entry: String,
        errors: Vec<FieldError>,
    },
    /// A uniqueness constraint was violated; `key` is the colliding value.
    DuplicateKey {
        collection: &'static str,
        key: String,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingField { entry, errors } => {
                let messages = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "missing required field on {entry}: {messages}")
            }
            ContentError::DuplicateKey { collection, key } => {
                write!(f, "duplicate key in {collection}: {key:?}")
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Flattens validator output into per-field errors, tagged with a label
/// identifying the offending entry.
pub(crate) fn missing_field(entry: impl Into<String>, errors: ValidationErrors) -> ContentError {
    let field_errors = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(|e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect();

    ContentError::MissingField {
        entry: entry.into(),
        errors: field_errors,
    }
}
