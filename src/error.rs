//! Error types for tensor map extraction.

/// Error type for every fallible operation in this crate.
///
/// Record-layer failures (`FieldNotFound`, `ShapeMismatch`, `RecordNotFound`)
/// pass through the extractors unchanged so callers see the original cause.
#[derive(Debug, thiserror::Error)]
pub enum TensorMapError {
    /// One-hot sum check failed: the value matched zero (or several) channels.
    #[error("TensorMap {name} missing or invalid label: {value:?}")]
    LabelValidation { name: String, value: String },

    /// The record has no field with this key.
    #[error("field not found: {field}")]
    FieldNotFound { field: String },

    /// Element count or produced shape disagrees with the declared shape.
    #[error("shape mismatch for {name}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A numeric array was requested from a text or boolean field.
    #[error("field {field} is not numeric")]
    NotNumeric { field: String },

    /// Channel map is empty, has duplicate indices, or is not dense.
    #[error("invalid channel map: {0}")]
    InvalidChannelMap(String),

    /// Tensor map declaration is internally inconsistent.
    #[error("invalid tensor map: {0}")]
    InvalidTensorMap(String),

    /// A tensor map with this name is already registered.
    #[error("duplicate tensor map: {0}")]
    DuplicateTensorMap(String),

    /// No tensor map with this name is registered.
    #[error("unknown tensor map: {0}")]
    UnknownTensorMap(String),

    /// The record source has no record with this identifier.
    #[error("record not found: {0}")]
    RecordNotFound(String),

    /// I/O error while reading or writing a record file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record bytes could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Tensor map configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<bincode::Error> for TensorMapError {
    fn from(err: bincode::Error) -> Self {
        TensorMapError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for TensorMapError {
    fn from(err: serde_json::Error) -> Self {
        TensorMapError::Config(err.to_string())
    }
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TensorMapError>;
