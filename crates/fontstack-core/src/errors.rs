//! Error types for the configuration model.

use crate::color::ColorMode;
use thiserror::Error;

/// Result type alias for store mutations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// An identifier string that names none of a closed set of values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} id: '{id}'")]
pub struct ParseIdError {
    /// What was being parsed ("platform stack", "text slot", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub id: String,
}

impl ParseIdError {
    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// A color value that would not stay inside one CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color value: '{0}'")]
pub struct InvalidColorError(pub String);

/// Errors raised by [`ConfigurationStore`](crate::ConfigurationStore) mutators.
///
/// Numeric setters never fail; they clamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown platform stack: '{0}'")]
    UnknownStack(String),

    #[error("Preset index {index} is out of range for the {mode} presets (expected < {len})")]
    PresetIndexOutOfRange {
        index: usize,
        len: usize,
        mode: ColorMode,
    },
}
