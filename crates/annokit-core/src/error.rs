//! Error handling for annokit
//!
//! Provides the error types shared by every layer of the shape editors:
//! - Transform errors (page rotation outside the four legal values)
//! - Colour errors (hex parsing)
//! - Codec errors (annotation record encoding/decoding)
//!
//! All error types use `thiserror` for ergonomic error handling. Zero-size
//! shapes are valid geometry and never produce an error.

use thiserror::Error;

/// Coordinate transform error type
///
/// Raised when a page rotation is not one of 0, 90, 180 or 270 degrees.
/// Rotations are never interpolated or coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Rotation is not a multiple of a quarter turn in `[0, 270]`
    #[error("Invalid rotation: {degrees} (expected 0, 90, 180 or 270)")]
    InvalidRotation {
        /// The rejected rotation in degrees.
        degrees: i32,
    },
}

/// Colour error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The value is not a `#rrggbb` hex string
    #[error("Invalid hex colour: {value:?}")]
    InvalidHex {
        /// The rejected input.
        value: String,
    },
}

/// Annotation record codec error type
///
/// Any of these aborts the whole serialize/deserialize call; no partial
/// results are produced.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Page rotation could not be applied
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Stored colour could not be parsed
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Record names a shape kind this codec does not handle
    #[error("Unknown annotation kind: {kind}")]
    UnknownKind {
        /// The kind string found in the record.
        kind: String,
    },

    /// Point array has the wrong length for its kind
    #[error("Malformed {kind} points: expected {expected} values, got {actual}")]
    MalformedPoints {
        /// Shape kind of the record.
        kind: String,
        /// Number of values the kind requires.
        expected: usize,
        /// Number of values found.
        actual: usize,
    },

    /// Stroke thickness is negative or not finite
    #[error("Invalid stroke thickness: {value}")]
    InvalidThickness {
        /// The rejected thickness.
        value: f64,
    },

    /// Opacity is outside `[0, 1]`
    #[error("Invalid {field}: {value} (expected a value in [0, 1])")]
    InvalidOpacity {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for annokit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Transform error
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Colour error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Codec error
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error comes from an illegal page rotation, whichever
    /// layer reported it
    pub fn is_invalid_rotation(&self) -> bool {
        matches!(
            self,
            Error::Transform(TransformError::InvalidRotation { .. })
                | Error::Codec(CodecError::Transform(TransformError::InvalidRotation { .. }))
        )
    }

    /// Check if this is a codec error
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Error::Codec(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
