//! Error handling for the field arithmetic kernel

use std::fmt;

use onb293_api::{Error as CoreError, Result as CoreResult};

/// The error type for field element encoding and table construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text or byte input with the wrong shape (length, alphabet, high bits)
    InvalidFormat {
        /// Encoding being decoded
        context: &'static str,
        /// What was wrong with the input
        details: &'static str,
    },

    /// A character outside `[0-9a-fA-F]` in hexadecimal input
    InvalidDigit {
        /// Zero-based character index of the offending digit
        position: usize,
        /// The rejected character
        found: char,
    },

    /// Input that describes more bits than the target can hold
    Overflow {
        /// Encoding or type being decoded
        context: &'static str,
        /// Largest accepted size
        max: usize,
        /// Size that was supplied
        actual: usize,
    },

    /// Caller-provided output storage is too short
    BufferTooSmall {
        /// Encoding being written
        context: &'static str,
        /// Number of bytes required
        required: usize,
        /// Number of bytes available
        actual: usize,
    },

    /// The multiplication table builder produced the wrong number of entries
    TableInvariant {
        /// Entries a type-II optimal normal basis must have (2m - 1)
        expected: usize,
        /// Entries actually found
        actual: usize,
    },
}

/// Result type for field kernel operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidFormat error
    pub fn format(context: &'static str, details: &'static str) -> Self {
        Error::InvalidFormat { context, details }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormat { context, details } => {
                write!(f, "Invalid {} input: {}", context, details)
            }
            Error::InvalidDigit { position, found } => {
                write!(f, "Invalid hex digit {:?} at position {}", found, position)
            }
            Error::Overflow { context, max, actual } => {
                write!(f, "{} overflow: at most {} allowed, got {}", context, max, actual)
            }
            Error::BufferTooSmall { context, required, actual } => {
                write!(
                    f,
                    "Output buffer too small for {}: need {}, got {}",
                    context, required, actual
                )
            }
            Error::TableInvariant { expected, actual } => {
                write!(
                    f,
                    "Multiplication table has {} entries, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidFormat { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
            e @ Error::InvalidDigit { .. } => CoreError::SerializationError {
                context: "hex",
                message: e.to_string(),
            },
            e @ Error::Overflow { context, .. } => CoreError::SerializationError {
                context,
                message: e.to_string(),
            },
            Error::BufferTooSmall { context, required, actual } => CoreError::InvalidLength {
                context,
                expected: required,
                actual,
            },
            e @ Error::TableInvariant { .. } => CoreError::InvalidParameter {
                context: "multiplication table",
                message: e.to_string(),
            },
        }
    }
}

/// Convert a kernel result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use onb293_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
