//! Error type shared by the segmenter and the converters.

use thiserror::Error;

/// An error raised by a split or a value conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument combination the operation does not support.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A literal could not be turned into a value of the target type.
    #[error("Cannot convert {literal:?} to {type_name}: {reason}")]
    Conversion {
        type_name: &'static str,
        literal: String,
        reason: String,
    },
    /// A value could not be serialized by the fallback converter.
    #[error("Cannot serialize {type_name}: {reason}")]
    Serialization {
        type_name: &'static str,
        reason: String,
    },
    /// No converter is registered for the requested type.
    #[error("No converter registered for {type_name}")]
    MissingConverter { type_name: &'static str },
}

impl Error {
    pub(crate) fn conversion<T>(literal: &str, reason: impl ToString) -> Self {
        Error::Conversion {
            type_name: std::any::type_name::<T>(),
            literal: literal.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn missing_converter<T>() -> Self {
        Error::MissingConverter {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
