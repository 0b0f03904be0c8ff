//! Crate error type.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Count must be at least 1")]
    CountTooSmall,

    #[error("Password length must be between {min} and {max}")]
    LengthOutOfRange { min: usize, max: usize },

    #[error("Minimum length ({min}) cannot be greater than maximum length ({max})")]
    MinAboveMax { min: usize, max: usize },

    #[error("Fixed length {0} is outside the allowed range")]
    FixedLengthOutOfRange(usize),

    #[error("Cannot generate {count} unique passwords of length {length}: only {capacity} exist")]
    Unreachable {
        count: usize,
        length: usize,
        capacity: usize,
    },

    #[error("Error saving file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save settings: {0}")]
    Settings(#[source] std::io::Error),
}
