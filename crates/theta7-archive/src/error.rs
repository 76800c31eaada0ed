//! Error types for theta7-archive.
//!
//! The dataset itself has no inputs and no error conditions; every variant
//! here belongs to the ambient surfaces around it (configuration, lookup by
//! name, serialization, I/O).

use thiserror::Error;

/// The main error type for archive operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Lookup Errors ===
    /// No measurement series with the given name exists in the archive.
    #[error("unknown measurement series '{name}' (known: alpha, beta, gamma, delta, epsilon)")]
    UnknownSequence {
        /// The name that was requested.
        name: String,
    },

    /// No archive section with the given name exists.
    #[error("unknown archive section '{name}'")]
    UnknownSection {
        /// The name that was requested.
        name: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown-sequence error.
    #[must_use]
    pub fn unknown_sequence(name: impl Into<String>) -> Self {
        Self::UnknownSequence { name: name.into() }
    }

    /// Create an unknown-section error.
    #[must_use]
    pub fn unknown_section(name: impl Into<String>) -> Self {
        Self::UnknownSection { name: name.into() }
    }

    /// Check if this error is a name lookup failure rather than an
    /// environment failure.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownSequence { .. } | Self::UnknownSection { .. }
        )
    }
}
