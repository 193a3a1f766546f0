//! Error types for osu-query-core

use thiserror::Error;

/// Main error type for filter and mod parsing
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown game mode: {0}")]
    UnknownMode(String),

    #[error("Unknown mod acronym '{acronym}' for mode {mode}")]
    UnknownAcronym { mode: String, acronym: String },

    #[error("Unknown {entity} field: {field}")]
    UnknownField { entity: String, field: String },

    #[error("Malformed filter '{token}': {reason}")]
    MalformedFilter { token: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn malformed(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFilter {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnknownMode(_) => "unknown_mode",
            Error::UnknownAcronym { .. } => "unknown_acronym",
            Error::UnknownField { .. } => "unknown_field",
            Error::MalformedFilter { .. } => "malformed_filter",
            Error::Io(_) => "io",
            Error::Config(_) => "config",
        }
    }
}

/// Result type alias for osu-query operations
pub type Result<T> = std::result::Result<T, Error>;
