//! Error types for the geocoding client core.
//!
//! # Design
//! Every variant except `Deserialization` is raised locally and synchronously,
//! before any network I/O happens. JSON decoding failures are wrapped without
//! reinterpretation so the caller still sees the original `serde_json` error.

use thiserror::Error;

/// Errors returned by request building and response parsing.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// A required value is missing, blank, or malformed (address, coordinates,
    /// API key, client id, crypto key).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A component filter was supplied but none of its components is set.
    #[error("component filter doesn't contain any component")]
    InvalidFilter,

    /// A post-search filter was used without authentication.
    #[error("`{filter}` requires an authenticated client (API key or signed client id)")]
    UnsupportedInMode { filter: &'static str },

    /// The response body could not be deserialized into a `GeocodeResponse`.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl GeocodeError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeocodeError>;
