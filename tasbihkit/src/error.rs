//! Error types for TasbihKit lookups

use thiserror::Error;

/// Result type for accessor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`CategoryStore`](crate::CategoryStore)
///
/// Every variant is terminal. Nothing is retried or recovered locally.
#[derive(Error, Debug)]
pub enum Error {
    /// Required argument missing or empty (raised before any network activity)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Category file missing on the CDN, or no entry with the requested id
    #[error("{0}")]
    NotFound(String),

    /// Network-level failure from the transport (DNS, connection refused, ...)
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    /// Response body was not a JSON array of entries
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// True for [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// True for [`Error::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
