//! Error types for folio-client

use thiserror::Error;

use crate::queries::RecordKind;

/// Result type alias for folio-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching content
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// Transport-level HTTP failure (connect, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The CMS answered with a non-success status.
    #[error("CMS returned HTTP {status} for {kind}: {body}")]
    Status {
        /// Which record type was requested
        kind: RecordKind,
        /// HTTP status code
        status: u16,
        /// Leading part of the response body
        body: String,
    },

    /// The CMS answered successfully but with no records.
    #[error("CMS returned no {kind}")]
    EmptyResult {
        /// Which record type was requested
        kind: RecordKind,
    },

    /// The response body did not match the expected record shape.
    #[error("Failed to decode {kind}: {source}")]
    Decode {
        /// Which record type was requested
        kind: RecordKind,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}
