//! Error types for folio-cli

use thiserror::Error;

/// Result type alias for folio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// Error from folio-client
    #[error("Client error: {0}")]
    Client(#[from] folio_client::Error),

    /// Error from folio-web
    #[error("Web error: {0}")]
    Web(#[from] folio_web::Error),

    /// Output could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_wraps() {
        let err: Error = folio_core::Error::config("bad key").into();
        assert_eq!(err.to_string(), "Core error: Configuration error: bad key");
    }
}
