//! Error types for folio-web

use thiserror::Error;

/// Result type alias for folio-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the site
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// Error from folio-client
    #[error("Client error: {0}")]
    Client(#[from] folio_client::Error),

    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
