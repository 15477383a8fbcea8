//! Server error types.

use thiserror::Error;

/// Fatal errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind its address. Fatal at startup.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server hit an I/O error while serving.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("Metrics error: {0}")]
    Metrics(String),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
