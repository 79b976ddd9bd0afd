//! Error types for the floor-plan client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the floor-plan client
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to initialize the client
    #[error("Client initialization failed: {0}")]
    InitializationError(String),

    /// The generation service rejected the request and explained why.
    /// The payload carries the service's error string verbatim; the
    /// display prefix is the user-facing alert text.
    #[error("Error generating design: {0}")]
    Generation(String),

    /// Network failure or an unreadable response body
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The service replied with a body that does not match the contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A generation request is already in flight on this session
    #[error("A generation request is already in flight")]
    Busy,

    /// Failed to produce an export artifact
    #[error("Export failed: {0}")]
    ExportError(String),

    /// Failed to render the diagram
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
