// Error types for the card table client
//
// Two failure classes matter at this layer: parameter validation, which
// happens locally before any request is composed, and transport/HTTP
// failures, which pass through from the wire untouched. No retries or
// fallback values live here.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was blank, a color was outside the palette, or a
    /// position was below its floor. Raised before any HTTP call is issued;
    /// always recoverable by fixing the argument.
    #[error("{0}")]
    InvalidParameter(String),

    /// Client construction failed (missing env vars, bad base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection, TLS, timeout, or request-build failure from reqwest.
    /// Passed through unchanged.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status. The raw response body
    /// is kept as-is; no translation or retry happens here.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
