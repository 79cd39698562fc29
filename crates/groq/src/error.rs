//! Error taxonomy for chat completion calls.

/// Result alias for Groq client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`Groq::send`](crate::Groq::send).
///
/// No variant is retried by the client; the caller decides what to do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be serialized.
    #[error("failed to encode request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Network-level failure: DNS, refused connection, timeout, or an
    /// unreadable response body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status other than 200.
    #[error("unexpected status code: {status}, body: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The body of a 200 response did not match the expected shape.
    #[error("failed to decode response: {source}")]
    Decoding {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },
}

impl Error {
    /// The HTTP status code, if the service rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
