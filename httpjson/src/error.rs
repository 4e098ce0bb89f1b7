//! Error types for the JSON HTTP client.
//!
//! # Design
//! Each stage of a call gets its own variant, so callers can tell exactly
//! where a request died: encoding, request construction, the network, the
//! body read, the status check, or decoding. `Http` is special — it is not
//! a malfunction of the call but the server saying no, so it carries the
//! status code and the raw body bytes for inspection. The error-path body
//! is kept verbatim and never interpreted as JSON, even when it happens to
//! be valid JSON.

/// Errors returned by [`Client::call`](crate::Client::call).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The `send` value could not be encoded as JSON. No I/O was attempted.
    #[error("failed to encode request body as JSON")]
    Marshal(#[source] serde_json::Error),

    /// The method or URL was malformed. No I/O was attempted.
    #[error("failed to build request: {0}")]
    Request(String),

    /// The transport could not complete the round trip.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Reading the response body failed partway through.
    #[error("failed to read response body")]
    Io(#[source] std::io::Error),

    /// The server answered with a status other than 200.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded into the `recv` target.
    #[error("failed to decode response body as JSON")]
    Unmarshal(#[source] serde_json::Error),
}

/// A non-200 response, preserved for caller inspection.
///
/// Renders as `"<code>: <status>"`. The body is the full raw response
/// bytes, byte-for-byte.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {status}")]
pub struct HttpError {
    pub code: u16,
    pub status: String,
    pub body: Vec<u8>,
}

/// A network-level failure reported by a [`Transport`](crate::Transport).
///
/// Opaque wrapper so transports other than the built-in ureq one (test
/// doubles included) can produce it from their own error types.
#[derive(thiserror::Error, Debug)]
#[error("transport failure: {source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn from_source(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        Self::from_source(err)
    }
}
