//! Plain-data request and response types exchanged with a [`Transport`].
//!
//! # Design
//! A request is fully described before it reaches the transport: validated
//! method, absolute URL, header list, body bytes. The response comes back
//! with its body still unread — the client performs the single full read
//! itself, so read failures surface on its side of the seam. Dropping
//! `ResponseParts::body` releases whatever connection resources the
//! transport holds, on every exit path.
//!
//! [`Transport`]: crate::transport::Transport

use std::fmt;
use std::io;

use ureq::http::Method;
use url::Url;

/// A single outgoing HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    /// Request body bytes. Empty when the caller sent nothing.
    pub body: Vec<u8>,
}

/// A response as returned by a transport: status line plus an unread body.
pub struct ResponseParts {
    pub status: u16,
    /// Reason phrase for the status code; empty for unregistered codes.
    pub status_text: String,
    pub body: Box<dyn io::Read>,
}

impl fmt::Debug for ResponseParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseParts")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .finish_non_exhaustive()
    }
}
