//! The transport seam: executing a single HTTP exchange.
//!
//! # Design
//! `Transport` is the one capability the client needs from the outside
//! world — take a request, return a response or a network failure. The
//! fixed-header rule is a decorator (`HeaderOverride`) composed around an
//! inner transport, so the caller's transport value is never mutated.
//! `UreqTransport` is the default real implementation over a `ureq::Agent`
//! configured to hand non-2xx statuses back as data; status interpretation
//! belongs to the client, not the transport.

use ureq::http::Request;

use crate::error::TransportError;
use crate::http::{HttpRequest, ResponseParts};

/// Executes one HTTP request/response exchange.
///
/// Implementations must be safe to share across threads; each `round_trip`
/// call is independent. Timeouts, TLS, and connection reuse are the
/// implementation's concern — configure them on the underlying agent.
pub trait Transport: Send + Sync {
    fn round_trip(&self, request: HttpRequest) -> Result<ResponseParts, TransportError>;
}

/// Decorator that replaces every outgoing request's headers with a fixed
/// set before delegating to the inner transport.
///
/// Replacement is wholesale, not a merge: headers already on the request
/// are discarded. Anything the caller needs on the wire (content-type
/// included) must be in the fixed set.
#[derive(Debug, Clone)]
pub struct HeaderOverride<T> {
    inner: T,
    headers: Vec<(String, String)>,
}

impl<T> HeaderOverride<T> {
    pub fn new(inner: T, headers: Vec<(String, String)>) -> Self {
        Self { inner, headers }
    }
}

impl<T: Transport> Transport for HeaderOverride<T> {
    fn round_trip(&self, mut request: HttpRequest) -> Result<ResponseParts, TransportError> {
        request.headers = self.headers.clone();
        self.inner.round_trip(request)
    }
}

/// Default transport over a [`ureq::Agent`].
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    /// Agent with default configuration, except that non-2xx statuses come
    /// back as responses rather than errors.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap a caller-configured agent (custom timeouts, TLS, proxy).
    ///
    /// The agent must be built with `http_status_as_error(false)`, or
    /// non-2xx responses will surface as transport failures instead of
    /// [`HttpError`](crate::HttpError) values.
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn round_trip(&self, request: HttpRequest) -> Result<ResponseParts, TransportError> {
        let mut builder = Request::builder()
            .method(request.method)
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let req = builder
            .body(request.body.as_slice())
            .map_err(TransportError::from_source)?;

        let response = self.agent.run(req).map_err(TransportError::from_source)?;

        let status = response.status();
        Ok(ResponseParts {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: Box::new(response.into_body().into_reader()),
        })
    }
}
