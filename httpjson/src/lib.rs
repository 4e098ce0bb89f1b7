//! Minimal synchronous JSON-over-HTTP client.
//!
//! # Overview
//! One operation: [`Client::call`] performs a full request/response cycle —
//! optionally JSON-encode a `send` value, issue the request against
//! `base_url + path`, read the whole response into memory, and either
//! decode a 200 body into a `recv` target or return the non-200 status and
//! raw body as an [`HttpError`].
//!
//! # Design
//! - `Client` is immutable after construction and holds no per-call state;
//!   share it freely across threads.
//! - A fixed header set, supplied at construction, replaces the headers of
//!   every outgoing request via the [`HeaderOverride`] transport decorator.
//! - The network seam is the [`Transport`] trait; [`UreqTransport`] is the
//!   default implementation, and tests substitute their own.
//! - Every failure stage has its own [`Error`] variant; nothing is retried,
//!   swallowed, or logged here.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;

pub use client::Client;
pub use error::{Error, HttpError, TransportError};
pub use http::{HttpRequest, ResponseParts};
pub use transport::{HeaderOverride, Transport, UreqTransport};
