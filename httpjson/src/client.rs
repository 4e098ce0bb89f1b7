//! JSON-over-HTTP client: one synchronous request/response cycle per call.
//!
//! # Design
//! `Client` holds only an immutable base URL and a header-overriding
//! transport; it carries no per-call state, so a shared reference can be
//! used from any number of threads. `call` is a single linear sequence:
//! encode, build, round-trip, read, check status, decode. Each stage maps
//! to its own [`Error`] variant and nothing is retried or swallowed.
//!
//! `send` and `recv` are plain `Option`s. `None` means absent: no request
//! body (not a JSON `null`), or no decode attempt. There is no typed-nil
//! pitfall to guard against.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ureq::http::Method;
use url::Url;

use crate::error::{Error, HttpError};
use crate::http::HttpRequest;
use crate::transport::{HeaderOverride, Transport, UreqTransport};

/// Synchronous JSON-over-HTTP client bound to a base URL and a fixed
/// header set.
///
/// Every request goes out with exactly the headers supplied at
/// construction — they replace, not merge with, whatever the request
/// would otherwise carry. Include `content-type` in the set if the server
/// needs it.
#[derive(Debug, Clone)]
pub struct Client<T: Transport = UreqTransport> {
    base_url: String,
    transport: HeaderOverride<T>,
}

impl Client {
    /// Client over the default ureq transport.
    pub fn new(base_url: &str, headers: Vec<(String, String)>) -> Self {
        Self::with_transport(UreqTransport::new(), base_url, headers)
    }
}

impl<T: Transport> Client<T> {
    /// Client over a caller-supplied transport.
    ///
    /// The transport is composed with the header-override decorator, not
    /// mutated; the caller's value keeps its original behavior if used
    /// elsewhere.
    pub fn with_transport(transport: T, base_url: &str, headers: Vec<(String, String)>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: HeaderOverride::new(transport, headers),
        }
    }

    /// Perform one request/response cycle against `base_url + path`.
    ///
    /// `send`, when present, is JSON-encoded as the request body; when
    /// absent the body is empty. `recv`, when present, is assigned the
    /// decoded 200-response body; when absent the body is read and
    /// discarded. On any failure `recv` keeps its pre-call value.
    ///
    /// A response with status other than 200 is returned as
    /// [`Error::Http`] carrying the code, reason phrase, and full raw
    /// body bytes. That body is never interpreted as JSON.
    ///
    /// ```no_run
    /// use httpjson::Client;
    ///
    /// let client = Client::new(
    ///     "http://api.test",
    ///     vec![("authorization".to_string(), "Bearer X".to_string())],
    /// );
    /// let mut resp = serde_json::Value::Null;
    /// client.call(
    ///     "POST",
    ///     "/items",
    ///     Some(&serde_json::json!({"name": "widget"})),
    ///     Some(&mut resp),
    /// )?;
    /// # Ok::<(), httpjson::Error>(())
    /// ```
    pub fn call<S, R>(
        &self,
        method: &str,
        path: &str,
        send: Option<&S>,
        recv: Option<&mut R>,
    ) -> Result<(), Error>
    where
        S: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = match send {
            Some(value) => serde_json::to_vec(value).map_err(Error::Marshal)?,
            None => Vec::new(),
        };

        let method = method
            .parse::<Method>()
            .map_err(|e| Error::Request(e.to_string()))?;
        let url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| Error::Request(e.to_string()))?;

        let mut response = self.transport.round_trip(HttpRequest {
            method,
            url,
            headers: Vec::new(),
            body,
        })?;

        // One full read into memory before any decision; the reader is
        // dropped on every path out of this function.
        let mut buf = Vec::new();
        response.body.read_to_end(&mut buf).map_err(Error::Io)?;

        if response.status != 200 {
            return Err(Error::Http(HttpError {
                code: response.status,
                status: response.status_text,
                body: buf,
            }));
        }

        if let Some(target) = recv {
            *target = serde_json::from_slice(&buf).map_err(Error::Unmarshal)?;
        }
        Ok(())
    }
}
