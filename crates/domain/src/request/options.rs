//! Caller-facing request options and the prepared request handed to the transport.

use serde::Serialize;

use super::{Headers, HttpMethod};
use crate::error::{DomainError, DomainResult};

/// Headers sent with every API request unless the caller overrides them.
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Cache-Control", "no-cache"),
];

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A JSON document, serialized when the request is prepared.
    Json(serde_json::Value),
    /// Raw text sent verbatim.
    Text(String),
}

impl RequestBody {
    /// Serializes any value into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBody` if the value cannot be
    /// represented as JSON.
    pub fn json<T: Serialize>(value: &T) -> DomainResult<Self> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| DomainError::InvalidBody(e.to_string()))
    }

    /// Returns the body as it goes on the wire.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Options for a single API request.
///
/// # Example
///
/// ```
/// use fitflow_domain::request::{HttpMethod, RequestOptions};
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .method(HttpMethod::Post)
///     .header("X-Requested-With", "fetch")
///     .json_body(json!({ "socio_id": 3, "clase_id": 12 }));
///
/// let prepared = options.prepare("/api/reservas");
/// assert_eq!(prepared.headers.get("content-type"), Some("application/json"));
/// assert_eq!(prepared.headers.get("x-requested-with"), Some("fetch"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method (GET when not set).
    pub method: HttpMethod,
    /// Caller headers, applied over [`DEFAULT_HEADERS`].
    pub headers: Headers,
    /// Optional request body.
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    /// Creates options for a plain GET request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds or replaces a caller header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json_body(mut self, value: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self
    }

    /// Sets a raw text body.
    #[must_use]
    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(text.into()));
        self
    }

    /// Returns the default headers with the caller's headers applied on top.
    #[must_use]
    pub fn merged_headers(&self) -> Headers {
        let mut headers: Headers = DEFAULT_HEADERS.into_iter().collect();
        headers.extend_overriding(&self.headers);
        headers
    }

    /// Resolves these options into the request sent for `path`.
    #[must_use]
    pub fn prepare(&self, path: &str) -> PreparedRequest {
        PreparedRequest {
            method: self.method,
            path: path.to_string(),
            headers: self.merged_headers(),
            body: self.body.as_ref().map(RequestBody::to_wire),
        }
    }
}

/// A request ready for the transport: headers merged, body serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the page origin.
    pub path: String,
    /// Final header set.
    pub headers: Headers,
    /// Serialized body.
    pub body: Option<String>,
}
