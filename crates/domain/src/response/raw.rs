//! Raw transport response and its JSON checks

use crate::error::{ApiError, ErrorBody};
use crate::request::Headers;

/// A response as delivered by the transport, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub fn new(status: u16, headers: Headers, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the `Content-Type` header, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }

    /// Returns true if the response declares a JSON media type.
    ///
    /// Accepts `application/json` and structured-syntax variants such as
    /// `application/problem+json`; parameters are ignored. A header that is
    /// not a well-formed media type still counts as JSON when it mentions
    /// `application/json`.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type().is_some_and(|ct| match ct.parse::<mime::Mime>() {
            Ok(m) => {
                m.type_() == mime::APPLICATION
                    && (m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
            }
            Err(_) => ct.to_ascii_lowercase().contains("application/json"),
        })
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidJson` error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turns a failing response into the error it describes.
    ///
    /// A body that is not valid JSON yields `InvalidJson` instead of
    /// `RequestFailed`.
    #[must_use]
    pub fn into_failure(self) -> ApiError {
        match self.json() {
            Ok(value) => ApiError::from_error_body(ErrorBody::from_value(value)),
            Err(err) => err,
        }
    }
}
