//! Domain error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a failing response carries no usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error en la petición";

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request body could not be serialized.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Categories of gateway failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request could not be completed (connectivity, invalid URL, ...).
    TransportFault,
    /// The server answered without a JSON content type.
    NonJsonResponse,
    /// The server answered with a failing status.
    RequestFailed,
    /// The body was declared as JSON but could not be parsed.
    InvalidJson,
}

impl ErrorKind {
    /// Returns a short title for the error kind.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TransportFault => "Transport Fault",
            Self::NonJsonResponse => "Non-JSON Response",
            Self::RequestFailed => "Request Failed",
            Self::InvalidJson => "Invalid JSON",
        }
    }
}

/// A normalized gateway failure.
///
/// Every failure surfaced by the request gateway ends up as one of these,
/// whatever layer produced it. `message` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Creates a new error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a transport fault.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransportFault, message)
    }

    /// Creates the error reported when `path` did not answer with JSON.
    #[must_use]
    pub fn non_json(path: &str) -> Self {
        Self::new(
            ErrorKind::NonJsonResponse,
            format!(
                "El servidor no devolvió JSON para {path}. Verifique que la ruta de la API sea correcta."
            ),
        )
    }

    /// Creates a request failure from a parsed error body.
    #[must_use]
    pub fn from_error_body(body: ErrorBody) -> Self {
        Self::new(ErrorKind::RequestFailed, body.into_message())
    }

    /// Creates an invalid JSON error.
    #[must_use]
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidJson, message)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_json(err.to_string())
    }
}

/// Error body returned by the API on failing responses.
///
/// Both the flat `{"message": ...}` and the nested
/// `{"error": {"message": ...}}` shapes are in use by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Top-level message.
    #[serde(default)]
    pub message: Option<String>,
    /// Nested error object.
    #[serde(default)]
    pub error: Option<NestedError>,
}

/// The nested `error` object of an [`ErrorBody`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedError {
    /// Nested message.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Reads an error body out of an arbitrary JSON value.
    ///
    /// Each field is read on its own: a field of the wrong shape is treated
    /// as absent without discarding the others. Non-object values yield an
    /// empty body.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        let message = string_field(&value, "message");
        let error = value
            .get("error")
            .filter(|nested| nested.is_object())
            .map(|nested| NestedError {
                message: string_field(nested, "message"),
            });
        Self { message, error }
    }

    /// Resolves the message: `message`, then `error.message`, then the
    /// generic fallback. Empty strings are skipped.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .or_else(|| {
                self.error
                    .and_then(|e| e.message)
                    .filter(|m| !m.is_empty())
            })
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
    }
}

fn string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
