//! HTTP transport port

use std::future::Future;

use fitflow_domain::{request::PreparedRequest, response::RawResponse};
use thiserror::Error;

/// Errors raised when a request cannot be completed at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request path could not be resolved into a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The server refused the connection.
    #[error("connection refused: {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request was rejected before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The body could not be read.
    #[error("failed to read body: {0}")]
    BodyRead(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for sending prepared requests to the API.
///
/// Paths in [`PreparedRequest`] are relative to the page origin; the
/// adapter owns that base URL. A single attempt is made per call.
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if no response could be obtained.
    fn send(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
