//! Request lifecycle state.
//!
//! A gateway request moves `Idle → InFlight → Succeeded | Failed` and
//! never leaves a terminal state.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ErrorKind};

/// The lifecycle of a single gateway request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestState {
    /// Not sent yet.
    #[default]
    Idle,

    /// Waiting for the transport or the body.
    InFlight {
        /// When the request started.
        /// Skipped in serialization as Instant is not serializable.
        #[serde(skip)]
        started_at: Option<std::time::Instant>,
    },

    /// Resolved with a JSON body.
    Succeeded {
        /// The parsed body.
        body: serde_json::Value,
    },

    /// Resolved with a normalized error.
    Failed {
        /// Error category.
        kind: ErrorKind,
        /// Message shown to the user.
        message: String,
    },
}

impl RequestState {
    /// Moves an idle request in flight. Any other state is returned unchanged.
    #[must_use]
    pub fn start(self) -> Self {
        match self {
            Self::Idle => Self::InFlight {
                started_at: Some(std::time::Instant::now()),
            },
            other => other,
        }
    }

    /// Resolves an in-flight request. Terminal states are returned unchanged.
    #[must_use]
    pub fn resolve(self, outcome: &Result<serde_json::Value, ApiError>) -> Self {
        match self {
            Self::Idle | Self::InFlight { .. } => Self::from(outcome),
            terminal => terminal,
        }
    }

    /// Returns true while the request is in flight.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// Returns true once the request has resolved either way.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// Returns the elapsed time if in flight.
    #[must_use]
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        match self {
            Self::InFlight {
                started_at: Some(t),
            } => Some(t.elapsed()),
            _ => None,
        }
    }
}

impl From<&Result<serde_json::Value, ApiError>> for RequestState {
    fn from(outcome: &Result<serde_json::Value, ApiError>) -> Self {
        match outcome {
            Ok(body) => Self::Succeeded { body: body.clone() },
            Err(err) => Self::Failed {
                kind: err.kind,
                message: err.message.clone(),
            },
        }
    }
}
