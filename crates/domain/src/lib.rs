//! FitFlow Domain - Core client-side types
//!
//! This crate defines the domain model of the FitFlow web client kit.
//! All types here are pure Rust with no I/O dependencies.

pub mod dom;
pub mod error;
pub mod format;
pub mod modal;
pub mod navigation;
pub mod notification;
pub mod request;
pub mod response;
pub mod state;

pub use error::{ApiError, DomainError, DomainResult, ErrorBody, ErrorKind, NestedError};
pub use notification::{DISPLAY_DURATION, Notification, NotificationId, NotificationKind};
pub use state::RequestState;
