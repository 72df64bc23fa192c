//! FitFlow Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus client configuration.

pub mod adapters;
pub mod config;
pub mod dom;

pub use adapters::{DomAlertSink, ReqwestTransport};
pub use config::{ClientSettings, ConfigError};
pub use dom::InMemoryDocument;
