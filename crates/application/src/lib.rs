//! FitFlow Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (transport, notifications, document)
//! - The request gateway
//! - Page helpers (modals, navigation, page lifecycle)

pub mod gateway;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod ports;

pub use gateway::{GatewayResult, RequestGateway};
pub use modal::ModalController;
pub use navigation::NavHighlighter;
pub use page::PageScript;
pub use ports::{Document, HttpTransport, NotificationSink, TransportError};
