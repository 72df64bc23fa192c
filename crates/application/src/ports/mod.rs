//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and the host page.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod document;
mod http_transport;
mod notification_sink;

pub use document::Document;
pub use http_transport::{HttpTransport, TransportError};
pub use notification_sink::NotificationSink;
