//! Infrastructure adapters

mod dom_alert_sink;
mod reqwest_transport;

pub use dom_alert_sink::DomAlertSink;
pub use reqwest_transport::ReqwestTransport;
