//! Request gateway use case
//!
//! Every API call made by the front end goes through [`RequestGateway`]:
//! one attempt, JSON in and out, failures normalized into an [`ApiError`],
//! shown to the user and handed back to the caller.

use std::sync::Arc;

use fitflow_domain::{
    ApiError, Notification,
    request::{PreparedRequest, RequestOptions},
    response::RawResponse,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::ports::{HttpTransport, NotificationSink, TransportError};

/// Result type for gateway requests.
pub type GatewayResult<T> = Result<T, ApiError>;

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::transport(err.to_string())
    }
}

/// Use case for calling the FitFlow API.
///
/// # Example
///
/// ```ignore
/// let gateway = RequestGateway::new(Arc::new(transport), Arc::new(alerts));
///
/// let socios = gateway.get("/api/socios").await?;
/// let reserva = gateway
///     .request(
///         "/api/reservas",
///         &RequestOptions::new()
///             .method(HttpMethod::Post)
///             .json_body(json!({ "socio_id": 3, "clase_id": 12 })),
///     )
///     .await?;
/// ```
pub struct RequestGateway<T: HttpTransport, N: NotificationSink> {
    transport: Arc<T>,
    notifier: Arc<N>,
}

impl<T: HttpTransport, N: NotificationSink> RequestGateway<T, N> {
    /// Creates a gateway over the given transport and notification sink.
    pub const fn new(transport: Arc<T>, notifier: Arc<N>) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    /// Sends a GET request with default options.
    ///
    /// # Errors
    ///
    /// See [`RequestGateway::request`].
    pub async fn get(&self, path: &str) -> GatewayResult<serde_json::Value> {
        self.request(path, &RequestOptions::default()).await
    }

    /// Sends a request and returns the parsed JSON body.
    ///
    /// On failure an error notification is shown and the error is logged
    /// before being returned; callers decide what else to do with it.
    ///
    /// # Errors
    ///
    /// - `TransportFault` if no response was obtained
    /// - `NonJsonResponse` if the response is not declared as JSON
    /// - `RequestFailed` if the status is not 2xx
    /// - `InvalidJson` if the body does not parse
    pub async fn request(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> GatewayResult<serde_json::Value> {
        match self.send(path, options).await {
            Ok(body) => Ok(body),
            Err(err) => Err(self.report(path, err)),
        }
    }

    /// Sends a request and deserializes the body into `R`.
    ///
    /// # Errors
    ///
    /// Same as [`RequestGateway::request`]; a body that does not match `R`
    /// is reported as `InvalidJson`.
    pub async fn request_as<R: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> GatewayResult<R> {
        let body = self.request(path, options).await?;
        serde_json::from_value(body).map_err(|e| self.report(path, e.into()))
    }

    async fn send(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> GatewayResult<serde_json::Value> {
        let request = Self::prepare(path, options)?;
        debug!(method = %request.method, path, "sending API request");

        let response = self.transport.send(&request).await?;
        Self::interpret(path, response)
    }

    fn prepare(path: &str, options: &RequestOptions) -> Result<PreparedRequest, TransportError> {
        if options.body.is_some() && !options.method.allows_body() {
            return Err(TransportError::InvalidRequest(format!(
                "{} requests cannot have a body",
                options.method
            )));
        }
        Ok(options.prepare(path))
    }

    /// Content type first, then status, then body.
    fn interpret(path: &str, response: RawResponse) -> GatewayResult<serde_json::Value> {
        if !response.is_json() {
            return Err(ApiError::non_json(path));
        }
        if !response.is_success() {
            return Err(response.into_failure());
        }
        response.json()
    }

    fn report(&self, path: &str, err: ApiError) -> ApiError {
        error!(path, kind = err.kind.title(), message = %err.message, "API request failed");
        self.notifier.notify(Notification::error(err.message.clone()));
        err
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use fitflow_domain::{
        ErrorKind, NotificationKind, RequestState,
        error::GENERIC_FAILURE_MESSAGE,
        request::{Headers, HttpMethod},
    };
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    /// Mock transport returning a canned outcome and recording requests.
    struct MockTransport {
        response: Result<RawResponse, TransportError>,
        sent: Mutex<Vec<PreparedRequest>>,
    }

    impl MockTransport {
        fn json(status: u16, body: serde_json::Value) -> Self {
            Self::raw(status, Some("application/json"), body.to_string())
        }

        fn raw(status: u16, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
            let headers: Headers = content_type
                .map(|ct| ("Content-Type", ct))
                .into_iter()
                .collect();
            Self {
                response: Ok(RawResponse::new(status, headers, body)),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn error(err: TransportError) -> Self {
            Self {
                response: Err(err),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<PreparedRequest> {
            self.sent.lock().map(|s| s.clone()).unwrap_or_default()
        }
    }

    impl HttpTransport for MockTransport {
        fn send(
            &self,
            request: &PreparedRequest,
        ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
            if let Ok(mut sent) = self.sent.lock() {
                sent.push(request.clone());
            }
            let result = self.response.clone();
            async move { result }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        shown: Mutex<Vec<Notification>>,
    }

    impl RecordingSink {
        fn shown(&self) -> Vec<Notification> {
            self.shown.lock().map(|s| s.clone()).unwrap_or_default()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) {
            if let Ok(mut shown) = self.shown.lock() {
                shown.push(notification);
            }
        }
    }

    fn gateway(
        transport: MockTransport,
    ) -> (
        RequestGateway<MockTransport, RecordingSink>,
        Arc<MockTransport>,
        Arc<RecordingSink>,
    ) {
        let transport = Arc::new(transport);
        let sink = Arc::new(RecordingSink::default());
        (
            RequestGateway::new(Arc::clone(&transport), Arc::clone(&sink)),
            transport,
            sink,
        )
    }

    fn assert_single_error_notification(sink: &RecordingSink, message: &str) {
        let shown = sink.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Error);
        assert_eq!(shown[0].message, message);
    }

    #[tokio::test]
    async fn test_success_returns_body_without_notification() {
        let (gateway, _, sink) = gateway(MockTransport::json(200, json!([{ "id": 1 }])));

        let body = gateway.get("/api/socios").await;

        assert_eq!(body, Ok(json!([{ "id": 1 }])));
        assert!(sink.shown().is_empty());
    }

    #[tokio::test]
    async fn test_default_headers_are_sent() {
        let (gateway, transport, _) = gateway(MockTransport::json(201, json!({ "id": 9 })));
        let options = RequestOptions::new()
            .method(HttpMethod::Post)
            .header("cache-control", "max-age=60")
            .json_body(json!({ "nombre": "Ana" }));

        let result = gateway.request("/api/socios", &options).await;
        assert!(result.is_ok());

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].path, "/api/socios");
        assert_eq!(sent[0].headers.get("Content-Type"), Some("application/json"));
        assert_eq!(sent[0].headers.get("Cache-Control"), Some("max-age=60"));
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"nombre":"Ana"}"#));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_non_json() {
        let (gateway, _, sink) = gateway(MockTransport::raw(200, None, "ok"));

        let err = gateway.get("/api/clases").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::NonJsonResponse);
        assert!(err.message.contains("/api/clases"));
        assert_single_error_notification(&sink, &err.message);
    }

    #[tokio::test]
    async fn test_html_response_is_non_json_even_on_error_status() {
        let (gateway, _, sink) = gateway(MockTransport::raw(
            404,
            Some("text/html; charset=utf-8"),
            "<h1>Not Found</h1>",
        ));

        let err = gateway.get("/api/typo").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::NonJsonResponse);
        assert!(err.message.contains("/api/typo"));
        assert_eq!(sink.shown().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_uses_top_level_message() {
        let (gateway, _, sink) = gateway(MockTransport::json(400, json!({ "message": "X" })));

        let err = gateway.get("/api/pagos").await.unwrap_err();

        assert_eq!(err, ApiError::new(ErrorKind::RequestFailed, "X"));
        assert_single_error_notification(&sink, "X");
    }

    #[tokio::test]
    async fn test_failure_uses_nested_message() {
        let (gateway, _, sink) = gateway(MockTransport::json(
            404,
            json!({ "error": { "type": "NOT_FOUND", "message": "Y" } }),
        ));

        let err = gateway.get("/api/socios/99").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::RequestFailed);
        assert_eq!(err.message, "Y");
        assert_single_error_notification(&sink, "Y");
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let (gateway, _, sink) = gateway(MockTransport::json(500, json!({ "ok": false })));

        let err = gateway.get("/api/estadisticas").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::RequestFailed);
        assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
        assert_single_error_notification(&sink, GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_failure_message_survives_mistyped_fields() {
        let cases = [
            (json!({ "message": "X", "error": "Bad Request" }), "X"),
            (json!({ "message": 42, "error": { "message": "Y" } }), "Y"),
        ];

        for (body, expected) in cases {
            let (gateway, _, sink) = gateway(MockTransport::json(400, body));

            let err = gateway.get("/api/reservas").await.unwrap_err();

            assert_eq!(err, ApiError::new(ErrorKind::RequestFailed, expected));
            assert_single_error_notification(&sink, expected);
        }
    }

    #[tokio::test]
    async fn test_failing_status_with_unparseable_json_body() {
        let (gateway, _, sink) = gateway(MockTransport::raw(
            502,
            Some("application/json; charset=utf-8"),
            "Bad Gateway",
        ));

        let err = gateway.get("/api/pagos").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidJson);
        assert_single_error_notification(&sink, &err.message);
    }

    #[tokio::test]
    async fn test_transport_fault_is_notified_and_returned() {
        let (gateway, _, sink) = gateway(MockTransport::error(TransportError::ConnectionRefused {
            host: "localhost".to_string(),
            port: 5000,
        }));

        let err = gateway.get("/api/socios").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::TransportFault);
        assert_eq!(err.message, "connection refused: localhost:5000");
        assert_single_error_notification(&sink, &err.message);
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let (gateway, _, sink) = gateway(MockTransport::raw(200, Some("application/json"), "{"));

        let err = gateway.get("/api/planes").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidJson);
        assert_eq!(sink.shown().len(), 1);
    }

    #[tokio::test]
    async fn test_get_with_body_is_rejected_before_sending() {
        let (gateway, transport, sink) = gateway(MockTransport::json(200, json!({})));
        let options = RequestOptions::new().json_body(json!({ "q": 1 }));

        let err = gateway.request("/api/socios", &options).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::TransportFault);
        assert!(transport.sent().is_empty());
        assert_eq!(sink.shown().len(), 1);
    }

    #[tokio::test]
    async fn test_request_as_typed_body() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Plan {
            nombre: String,
            precio: f64,
        }

        let (gateway, _, sink) = gateway(MockTransport::json(
            200,
            json!({ "nombre": "Mensual", "precio": 15000.0 }),
        ));
        let plan: GatewayResult<Plan> = gateway
            .request_as("/api/planes/1", &RequestOptions::default())
            .await;
        assert_eq!(
            plan,
            Ok(Plan {
                nombre: "Mensual".to_string(),
                precio: 15000.0
            })
        );
        assert!(sink.shown().is_empty());

        let mismatch: GatewayResult<Vec<Plan>> = gateway
            .request_as("/api/planes/1", &RequestOptions::default())
            .await;
        assert_eq!(mismatch.map_err(|e| e.kind), Err(ErrorKind::InvalidJson));
        assert_eq!(sink.shown().len(), 1);
    }

    #[tokio::test]
    async fn test_outcome_to_request_state() {
        let (gateway, _, _) = gateway(MockTransport::json(409, json!({ "message": "Cupo completo" })));

        let state = RequestState::default().start();
        let outcome = gateway.get("/api/reservas").await;
        let state = state.resolve(&outcome);

        assert_eq!(
            state,
            RequestState::Failed {
                kind: ErrorKind::RequestFailed,
                message: "Cupo completo".to_string(),
            }
        );
    }
}
