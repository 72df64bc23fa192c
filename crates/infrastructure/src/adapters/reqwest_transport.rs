//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. Paths are resolved
//! against the configured base URL, which plays the role of the page origin.

use std::future::Future;

use fitflow_application::ports::{HttpTransport, TransportError};
use fitflow_domain::{
    request::{Headers, HttpMethod, PreparedRequest},
    response::RawResponse,
};
use reqwest::{Client, Method, Url};

/// HTTP transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a transport for the given origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(base_url: Url, user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Creates a transport with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Returns the origin requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
        }
    }

    fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {path}")))
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_connect() {
            let message = Self::error_chain(error);
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            if message.to_lowercase().contains("refused") {
                let port = error
                    .url()
                    .and_then(Url::port_or_known_default)
                    .unwrap_or(80);
                return TransportError::ConnectionRefused { host, port };
            }
            return TransportError::ConnectionFailed(format!("{host}: {message}"));
        }

        if error.is_builder() {
            return TransportError::InvalidRequest(error.to_string());
        }

        TransportError::Other(error.to_string())
    }

    /// Joins an error and its sources; reqwest keeps the OS reason in the chain.
    fn error_chain(error: &reqwest::Error) -> String {
        let mut message = error.to_string();
        let mut source = std::error::Error::source(error);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        message
    }

    fn collect_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect()
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        let method = request.method;
        let path = request.path.clone();
        let headers = request.headers.clone();
        let body = request.body.clone();

        async move {
            let url = self.resolve(&path)?;

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url);
            for header in headers.iter() {
                builder = builder.header(&header.name, &header.value);
            }
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

            let status = response.status().as_u16();
            let response_headers = Self::collect_headers(response.headers());
            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| TransportError::BodyRead(e.to_string()))?
                .to_vec();

            Ok(RawResponse::new(status, response_headers, body_bytes))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn transport_for(server: &MockServer) -> ReqwestTransport {
        ReqwestTransport::new(Url::parse(&server.base_url()).unwrap(), "FitFlow/test").unwrap()
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_paths_resolve_against_origin() {
        let transport = ReqwestTransport::new(
            Url::parse("http://localhost:5000/socios").unwrap(),
            "FitFlow/test",
        )
        .unwrap();
        assert_eq!(
            transport.resolve("/api/socios?activo=1").unwrap().as_str(),
            "http://localhost:5000/api/socios?activo=1"
        );
    }

    #[tokio::test]
    async fn test_send_returns_raw_response() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/reservas")
                    .header("content-type", "application/json")
                    .header("cache-control", "no-cache")
                    .json_body(json!({ "socio_id": 3 }));
                then.status(201)
                    .header("content-type", "application/json")
                    .body(r#"{"id":44}"#);
            })
            .await;

        let request = fitflow_domain::request::RequestOptions::new()
            .method(HttpMethod::Post)
            .json_body(json!({ "socio_id": 3 }))
            .prepare("/api/reservas");
        let response = transport_for(&server).send(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 201);
        assert!(response.is_json());
        assert_eq!(response.json().unwrap(), json!({ "id": 44 }));
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/socios/7");
                then.status(404)
                    .header("content-type", "application/json")
                    .body(r#"{"error":{"message":"Socio no encontrado"}}"#);
            })
            .await;

        let request = fitflow_domain::request::RequestOptions::new().prepare("/api/socios/7");
        let response = transport_for(&server).send(&request).await.unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let transport =
            ReqwestTransport::new(Url::parse("http://127.0.0.1:1/").unwrap(), "FitFlow/test")
                .unwrap();
        let request = fitflow_domain::request::RequestOptions::new().prepare("/api/socios");

        let err = transport.send(&request).await.unwrap_err();

        assert!(matches!(
            err,
            TransportError::ConnectionRefused { .. } | TransportError::ConnectionFailed(_)
        ));
    }
}
