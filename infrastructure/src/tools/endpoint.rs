//! HTTP adapter for the tool execution service

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use juris_application::ports::tool_endpoint::{ToolEndpointPort, TransportError};
use juris_domain::tool::entities::{InvocationContext, ToolDefinition};

/// reqwest-backed implementation of [`ToolEndpointPort`].
///
/// Posts the invocation body to `{base_url}{tool.endpoint}` with the bearer
/// credential and the tool version header. No request timeout is
/// configured: a hung endpoint hangs the invocation until the transport
/// gives up on its own.
#[derive(Debug, Clone)]
pub struct HttpToolEndpoint {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpToolEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ToolEndpointPort for HttpToolEndpoint {
    async fn dispatch(
        &self,
        tool: &ToolDefinition,
        parameters: &Map<String, Value>,
        context: Option<&InvocationContext>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, tool.endpoint);
        let body = match context {
            Some(ctx) => json!({"parameters": parameters, "context": ctx}),
            None => json!({"parameters": parameters}),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("X-Tool-Version", &tool.version)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_catalog;
    use juris_application::InvokeToolUseCase;
    use juris_domain::tool::entities::ToolInvocation;
    use std::io::Read;
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::thread;
    use tiny_http::{Method, Response, Server};

    /// Spawns a local test server that responds with the given body and status
    fn spawn_server(body: &'static str, status: u16) -> (String, thread::JoinHandle<()>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let url = format!("http://{addr}");

        let handle = thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let response = Response::from_string(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        (url, handle)
    }

    fn use_case(base_url: &str) -> InvokeToolUseCase {
        InvokeToolUseCase::new(
            Arc::new(default_catalog()),
            Arc::new(HttpToolEndpoint::new(base_url, "test-key")),
        )
    }

    fn summarize_invocation() -> ToolInvocation {
        ToolInvocation::new("document_summarizer")
            .with_param("document_text", "Contrato de locacao comercial")
    }

    #[tokio::test]
    async fn test_execute_success_yields_data_timing_and_version() {
        let (url, handle) = spawn_server(r#"{"x":1}"#, 200);

        let result = use_case(&url).execute(&summarize_invocation()).await;
        handle.join().unwrap();

        assert!(result.is_success());
        assert_eq!(result.data, Some(json!({"x": 1})));
        assert!(result.error.is_none());
        assert!(result.execution_time_ms.is_some());
        assert_eq!(result.tool_version.as_deref(), Some("1.1.0"));
    }

    #[tokio::test]
    async fn test_execute_sends_wire_contract() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let url = format!("http://{addr}");

        let handle = thread::spawn(move || {
            let mut request = server.recv().unwrap();

            assert_eq!(request.method(), &Method::Post);
            assert_eq!(request.url(), "/tools/document-summarizer");

            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .expect("Authorization header");
            assert_eq!(authorization.value.as_str(), "Bearer test-key");

            let version = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("X-Tool-Version"))
                .expect("X-Tool-Version header");
            assert_eq!(version.value.as_str(), "1.1.0");

            let content_type = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .expect("Content-Type header");
            assert!(content_type.value.as_str().starts_with("application/json"));

            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let body: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(
                body["parameters"]["document_text"],
                json!("Contrato de locacao comercial")
            );
            assert_eq!(body["context"], json!({"caseId": "case-3"}));

            let _ = request.respond(Response::from_string("{}"));
        });

        let invocation = summarize_invocation()
            .with_context(juris_domain::tool::entities::InvocationContext::new().with_case("case-3"));
        let result = use_case(&url).execute(&invocation).await;
        handle.join().unwrap();

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_context_omitted_from_body_when_absent() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let url = format!("http://{addr}");

        let handle = thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let body: Value = serde_json::from_str(&body).unwrap();
            assert!(body.get("context").is_none());
            let _ = request.respond(Response::from_string("{}"));
        });

        let result = use_case(&url).execute(&summarize_invocation()).await;
        handle.join().unwrap();

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_execute_404_normalized_without_throwing() {
        let (url, handle) = spawn_server("missing", 404);

        let result = use_case(&url).execute(&summarize_invocation()).await;
        handle.join().unwrap();

        assert!(!result.is_success());
        assert_eq!(result.error(), Some("HTTP 404: Not Found"));
        assert!(result.execution_time_ms.is_some());
        assert!(result.tool_version.is_none());
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn test_execute_unknown_tool_never_reaches_endpoint() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let url = format!("http://{addr}");

        let result = use_case(&url)
            .execute(&ToolInvocation::new("ghost_tool"))
            .await;

        assert!(!result.is_success());
        assert_eq!(result.error(), Some("Tool ghost_tool not found"));
        assert!(server.try_recv().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_execute_validation_failure_never_reaches_endpoint() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let url = format!("http://{addr}");

        let result = use_case(&url)
            .execute(&ToolInvocation::new("deadline_calculator"))
            .await;

        assert!(!result.is_success());
        assert_eq!(
            result.error(),
            Some("Required parameter 'event_date' is missing")
        );
        assert!(server.try_recv().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_normalized_into_envelope() {
        // Bind then drop a listener so the port is free but unserved
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = use_case(&format!("http://{addr}"))
            .execute(&summarize_invocation())
            .await;

        assert!(!result.is_success());
        assert!(!result.error().unwrap().is_empty());
        assert!(result.execution_time_ms.is_some());
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_a_transport_failure() {
        let (url, handle) = spawn_server("definitely not json", 200);

        let result = use_case(&url).execute(&summarize_invocation()).await;
        handle.join().unwrap();

        assert!(!result.is_success());
        assert!(!result.error().unwrap().is_empty());
    }
}
