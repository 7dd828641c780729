use axum::{
    body::{Body, Bytes},
    extract::{Extension, State},
    http::{HeaderName, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::ai::common::{build_upstream_body, upstream_url};
use crate::ai::config::AiConfig;
use crate::ai::rewrite::GENERATE_PROMPT_PATH;
use crate::messages::{
    upstream_error, API_KEY_NOT_CONFIGURED, INTERNAL_SERVER_ERROR, METHOD_NOT_ALLOWED,
    MISSING_FIELDS,
};

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    contents: Option<Value>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpstreamErrorResponse {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InternalErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Clone)]
struct ProxyState {
    ai: Option<AiConfig>,
    client: reqwest::Client,
}

#[derive(Clone, Debug)]
struct RequestContext {
    request_id: String,
}

/// Router serving the prompt rewrite proxy.
///
/// `ai` is `None` when no credential is configured; requests then fail with
/// 500 instead of the server refusing to start.
pub fn router(ai: Option<AiConfig>) -> Router {
    let state = ProxyState {
        ai,
        client: reqwest::Client::new(),
    };
    let request_id_layer = middleware::from_fn(assign_request_id);
    Router::new()
        .route(
            GENERATE_PROMPT_PATH,
            post(generate_prompt).fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(request_id_layer)
}

async fn generate_prompt(
    State(state): State<ProxyState>,
    Extension(request): Extension<RequestContext>,
    body: Bytes,
) -> Response {
    let request_id = request.request_id.as_str();

    let Some(ai) = state.ai.as_ref() else {
        tracing::error!(request_id, "GEMINI_API_KEY environment variable is not set");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, API_KEY_NOT_CONFIGURED);
    };

    let (contents, system_instruction) = match parse_request(&body) {
        Some(fields) => fields,
        None => {
            tracing::debug!(request_id, "Rejected request with missing fields");
            return error_response(StatusCode::BAD_REQUEST, MISSING_FIELDS);
        }
    };

    let url = upstream_url(&ai.api_url, &ai.model, &ai.api_key);
    let upstream_body = build_upstream_body(&contents, &system_instruction);
    tracing::debug!(request_id, model = %ai.model, "Forwarding prompt request upstream");

    let resp = match state.client.post(&url).json(&upstream_body).send().await {
        Ok(resp) => resp,
        Err(err) => {
            let message = redact(&err.to_string(), &ai.api_key);
            tracing::error!(request_id, error = %message, "Upstream request failed");
            return internal_error_response(message);
        }
    };

    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    if !status.is_success() {
        let details = resp.text().await.unwrap_or_default();
        tracing::warn!(request_id, %status, details = %details, "Gemini API error");
        let reason = status.canonical_reason().unwrap_or_default();
        return (
            status,
            Json(UpstreamErrorResponse {
                error: upstream_error(reason),
                details,
            }),
        )
            .into_response();
    }

    let payload = match resp.text().await {
        Ok(raw) => serde_json::from_str::<Value>(&raw).map_err(|err| err.to_string()),
        Err(err) => Err(redact(&err.to_string(), &ai.api_key)),
    };
    match payload {
        Ok(data) => {
            tracing::debug!(request_id, "Relayed upstream response");
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(message) => {
            tracing::error!(request_id, error = %message, "Unreadable upstream response");
            internal_error_response(message)
        }
    }
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

/// Both fields must be present and not JSON-falsy.
fn parse_request(body: &[u8]) -> Option<(Value, Value)> {
    let request: GenerateRequest = serde_json::from_slice(body).ok()?;
    let contents = request.contents.filter(is_truthy)?;
    let system_instruction = request.system_instruction.filter(is_truthy)?;
    Some((contents, system_instruction))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn redact(text: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return text.to_string();
    }
    text.replace(api_key, "[redacted]")
}

async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });
    let method = req.method().clone();
    let uri = req.uri().path().to_string();

    let mut response = next.run(req).await;
    let status = response.status();
    if let Ok(value) = request_id.parse() {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }

    tracing::debug!(
        request_id,
        method = %method,
        uri = %uri,
        status = %status,
        "API request completed"
    );
    response
}

fn error_response(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn internal_error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(InternalErrorResponse {
            error: INTERNAL_SERVER_ERROR.to_string(),
            message,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use proptest::prelude::*;
    use tower::ServiceExt;

    fn test_config() -> AiConfig {
        AiConfig {
            api_key: "test-key".to_string(),
            model: "m".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
        }
    }

    async fn error_of(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: ErrorResponse = serde_json::from_slice(&body).unwrap();
        payload.error
    }

    #[tokio::test]
    async fn get_is_rejected() {
        let app = router(Some(test_config()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri(GENERATE_PROMPT_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(error_of(response).await, METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn missing_credential_is_server_error() {
        let app = router(None);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(GENERATE_PROMPT_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"contents":[],"systemInstruction":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_of(response).await, API_KEY_NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn missing_system_instruction_is_bad_request() {
        let app = router(Some(test_config()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(GENERATE_PROMPT_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"contents":[{"parts":[{"text":"hi"}]}]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(response).await, MISSING_FIELDS);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_internal_error() {
        let app = router(Some(test_config()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(GENERATE_PROMPT_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"contents":[],"systemInstruction":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: InternalErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload.error, INTERNAL_SERVER_ERROR);
        assert!(!payload.message.contains("test-key"));
    }

    #[test]
    fn falsy_fields_are_missing() {
        assert!(parse_request(br#"{"contents":"","systemInstruction":"x"}"#).is_none());
        assert!(parse_request(br#"{"contents":[],"systemInstruction":null}"#).is_none());
        assert!(parse_request(b"not json").is_none());
        assert!(parse_request(br#"{"contents":[],"systemInstruction":"x"}"#).is_some());
    }

    proptest! {
        #[test]
        fn redact_hides_key(key in "[A-Z0-9]{8,32}") {
            let text = format!("error sending request for url (http://h/x?key={key})");
            let redacted = redact(&text, &key);
            prop_assert!(!redacted.contains(&key));
        }
    }
}
