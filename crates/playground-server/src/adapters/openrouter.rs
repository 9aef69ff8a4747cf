//! OpenRouter Completion Client
//!
//! One POST to `{base_url}/chat/completions` per call. Duration is wall-clock
//! time around the request; cost is estimated from `usage.total_tokens`.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use playground::{
    estimate_cost, ChatMessage, Completion, CompletionProvider, CompletionRequest, DomainError,
};

use crate::config::UpstreamConfig;

/// HTTP implementation of CompletionProvider
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: UpstreamConfig,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

impl OpenRouterClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, DomainError> {
        let started = Instant::now();

        let body = ChatCompletionRequest {
            model: &request.model,
            messages: vec![ChatMessage::user(request.prompt.as_str())],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            "POST {} model={} max_tokens={}",
            self.endpoint(),
            request.model,
            request.max_tokens
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("OpenRouter request failed: {}", e);
                DomainError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("OpenRouter API error: {}", status);
            return Err(DomainError::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let payload: Value = response.json().await.map_err(|e| {
            DomainError::MalformedResponse(format!("Invalid JSON from OpenRouter API: {e}"))
        })?;

        let duration = started.elapsed().as_millis() as i64;
        normalize(payload, duration)
    }

    fn provider_name(&self) -> &str {
        "openrouter"
    }
}

/// Pull the fields we need out of an upstream body; everything else is
/// carried along untouched as metadata.
fn normalize(payload: Value, duration: i64) -> Result<Completion, DomainError> {
    let message = payload
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .filter(|message| !message.is_null())
        .ok_or_else(|| {
            DomainError::MalformedResponse("Invalid response format from OpenRouter API".to_string())
        })?;

    let content = message
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let total_tokens = payload
        .get("usage")
        .and_then(|usage| usage.get("total_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    Ok(Completion {
        content,
        cost: estimate_cost(total_tokens),
        duration,
        metadata: payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_normalize_success() {
        let payload = json!({
            "id": "gen-1",
            "choices": [{ "message": { "role": "assistant", "content": "4" } }],
            "usage": { "total_tokens": 1500 }
        });
        let completion = normalize(payload.clone(), 12).unwrap();
        assert_eq!(completion.content, "4");
        assert_eq!(completion.cost, 3000);
        assert_eq!(completion.duration, 12);
        assert_eq!(completion.metadata, payload);
    }

    #[test]
    fn test_normalize_without_usage_costs_nothing() {
        let payload = json!({ "choices": [{ "message": { "content": "ok" } }] });
        assert_eq!(normalize(payload, 0).unwrap().cost, 0);
    }

    #[test]
    fn test_normalize_missing_message_is_malformed() {
        for payload in [
            json!({}),
            json!({ "choices": [] }),
            json!({ "choices": [{}] }),
            json!({ "choices": [{ "message": null }] }),
        ] {
            let err = normalize(payload, 0).unwrap_err();
            assert!(matches!(err, DomainError::MalformedResponse(_)));
        }
    }

    type Captured = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

    /// Serve `reply` from a local fake upstream and return its base URL
    async fn fake_upstream(status: StatusCode, reply: Value, captured: Captured) -> String {
        let app = Router::new().route(
            "/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let captured = captured.clone();
                let reply = reply.clone();
                async move {
                    captured.lock().unwrap().push((headers, body));
                    (status, Json(reply))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> OpenRouterClient {
        OpenRouterClient::new(UpstreamConfig {
            api_key: "sk-test".to_string(),
            base_url,
            referer: "https://example.test".to_string(),
            title: "Test Playground".to_string(),
        })
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            prompt: "What is 2+2?".to_string(),
            model: "m1".to_string(),
            temperature: 0.7,
            max_tokens: 100,
        }
    }

    #[tokio::test]
    async fn test_complete_sends_expected_request() {
        let captured: Captured = Arc::default();
        let base = fake_upstream(
            StatusCode::OK,
            json!({
                "choices": [{ "message": { "content": "4" } }],
                "usage": { "total_tokens": 10 }
            }),
            captured.clone(),
        )
        .await;

        let completion = client_for(base).complete(&request()).await.unwrap();
        assert_eq!(completion.content, "4");
        assert_eq!(completion.cost, 20);
        assert!(completion.duration >= 0);

        let calls = captured.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (headers, body) = &calls[0];
        assert_eq!(headers["authorization"], "Bearer sk-test");
        assert_eq!(headers["http-referer"], "https://example.test");
        assert_eq!(headers["x-title"], "Test Playground");
        assert_eq!(body["model"], "m1");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "What is 2+2?");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["max_tokens"], 100);
    }

    #[tokio::test]
    async fn test_complete_maps_error_status() {
        let base = fake_upstream(
            StatusCode::TOO_MANY_REQUESTS,
            json!({ "error": "slow down" }),
            Arc::default(),
        )
        .await;

        let err = client_for(base).complete(&request()).await.unwrap_err();
        match err {
            DomainError::Upstream { status, reason } => {
                assert_eq!(status, 429);
                assert_eq!(reason, "Too Many Requests");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_unexpected_shape() {
        let base = fake_upstream(StatusCode::OK, json!({ "choices": [] }), Arc::default()).await;
        let err = client_for(base).complete(&request()).await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_complete_reports_transport_failure() {
        // Bind then drop to get a port nobody is listening on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(format!("http://{addr}"))
            .complete(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Network(_)));
    }
}
