//! Prompt Playground API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use playground::{Prompt, PromptType, Response};

/// API Client for the Playground server
pub struct PlaygroundClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: String,
    pub prompt_type: PromptType,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_model: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub prompt_id: i32,
    pub primary_response: Response,
    pub compare_response: Option<Response>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl PlaygroundClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Run a prompt (and optional comparison model)
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}/api/generate", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to Playground API")?;

        Self::read_json(resp).await
    }

    /// Most recent prompts, newest first
    pub async fn recent_prompts(&self, limit: usize) -> Result<Vec<Prompt>> {
        let url = format!("{}/api/prompts/recent?limit={}", self.base_url, limit);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Playground API")?;

        Self::read_json(resp).await
    }

    /// Responses stored for a prompt
    pub async fn prompt_responses(&self, prompt_id: i32) -> Result<Vec<Response>> {
        let url = format!("{}/api/prompts/{}/responses", self.base_url, prompt_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Playground API")?;

        Self::read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, message);
        }

        resp.json().await.context("Failed to parse response")
    }
}
