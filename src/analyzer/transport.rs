// HTTP transport for the Perspective API.
//
// The AnalyzeTransport trait is the seam between the analyzer and the
// network: the real implementation wraps reqwest, tests substitute a mock
// that replays canned responses. The transport reports status and body
// without interpreting them; status policy lives in the analyzer.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Raw result of one HTTP exchange.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Transport for a single analyze request. Implementations must be async
/// because the real provider is an HTTP API.
#[async_trait]
pub trait AnalyzeTransport: Send + Sync {
    /// POST a JSON body and return the response status and body text.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse>;
}

/// Production transport backed by a reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyzeTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to call Perspective API")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read Perspective API response body")?;

        Ok(ApiResponse { status, body })
    }
}
