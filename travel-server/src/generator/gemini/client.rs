//! Gemini HTTP client.

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::domain::{SearchParams, TravelOption};

use super::error::GeminiError;
use super::prompt::build_prompt;
use super::types::{GenerateContentRequest, GenerateContentResponse, travel_options_schema};

/// Default base URL for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuration for the Gemini client.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key for authentication
    pub api_key: String,
    /// Model name, e.g. "gemini-2.5-flash"
    pub model: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| GeminiError::Config("invalid API key format".to_string()))?;
        headers.insert("x-goog-api-key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model for itineraries matching the search.
    ///
    /// The list is returned as parsed; an empty list is not an error here.
    pub async fn generate_options(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<TravelOption>, GeminiError> {
        let request = GenerateContentRequest::structured(build_prompt(params), travel_options_schema());
        let text = self.generate_content(&request).await?;

        serde_json::from_str(&text).map_err(|e| GeminiError::Json {
            message: e.to_string(),
            body: Some(text.chars().take(500).collect()),
        })
    }

    /// Send a `generateContent` request and return the candidate text.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(model = %self.model, "requesting itineraries");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(GeminiError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeminiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        parsed.text().ok_or(GeminiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-pro")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = GeminiConfig::new("test-key");

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn debug_redacts_key() {
        let config = GeminiConfig::new("super-secret");
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn client_creation() {
        let client = GeminiClient::new(GeminiConfig::new("test-key")).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[test]
    fn rejects_unprintable_key() {
        let result = GeminiClient::new(GeminiConfig::new("bad\nkey"));
        assert!(matches!(result, Err(GeminiError::Config(_))));
    }
}
