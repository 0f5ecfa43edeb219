//! Gemini client error types.

/// Errors from the Gemini HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or missing permission
    #[error("unauthorized: check GEMINI_API_KEY")]
    Unauthorized,

    /// Quota exhausted
    #[error("rate limited by Gemini API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response carried no candidate text
    #[error("no data received")]
    EmptyResponse,

    /// Response text was not the expected JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client could not be configured
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|body| format!(" (body: {body})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeminiError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = GeminiError::EmptyResponse;
        assert_eq!(err.to_string(), "no data received");

        let err = GeminiError::Json {
            message: "expected value".into(),
            body: Some("oops".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value (body: oops)");

        let err = GeminiError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
