//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::generator::gemini::GeminiConfig;

/// Which generator answers searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// Deterministic rule table.
    #[default]
    Rules,
    /// Gemini, with the error placeholder on failure.
    Gemini,
}

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("{0} must be set when PLANNER_GENERATOR=gemini")]
    Missing(&'static str),
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: String,
    pub generator: GeneratorKind,
    /// Pause applied by the rule generator before answering.
    pub simulated_delay: Duration,
    /// Present when the Gemini generator is selected.
    pub gemini: Option<GeminiConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: "static".to_string(),
            generator: GeneratorKind::Rules,
            simulated_delay: Duration::ZERO,
            gemini: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unset and empty values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("PLANNER_BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|_| ConfigError::Invalid {
                key: "PLANNER_BIND_ADDR",
                value: addr.clone(),
            })?;
        }

        if let Some(dir) = get("PLANNER_STATIC_DIR") {
            config.static_dir = dir;
        }

        if let Some(ms) = get("PLANNER_SIMULATED_DELAY_MS") {
            let ms: u64 = ms.parse().map_err(|_| ConfigError::Invalid {
                key: "PLANNER_SIMULATED_DELAY_MS",
                value: ms.clone(),
            })?;
            config.simulated_delay = Duration::from_millis(ms);
        }

        if let Some(kind) = get("PLANNER_GENERATOR") {
            config.generator = match kind.to_ascii_lowercase().as_str() {
                "rules" => GeneratorKind::Rules,
                "gemini" => GeneratorKind::Gemini,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "PLANNER_GENERATOR",
                        value: kind,
                    });
                }
            };
        }

        if config.generator == GeneratorKind::Gemini {
            let api_key = get("GEMINI_API_KEY")
                .or_else(|| get("API_KEY"))
                .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;
            let mut gemini = GeminiConfig::new(api_key);
            if let Some(model) = get("GEMINI_MODEL") {
                gemini = gemini.with_model(model);
            }
            if let Some(url) = get("GEMINI_BASE_URL") {
                gemini = gemini.with_base_url(url);
            }
            config.gemini = Some(gemini);
        }

        Ok(config)
    }
}
