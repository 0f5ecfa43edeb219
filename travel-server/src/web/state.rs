//! Application state for the web layer.

use std::sync::Arc;

use crate::config::{AppConfig, GeneratorKind};
use crate::generator::gemini::{GeminiClient, GeminiError};
use crate::generator::{ItineraryGenerator, LlmGenerator, RuleGenerator};
use crate::planner::RuleEngine;

/// Shared application state.
///
/// Immutable after startup; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    /// Produces itineraries for each search
    pub generator: Arc<dyn ItineraryGenerator>,
}

impl AppState {
    /// Create a new app state around a generator.
    pub fn new(generator: impl ItineraryGenerator + 'static) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Build the generator selected by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, GeminiError> {
        match config.generator {
            GeneratorKind::Rules => Ok(Self::new(
                RuleGenerator::new(RuleEngine::default()).with_delay(config.simulated_delay),
            )),
            GeneratorKind::Gemini => {
                let gemini = config
                    .gemini
                    .clone()
                    .ok_or_else(|| GeminiError::Config("missing Gemini configuration".into()))?;
                Ok(Self::new(LlmGenerator::new(GeminiClient::new(gemini)?)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::gemini::GeminiConfig;

    #[test]
    fn rules_by_default() {
        let state = AppState::from_config(&AppConfig::default()).unwrap();
        assert_eq!(state.generator.name(), "rules");
    }

    #[test]
    fn gemini_when_configured() {
        let config = AppConfig {
            generator: GeneratorKind::Gemini,
            gemini: Some(GeminiConfig::new("key")),
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.generator.name(), "gemini");
    }

    #[test]
    fn gemini_without_config_fails() {
        let config = AppConfig {
            generator: GeneratorKind::Gemini,
            ..AppConfig::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(GeminiError::Config(_))
        ));
    }
}
