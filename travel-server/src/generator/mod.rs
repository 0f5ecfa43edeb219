//! Itinerary generators.
//!
//! The web layer only sees [`ItineraryGenerator`], whose single method never
//! fails. Two implementations exist:
//!
//! - [`RuleGenerator`] runs the deterministic rule table.
//! - [`LlmGenerator`] asks Gemini and falls back to a fixed placeholder
//!   option on any failure.

pub mod gemini;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::{SearchParams, TravelOption};
use crate::planner::{MAX_OPTIONS, RuleEngine};

use gemini::GeminiClient;

/// Produces itineraries for a search. Must always return a usable list.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    async fn generate(&self, params: &SearchParams) -> Vec<TravelOption>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Generator backed by the rule engine.
#[derive(Debug, Clone, Default)]
pub struct RuleGenerator {
    engine: RuleEngine,
    /// Artificial pause before answering, to mimic a slower backend.
    delay: Duration,
}

impl RuleGenerator {
    pub fn new(engine: RuleEngine) -> Self {
        Self {
            engine,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl ItineraryGenerator for RuleGenerator {
    async fn generate(&self, params: &SearchParams) -> Vec<TravelOption> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let options = self.engine.generate(params);
        info!(count = options.len(), origin = %params.origin, "generated itineraries");
        options
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

/// Generator backed by Gemini.
#[derive(Debug, Clone)]
pub struct LlmGenerator {
    client: GeminiClient,
}

impl LlmGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ItineraryGenerator for LlmGenerator {
    async fn generate(&self, params: &SearchParams) -> Vec<TravelOption> {
        match self.client.generate_options(params).await {
            Ok(options) if options.is_empty() => {
                warn!("Gemini returned no itineraries");
                vec![TravelOption::error_placeholder()]
            }
            Ok(mut options) => {
                options.truncate(MAX_OPTIONS);
                info!(count = options.len(), model = self.client.model(), "generated itineraries");
                options
            }
            Err(e) => {
                error!(error = %e, "Gemini request failed");
                vec![TravelOption::error_placeholder()]
            }
        }
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
