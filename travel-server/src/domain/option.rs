//! Itinerary types returned to the presentation layer.

use serde::{Deserialize, Serialize};

use super::mode::{StressLevel, TransportMode};

/// One action the traveler takes to book or complete an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStep {
    pub step_title: String,
    pub provider_name: String,
    /// Fully formed external link.
    pub booking_url: String,
    pub description: String,
    /// Set on "get to your lodging" steps, absent on provider bookings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_navigation: Option<bool>,
}

impl BookingStep {
    /// A provider booking step.
    pub fn new(
        step_title: impl Into<String>,
        provider_name: impl Into<String>,
        booking_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            step_title: step_title.into(),
            provider_name: provider_name.into(),
            booking_url: booking_url.into(),
            description: description.into(),
            is_navigation: None,
        }
    }

    /// A navigation step (directions rather than a booking).
    pub fn navigation(
        step_title: impl Into<String>,
        provider_name: impl Into<String>,
        booking_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            is_navigation: Some(true),
            ..Self::new(step_title, provider_name, booking_url, description)
        }
    }

    pub fn is_navigation(&self) -> bool {
        self.is_navigation.unwrap_or(false)
    }
}

/// One candidate itinerary.
///
/// `id` identifies the rule branch that produced it and is stable across
/// calls; it is not unique across searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelOption {
    pub id: String,
    pub mode: TransportMode,
    pub title: String,
    /// Free-text estimate, e.g. "approx. 6-8 h door to door".
    pub duration: String,
    /// Free-text estimate, e.g. "from approx. 120 € per person".
    pub price_estimate: String,
    pub stress_level: StressLevel,
    pub route_description: String,
    pub stops: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub booking_steps: Vec<BookingStep>,
}

impl TravelOption {
    /// The single option shown when the alternate generator fails.
    pub fn error_placeholder() -> Self {
        Self {
            id: "error-1".to_string(),
            mode: TransportMode::Flight,
            title: "System error - please try again later".to_string(),
            duration: "N/A".to_string(),
            price_estimate: "N/A".to_string(),
            stress_level: StressLevel::Medium,
            route_description: "No connections could be retrieved.".to_string(),
            stops: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            booking_steps: Vec::new(),
        }
    }

    /// Whether this is the failure placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.id == "error-1"
    }

    /// The last booking step, if any.
    pub fn last_step(&self) -> Option<&BookingStep> {
        self.booking_steps.last()
    }
}
