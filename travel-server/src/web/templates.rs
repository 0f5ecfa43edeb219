//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{
    BookingStep, DESTINATION, SearchParams, TransportMode, TravelOption, TravelPreference,
};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub default_start_date: String,
    pub modes: Vec<Choice>,
    pub preferences: Vec<Choice>,
}

impl IndexTemplate {
    /// Form with the start date prefilled to `default_start_date`.
    pub fn new(default_start_date: impl Into<String>) -> Self {
        Self {
            default_start_date: default_start_date.into(),
            modes: TransportMode::ALL
                .iter()
                .map(|m| Choice {
                    value: m.as_str(),
                    label: m.label(),
                    selected: *m == TransportMode::Flight,
                })
                .collect(),
            preferences: [
                TravelPreference::Cheapest,
                TravelPreference::Balanced,
                TravelPreference::Comfort,
            ]
            .iter()
            .map(|p| Choice {
                value: p.as_str(),
                label: p.label(),
                selected: *p == TravelPreference::default(),
            })
            .collect(),
        }
    }
}

/// Search results.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub summary: SearchSummary,
    pub options: Vec<OptionView>,
    /// This page's URL, so the booking page can link back.
    pub back: String,
}

/// Booking checklist for one option.
#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub option: OptionView,
    pub back: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A form choice (checkbox or radio).
#[derive(Debug, Clone)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// One-line description of the search that produced the results.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub origin: String,
    pub destination: &'static str,
    pub start_date: String,
    pub flexibility_days: i32,
    pub travelers: u32,
    pub modes: String,
    pub preference: &'static str,
    pub accommodation: Option<String>,
}

impl SearchSummary {
    pub fn from_params(params: &SearchParams) -> Self {
        let modes = params
            .modes
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            origin: params.origin.clone(),
            destination: DESTINATION,
            start_date: params.start_date.clone(),
            flexibility_days: params.flexibility_days,
            travelers: params.travelers,
            modes,
            preference: params.preference.label(),
            accommodation: params.accommodation().map(str::to_string),
        }
    }
}

/// Itinerary view model.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub id: String,
    pub mode_label: &'static str,
    pub title: String,
    pub duration: String,
    pub price_estimate: String,
    pub stress_label: &'static str,
    /// CSS modifier: "low", "medium" or "high".
    pub stress_class: &'static str,
    pub route_description: String,
    pub stops: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub steps: Vec<StepView>,
    /// The option serialized for the booking form.
    pub payload: String,
}

impl OptionView {
    /// Create from a domain TravelOption.
    pub fn from_option(option: &TravelOption) -> Self {
        Self {
            id: option.id.clone(),
            mode_label: option.mode.label(),
            title: option.title.clone(),
            duration: option.duration.clone(),
            price_estimate: option.price_estimate.clone(),
            stress_label: option.stress_level.label(),
            stress_class: option.stress_level.as_str(),
            route_description: option.route_description.clone(),
            stops: option.stops.clone(),
            pros: option.pros.clone(),
            cons: option.cons.clone(),
            steps: option.booking_steps.iter().map(StepView::from_step).collect(),
            payload: serde_json::to_string(option).unwrap_or_default(),
        }
    }

    /// Stops joined with arrows, e.g. "Berlin → Huelva → Arrecife".
    pub fn route_summary(&self) -> String {
        self.stops.join(" → ")
    }

    /// Whether the option can be booked (the error placeholder cannot).
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Keep only `http(s)` links; anything else (`javascript:`, `data:`, ...)
/// must never reach an `href`.
fn web_link(url: &str) -> Option<String> {
    let url = url.trim();
    let scheme = url.split_once("://").map(|(scheme, _)| scheme)?;
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        .then(|| url.to_string())
}

/// Booking step view model.
#[derive(Debug, Clone)]
pub struct StepView {
    pub title: String,
    pub provider: String,
    /// `None` when the step's link is not a plain web link.
    pub url: Option<String>,
    pub description: String,
    pub is_navigation: bool,
}

impl StepView {
    pub fn from_step(step: &BookingStep) -> Self {
        Self {
            title: step.step_title.clone(),
            provider: step.provider_name.clone(),
            url: web_link(&step.booking_url),
            description: step.description.clone(),
            is_navigation: step.is_navigation(),
        }
    }

    /// Button caption.
    pub fn action_label(&self) -> &'static str {
        if self.is_navigation {
            "Open route"
        } else {
            "Go to offer"
        }
    }
}
