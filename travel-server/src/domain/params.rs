//! Search parameters submitted by the traveler.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::mode::{TransportMode, TravelPreference};

/// One search submission.
///
/// Built once per request and never mutated afterwards. The only checks
/// applied are presence checks (see [`SearchParams::validate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free-text place name the traveler starts from.
    pub origin: String,

    /// Calendar date as entered, e.g. "2026-03-14".
    pub start_date: String,

    /// Days of slack either side of the start date.
    #[serde(default)]
    pub flexibility_days: i32,

    /// Number of people travelling.
    #[serde(default = "default_travelers")]
    pub travelers: u32,

    /// Whether the traveler wants to bring a camper van.
    #[serde(default)]
    pub has_camper: bool,

    #[serde(default)]
    pub preference: TravelPreference,

    /// Selected modes. Empty is tolerated and yields the fallback itinerary.
    #[serde(default)]
    pub modes: BTreeSet<TransportMode>,

    /// Address of the lodging on the island, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
}

fn default_travelers() -> u32 {
    1
}

impl SearchParams {
    /// Create params with the required fields and defaults for the rest.
    pub fn new(origin: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            start_date: start_date.into(),
            flexibility_days: 0,
            travelers: default_travelers(),
            has_camper: false,
            preference: TravelPreference::default(),
            modes: BTreeSet::new(),
            accommodation: None,
        }
    }

    /// Add a transport mode.
    pub fn with_mode(mut self, mode: TransportMode) -> Self {
        self.modes.insert(mode);
        self
    }

    /// Replace the selected modes.
    pub fn with_modes(mut self, modes: impl IntoIterator<Item = TransportMode>) -> Self {
        self.modes = modes.into_iter().collect();
        self
    }

    pub fn with_preference(mut self, preference: TravelPreference) -> Self {
        self.preference = preference;
        self
    }

    pub fn with_accommodation(mut self, accommodation: impl Into<String>) -> Self {
        self.accommodation = Some(accommodation.into());
        self
    }

    pub fn with_travelers(mut self, travelers: u32) -> Self {
        self.travelers = travelers;
        self
    }

    pub fn with_flexibility(mut self, days: i32) -> Self {
        self.flexibility_days = days;
        self
    }

    pub fn with_camper(mut self, has_camper: bool) -> Self {
        self.has_camper = has_camper;
        self
    }

    /// Whether the given mode was selected.
    pub fn wants(&self, mode: TransportMode) -> bool {
        self.modes.contains(&mode)
    }

    /// The accommodation address, if one was actually entered.
    ///
    /// `Some("")` counts as absent. Whitespace is kept as-is.
    pub fn accommodation(&self) -> Option<&str> {
        self.accommodation.as_deref().filter(|a| !a.is_empty())
    }

    /// Presence checks on the free-text fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.origin.trim().is_empty() {
            return Err(DomainError::MissingField("origin"));
        }
        if self.start_date.trim().is_empty() {
            return Err(DomainError::MissingField("startDate"));
        }
        if self.travelers == 0 {
            return Err(DomainError::NoTravelers);
        }
        Ok(())
    }
}
