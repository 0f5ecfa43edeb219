//! Closed enumerations driving the rule table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown travel preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel preference: {value}")]
pub struct InvalidPreference {
    value: String,
}

/// A way of getting to the island.
///
/// The wire form is snake_case (`rental_car`). The German names sent by older
/// clients and by the LLM (`FLUG`, `MIETWAGEN`, ...) are accepted on input.
///
/// # Examples
///
/// ```
/// use travel_server::domain::TransportMode;
///
/// let mode: TransportMode = serde_json::from_str("\"rental_car\"").unwrap();
/// assert_eq!(mode, TransportMode::RentalCar);
/// let mode: TransportMode = serde_json::from_str("\"FAEHRE\"").unwrap();
/// assert_eq!(mode, TransportMode::Ferry);
/// assert!(serde_json::from_str::<TransportMode>("\"hovercraft\"").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[serde(alias = "FLUG")]
    Flight,
    #[serde(alias = "ZUG")]
    Train,
    #[serde(alias = "FAEHRE")]
    Ferry,
    #[serde(alias = "REISEBUS")]
    Coach,
    #[serde(alias = "MITFAHRGELEGENHEIT")]
    Rideshare,
    #[serde(alias = "MIETWAGEN")]
    RentalCar,
    #[serde(alias = "EIGENES_FAHRZEUG")]
    OwnVehicle,
}

impl TransportMode {
    /// Every mode, in form display order.
    pub const ALL: [TransportMode; 7] = [
        TransportMode::Flight,
        TransportMode::Train,
        TransportMode::Ferry,
        TransportMode::Coach,
        TransportMode::Rideshare,
        TransportMode::RentalCar,
        TransportMode::OwnVehicle,
    ];

    /// The wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
            TransportMode::Ferry => "ferry",
            TransportMode::Coach => "coach",
            TransportMode::Rideshare => "rideshare",
            TransportMode::RentalCar => "rental_car",
            TransportMode::OwnVehicle => "own_vehicle",
        }
    }

    /// Human-readable label for forms and result cards.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Flight => "Flight",
            TransportMode::Train => "Train",
            TransportMode::Ferry => "Ferry",
            TransportMode::Coach => "Coach",
            TransportMode::Rideshare => "Rideshare",
            TransportMode::RentalCar => "Rental car",
            TransportMode::OwnVehicle => "Own car or camper",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the traveler trades price against comfort.
///
/// Only selects text and price tiers within a branch; it never decides
/// which branches fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelPreference {
    #[serde(alias = "Guenstig")]
    Cheapest,
    #[default]
    #[serde(alias = "Preis_Leistung")]
    Balanced,
    #[serde(alias = "Komfort")]
    Comfort,
}

impl TravelPreference {
    /// Parse a preference from its wire name or German alias.
    pub fn parse(s: &str) -> Result<Self, InvalidPreference> {
        match s {
            "cheapest" | "Guenstig" => Ok(TravelPreference::Cheapest),
            "balanced" | "Preis_Leistung" => Ok(TravelPreference::Balanced),
            "comfort" | "Komfort" => Ok(TravelPreference::Comfort),
            other => Err(InvalidPreference {
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelPreference::Cheapest => "cheapest",
            TravelPreference::Balanced => "balanced",
            TravelPreference::Comfort => "comfort",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelPreference::Cheapest => "As cheap as possible",
            TravelPreference::Balanced => "Good value",
            TravelPreference::Comfort => "Maximum comfort",
        }
    }
}

impl fmt::Display for TravelPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected stress of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    #[serde(alias = "Niedrig")]
    Low,
    #[serde(alias = "Mittel")]
    Medium,
    #[serde(alias = "Hoch")]
    High,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Medium => "medium",
            StressLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low stress",
            StressLevel::Medium => "Moderate stress",
            StressLevel::High => "High stress",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
