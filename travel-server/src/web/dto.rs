//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{SearchParams, TransportMode, TravelPreference};

/// Search form as submitted by the browser (query string of `/results`).
///
/// Every field is optional text so a half-filled form still deserializes;
/// presence is checked afterwards on the converted [`SearchParams`].
/// Each transport mode is its own checkbox, named by its wire name.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub start_date: String,
    pub flexibility_days: Option<String>,
    pub travelers: Option<String>,
    pub has_camper: Option<String>,
    pub preference: Option<String>,
    pub accommodation: Option<String>,

    pub flight: Option<String>,
    pub train: Option<String>,
    pub ferry: Option<String>,
    pub coach: Option<String>,
    pub rideshare: Option<String>,
    pub rental_car: Option<String>,
    pub own_vehicle: Option<String>,
}

impl SearchQuery {
    /// Convert to search parameters.
    ///
    /// Unparseable numbers and unknown preferences fall back to defaults;
    /// a blank accommodation field becomes `None`.
    pub fn into_params(self) -> SearchParams {
        let checked = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());

        let modes = [
            (TransportMode::Flight, &self.flight),
            (TransportMode::Train, &self.train),
            (TransportMode::Ferry, &self.ferry),
            (TransportMode::Coach, &self.coach),
            (TransportMode::Rideshare, &self.rideshare),
            (TransportMode::RentalCar, &self.rental_car),
            (TransportMode::OwnVehicle, &self.own_vehicle),
        ]
        .into_iter()
        .filter(|(_, v)| checked(v))
        .map(|(mode, _)| mode);

        let mut params = SearchParams::new(self.origin.trim(), self.start_date.trim())
            .with_modes(modes)
            .with_camper(checked(&self.has_camper))
            .with_preference(
                self.preference
                    .as_deref()
                    .and_then(|p| TravelPreference::parse(p).ok())
                    .unwrap_or_default(),
            );

        if let Some(days) = parse_number::<i32>(&self.flexibility_days) {
            params = params.with_flexibility(days);
        }
        if let Some(travelers) = parse_number::<u32>(&self.travelers) {
            params = params.with_travelers(travelers);
        }
        if let Some(accommodation) = self.accommodation.filter(|a| !a.trim().is_empty()) {
            params = params.with_accommodation(accommodation.trim());
        }
        params
    }
}

fn parse_number<T: std::str::FromStr>(value: &Option<String>) -> Option<T> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// Booking-details form: the chosen option travels as serialized JSON.
#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
    pub option: Option<String>,
    /// Results page to return to.
    pub back: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
