//! Fixed fly & drive itinerary used when no rule fires.

use crate::domain::{
    ARRIVAL_POINT, BookingStep, SearchParams, StressLevel, TransportMode, TravelOption,
};
use crate::links;

use super::arrival::island_rental_step;

pub const ID: &str = "fallback";

/// Build the fallback option. Ignores the selected modes entirely.
pub fn build(params: &SearchParams) -> TravelOption {
    TravelOption {
        id: ID.to_string(),
        mode: TransportMode::Flight,
        title: "Fly & drive".to_string(),
        duration: "approx. 4-5 h flight".to_string(),
        price_estimate: "approx. 250-400 € per person plus rental car".to_string(),
        stress_level: StressLevel::Medium,
        route_description: format!(
            "Fly from near {} to {ARRIVAL_POINT} and pick up a rental car.",
            params.origin
        ),
        stops: vec![params.origin.clone(), ARRIVAL_POINT.to_string()],
        pros: vec![
            "Quick and simple".to_string(),
            "Mobile on the island from day one".to_string(),
        ],
        cons: vec!["Two separate bookings".to_string()],
        booking_steps: vec![
            BookingStep::new(
                "Search for flights",
                "Google Flights",
                links::flight_search_url(&params.origin, &params.start_date),
                "Compare direct flights and connections from airports near you.",
            ),
            island_rental_step(),
        ],
    }
}
