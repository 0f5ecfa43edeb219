//! Flight itinerary.

use crate::domain::{
    ARRIVAL_POINT, BookingStep, SearchParams, StressLevel, TransportMode, TravelOption,
    TravelPreference,
};
use crate::links;

use super::arrival::add_arrival_steps;

pub const ID: &str = "flight";

/// Fires whenever flying was selected.
pub fn applies(params: &SearchParams) -> bool {
    params.wants(TransportMode::Flight)
}

/// Build the flight option.
pub fn build(params: &SearchParams) -> TravelOption {
    let mut steps = Vec::new();
    if let Some(transfer) = airport_transfer(params) {
        steps.push(transfer);
    }
    steps.push(BookingStep::new(
        "Search for flights",
        "Google Flights",
        links::flight_search_url(&params.origin, &params.start_date),
        flight_advice(params),
    ));
    add_arrival_steps(&mut steps, params);

    let (title, price, stress) = match params.preference {
        TravelPreference::Comfort => (
            "Direct flight - low stress, higher price",
            "approx. 350-550 € per person",
            StressLevel::Low,
        ),
        TravelPreference::Balanced => (
            "Scheduled flight with good value",
            "approx. 200-350 € per person",
            StressLevel::Medium,
        ),
        TravelPreference::Cheapest => (
            "Budget flight",
            "from approx. 90-180 € per person",
            StressLevel::Medium,
        ),
    };

    let mut cons = vec!["Luggage allowance is limited".to_string()];
    if params.has_camper {
        cons.push("The camper stays at home".to_string());
    }
    if params.preference == TravelPreference::Cheapest {
        cons.push("Early departures and extra fees for bags".to_string());
    }

    TravelOption {
        id: ID.to_string(),
        mode: TransportMode::Flight,
        title: title.to_string(),
        duration: "approx. 4-5 h flight, 7-9 h door to door".to_string(),
        price_estimate: price.to_string(),
        stress_level: stress,
        route_description: format!(
            "From {} to the nearest airport, then fly to {ARRIVAL_POINT}.",
            params.origin
        ),
        stops: vec![params.origin.clone(), ARRIVAL_POINT.to_string()],
        pros: vec![
            "Fastest way to the island".to_string(),
            "Many daily connections from German airports".to_string(),
        ],
        cons,
        booking_steps: steps,
    }
}

/// The step getting the traveler to the departure airport.
///
/// Rideshare wins over coach when both were selected; only one transfer
/// step is ever added.
fn airport_transfer(params: &SearchParams) -> Option<BookingStep> {
    if params.wants(TransportMode::Rideshare) {
        let airport = format!("{} Airport", params.origin);
        return Some(BookingStep::new(
            "Rideshare to the airport",
            "BlaBlaCar",
            links::rideshare_url(&params.origin, &airport, &params.start_date),
            "Share a ride to the departure airport. Book early and allow a generous buffer.",
        ));
    }
    if params.wants(TransportMode::Coach) {
        return Some(BookingStep::new(
            "Coach to the airport",
            "FlixBus",
            links::coach_url(),
            "Long-distance coach to the departure airport. Pick a connection arriving at least 3 hours before take-off.",
        ));
    }
    None
}

fn flight_advice(params: &SearchParams) -> String {
    let travelers = match params.travelers {
        1 => "1 traveler".to_string(),
        n => format!("{n} travelers"),
    };
    let window = match params.flexibility_days {
        0 => "on your date".to_string(),
        d => format!("within ±{} days", d.unsigned_abs()),
    };
    match params.preference {
        TravelPreference::Comfort => format!(
            "Look for direct flights {window} for {travelers}. Add seat reservation and checked baggage."
        ),
        TravelPreference::Balanced => format!(
            "Compare scheduled and low-cost carriers {window} for {travelers}."
        ),
        TravelPreference::Cheapest => format!(
            "Sort by price {window} for {travelers}. Connections via Madrid or Palma are often cheaper."
        ),
    }
}
