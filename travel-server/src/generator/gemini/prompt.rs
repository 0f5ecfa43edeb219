//! Prompt construction for the LLM-backed generator.
//!
//! The instructions mirror the rule table so both generators produce
//! comparable itineraries.

use crate::domain::{DESTINATION, SearchParams, TravelPreference};
use crate::links;

/// Build the prompt for one search.
pub fn build_prompt(params: &SearchParams) -> String {
    let modes = if params.modes.is_empty() {
        "none selected".to_string()
    } else {
        params
            .modes
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut details = String::new();
    if params.has_camper {
        details.push_str("The travelers want to bring their camper van.\n");
    }
    if let Some(accommodation) = params.accommodation() {
        details.push_str(&format!("Accommodation on the island: {accommodation}.\n"));
    }

    format!(
        "You are an experienced travel agent for older travelers (best agers).\n\
         Destination: {DESTINATION}. Start: {origin}.\n\
         Travel dates: from {date} (+/- {flex} days).\n\
         Travelers: {travelers}.\n\
         {details}\n\
         THE CUSTOMER WANTS TO USE ONLY THESE MODES OF TRANSPORT: {modes}.\n\
         Only suggest options using these modes or sensible combinations of them.\n\n\
         TRAVEL STYLE: {style}\n\n\
         {RULES}\n\
         For the flight step use this URL: {flight_url}\n\
         {PROVIDERS}",
        origin = params.origin,
        date = params.start_date,
        flex = params.flexibility_days,
        travelers = params.travelers,
        style = preference_hint(params.preference),
        flight_url = links::flight_search_url(&params.origin, &params.start_date),
    )
}

fn preference_hint(preference: TravelPreference) -> &'static str {
    match preference {
        TravelPreference::Cheapest => "cheapest - lowest price, comfort does not matter.",
        TravelPreference::Balanced => "balanced - a good mix of price and comfort.",
        TravelPreference::Comfort => {
            "comfort - the most comfortable route (direct flights, cabins, taxis)."
        }
    }
}

const RULES: &str = "\
Create at most 3 different options, in this order:
- If flight is selected: one flight option. Prepend a rideshare step to the airport if rideshare \
is selected, otherwise a coach step if coach is selected. Then add a rental car step on the island \
unless own_vehicle is selected.
- If train, ferry or coach is selected: one overland option. Train (or else coach) to Huelva or \
Cadiz, always followed by the ferry to Arrecife. Recommend a cabin for comfort travelers.
- If own_vehicle is selected, or rental_car without flight: drive to Huelva and take the vehicle \
on the ferry. Never add an island rental car step to this option.
- If an accommodation is given, end every option with a navigation step (isNavigation = true) \
from Arrecife airport to the accommodation using a Google Maps directions link.
Give realistic prices and durations.
";

const PROVIDERS: &str = "\
Booking providers:
- TRAIN: bahn.de, thetrainline.com
- COACH: flixbus.de, alsa.es
- FERRY: directferries.com, navieraarmas.com, fredolsen.es
- RIDESHARE: blablacar.de (search for a ride to the airport or port)
- RENTAL CAR: billiger-mietwagen.de, check24.de/mietwagen
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    #[test]
    fn embeds_search_parameters() {
        let params = SearchParams::new("Dresden", "2026-10-03")
            .with_flexibility(2)
            .with_travelers(2)
            .with_mode(TransportMode::Flight)
            .with_mode(TransportMode::Rideshare)
            .with_preference(TravelPreference::Comfort)
            .with_accommodation("Hotel Princesa Yaiza");
        let prompt = build_prompt(&params);

        assert!(prompt.contains("Start: Dresden."));
        assert!(prompt.contains("from 2026-10-03 (+/- 2 days)"));
        assert!(prompt.contains("Travelers: 2."));
        assert!(prompt.contains("ONLY THESE MODES OF TRANSPORT: flight, rideshare."));
        assert!(prompt.contains("TRAVEL STYLE: comfort"));
        assert!(prompt.contains("Accommodation on the island: Hotel Princesa Yaiza."));
        assert!(prompt.contains("Flights%20from%20Dresden"));
    }

    #[test]
    fn omits_optional_lines() {
        let prompt = build_prompt(&SearchParams::new("Bonn", "2026-01-01"));
        assert!(!prompt.contains("Accommodation on the island"));
        assert!(!prompt.contains("camper van"));
        assert!(prompt.contains("none selected"));
    }

    #[test]
    fn camper_line_before_mode_list() {
        let prompt = build_prompt(&SearchParams::new("Ulm", "2026-04-01").with_camper(true));
        let camper = prompt.find("bring their camper van.").unwrap();
        let modes = prompt.find("ONLY THESE MODES").unwrap();
        assert!(camper < modes);
        assert!(prompt.ends_with(PROVIDERS));
    }
}
