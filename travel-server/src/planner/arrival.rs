//! Steps appended once the traveler reaches the island.

use crate::domain::{BookingStep, SearchParams, TransportMode};
use crate::links;

/// Append the arrival steps after all mode-specific transport steps.
///
/// Order is fixed: island rental car first (skipped when the traveler brings
/// their own vehicle), then directions to the accommodation when one was
/// entered.
pub fn add_arrival_steps(steps: &mut Vec<BookingStep>, params: &SearchParams) {
    if !params.wants(TransportMode::OwnVehicle) {
        steps.push(island_rental_step());
    }
    if let Some(step) = navigation_step(params) {
        steps.push(step);
    }
}

/// Rent a car at the arrival point.
pub fn island_rental_step() -> BookingStep {
    BookingStep::new(
        "Rent a car on the island",
        "billiger-mietwagen.de",
        links::rental_car_url(),
        "Pick up at Arrecife airport. Compare offers with full insurance and no excess.",
    )
}

/// Directions to the lodging, if an address was entered.
pub fn navigation_step(params: &SearchParams) -> Option<BookingStep> {
    let accommodation = params.accommodation()?;
    Some(BookingStep::navigation(
        "Drive to your accommodation",
        "Google Maps",
        links::navigation_url(accommodation),
        format!("Route from Arrecife to {accommodation}. Save it offline before you leave."),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams::new("Berlin", "2026-03-14").with_mode(TransportMode::Flight)
    }

    #[test]
    fn rental_only_without_accommodation() {
        let mut steps = Vec::new();
        add_arrival_steps(&mut steps, &params());

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step_title, "Rent a car on the island");
        assert!(!steps[0].is_navigation());
    }

    #[test]
    fn rental_then_navigation() {
        let mut steps = Vec::new();
        add_arrival_steps(&mut steps, &params().with_accommodation("Hotel X"));

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step_title, "Rent a car on the island");
        assert!(steps[1].is_navigation());
        assert!(steps[1].booking_url.contains("Hotel%20X"));
    }

    #[test]
    fn own_vehicle_skips_rental() {
        let mut steps = Vec::new();
        let params = params()
            .with_mode(TransportMode::OwnVehicle)
            .with_accommodation("Hotel X");
        add_arrival_steps(&mut steps, &params);

        assert_eq!(steps.len(), 1);
        assert!(steps[0].is_navigation());
    }

    #[test]
    fn empty_accommodation_adds_no_navigation() {
        let params = params().with_accommodation("");
        assert!(navigation_step(&params).is_none());
    }

    #[test]
    fn appends_after_existing_steps() {
        let mut steps = vec![BookingStep::new("Fly", "Google Flights", "https://x", "")];
        add_arrival_steps(&mut steps, &params());

        assert_eq!(steps[0].step_title, "Fly");
        assert_eq!(steps[1].step_title, "Rent a car on the island");
    }
}
