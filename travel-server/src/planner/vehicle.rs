//! Drive-and-ferry itinerary with the traveler's own vehicle.

use crate::domain::{
    BookingStep, SearchParams, StressLevel, TransportMode, TravelOption, TravelPreference,
};
use crate::links;

use super::arrival::navigation_step;

pub const ID: &str = "own-vehicle";

const FERRY_PORT: &str = "Huelva";
const FERRY_TERMINAL: &str = "Puerto de Huelva, Spain";

/// Fires for an own vehicle, or for a rental car when nobody is flying.
pub fn applies(params: &SearchParams) -> bool {
    params.wants(TransportMode::OwnVehicle)
        || (params.wants(TransportMode::RentalCar) && !params.wants(TransportMode::Flight))
}

pub fn build(params: &SearchParams) -> TravelOption {
    let own = params.wants(TransportMode::OwnVehicle);
    let vehicle = if params.has_camper { "camper" } else { "car" };

    let mut steps = Vec::new();
    if !own {
        steps.push(BookingStep::new(
            "Rent a car on the mainland",
            "billiger-mietwagen.de",
            links::rental_car_url(),
            "Only rental companies that explicitly allow ferry crossings to the Canaries qualify. Ask before booking.",
        ));
    }
    steps.push(BookingStep::new(
        format!("Ferry with {vehicle} {FERRY_PORT} - Arrecife"),
        "Naviera Armas",
        links::ferry_url(),
        ferry_advice(params),
    ));
    steps.push(BookingStep::new(
        format!("Plan the drive to {FERRY_PORT}"),
        "Google Maps",
        links::directions_url(&params.origin, FERRY_TERMINAL),
        "Roughly 2,500-3,000 km through France and Spain. Plan two or three overnight stops.",
    ));
    // The vehicle is already on the island; only directions are added.
    if let Some(step) = navigation_step(params) {
        steps.push(step);
    }

    let title = match (own, params.has_camper) {
        (true, true) => "By camper via ferry".to_string(),
        (true, false) => "By car via ferry".to_string(),
        (false, _) => "Rental car from the mainland & ferry".to_string(),
    };
    let price = match (params.has_camper, params.preference) {
        (true, TravelPreference::Comfort) => "approx. 1,400-2,000 € incl. camper and cabin",
        (true, _) => "approx. 900-1,400 € incl. camper",
        (false, TravelPreference::Comfort) => "approx. 1,000-1,500 € incl. car and cabin",
        (false, _) => "approx. 600-1,000 € incl. car",
    };

    let mut cons = vec![
        "Long drive through several countries".to_string(),
        "Vehicle space on the ferry sells out in peak season".to_string(),
    ];
    if !own {
        cons.push("Few rental companies allow the crossing".to_string());
    }

    TravelOption {
        id: ID.to_string(),
        mode: if own {
            TransportMode::OwnVehicle
        } else {
            TransportMode::RentalCar
        },
        title,
        duration: "approx. 4-5 days including the crossing".to_string(),
        price_estimate: price.to_string(),
        stress_level: StressLevel::High,
        route_description: format!(
            "Drive from {} to {FERRY_PORT}, then take the {vehicle} on the ferry to Arrecife.",
            params.origin
        ),
        stops: vec![
            params.origin.clone(),
            "Bordeaux".to_string(),
            "Madrid".to_string(),
            FERRY_PORT.to_string(),
            "Arrecife".to_string(),
        ],
        pros: vec![
            format!("Your own {vehicle} on the island"),
            "Unlimited luggage".to_string(),
        ],
        cons,
        booking_steps: steps,
    }
}

fn ferry_advice(params: &SearchParams) -> String {
    let vehicle = if params.has_camper {
        "Give the exact length and height of the camper when booking."
    } else {
        "Register the car with its number plate."
    };
    match params.preference {
        TravelPreference::Comfort => format!("{vehicle} Book a cabin for the overnight crossing."),
        _ => vehicle.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams::new("München", "2026-09-10")
    }

    #[test]
    fn applies_predicate() {
        assert!(applies(&params().with_mode(TransportMode::OwnVehicle)));
        assert!(applies(&params().with_mode(TransportMode::RentalCar)));
        assert!(!applies(
            &params()
                .with_mode(TransportMode::RentalCar)
                .with_mode(TransportMode::Flight)
        ));
        assert!(applies(
            &params()
                .with_mode(TransportMode::OwnVehicle)
                .with_mode(TransportMode::Flight)
        ));
    }

    #[test]
    fn ends_with_navigation_when_accommodation_given() {
        let option = build(
            &params()
                .with_mode(TransportMode::OwnVehicle)
                .with_accommodation("Hotel X"),
        );
        let last = option.last_step().unwrap();
        assert!(last.is_navigation());
        assert!(last.booking_url.contains("Hotel%20X"));
    }

    #[test]
    fn no_navigation_without_accommodation() {
        let option = build(&params().with_mode(TransportMode::OwnVehicle).with_accommodation(""));
        assert!(option.booking_steps.iter().all(|s| !s.is_navigation()));
        assert_eq!(option.booking_steps.len(), 2);
    }

    #[test]
    fn never_adds_island_rental() {
        let option = build(&params().with_mode(TransportMode::RentalCar));
        assert_eq!(option.mode, TransportMode::RentalCar);
        assert!(
            option
                .booking_steps
                .iter()
                .all(|s| s.step_title != "Rent a car on the island")
        );
        assert_eq!(option.booking_steps[0].step_title, "Rent a car on the mainland");
    }

    #[test]
    fn camper_variant() {
        let option = build(
            &params()
                .with_mode(TransportMode::OwnVehicle)
                .with_camper(true),
        );
        assert_eq!(option.title, "By camper via ferry");
        assert!(option.booking_steps[0].description.contains("camper"));
        assert!(option.price_estimate.contains("camper"));
    }

    #[test]
    fn route_planning_starts_at_origin() {
        let option = build(&params().with_mode(TransportMode::OwnVehicle));
        let route = &option.booking_steps[1];
        assert!(route.booking_url.contains("origin=M%C3%BCnchen"));
        assert!(route.booking_url.contains("Huelva"));
    }
}
