//! Slow overland itinerary: train or coach to the Spanish coast, then ferry.

use crate::domain::{
    BookingStep, SearchParams, StressLevel, TransportMode, TravelOption, TravelPreference,
};
use crate::links;

use super::arrival::add_arrival_steps;

pub const ID: &str = "overland";

const FERRY_PORT: &str = "Huelva";

pub fn applies(params: &SearchParams) -> bool {
    params.wants(TransportMode::Train)
        || params.wants(TransportMode::Ferry)
        || params.wants(TransportMode::Coach)
}

pub fn build(params: &SearchParams) -> TravelOption {
    let mut steps = Vec::new();

    // Train wins over coach; at most one mainland leg.
    let (mode, leg) = if params.wants(TransportMode::Train) {
        steps.push(BookingStep::new(
            format!("Train to {FERRY_PORT}"),
            "Deutsche Bahn",
            links::train_url(),
            "Book through to Madrid with a Europe ticket, then continue with Renfe to Huelva. Plan a stopover in Paris or Barcelona.",
        ));
        (TransportMode::Train, Some("Train"))
    } else if params.wants(TransportMode::Coach) {
        steps.push(BookingStep::new(
            format!("Coach to {FERRY_PORT}"),
            "FlixBus",
            links::coach_url(),
            "Long-distance coach via Madrid or Seville. Take an overnight connection to save a hotel night.",
        ));
        (TransportMode::Coach, Some("Coach"))
    } else {
        (TransportMode::Ferry, None)
    };

    steps.push(BookingStep::new(
        format!("Ferry {FERRY_PORT} - Arrecife"),
        "Naviera Armas",
        links::ferry_url(),
        ferry_advice(params.preference),
    ));
    add_arrival_steps(&mut steps, params);

    let title = match leg {
        Some(leg) => format!("{leg} & ferry - the relaxed overland route"),
        None => "Ferry crossing from the Spanish mainland".to_string(),
    };
    let (price, stress) = match params.preference {
        TravelPreference::Comfort => ("approx. 450-700 € per person", StressLevel::Medium),
        TravelPreference::Balanced => ("approx. 300-450 € per person", StressLevel::High),
        TravelPreference::Cheapest => ("from approx. 200 € per person", StressLevel::High),
    };

    let mut stops = vec![params.origin.clone()];
    if leg.is_some() {
        stops.push("Madrid".to_string());
    }
    stops.push(FERRY_PORT.to_string());
    stops.push("Arrecife".to_string());

    TravelOption {
        id: ID.to_string(),
        mode,
        title,
        duration: "approx. 2-3 days including the crossing".to_string(),
        price_estimate: price.to_string(),
        stress_level: stress,
        route_description: format!(
            "From {} overland to {FERRY_PORT}, then about 30 hours by sea to Arrecife.",
            params.origin
        ),
        stops,
        pros: vec![
            "No flying".to_string(),
            "Generous luggage allowance".to_string(),
            "See Spain on the way".to_string(),
        ],
        cons: vec![
            "Takes several days".to_string(),
            "Several bookings with different providers".to_string(),
        ],
        booking_steps: steps,
    }
}

fn ferry_advice(preference: TravelPreference) -> &'static str {
    match preference {
        TravelPreference::Comfort => {
            "Book an outside cabin with private bathroom for the overnight crossing."
        }
        TravelPreference::Balanced => {
            "A reclining seat is fine for a short night; a shared cabin is worth it on the long crossing."
        }
        TravelPreference::Cheapest => "Reclining seat ticket. Bring a blanket and snacks.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams::new("Hamburg", "2026-04-02")
    }

    #[test]
    fn applies_to_any_overland_mode() {
        assert!(applies(&params().with_mode(TransportMode::Train)));
        assert!(applies(&params().with_mode(TransportMode::Ferry)));
        assert!(applies(&params().with_mode(TransportMode::Coach)));
        assert!(!applies(&params().with_mode(TransportMode::Flight)));
    }

    #[test]
    fn train_takes_precedence_over_coach() {
        let option = build(
            &params()
                .with_mode(TransportMode::Train)
                .with_mode(TransportMode::Coach),
        );
        assert_eq!(option.mode, TransportMode::Train);
        assert_eq!(option.booking_steps[0].provider_name, "Deutsche Bahn");
        assert_eq!(option.booking_steps[1].provider_name, "Naviera Armas");
        assert!(
            option
                .booking_steps
                .iter()
                .all(|s| s.provider_name != "FlixBus")
        );
    }

    #[test]
    fn ferry_only() {
        let option = build(&params().with_mode(TransportMode::Ferry));
        assert_eq!(option.mode, TransportMode::Ferry);
        assert_eq!(option.booking_steps[0].provider_name, "Naviera Armas");
        assert_eq!(option.stops, ["Hamburg", "Huelva", "Arrecife"]);
    }

    #[test]
    fn comfort_recommends_cabin() {
        let option = build(
            &params()
                .with_mode(TransportMode::Coach)
                .with_preference(TravelPreference::Comfort),
        );
        let ferry = &option.booking_steps[1];
        assert!(ferry.description.contains("cabin"));
        assert_eq!(option.stress_level, StressLevel::Medium);
    }

    #[test]
    fn arrival_steps_follow_ferry() {
        let option = build(
            &params()
                .with_mode(TransportMode::Train)
                .with_accommodation("Finca Uga"),
        );
        let titles: Vec<_> = option
            .booking_steps
            .iter()
            .map(|s| s.step_title.as_str())
            .collect();
        assert_eq!(
            titles,
            [
                "Train to Huelva",
                "Ferry Huelva - Arrecife",
                "Rent a car on the island",
                "Drive to your accommodation",
            ]
        );
    }
}
