//! Tests for the rule table as a whole.

use super::*;
use crate::domain::{
    BookingStep, SearchParams, StressLevel, TransportMode, TravelOption, TravelPreference,
};
use proptest::prelude::*;

fn params(modes: &[TransportMode]) -> SearchParams {
    SearchParams::new("Berlin", "2026-03-14").with_modes(modes.iter().copied())
}

fn ids(options: &[TravelOption]) -> Vec<&str> {
    options.iter().map(|o| o.id.as_str()).collect()
}

fn providers(option: &TravelOption) -> Vec<&str> {
    option
        .booking_steps
        .iter()
        .map(|s| s.provider_name.as_str())
        .collect()
}

#[test]
fn empty_modes_yield_fallback_only() {
    let options = generate_options(&params(&[]));
    assert_eq!(ids(&options), ["fallback"]);
}

#[test]
fn rideshare_alone_yields_fallback() {
    let options = generate_options(&params(&[TransportMode::Rideshare]));
    assert_eq!(ids(&options), ["fallback"]);
}

#[test]
fn flight_only() {
    let options = generate_options(&params(&[TransportMode::Flight]));
    assert_eq!(ids(&options), ["flight"]);
}

#[test]
fn branch_order_is_fixed() {
    let options = generate_options(&params(&[
        TransportMode::OwnVehicle,
        TransportMode::Ferry,
        TransportMode::Flight,
    ]));
    assert_eq!(ids(&options), ["flight", "overland", "own-vehicle"]);
}

#[test]
fn flight_with_rideshare_starts_with_rideshare() {
    let options = generate_options(&params(&[
        TransportMode::Flight,
        TransportMode::Rideshare,
    ]));
    let flight = &options[0];
    assert_eq!(providers(flight)[..2], ["BlaBlaCar", "Google Flights"]);
}

#[test]
fn flight_rideshare_coach_prepends_only_rideshare() {
    let options = generate_options(&params(&[
        TransportMode::Flight,
        TransportMode::Rideshare,
        TransportMode::Coach,
    ]));
    // Coach also triggers the overland branch, but the flight option only
    // gets one transfer step.
    assert_eq!(ids(&options), ["flight", "overland"]);
    let flight = &options[0];
    assert_eq!(providers(flight)[..2], ["BlaBlaCar", "Google Flights"]);
    assert!(!providers(flight).contains(&"FlixBus"));
}

#[test]
fn own_vehicle_navigation_embeds_accommodation() {
    let with = generate_options(&params(&[TransportMode::OwnVehicle]).with_accommodation("Hotel X"));
    let last = with[0].last_step().unwrap();
    assert!(last.is_navigation());
    assert!(last.booking_url.contains("Hotel%20X"));

    let without = generate_options(&params(&[TransportMode::OwnVehicle]).with_accommodation(""));
    assert!(without[0].booking_steps.iter().all(|s| !s.is_navigation()));
}

#[test]
fn flight_preference_tiers() {
    let cheap = generate_options(
        &params(&[TransportMode::Flight]).with_preference(TravelPreference::Cheapest),
    );
    let comfort = generate_options(
        &params(&[TransportMode::Flight]).with_preference(TravelPreference::Comfort),
    );
    assert!(cheap[0].price_estimate.starts_with("from approx. 90"));
    assert_eq!(comfort[0].stress_level, StressLevel::Low);
}

#[test]
fn rental_with_flight_does_not_trigger_vehicle_branch() {
    let options = generate_options(&params(&[
        TransportMode::Flight,
        TransportMode::RentalCar,
    ]));
    assert_eq!(ids(&options), ["flight"]);
}

#[test]
fn truncates_to_three() {
    fn always(_: &SearchParams) -> bool {
        true
    }
    fn extra(params: &SearchParams) -> TravelOption {
        TravelOption {
            id: "extra".to_string(),
            booking_steps: vec![BookingStep::new("x", "x", "https://x", "x")],
            ..generate_options(params).remove(0)
        }
    }

    let mut rules = DEFAULT_RULES.to_vec();
    rules.push(Rule {
        name: "extra",
        applies: always,
        build: extra,
    });
    let engine = RuleEngine::with_rules(rules);
    assert_eq!(engine.rules().len(), 4);

    let options = engine.generate(&params(&TransportMode::ALL));
    assert_eq!(ids(&options), ["flight", "overland", "own-vehicle"]);
}

#[test]
fn generation_is_deterministic() {
    let p = params(&TransportMode::ALL).with_accommodation("Playa Blanca");
    assert_eq!(generate_options(&p), generate_options(&p));
}

// ========== properties ==========

fn mode_strategy() -> impl Strategy<Value = TransportMode> {
    proptest::sample::select(TransportMode::ALL.to_vec())
}

fn preference_strategy() -> impl Strategy<Value = TravelPreference> {
    prop_oneof![
        Just(TravelPreference::Cheapest),
        Just(TravelPreference::Balanced),
        Just(TravelPreference::Comfort),
    ]
}

fn params_strategy() -> impl Strategy<Value = SearchParams> {
    (
        "[A-Za-zäöü ]{0,16}",
        proptest::collection::btree_set(mode_strategy(), 0..=7),
        preference_strategy(),
        proptest::option::of("[A-Za-z0-9 ,]{0,20}"),
        any::<bool>(),
        1u32..6,
    )
        .prop_map(|(origin, modes, preference, accommodation, camper, travelers)| {
            let mut p = SearchParams::new(origin, "2026-06-01")
                .with_modes(modes)
                .with_preference(preference)
                .with_camper(camper)
                .with_travelers(travelers);
            p.accommodation = accommodation;
            p
        })
}

proptest! {
    #[test]
    fn between_one_and_three(p in params_strategy()) {
        let options = generate_options(&p);
        prop_assert!(!options.is_empty());
        prop_assert!(options.len() <= MAX_OPTIONS);
    }

    #[test]
    fn ids_follow_rule_order(p in params_strategy()) {
        let options = generate_options(&p);
        let order = ["flight", "overland", "own-vehicle"];
        let positions: Vec<usize> = options
            .iter()
            .filter_map(|o| order.iter().position(|id| *id == o.id))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn fallback_only_when_nothing_matched(p in params_strategy()) {
        let options = generate_options(&p);
        let has_fallback = options.iter().any(|o| o.id == "fallback");
        if has_fallback {
            prop_assert_eq!(options.len(), 1);
        }
        let any_rule = DEFAULT_RULES.iter().any(|r| (r.applies)(&p));
        prop_assert_eq!(has_fallback, !any_rule);
    }

    #[test]
    fn navigation_step_iff_accommodation(p in params_strategy()) {
        let has_accommodation = p.accommodation().is_some();
        for option in generate_options(&p).iter().filter(|o| o.id != "fallback") {
            let nav: Vec<_> = option.booking_steps.iter().filter(|s| s.is_navigation()).collect();
            prop_assert_eq!(nav.len(), usize::from(has_accommodation));
            if has_accommodation {
                prop_assert!(option.last_step().unwrap().is_navigation());
            }
        }
    }

    #[test]
    fn island_rental_absent_with_own_vehicle(p in params_strategy()) {
        let own = p.wants(TransportMode::OwnVehicle);
        for option in generate_options(&p).iter().filter(|o| o.id != "fallback") {
            let rental = option
                .booking_steps
                .iter()
                .any(|s| s.step_title == "Rent a car on the island");
            prop_assert_eq!(rental, !own && option.id != "own-vehicle");
        }
    }
}
