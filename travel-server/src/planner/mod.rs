//! Itinerary rule engine.
//!
//! Maps search parameters to at most three itineraries using an ordered
//! table of (predicate, builder) rules:
//!
//! 1. flight, when flying was selected
//! 2. slow overland (train or coach, then ferry)
//! 3. own vehicle via ferry, or a mainland rental car when nobody flies
//!
//! When no rule fires, a fixed fly & drive itinerary is returned so the
//! result is never empty. Everything here is pure and synchronous.

mod arrival;
mod fallback;
mod flight;
mod overland;
mod rules;
mod vehicle;

#[cfg(test)]
mod engine_tests;

pub use arrival::add_arrival_steps;
pub use rules::{DEFAULT_RULES, MAX_OPTIONS, Rule, RuleEngine, generate_options};
