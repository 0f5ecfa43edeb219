//! Domain types for the travel planner.
//!
//! Search parameters come in, itineraries go out. The enumerations are
//! closed so the rule table can match on them exhaustively.

mod error;
mod mode;
mod option;
mod params;

pub use error::DomainError;
pub use mode::{InvalidPreference, StressLevel, TransportMode, TravelPreference};
pub use option::{BookingStep, TravelOption};
pub use params::SearchParams;

/// Fixed destination of every itinerary.
pub const DESTINATION: &str = "Lanzarote";

/// Where every arriving traveler lands, by air or by sea.
pub const ARRIVAL_POINT: &str = "Arrecife Airport (ACE), Lanzarote";
