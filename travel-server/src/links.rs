//! Booking and navigation link generation.
//!
//! Every builder is infallible: free text is percent-encoded and embedded
//! as-is, even when empty. Callers decide whether a link is worth showing
//! (the navigation link, for instance, is only emitted when an
//! accommodation address was entered).

use crate::domain::{ARRIVAL_POINT, DESTINATION};

/// Naviera Armas serves the Huelva/Cádiz to Arrecife crossings.
pub const FERRY_URL: &str = "https://www.navieraarmas.com/en/";

pub const TRAIN_URL: &str = "https://int.bahn.de/en";

pub const COACH_URL: &str = "https://global.flixbus.com/";

pub const RENTAL_CAR_URL: &str = "https://www.billiger-mietwagen.de/mietwagen-lanzarote.html";

/// Generate a Google Flights search URL.
///
/// # Example
///
/// ```
/// use travel_server::links::flight_search_url;
///
/// let url = flight_search_url("Berlin", "2026-03-14");
/// assert_eq!(
///     url,
///     "https://www.google.com/travel/flights?q=Flights%20from%20Berlin%20to%20Lanzarote%20on%202026-03-14"
/// );
/// ```
pub fn flight_search_url(origin: &str, date: &str) -> String {
    let query = format!("Flights from {origin} to {DESTINATION} on {date}");
    format!(
        "https://www.google.com/travel/flights?q={}",
        urlencoding::encode(&query)
    )
}

/// Ferry operator landing page.
pub fn ferry_url() -> String {
    FERRY_URL.to_string()
}

/// Rail operator landing page.
pub fn train_url() -> String {
    TRAIN_URL.to_string()
}

/// Coach operator landing page.
pub fn coach_url() -> String {
    COACH_URL.to_string()
}

/// Rental car comparison for the island.
pub fn rental_car_url() -> String {
    RENTAL_CAR_URL.to_string()
}

/// Generate a BlaBlaCar search URL prefilled with both ends and the date.
pub fn rideshare_url(from: &str, to: &str, date: &str) -> String {
    format!(
        "https://www.blablacar.de/search?fn={}&tn={}&db={}",
        urlencoding::encode(from),
        urlencoding::encode(to),
        urlencoding::encode(date),
    )
}

/// Generate a Google Maps driving directions link.
pub fn directions_url(from: &str, to: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={}&destination={}&travelmode=driving",
        urlencoding::encode(from),
        urlencoding::encode(to),
    )
}

/// Directions from the island's arrival point to the traveler's lodging.
pub fn navigation_url(accommodation: &str) -> String {
    directions_url(ARRIVAL_POINT, accommodation)
}
