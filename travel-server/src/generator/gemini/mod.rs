//! Gemini client for the LLM-backed itinerary generator.
//!
//! Sends one `generateContent` request per search with a structured
//! response schema matching [`TravelOption`](crate::domain::TravelOption),
//! and parses the returned JSON array.

mod client;
mod error;
mod prompt;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig};
pub use error::GeminiError;
pub use prompt::build_prompt;
pub use types::{GenerateContentRequest, GenerateContentResponse, travel_options_schema};
