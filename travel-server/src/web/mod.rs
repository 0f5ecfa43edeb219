//! Web layer for the travel planner.
//!
//! Serves the search form, results and booking pages, plus a JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
