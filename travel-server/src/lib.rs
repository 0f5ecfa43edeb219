//! Lanzarote travel planner server.
//!
//! A web application that answers: "How do I get from my home town to
//! Lanzarote, and where do I book each leg?"

pub mod config;
pub mod domain;
pub mod generator;
pub mod links;
pub mod planner;
pub mod web;
