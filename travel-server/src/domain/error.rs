//! Domain error types.
//!
//! The rule engine itself cannot fail. These errors only come from the
//! presence checks applied to incoming search parameters.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A required free-text field was empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Travelers count was zero
    #[error("at least one traveler is required")]
    NoTravelers,
}
