//! Shared argument validation and domain errors

mod errors;
mod validation;

pub use errors::DomainError;
pub use validation::{require_non_negative, require_positive};

#[cfg(test)]
mod tests;
