use log::{debug, warn};

use crate::utils::errors::DomainError;

/// # Errors
///
/// Returns [`DomainError::NegativeArgument`] when `value` is below zero.
pub fn require_non_negative(
    function: &'static str,
    argument: &'static str,
    value: i64,
) -> Result<u64, DomainError> {
    debug!("Validating {}({} = {})", function, argument, value);

    u64::try_from(value).map_err(|_| {
        warn!("{}: negative argument {} = {}", function, argument, value);
        DomainError::NegativeArgument {
            function,
            argument,
            value,
        }
    })
}

/// # Errors
///
/// Returns [`DomainError::NonPositiveStep`] when `value` is zero or negative.
pub fn require_positive(function: &'static str, value: i64) -> Result<u64, DomainError> {
    debug!("Validating {}(n = {})", function, value);

    if value <= 0 {
        warn!("{}: non-positive step n = {}", function, value);
        return Err(DomainError::NonPositiveStep { function, value });
    }

    Ok(value.unsigned_abs())
}
