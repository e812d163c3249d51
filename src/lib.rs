//! Factorial Forge - exact factorial-family functions and digit statistics
//!
//! This library evaluates factorial-like combinatorial functions in either a
//! wrapping 64-bit or an arbitrary-precision representation, and reports the
//! digit frequencies of their decimal renderings.

pub mod digits;
pub mod factorials;
pub mod utils;

// Re-export the main public API
pub use digits::DigitHistogram;
pub use factorials::{Function, Precision, Value, WorkerError, evaluate};
pub use utils::DomainError;

/// Evaluate `function` exactly and return its digit histogram alongside the result.
///
/// This is a convenience wrapper for callers that always want both the
/// arbitrary-precision value and its statistics.
///
/// # Arguments
///
/// * `function` - Which factorial-family function to evaluate
/// * `args` - `[n]`, or `[x, n]` for the rising, falling and multi factorials
///
/// # Errors
///
/// Returns a [`DomainError`] if the argument count is wrong or an argument
/// is outside the function's domain.
///
/// # Examples
///
/// ```
/// use factorial_forge::{Function, compute_with_statistics};
///
/// let (value, histogram) = compute_with_statistics(Function::Factorial, &[5]).unwrap();
/// assert_eq!(value.to_string(), "120");
/// assert_eq!(histogram.total(), 3);
/// ```
pub fn compute_with_statistics(
    function: Function,
    args: &[i64],
) -> Result<(Value, DigitHistogram), DomainError> {
    let value = evaluate(function, args, Precision::Arbitrary)?;
    let histogram = DigitHistogram::analyze(&value.to_string());
    Ok((value, histogram))
}
