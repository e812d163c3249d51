use thiserror::Error;

/// Errors raised when an argument falls outside a function's domain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{function}: argument `{argument}` must be non-negative, got {value}")]
    NegativeArgument {
        function: &'static str,
        argument: &'static str,
        value: i64,
    },
    #[error("{function}: step `n` must be positive, got {value}")]
    NonPositiveStep { function: &'static str, value: i64 },
    #[error("{function} takes {expected} argument(s), got {actual}")]
    WrongArity {
        function: &'static str,
        expected: usize,
        actual: usize,
    },
}
