use crate::utils::{DomainError, require_non_negative, require_positive};

#[test]
fn test_require_non_negative_accepts_zero_and_positive() {
    assert_eq!(require_non_negative("factorial", "n", 0), Ok(0));
    assert_eq!(require_non_negative("factorial", "n", 42), Ok(42));
    assert_eq!(
        require_non_negative("factorial", "n", i64::MAX),
        Ok(i64::MAX as u64)
    );
}

#[test]
fn test_require_non_negative_rejects_negative() {
    let result = require_non_negative("subfactorial", "n", -1);
    assert_eq!(
        result,
        Err(DomainError::NegativeArgument {
            function: "subfactorial",
            argument: "n",
            value: -1,
        })
    );

    assert!(require_non_negative("factorial", "n", i64::MIN).is_err());
}

#[test]
fn test_require_positive() {
    assert_eq!(require_positive("multi_factorial", 1), Ok(1));
    assert_eq!(
        require_positive("multi_factorial", 0),
        Err(DomainError::NonPositiveStep {
            function: "multi_factorial",
            value: 0,
        })
    );
    assert!(require_positive("multi_factorial", -3).is_err());
}

#[test]
fn test_domain_error_messages_name_the_argument() {
    let err = DomainError::NegativeArgument {
        function: "rising_factorial",
        argument: "n",
        value: -2,
    };
    assert_eq!(
        err.to_string(),
        "rising_factorial: argument `n` must be non-negative, got -2"
    );

    let err = DomainError::NonPositiveStep {
        function: "multi_factorial",
        value: 0,
    };
    assert!(err.to_string().contains("step `n`"));
}
