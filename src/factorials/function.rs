use std::fmt;

use log::debug;
use num_bigint::BigInt;

use crate::factorials::{arbitrary, bounded};
use crate::utils::DomainError;

/// The factorial-family functions the library can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Factorial,
    OddFactorial,
    EvenFactorial,
    PrimeFactorial,
    Subfactorial,
    DoubleFactorial,
    RisingFactorial,
    FallingFactorial,
    MultiFactorial,
    Superfactorial,
    Hyperfactorial,
    Superduperfactorial,
}

impl Function {
    pub const ALL: [Function; 12] = [
        Function::Factorial,
        Function::OddFactorial,
        Function::EvenFactorial,
        Function::PrimeFactorial,
        Function::Subfactorial,
        Function::DoubleFactorial,
        Function::RisingFactorial,
        Function::FallingFactorial,
        Function::MultiFactorial,
        Function::Superfactorial,
        Function::Hyperfactorial,
        Function::Superduperfactorial,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Function::Factorial => "factorial",
            Function::OddFactorial => "odd_factorial",
            Function::EvenFactorial => "even_factorial",
            Function::PrimeFactorial => "prime_factorial",
            Function::Subfactorial => "subfactorial",
            Function::DoubleFactorial => "double_factorial",
            Function::RisingFactorial => "rising_factorial",
            Function::FallingFactorial => "falling_factorial",
            Function::MultiFactorial => "multi_factorial",
            Function::Superfactorial => "superfactorial",
            Function::Hyperfactorial => "hyperfactorial",
            Function::Superduperfactorial => "superduperfactorial",
        }
    }

    /// Number of integer arguments; binary functions take `(x, n)`.
    pub fn arity(&self) -> usize {
        match self {
            Function::RisingFactorial | Function::FallingFactorial | Function::MultiFactorial => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which numeric representation a call computes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// `i64` with silent wraparound
    Bounded,
    #[default]
    Arbitrary,
}

/// A computed result in the representation it was computed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bounded(i64),
    Arbitrary(BigInt),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bounded(v) => write!(f, "{}", v),
            Value::Arbitrary(v) => write!(f, "{}", v),
        }
    }
}

/// Evaluate `function` over `args` in the requested precision.
///
/// # Errors
///
/// Returns [`DomainError::WrongArity`] if `args` does not match
/// [`Function::arity`], or the function's own domain error.
pub fn evaluate(
    function: Function,
    args: &[i64],
    precision: Precision,
) -> Result<Value, DomainError> {
    debug!("Evaluating {}{:?} with {:?} precision", function, args, precision);

    let (x, n) = match (function.arity(), args) {
        (1, &[n]) => (0, n),
        (2, &[x, n]) => (x, n),
        (expected, _) => {
            return Err(DomainError::WrongArity {
                function: function.name(),
                expected,
                actual: args.len(),
            });
        }
    };

    let value = match precision {
        Precision::Bounded => Value::Bounded(match function {
            Function::Factorial => bounded::factorial(n)?,
            Function::OddFactorial => bounded::odd_factorial(n)?,
            Function::EvenFactorial => bounded::even_factorial(n)?,
            Function::PrimeFactorial => bounded::prime_factorial(n)?,
            Function::Subfactorial => bounded::subfactorial(n)?,
            Function::DoubleFactorial => bounded::double_factorial(n)?,
            Function::RisingFactorial => bounded::rising_factorial(x, n)?,
            Function::FallingFactorial => bounded::falling_factorial(x, n)?,
            Function::MultiFactorial => bounded::multi_factorial(x, n)?,
            Function::Superfactorial => bounded::superfactorial(n)?,
            Function::Hyperfactorial => bounded::hyperfactorial(n)?,
            Function::Superduperfactorial => bounded::superduperfactorial(n)?,
        }),
        Precision::Arbitrary => Value::Arbitrary(match function {
            Function::Factorial => arbitrary::factorial(n)?.into(),
            Function::OddFactorial => arbitrary::odd_factorial(n)?.into(),
            Function::EvenFactorial => arbitrary::even_factorial(n)?.into(),
            Function::PrimeFactorial => arbitrary::prime_factorial(n)?.into(),
            Function::Subfactorial => arbitrary::subfactorial(n)?.into(),
            Function::DoubleFactorial => arbitrary::double_factorial(n)?.into(),
            Function::RisingFactorial => arbitrary::rising_factorial(x, n)?,
            Function::FallingFactorial => arbitrary::falling_factorial(x, n)?,
            Function::MultiFactorial => arbitrary::multi_factorial(x, n)?.into(),
            Function::Superfactorial => arbitrary::superfactorial(n)?.into(),
            Function::Hyperfactorial => arbitrary::hyperfactorial(n)?.into(),
            Function::Superduperfactorial => arbitrary::superduperfactorial(n)?.into(),
        }),
    };

    Ok(value)
}
