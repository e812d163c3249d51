//! Arbitrary-precision variants over `num_bigint`.

use log::debug;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rayon::prelude::*;

use crate::factorials::primes::sieve_of_eratosthenes;
use crate::utils::{DomainError, require_non_negative, require_positive};

/// Products with at least this many terms are folded across the rayon pool.
pub const PARALLEL_PRODUCT_THRESHOLD: u64 = 4096;

/// `first * (first + step) * ...` over `count` terms.
fn progression_product(first: u64, step: u64, count: u64) -> BigUint {
    let term = |j: u64| BigUint::from(first + j * step);

    if count >= PARALLEL_PRODUCT_THRESHOLD {
        debug!("Folding {} terms in parallel", count);
        (0..count)
            .into_par_iter()
            .fold(BigUint::one, |acc, j| acc * term(j))
            .reduce(BigUint::one, |a, b| a * b)
    } else {
        (0..count).fold(BigUint::one(), |acc, j| acc * term(j))
    }
}

/// Signed counterpart of [`progression_product`]; `step` may be negative.
fn signed_progression_product(first: i128, step: i128, count: u64) -> BigInt {
    let term = |j: u64| BigInt::from(first + i128::from(j) * step);

    if count >= PARALLEL_PRODUCT_THRESHOLD {
        debug!("Folding {} signed terms in parallel", count);
        (0..count)
            .into_par_iter()
            .fold(BigInt::one, |acc, j| acc * term(j))
            .reduce(BigInt::one, |a, b| a * b)
    } else {
        (0..count).fold(BigInt::one(), |acc, j| acc * term(j))
    }
}

/// Binary exponentiation, O(log exponent) multiplications.
fn power(base: &BigUint, exponent: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    if base.is_one() {
        return result;
    }

    let bits = exponent.bits();
    let mut square = base.clone();
    for bit in 0..bits {
        if exponent.bit(bit) {
            result *= &square;
        }
        if bit + 1 < bits {
            square = &square * &square;
        }
    }
    result
}

/// `n!`
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn factorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("factorial", "n", n)?;
    Ok(progression_product(1, 1, n))
}

/// Product of the odd integers in `[1, n]`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn odd_factorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("odd_factorial", "n", n)?;
    Ok(progression_product(1, 2, n.div_ceil(2)))
}

/// Product of the even integers in `[2, n]`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn even_factorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("even_factorial", "n", n)?;
    Ok(progression_product(2, 2, n / 2))
}

/// Product of every prime `<= n`, sieved.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn prime_factorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("prime_factorial", "n", n)?;
    let limit = usize::try_from(n).unwrap_or(usize::MAX);
    let primes = sieve_of_eratosthenes(limit);

    if primes.len() as u64 >= PARALLEL_PRODUCT_THRESHOLD {
        return Ok(primes
            .par_iter()
            .fold(BigUint::one, |acc, &p| acc * p)
            .reduce(BigUint::one, |a, b| a * b));
    }
    Ok(primes.iter().fold(BigUint::one(), |acc, &p| acc * p))
}

/// Number of derangements of `n` items.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn subfactorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("subfactorial", "n", n)?;
    if n == 0 {
        return Ok(BigUint::one());
    }

    let (mut before, mut last) = (BigUint::one(), BigUint::zero());
    for i in 2..=n {
        let next = (&last + &before) * (i - 1);
        before = last;
        last = next;
    }
    Ok(last)
}

/// `n * (n - 2) * ...` down to 1 or 2.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn double_factorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("double_factorial", "n", n)?;
    let first = if n % 2 == 0 { 2 } else { 1 };
    Ok(progression_product(first, 2, n.div_ceil(2)))
}

/// `x * (x + 1) * ... * (x + n - 1)`; negative for some negative `x`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn rising_factorial(x: i64, n: i64) -> Result<BigInt, DomainError> {
    let n = require_non_negative("rising_factorial", "n", n)?;
    Ok(signed_progression_product(i128::from(x), 1, n))
}

/// `x * (x - 1) * ... * (x - n + 1)`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn falling_factorial(x: i64, n: i64) -> Result<BigInt, DomainError> {
    let n = require_non_negative("falling_factorial", "n", n)?;
    Ok(signed_progression_product(i128::from(x), -1, n))
}

/// `x * (x - n) * (x - 2n) * ...` while the term stays positive.
///
/// # Errors
///
/// Returns an error if the step `n` is zero or negative.
pub fn multi_factorial(x: i64, n: i64) -> Result<BigUint, DomainError> {
    let step = require_positive("multi_factorial", n)?;
    if x <= 0 {
        return Ok(BigUint::one());
    }

    // Walk upward from the smallest positive term of the progression.
    let x = x.unsigned_abs();
    let first = (x - 1) % step + 1;
    let count = (x - first) / step + 1;
    Ok(progression_product(first, step, count))
}

/// `1! * 2! * ... * n!`
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn superfactorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("superfactorial", "n", n)?;

    let mut running = BigUint::one();
    let mut acc = BigUint::one();
    for i in 2..=n {
        running *= i;
        acc *= &running;
    }
    Ok(acc)
}

/// `1^1 * 2^2 * ... * n^n`
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn hyperfactorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("hyperfactorial", "n", n)?;

    let mut acc = BigUint::one();
    for i in 2..=n {
        let i = BigUint::from(i);
        acc *= power(&i, &i);
    }
    Ok(acc)
}

/// `1^(1!) * 2^(2!) * ... * n^(n!)`
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn superduperfactorial(n: i64) -> Result<BigUint, DomainError> {
    let n = require_non_negative("superduperfactorial", "n", n)?;

    let mut running = BigUint::one();
    let mut acc = BigUint::one();
    for i in 2..=n {
        running *= i;
        acc *= power(&BigUint::from(i), &running);
        debug!("superduperfactorial: folded i = {}, {} bits so far", i, acc.bits());
    }
    Ok(acc)
}
