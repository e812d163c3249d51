//! Fixed-width variants over `i64`.
//!
//! Every product wraps silently on overflow, so each result equals the exact
//! value reduced modulo 2^64 and read back as a two's-complement `i64`.

use log::debug;

use crate::factorials::primes::sieve_of_eratosthenes;
use crate::utils::{DomainError, require_non_negative, require_positive};

/// Exponents at or above this width send any even base to zero modulo 2^64.
const WORD_BITS: u64 = 64;

fn wrapping_product(terms: impl Iterator<Item = i64>) -> i64 {
    let mut acc = 1i64;
    for term in terms {
        acc = acc.wrapping_mul(term);
        // Zero is absorbing, no later term can change it.
        if acc == 0 {
            break;
        }
    }
    acc
}

fn wrapping_power(base: i64, exponent: u64) -> i64 {
    let mut result = 1i64;
    let mut square = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.wrapping_mul(square);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.wrapping_mul(square);
        }
    }
    result
}

/// `n!`
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn factorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("factorial", "n", n)?;
    Ok(wrapping_product((2..=n).map(|i| i as i64)))
}

/// Product of the odd integers in `[1, n]`.
///
/// An odd product never wraps to zero, so this always takes about `n / 2` steps.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn odd_factorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("odd_factorial", "n", n)?;
    Ok(wrapping_product((1..=n).step_by(2).map(|i| i as i64)))
}

/// Product of the even integers in `[2, n]`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn even_factorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("even_factorial", "n", n)?;
    Ok(wrapping_product((2..=n).step_by(2).map(|i| i as i64)))
}

/// Product of every prime `<= n`.
///
/// Sieves all of `[0, n]` even after the product has wrapped, and the product
/// of odd primes never wraps to zero.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn prime_factorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("prime_factorial", "n", n)?;
    let limit = usize::try_from(n).unwrap_or(usize::MAX);
    Ok(wrapping_product(
        sieve_of_eratosthenes(limit).into_iter().map(|p| p as i64),
    ))
}

/// Number of derangements of `n` items, `D(n) = (n - 1)(D(n - 1) + D(n - 2))`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn subfactorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("subfactorial", "n", n)?;
    if n == 0 {
        return Ok(1);
    }

    let (mut before, mut last) = (1i64, 0i64);
    for i in 2..=n {
        let next = (i as i64 - 1).wrapping_mul(last.wrapping_add(before));
        before = last;
        last = next;
    }
    Ok(last)
}

/// `n * (n - 2) * (n - 4) * ...` down to 1 or 2.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn double_factorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("double_factorial", "n", n)?;
    Ok(wrapping_product((1..=n).rev().step_by(2).map(|i| i as i64)))
}

/// `x * (x + 1) * ... * (x + n - 1)`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn rising_factorial(x: i64, n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("rising_factorial", "n", n)?;
    Ok(wrapping_product((0..n).map(|i| x.wrapping_add(i as i64))))
}

/// `x * (x - 1) * ... * (x - n + 1)`.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn falling_factorial(x: i64, n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("falling_factorial", "n", n)?;
    Ok(wrapping_product((0..n).map(|i| x.wrapping_sub(i as i64))))
}

/// `x * (x - n) * (x - 2n) * ...` while the term stays positive; 1 when `x <= 0`.
///
/// With an odd step or odd `x` the terms may all be odd, in which case the
/// product never wraps to zero and every term is visited.
///
/// # Errors
///
/// Returns an error if the step `n` is zero or negative.
pub fn multi_factorial(x: i64, n: i64) -> Result<i64, DomainError> {
    let step = require_positive("multi_factorial", n)?;
    if x <= 0 {
        return Ok(1);
    }
    let step = usize::try_from(step).unwrap_or(usize::MAX);
    Ok(wrapping_product((1..=x).rev().step_by(step)))
}

/// `1! * 2! * ... * n!`
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn superfactorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("superfactorial", "n", n)?;

    let mut running = 1i64;
    let mut acc = 1i64;
    for i in 1..=n {
        running = running.wrapping_mul(i as i64);
        acc = acc.wrapping_mul(running);
        if acc == 0 {
            break;
        }
    }
    Ok(acc)
}

/// `1^1 * 2^2 * ... * n^n`
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn hyperfactorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("hyperfactorial", "n", n)?;
    Ok(wrapping_product((1..=n).map(|i| wrapping_power(i as i64, i))))
}

/// `1^(1!) * 2^(2!) * ... * n^(n!)`
///
/// The exponent `i!` is itself far wider than 64 bits for most `i`. Odd bases
/// have multiplicative order dividing 2^62, so the exponent is reduced modulo
/// 2^64; an even base raised to 64 or more is zero.
///
/// # Errors
///
/// Returns an error if `n` is negative.
pub fn superduperfactorial(n: i64) -> Result<i64, DomainError> {
    let n = require_non_negative("superduperfactorial", "n", n)?;

    let mut exact_exponent = Some(1u64);
    let mut wrapped_exponent = 1u64;
    let mut acc = 1i64;
    for i in 1..=n {
        exact_exponent = exact_exponent.and_then(|e| e.checked_mul(i));
        wrapped_exponent = wrapped_exponent.wrapping_mul(i);

        let vanishes = i % 2 == 0 && exact_exponent.is_none_or(|e| e >= WORD_BITS);
        let term = if vanishes {
            0
        } else {
            wrapping_power(i as i64, wrapped_exponent)
        };

        acc = acc.wrapping_mul(term);
        if acc == 0 {
            debug!("superduperfactorial({}) wrapped to zero at i = {}", n, i);
            break;
        }
    }
    Ok(acc)
}
