//! Combinatorial function library.
//!
//! Each function exists twice with identical mathematics: [`bounded`] computes
//! in `i64` with silent wraparound, [`arbitrary`] computes exactly with
//! `num_bigint`. All functions are pure and safe to call from any thread.

pub mod arbitrary;
pub mod bounded;
mod errors;
mod function;
pub mod primes;
pub mod worker;

pub use errors::WorkerError;
pub use function::{Function, Precision, Value, evaluate};
pub use primes::{primes_by_trial_division, sieve_of_eratosthenes};
