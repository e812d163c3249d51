//! Digit frequency statistics over rendered results

mod histogram;

pub use histogram::DigitHistogram;

#[cfg(test)]
mod tests;
