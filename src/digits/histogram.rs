use std::fmt;

use log::debug;
use rayon::prelude::*;

/// Texts longer than this many bytes are counted in parallel chunks.
pub const PARALLEL_COUNT_THRESHOLD: usize = 1 << 20;
const CHUNK_SIZE: usize = 1 << 16;

type Counts = [usize; 10];

fn count_bytes(bytes: &[u8]) -> Counts {
    let mut counts = [0; 10];
    for &byte in bytes {
        if byte.is_ascii_digit() {
            counts[usize::from(byte - b'0')] += 1;
        }
    }
    counts
}

fn merge(mut left: Counts, right: Counts) -> Counts {
    for (l, r) in left.iter_mut().zip(right) {
        *l += r;
    }
    left
}

/// Occurrence counts of the decimal digits '0'..='9' in a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitHistogram {
    counts: Counts,
}

impl DigitHistogram {
    /// Count every ASCII digit in `text`, ignoring all other characters.
    pub fn analyze(text: &str) -> Self {
        let bytes = text.as_bytes();
        debug!("Analyzing {} bytes of text", bytes.len());

        // Multi-byte UTF-8 sequences never contain ASCII bytes, so byte chunks are safe.
        let counts = if bytes.len() > PARALLEL_COUNT_THRESHOLD {
            bytes
                .par_chunks(CHUNK_SIZE)
                .map(count_bytes)
                .reduce(|| [0; 10], merge)
        } else {
            count_bytes(bytes)
        };

        Self { counts }
    }

    /// Occurrences of `digit`, which must be in `0..=9`; other values count as zero.
    pub fn count(&self, digit: u8) -> usize {
        self.counts.get(usize::from(digit)).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[usize; 10] {
        &self.counts
    }

    /// Sum of all digit counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// How many of the ten digits occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Mean count over the digits that occur at least once; `None` if no digit occurs.
    pub fn mean(&self) -> Option<f64> {
        match self.distinct() {
            0 => None,
            distinct => Some(self.total() as f64 / distinct as f64),
        }
    }

    /// `(digit, count)` pairs from '0' to '9'.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        ('0'..='9').zip(self.counts.iter().copied())
    }
}

impl fmt::Display for DigitHistogram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (digit, count) in self.iter() {
            writeln!(f, "{}: {}", digit, count)?;
        }
        writeln!(f, "Total: {}", self.total())?;
        match self.mean() {
            Some(mean) => write!(f, "Mean: {:.2}", mean),
            None => write!(f, "Mean: n/a"),
        }
    }
}
