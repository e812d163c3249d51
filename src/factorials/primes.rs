use log::debug;

/// Enumerate every prime `<= limit` with the Sieve of Eratosthenes.
///
/// Runs in O(n log log n) time and allocates one marker per integer in `[0, limit]`.
///
/// # Panics
///
/// Panics when the marker table cannot be allocated, which is always the case
/// for limits near `usize::MAX`.
pub fn sieve_of_eratosthenes(limit: usize) -> Vec<u64> {
    debug!("Sieving primes up to {}", limit);

    if limit < 2 {
        return Vec::new();
    }

    // usize::MAX is never prime, so dropping it from the table changes nothing.
    let len = limit.saturating_add(1);
    let mut is_prime = vec![true; len];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2usize;
    while let Some(square) = i.checked_mul(i) {
        if square >= len {
            break;
        }
        if is_prime[i] {
            for multiple in (square..len).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    let primes: Vec<u64> = is_prime
        .iter()
        .enumerate()
        .filter_map(|(value, &prime)| prime.then_some(value as u64))
        .collect();

    debug!("Found {} primes up to {}", primes.len(), limit);
    primes
}

/// Enumerate every prime `<= limit` by trial division against odd candidates up to √m.
///
/// Produces the same output as [`sieve_of_eratosthenes`] without the O(n) marker table.
pub fn primes_by_trial_division(limit: u64) -> Vec<u64> {
    debug!("Trial-dividing primes up to {}", limit);

    let mut primes = Vec::new();
    if limit < 2 {
        return primes;
    }
    primes.push(2);

    let mut candidate = 3u64;
    while candidate <= limit {
        if is_odd_prime(candidate) {
            primes.push(candidate);
        }
        match candidate.checked_add(2) {
            Some(next) => candidate = next,
            None => break,
        }
    }

    primes
}

fn is_odd_prime(candidate: u64) -> bool {
    let mut divisor = 3u64;
    while divisor.saturating_mul(divisor) <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
