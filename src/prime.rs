//! Prime capacity policy shared by both map variants.
//!
//! Bucket arrays are always prime-sized. Quadratic probing over a prime table
//! with load at most one half is guaranteed to reach an empty slot, and prime
//! moduli spread keys more evenly across chains.

/// Bucket count of a map created without an explicit capacity
pub const DEFAULT_CAPACITY: usize = 11;

/// Returns true if `n` is prime.
///
/// Uses trial division by odd factors up to `sqrt(n)`.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub const fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n <= 1 || n % 2 == 0 {
        return false;
    }

    let mut factor = 3;
    // `factor <= n / factor` is `factor * factor <= n` without overflow
    while factor <= n / factor {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }
    true
}

/// Returns the smallest prime reachable from `n` by stepping through odd numbers.
///
/// An even `n` is first bumped to the next odd number, so `next_prime(2)` is 3
/// and the smallest capacity this policy ever yields is 3.
#[must_use]
pub const fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_squares_are_not_prime() {
        for factor in [3_usize, 5, 7, 11, 101] {
            assert!(!is_prime(factor * factor));
        }
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(0), 3);
        assert_eq!(next_prime(1), 3);
        assert_eq!(next_prime(2), 3);
        assert_eq!(next_prime(3), 3);
        assert_eq!(next_prime(8), 11);
        assert_eq!(next_prime(11), 11);
        assert_eq!(next_prime(22), 23);
        assert_eq!(next_prime(24), 29);
        assert_eq!(next_prime(100), 101);
    }

    #[test]
    fn test_next_prime_is_prime_and_not_smaller() {
        for n in 0..2_000 {
            let p = next_prime(n);
            assert!(is_prime(p));
            assert!(p >= n);
        }
    }
}
