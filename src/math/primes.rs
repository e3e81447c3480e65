//! Prime utilities for Paillier key generation.
//!
//! Primality is decided by [`num_prime`]: deterministic below `2^64`, a
//! strong probable-prime test for wider candidates. Candidates are drawn here
//! so that every call goes through the caller's CSPRNG.
//!
//! Reference:
//! https://en.wikipedia.org/wiki/Baillie%E2%80%93PSW_primality_test

use super::sampling::random_bits;
use crate::crypto::{PaillierError, PaillierResult};
use num_bigint::BigUint;
use num_prime::PrimalityTestConfig;
use num_prime::nt_funcs::is_prime;
use rand::CryptoRng;
use tracing::trace;

/// Returns `true` if `n` is prime, or probably prime for `n >= 2^64`.
pub fn is_probable_prime(n: &BigUint) -> bool {
    is_prime(n, Some(PrimalityTestConfig::default())).probably()
}

/// Draws a random prime of exactly `bits` bits.
///
/// The two most significant bits are forced on, so the product of two primes
/// returned for the same `bits` is exactly `2 * bits` wide. Fails with
/// [`PaillierError::KeyGenerationFailure`] when `bits < 2`.
pub fn random_prime<R: CryptoRng + ?Sized>(bits: u64, rng: &mut R) -> PaillierResult<BigUint> {
    if bits < 2 {
        return Err(PaillierError::KeyGenerationFailure {
            message: format!("cannot draw a {bits}-bit prime with the top two bits set"),
        });
    }

    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let mut candidate = random_bits(bits, rng);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(bits - 2, true);
        candidate.set_bit(0, true);

        if is_probable_prime(&candidate) {
            trace!(bits, attempts, "prime candidate accepted");
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const KNOWN_SMALL_PRIMES: [u64; 8] = [2, 3, 5, 7, 11, 13, 17, 19];
    const KNOWN_SMALL_COMPOSITES: [u64; 10] = [0, 1, 4, 6, 8, 9, 10, 12, 15, 16];

    fn check(n: u64) -> bool {
        is_probable_prime(&BigUint::from(n))
    }

    /// Slow-but-clear `6k +/- 1` trial division.
    fn is_prime_reference(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n == 2 || n == 3 {
            return true;
        }
        if n % 2 == 0 || n % 3 == 0 {
            return false;
        }
        let mut i = 5u64;
        while i.saturating_mul(i) <= n {
            if n % i == 0 || n % (i + 2) == 0 {
                return false;
            }
            i += 6;
        }
        true
    }

    #[test]
    fn test_is_prime_basic() {
        for &prime in &KNOWN_SMALL_PRIMES {
            assert!(check(prime));
        }
        for &composite in &KNOWN_SMALL_COMPOSITES {
            assert!(!check(composite));
        }
    }

    #[test]
    fn test_is_prime_large() {
        assert!(check(65537));
        assert!(check(982_451_653));
        assert!(check(2_147_483_647));
        assert!(check(18_446_744_073_709_551_557));

        assert!(!check(65536));
        assert!(!check(982_451_654));
        assert!(!check(2_147_483_648));
        assert!(!check(u64::MAX));
    }

    #[test]
    fn test_is_prime_tricky_composites() {
        // Carmichael numbers and strong pseudoprimes for small base sets.
        let tricky = [561u64, 1_105, 1_729, 3_215_031_751, 2_152_302_898_747];
        for &n in &tricky {
            assert!(!check(n), "expected composite: {n}");
        }
    }

    #[test]
    fn test_is_prime_mersenne_127() {
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(is_probable_prime(&m127));
        assert!(!is_probable_prime(&(&m127 * &m127)));
        assert!(!is_probable_prime(&(&m127 + 2u32)));
    }

    #[test]
    fn primality_matches_reference_on_selected_ranges() {
        let ranges: [(u64, u64); 4] = [
            (2, 14),
            (90, 114),
            (10_000, 10_024),
            (1_000_000, 1_000_024),
        ];

        for (start, end) in ranges {
            for n in start..=end {
                assert_eq!(check(n), is_prime_reference(n), "mismatch at {n}");
            }
        }
    }

    #[test]
    fn random_prime_has_requested_width() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for bits in [2u64, 3, 16, 64, 130] {
            let p = random_prime(bits, &mut rng).unwrap();
            assert_eq!(p.bits(), bits, "width mismatch for {bits} bits");
            assert!(is_probable_prime(&p));
        }
    }

    #[test]
    fn random_prime_rejects_narrow_widths() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for bits in [0u64, 1] {
            assert!(matches!(
                random_prime(bits, &mut rng),
                Err(PaillierError::KeyGenerationFailure { .. })
            ));
        }
    }
}
