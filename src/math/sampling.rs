use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::trace;

/// Sample a uniformly random integer with at most `bits` bits.
pub fn random_bits<R: CryptoRng + ?Sized>(bits: u64, rng: &mut R) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }
    let byte_len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; byte_len];
    rng.fill_bytes(&mut bytes);

    // Big-endian, so the excess high bits live in the first byte.
    let excess = (byte_len as u64 * 8 - bits) as u32;
    bytes[0] &= 0xffu8 >> excess;
    BigUint::from_bytes_be(&bytes)
}

/// Sample uniformly from `[0, bound)` by rejection over `bound.bits()` bits.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub(crate) fn random_below<R: CryptoRng + ?Sized>(bound: &BigUint, rng: &mut R) -> BigUint {
    assert!(!bound.is_zero(), "random_below: bound must be positive");
    let bits = bound.bits();
    loop {
        let candidate = random_bits(bits, rng);
        if candidate < *bound {
            return candidate;
        }
    }
}

/// Sample `r` uniformly from `[1, n)` with `gcd(r, n) = 1`.
///
/// This is the Paillier blinding factor. The range is the full residue range
/// of `n`, not the bit length of the key.
///
/// # Panics
///
/// Panics if `n < 2`.
pub(crate) fn random_unit<R: CryptoRng + ?Sized>(n: &BigUint, rng: &mut R) -> BigUint {
    assert!(*n > BigUint::one(), "random_unit: modulus must be at least 2");
    let mut rejected = 0u32;
    loop {
        let r = random_below(n, rng);
        if !r.is_zero() && r.gcd(n).is_one() {
            if rejected > 0 {
                trace!(rejected, "blinding factor rejections");
            }
            return r;
        }
        rejected += 1;
    }
}
