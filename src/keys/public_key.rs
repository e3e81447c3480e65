use num_bigint::BigUint;

/// Paillier public key.
///
/// Holds the modulus `n = p * q`, the precomputed `n^2` and the generator
/// `g = n + 1`. The generator is fixed rather than random because it makes
/// `g^m mod n^2 = 1 + m * n`, which gives the closed-form decryption used by
/// [`PrivateKey::decrypt`](crate::PrivateKey::decrypt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) n_squared: BigUint,
    pub(crate) g: BigUint,
    pub(crate) half_n: BigUint,
    pub(crate) bit_length: u64,
}

impl PublicKey {
    /// Rebuild a public key from its modulus.
    ///
    /// `bit_length` is the width of each prime factor, as passed to key
    /// generation. `n` must be the product of two distinct odd primes; the
    /// modulus is not checked, and encrypting under `n < 2` panics while
    /// sampling the blinding factor.
    pub fn from_modulus(n: BigUint, bit_length: u64) -> Self {
        let n_squared = &n * &n;
        let g = &n + 1u32;
        let half_n = &n >> 1u32;
        Self {
            n,
            n_squared,
            g,
            half_n,
            bit_length,
        }
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// `floor(n / 2)`, the largest magnitude that survives sign folding.
    pub fn half_n(&self) -> &BigUint {
        &self.half_n
    }

    pub fn bit_length(&self) -> u64 {
        self.bit_length
    }
}
