//! Private key (λ, μ): derived from two random primes `p` and `q` of equal
//! width, with `λ = (p - 1)(q - 1)` and `μ = λ^-1 mod n`.
use super::PublicKey;
use crate::crypto::{PaillierError, PaillierResult};
use crate::math::random_prime;
use num_bigint::BigUint;
use rand::CryptoRng;
use std::fmt;
use tracing::{debug, instrument};

/// Smallest accepted prime width in bits.
pub const MIN_KEY_BITS: u64 = 16;

/// Parameters for generating a Paillier key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenParams {
    /// Width of each prime factor; the modulus is twice as wide.
    pub bit_length: u64,
}

impl KeyGenParams {
    pub fn new(bit_length: u64) -> PaillierResult<Self> {
        let params = Self { bit_length };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> PaillierResult<()> {
        if self.bit_length < MIN_KEY_BITS {
            Err(PaillierError::KeySizeTooSmall {
                bits: self.bit_length,
                min: MIN_KEY_BITS,
            })
        } else {
            Ok(())
        }
    }
}

/// Paillier private key. Owns the matching [`PublicKey`].
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) lambda: BigUint,
    pub(crate) mu: BigUint,
    pub(crate) bit_length: u64,
    pub(crate) public_key: PublicKey,
}

impl PrivateKey {
    /// Generate a key pair from the thread-local CSPRNG.
    pub fn generate(bit_length: u64) -> PaillierResult<Self> {
        let params = KeyGenParams::new(bit_length)?;
        Self::generate_with_rng(&params, &mut rand::rng())
    }

    #[instrument(level = "debug", skip(rng))]
    pub fn generate_with_rng<R: CryptoRng + ?Sized>(
        params: &KeyGenParams,
        rng: &mut R,
    ) -> PaillierResult<Self> {
        params.validate()?;
        let bits = params.bit_length;

        let p = random_prime(bits, rng)?;
        let mut q = random_prime(bits, rng)?;
        while q == p {
            debug!("second prime collided with the first, redrawing");
            q = random_prime(bits, rng)?;
        }

        let n = &p * &q;
        let lambda = (&p - 1u32) * (&q - 1u32);
        let mu = lambda
            .modinv(&n)
            .ok_or_else(|| PaillierError::KeyGenerationFailure {
                message: "lambda has no inverse modulo n".into(),
            })?;

        debug!(modulus_bits = n.bits(), "generated key pair");
        Ok(Self {
            lambda,
            mu,
            bit_length: bits,
            public_key: PublicKey::from_modulus(n, bits),
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    pub fn mu(&self) -> &BigUint {
        &self.mu
    }

    pub fn bit_length(&self) -> u64 {
        self.bit_length
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("lambda", &"<redacted>")
            .field("mu", &"<redacted>")
            .field("bit_length", &self.bit_length)
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn rejects_small_key_sizes() {
        assert_eq!(
            PrivateKey::generate(8).unwrap_err(),
            PaillierError::KeySizeTooSmall { bits: 8, min: 16 }
        );
        assert!(KeyGenParams::new(15).is_err());
        assert!(KeyGenParams::new(16).is_ok());
    }

    #[test]
    fn key_invariants_hold() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for bits in [16u64, 32, 64, 128] {
            let params = KeyGenParams::new(bits).unwrap();
            let key = PrivateKey::generate_with_rng(&params, &mut rng).unwrap();
            let pk = key.public_key();

            assert_eq!(pk.g(), &(pk.n() + 1u32));
            assert_eq!(pk.n_squared(), &(pk.n() * pk.n()));
            assert!(((key.mu() * key.lambda()) % pk.n()).is_one());
            assert_eq!(pk.n().bits(), 2 * bits);
            assert_eq!(key.bit_length(), bits);
        }
    }

    #[test]
    fn debug_redacts_secrets() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let params = KeyGenParams::new(16).unwrap();
        let key = PrivateKey::generate_with_rng(&params, &mut rng).unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(&key.lambda().to_string()));
    }
}
