//! Paillier encryption, decryption and homomorphic primitives.
//!
//! Ciphertexts are plain `BigUint`s in `[0, n^2)`. The homomorphic primitives
//! do not range-check their inputs: passing values that did not come from the
//! same key yields garbage, not an error.
use super::{PaillierError, PaillierResult};
use crate::keys::{PrivateKey, PublicKey};
use crate::math::random_unit;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Signed;
use rand::CryptoRng;

impl PublicKey {
    /// Encrypt `plaintext` with the thread-local CSPRNG.
    pub fn encrypt(&self, plaintext: &BigUint) -> PaillierResult<BigUint> {
        self.encrypt_with_rng(plaintext, &mut rand::rng())
    }

    /// Encrypts `plaintext`, which must lie in `[0, n)`.
    ///
    /// # Paillier Encryption
    /// 1. Sample a blinding factor `r` uniformly from `[1, n)` with `gcd(r, n) = 1`
    /// 2. Compute `c = g^m * r^n mod n^2`
    pub fn encrypt_with_rng<R: CryptoRng + ?Sized>(
        &self,
        plaintext: &BigUint,
        rng: &mut R,
    ) -> PaillierResult<BigUint> {
        if *plaintext >= self.n {
            return Err(PaillierError::PlaintextOutOfRange);
        }

        let r = random_unit(&self.n, rng);
        let gm = self.g.modpow(plaintext, &self.n_squared);
        let rn = r.modpow(&self.n, &self.n_squared);
        Ok((gm * rn) % &self.n_squared)
    }

    /// Encrypt a signed plaintext from `(-n/2, n/2]`.
    pub fn encrypt_signed(&self, plaintext: &BigInt) -> PaillierResult<BigUint> {
        self.encrypt_signed_with_rng(plaintext, &mut rand::rng())
    }

    /// Folds a signed plaintext into `[0, n)` and encrypts it.
    ///
    /// Values whose magnitude exceeds `floor(n/2)` would not decrypt back to
    /// themselves and are rejected with [`PaillierError::PlaintextOutOfRange`].
    pub fn encrypt_signed_with_rng<R: CryptoRng + ?Sized>(
        &self,
        plaintext: &BigInt,
        rng: &mut R,
    ) -> PaillierResult<BigUint> {
        if *plaintext.magnitude() > self.half_n {
            return Err(PaillierError::PlaintextOutOfRange);
        }
        let folded = if plaintext.is_negative() {
            &self.n - plaintext.magnitude()
        } else {
            plaintext.magnitude().clone()
        };
        self.encrypt_with_rng(&folded, rng)
    }

    /// `E(a) * E(b) mod n^2`, an encryption of `a + b`.
    pub fn add_ciphertexts(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.n_squared
    }

    /// `E(a) * g^m mod n^2`, an encryption of `a + m`.
    ///
    /// A negative `m` is reduced modulo `n` first; `g` has order `n`, so the
    /// result is the same as with a true negative exponent.
    pub fn add_plain(&self, ciphertext: &BigUint, plaintext: &BigInt) -> BigUint {
        let (_, exponent) = plaintext.mod_floor(&self.n_signed()).into_parts();
        let gm = self.g.modpow(&exponent, &self.n_squared);
        (ciphertext * gm) % &self.n_squared
    }

    /// `E(a)^k mod n^2`, an encryption of `a * k`.
    ///
    /// A negative `k` takes the inverse of `E(a)^|k|`, which fails with
    /// [`PaillierError::NotInvertible`] only for malformed ciphertexts.
    pub fn mul_plain(&self, ciphertext: &BigUint, scalar: &BigInt) -> PaillierResult<BigUint> {
        let scaled = ciphertext.modpow(scalar.magnitude(), &self.n_squared);
        if scalar.sign() == Sign::Minus {
            scaled
                .modinv(&self.n_squared)
                .ok_or(PaillierError::NotInvertible)
        } else {
            Ok(scaled)
        }
    }

    /// An encryption of `-a`.
    pub fn negate(&self, ciphertext: &BigUint) -> PaillierResult<BigUint> {
        self.mul_plain(ciphertext, &BigInt::from(-1))
    }

    /// Fresh ciphertext for the same plaintext, unlinkable to the input.
    pub fn rerandomize(&self, ciphertext: &BigUint) -> BigUint {
        self.rerandomize_with_rng(ciphertext, &mut rand::rng())
    }

    pub fn rerandomize_with_rng<R: CryptoRng + ?Sized>(
        &self,
        ciphertext: &BigUint,
        rng: &mut R,
    ) -> BigUint {
        let r = random_unit(&self.n, rng);
        let rn = r.modpow(&self.n, &self.n_squared);
        (ciphertext * rn) % &self.n_squared
    }

    fn n_signed(&self) -> BigInt {
        BigInt::from(self.n.clone())
    }
}

impl PrivateKey {
    /// Decrypts `ciphertext` into the unsigned residue in `[0, n)`.
    ///
    /// # Paillier Decryption
    /// With `g = n + 1`:
    /// - `u = c^λ mod n^2`
    /// - `L(u) = (u - 1) / n`
    /// - `m = L(u) * μ mod n`
    pub fn decrypt_raw(&self, ciphertext: &BigUint) -> PaillierResult<BigUint> {
        let pk = &self.public_key;
        if *ciphertext >= pk.n_squared {
            return Err(PaillierError::CiphertextOutOfRange);
        }

        let u = ciphertext.modpow(&self.lambda, &pk.n_squared);
        // Offsetting by n^2 keeps u - 1 non-negative; it adds n to L(u),
        // which vanishes modulo n.
        let l = (u + &pk.n_squared - 1u32) / &pk.n;
        Ok((l * &self.mu) % &pk.n)
    }

    /// Decrypts `ciphertext` into the signed range `(-n/2, n/2]`.
    ///
    /// Any true value whose magnitude exceeds `n/2` wraps silently; size the
    /// key so every intermediate value, scale factors included, stays below.
    pub fn decrypt(&self, ciphertext: &BigUint) -> PaillierResult<BigInt> {
        let residue = self.decrypt_raw(ciphertext)?;
        let pk = &self.public_key;
        if residue > pk.half_n {
            Ok(BigInt::from(residue) - BigInt::from(pk.n.clone()))
        } else {
            Ok(BigInt::from(residue))
        }
    }
}
