use super::builder::ClientBuilder;
use super::{PaillierError, PaillierResult};
use crate::fixed::{EncryptedNumber, FixedPointNumber, PlainNumber};
use crate::keys::{PrivateKey, PublicKey};
use num_bigint::BigInt;
use rand::CryptoRng;

/// Owns a key pair and moves [`PlainNumber`]s in and out of the encrypted
/// domain. Both halves of the key live behind one handle; share
/// [`Client::public_key`] with parties that only compute.
#[derive(Debug, Clone)]
pub struct Client {
    key: PrivateKey,
    max_precision: u32,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Generate a fresh key pair with `key_bits`-bit primes.
    pub fn new(key_bits: u64) -> PaillierResult<Self> {
        ClientBuilder::new().key_bits(key_bits).build()
    }

    pub fn from_key(key: PrivateKey, max_precision: u32) -> Self {
        Self { key, max_precision }
    }

    pub fn public_key(&self) -> &PublicKey {
        self.key.public_key()
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.key
    }

    pub fn max_precision(&self) -> u32 {
        self.max_precision
    }

    /// Encode `value` with this client's precision.
    pub fn encode_f64(&self, value: f64) -> PaillierResult<PlainNumber> {
        Ok(PlainNumber::from_f64_with_precision(value, self.max_precision)?)
    }

    pub fn encrypt(&self, number: &PlainNumber) -> PaillierResult<EncryptedNumber> {
        self.encrypt_with_rng(number, &mut rand::rng())
    }

    /// Encrypts the mantissa; the exponent stays in the clear.
    pub fn encrypt_with_rng<R: CryptoRng + ?Sized>(
        &self,
        number: &PlainNumber,
        rng: &mut R,
    ) -> PaillierResult<EncryptedNumber> {
        let ciphertext = self
            .public_key()
            .encrypt_signed_with_rng(number.mantissa(), rng)?;
        Ok(EncryptedNumber::new(ciphertext, number.exponent()))
    }

    pub fn decrypt(&self, number: &EncryptedNumber) -> PaillierResult<PlainNumber> {
        let mantissa = self.key.decrypt(number.ciphertext())?;
        Ok(PlainNumber::new(mantissa, number.exponent()).normalized())
    }

    pub fn encrypt_f64(&self, value: f64) -> PaillierResult<EncryptedNumber> {
        self.encrypt(&self.encode_f64(value)?)
    }

    pub fn encrypt_int(&self, value: impl Into<BigInt>) -> PaillierResult<EncryptedNumber> {
        self.encrypt(&PlainNumber::from_int(value))
    }

    /// Runtime-checked [`encrypt`](Self::encrypt).
    pub fn encrypt_number(&self, number: &FixedPointNumber) -> PaillierResult<FixedPointNumber> {
        match number {
            FixedPointNumber::Plain(plain) => self.encrypt(plain).map(Into::into),
            FixedPointNumber::Encrypted(_) => {
                Err(PaillierError::state("number is already encrypted"))
            }
        }
    }

    /// Runtime-checked [`decrypt`](Self::decrypt).
    pub fn decrypt_number(&self, number: &FixedPointNumber) -> PaillierResult<FixedPointNumber> {
        match number {
            FixedPointNumber::Encrypted(encrypted) => self.decrypt(encrypted).map(Into::into),
            FixedPointNumber::Plain(_) => Err(PaillierError::state("number is not encrypted")),
        }
    }
}
