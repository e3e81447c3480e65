use super::{Client, PaillierResult};
use crate::fixed::DEFAULT_MAX_PRECISION;
use crate::keys::{KeyGenParams, PrivateKey};
use rand::CryptoRng;

/// Prime width used when none is configured.
pub const DEFAULT_KEY_BITS: u64 = 512;

pub struct ClientBuilder {
    key_bits: Option<u64>,
    max_precision: Option<u32>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            key_bits: None,
            max_precision: None,
        }
    }

    /// Width of each prime factor; the modulus is twice as wide.
    pub fn key_bits(mut self, bits: u64) -> Self {
        self.key_bits = Some(bits);
        self
    }

    /// Fractional digits kept when the client encodes floats.
    pub fn max_precision(mut self, digits: u32) -> Self {
        self.max_precision = Some(digits);
        self
    }

    pub fn build(self) -> PaillierResult<Client> {
        self.build_with_rng(&mut rand::rng())
    }

    pub fn build_with_rng<R: CryptoRng + ?Sized>(self, rng: &mut R) -> PaillierResult<Client> {
        let params = KeyGenParams::new(self.key_bits.unwrap_or(DEFAULT_KEY_BITS))?;
        let key = PrivateKey::generate_with_rng(&params, rng)?;
        Ok(Client::from_key(
            key,
            self.max_precision.unwrap_or(DEFAULT_MAX_PRECISION),
        ))
    }
}
