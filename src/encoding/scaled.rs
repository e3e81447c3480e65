//! Fixed-scale integer encoding.
//!
//! Every value is multiplied by the same factor `10^precision` and truncated,
//! so sums of encodings decode directly and a product of two encodings needs
//! one [`FixedScaleEncoder::rescale_product`]. Unlike [`PlainNumber`] there is
//! no per-value exponent, which makes the encodings usable with the raw
//! [`PublicKey`](crate::PublicKey) primitives.
use super::EncodingResult;
use crate::fixed::{PlainNumber, pow10};
use num_bigint::BigInt;
use num_integer::Integer;

pub const DEFAULT_SCALE_PRECISION: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedScaleEncoder {
    precision: u32,
    factor: BigInt,
}

impl Default for FixedScaleEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_PRECISION)
    }
}

impl FixedScaleEncoder {
    pub fn new(precision: u32) -> Self {
        Self {
            precision,
            factor: pow10(precision as u64),
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// `10^precision`
    pub fn factor(&self) -> &BigInt {
        &self.factor
    }

    pub fn encode_int(&self, value: impl Into<BigInt>) -> BigInt {
        let value: BigInt = value.into();
        value * &self.factor
    }

    /// Inverse of [`encode_int`](Self::encode_int), rounding toward negative
    /// infinity.
    pub fn decode_int(&self, encoded: &BigInt) -> BigInt {
        encoded.div_floor(&self.factor)
    }

    /// Scale `value` and truncate toward zero.
    pub fn encode_f64(&self, value: f64) -> EncodingResult<BigInt> {
        let exact = PlainNumber::from_f64(value)?;
        let shift = exact.exponent() + self.precision as i64;
        Ok(if shift >= 0 {
            exact.mantissa() * pow10(shift as u64)
        } else {
            exact.mantissa() / pow10(shift.unsigned_abs())
        })
    }

    pub fn decode_f64(&self, encoded: &BigInt) -> f64 {
        PlainNumber::new(encoded.clone(), -(self.precision as i64)).to_f64()
    }

    /// Bring a product of two encodings back to a single factor.
    pub fn rescale_product(&self, product: &BigInt) -> BigInt {
        product.div_floor(&self.factor)
    }
}
