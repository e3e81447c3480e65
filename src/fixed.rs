//! Decimal fixed-point numbers.
//!
//! A value is stored as `mantissa * 10^exponent`, so `1.032` becomes
//! `1032 * 10^-3`. This lets the integer-only Paillier scheme carry reals.
//! Plain and encrypted numbers are distinct types; [`FixedPointNumber`] tags
//! either one when the state is only known at runtime.
use crate::encoding::{EncodingError, EncodingResult};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;
use std::sync::LazyLock;

/// Fractional digits kept by [`PlainNumber::from_f64`].
pub const DEFAULT_MAX_PRECISION: u32 = 30;

static TEN: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(10u8));

/// `10^k`
pub fn pow10(k: u64) -> BigInt {
    num_traits::pow(TEN.clone(), k as usize)
}

/// An unencrypted decimal number `mantissa * 10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainNumber {
    mantissa: BigInt,
    exponent: i64,
}

impl PlainNumber {
    /// Raw constructor; the pair is kept exactly as given.
    pub fn new(mantissa: impl Into<BigInt>, exponent: i64) -> Self {
        Self {
            mantissa: mantissa.into(),
            exponent,
        }
    }

    /// Encode an integer, moving trailing decimal zeros into the exponent.
    pub fn from_int(value: impl Into<BigInt>) -> Self {
        Self::new(value, 0).normalized()
    }

    /// Encode a float with [`DEFAULT_MAX_PRECISION`] fractional digits.
    pub fn from_f64(value: f64) -> EncodingResult<Self> {
        Self::from_f64_with_precision(value, DEFAULT_MAX_PRECISION)
    }

    /// Encode a float keeping at most `max_precision` fractional digits.
    ///
    /// Starts from the shortest decimal that round-trips to `value`, so
    /// `12400.36` becomes `1240036 * 10^-2` rather than the binary expansion.
    /// Digits past `max_precision` are rounded half away from zero.
    pub fn from_f64_with_precision(value: f64, max_precision: u32) -> EncodingResult<Self> {
        if !value.is_finite() {
            return Err(EncodingError::NonFinite {
                value: value.to_string(),
            });
        }
        parse_decimal(&value.to_string(), max_precision)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_encrypted(&self) -> bool {
        false
    }

    /// Strip trailing decimal zeros from the mantissa. Zero normalizes to
    /// `0 * 10^0`.
    pub fn normalized(&self) -> Self {
        if self.mantissa.is_zero() {
            return Self::new(0, 0);
        }
        let mut mantissa = self.mantissa.clone();
        let mut exponent = self.exponent;
        loop {
            let (quotient, remainder) = mantissa.div_rem(&TEN);
            if !remainder.is_zero() || exponent == i64::MAX {
                break;
            }
            mantissa = quotient;
            exponent += 1;
        }
        Self { mantissa, exponent }
    }

    /// The integer value, rounded toward negative infinity.
    pub fn to_int(&self) -> BigInt {
        if self.exponent >= 0 {
            &self.mantissa * pow10(self.exponent as u64)
        } else {
            self.mantissa
                .div_floor(&pow10(self.exponent.unsigned_abs()))
        }
    }

    /// [`to_int`](Self::to_int), if it fits in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_int().to_i64()
    }

    /// The nearest `f64` to the exact decimal value.
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.mantissa, self.exponent)
            .parse()
            .unwrap_or(f64::NAN)
    }
}

impl Neg for &PlainNumber {
    type Output = PlainNumber;

    fn neg(self) -> PlainNumber {
        PlainNumber::new(-&self.mantissa, self.exponent)
    }
}

impl Neg for PlainNumber {
    type Output = PlainNumber;

    fn neg(self) -> PlainNumber {
        -&self
    }
}

impl fmt::Display for PlainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent >= 0 {
            return write!(f, "{}", self.to_int());
        }
        let digits = self.mantissa.magnitude().to_string();
        let frac_len = self.exponent.unsigned_abs() as usize;
        let padded = format!("{digits:0>width$}", width = frac_len + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - frac_len);
        let sign = if self.mantissa.is_negative() { "-" } else { "" };
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl FromStr for PlainNumber {
    type Err = EncodingError;

    /// Parses a plain decimal such as `-1223.1056`, keeping every digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s, u32::MAX)
    }
}

fn parse_decimal(input: &str, max_precision: u32) -> EncodingResult<PlainNumber> {
    let invalid = || EncodingError::InvalidDecimal {
        input: input.to_string(),
    };

    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part
        .bytes()
        .chain(frac_part.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let keep = frac_part.len().min(max_precision as usize);
    let (kept, dropped) = frac_part.split_at(keep);
    let digits = format!("{int_part}{kept}");
    let mut magnitude = if digits.is_empty() {
        BigInt::zero()
    } else {
        BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?
    };
    if dropped.as_bytes().first().is_some_and(|&d| d >= b'5') {
        magnitude += 1u32;
    }

    let mantissa = if negative { -magnitude } else { magnitude };
    Ok(PlainNumber::new(mantissa, -(keep as i64)).normalized())
}

/// An encrypted decimal: a Paillier ciphertext of the mantissa plus the
/// exponent in the clear.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncryptedNumber {
    ciphertext: BigUint,
    exponent: i64,
}

impl EncryptedNumber {
    pub fn new(ciphertext: BigUint, exponent: i64) -> Self {
        Self {
            ciphertext,
            exponent,
        }
    }

    pub fn ciphertext(&self) -> &BigUint {
        &self.ciphertext
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_encrypted(&self) -> bool {
        true
    }
}

/// A fixed-point number whose encryption state is a runtime tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedPointNumber {
    Plain(PlainNumber),
    Encrypted(EncryptedNumber),
}

impl FixedPointNumber {
    pub fn from_int(value: impl Into<BigInt>) -> Self {
        Self::Plain(PlainNumber::from_int(value))
    }

    pub fn from_f64(value: f64) -> EncodingResult<Self> {
        PlainNumber::from_f64(value).map(Self::Plain)
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted(_))
    }

    pub fn exponent(&self) -> i64 {
        match self {
            Self::Plain(n) => n.exponent(),
            Self::Encrypted(n) => n.exponent(),
        }
    }

    pub fn as_plain(&self) -> Option<&PlainNumber> {
        match self {
            Self::Plain(n) => Some(n),
            Self::Encrypted(_) => None,
        }
    }

    pub fn as_encrypted(&self) -> Option<&EncryptedNumber> {
        match self {
            Self::Plain(_) => None,
            Self::Encrypted(n) => Some(n),
        }
    }
}

impl From<PlainNumber> for FixedPointNumber {
    fn from(n: PlainNumber) -> Self {
        Self::Plain(n)
    }
}

impl From<EncryptedNumber> for FixedPointNumber {
    fn from(n: EncryptedNumber) -> Self {
        Self::Encrypted(n)
    }
}
