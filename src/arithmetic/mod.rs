//! Fixed-point arithmetic between an encrypted and a plain number.
//!
//! Operands with different exponents are aligned to the smaller exponent
//! before the homomorphic primitive runs. When the encrypted side has the
//! larger exponent it is scaled with [`PublicKey::mul_plain`]; otherwise the
//! plain mantissa is scaled in the clear.
//!
//! Every result must decode within `(-n/2, n/2]`. Alignment multiplies by
//! `10^|Δexponent|` and [`mul`] multiplies mantissas, so size the key for the
//! largest intermediate mantissa, not just the inputs.

pub mod checked;

use crate::crypto::{PaillierError, PaillierResult};
use crate::encoding::EncodingError;
use crate::fixed::{EncryptedNumber, PlainNumber, pow10};
use crate::keys::PublicKey;
use num_traits::Zero;
use std::cmp::Ordering;
use tracing::{instrument, trace};

/// `encrypted + plain`
#[instrument(level = "debug", skip_all, fields(lhs_exp = encrypted.exponent(), rhs_exp = plain.exponent()))]
pub fn add(
    key: &PublicKey,
    encrypted: &EncryptedNumber,
    plain: &PlainNumber,
) -> PaillierResult<EncryptedNumber> {
    let gap = encrypted.exponent().abs_diff(plain.exponent());
    let result = match encrypted.exponent().cmp(&plain.exponent()) {
        Ordering::Equal => EncryptedNumber::new(
            key.add_plain(encrypted.ciphertext(), plain.mantissa()),
            encrypted.exponent(),
        ),
        Ordering::Greater => {
            trace!(gap, "scaling encrypted operand");
            let aligned = key.mul_plain(encrypted.ciphertext(), &pow10(gap))?;
            EncryptedNumber::new(key.add_plain(&aligned, plain.mantissa()), plain.exponent())
        }
        Ordering::Less => {
            trace!(gap, "scaling plain operand");
            let aligned = plain.mantissa() * pow10(gap);
            EncryptedNumber::new(
                key.add_plain(encrypted.ciphertext(), &aligned),
                encrypted.exponent(),
            )
        }
    };
    Ok(result)
}

/// `encrypted - plain`
pub fn sub(
    key: &PublicKey,
    encrypted: &EncryptedNumber,
    plain: &PlainNumber,
) -> PaillierResult<EncryptedNumber> {
    add(key, encrypted, &-plain)
}

/// `encrypted * plain`; exponents add, no alignment needed.
#[instrument(level = "debug", skip_all, fields(lhs_exp = encrypted.exponent(), rhs_exp = plain.exponent()))]
pub fn mul(
    key: &PublicKey,
    encrypted: &EncryptedNumber,
    plain: &PlainNumber,
) -> PaillierResult<EncryptedNumber> {
    let (lhs, rhs) = (encrypted.exponent(), plain.exponent());
    let exponent = lhs
        .checked_add(rhs)
        .ok_or(PaillierError::ExponentOverflow { lhs, rhs })?;
    let ciphertext = key.mul_plain(encrypted.ciphertext(), plain.mantissa())?;
    Ok(EncryptedNumber::new(ciphertext, exponent))
}

/// Approximate `encrypted / plain`.
///
/// Paillier has no homomorphic division. This multiplies by the `f64`
/// reciprocal of `plain`, encoded from its shortest round-trip decimal with
/// every digit kept, so the only error is the `f64` rounding of the
/// reciprocal.
pub fn div_approx(
    key: &PublicKey,
    encrypted: &EncryptedNumber,
    plain: &PlainNumber,
) -> PaillierResult<EncryptedNumber> {
    div_approx_with_precision(key, encrypted, plain, u32::MAX)
}

/// [`div_approx`] with the reciprocal rounded to `max_precision` fractional
/// digits.
///
/// Fails with [`EncodingError::NonFinite`] when `plain` or its reciprocal does
/// not fit an `f64`, and with [`EncodingError::PrecisionUnderflow`] when the
/// rounded reciprocal is zero.
pub fn div_approx_with_precision(
    key: &PublicKey,
    encrypted: &EncryptedNumber,
    plain: &PlainNumber,
    max_precision: u32,
) -> PaillierResult<EncryptedNumber> {
    if plain.mantissa().is_zero() {
        return Err(PaillierError::DivisionByZero);
    }
    let divisor = plain.to_f64();
    if !divisor.is_finite() {
        return Err(EncodingError::NonFinite {
            value: divisor.to_string(),
        }
        .into());
    }
    let reciprocal = PlainNumber::from_f64_with_precision(1.0 / divisor, max_precision)?;
    if reciprocal.mantissa().is_zero() {
        return Err(EncodingError::PrecisionUnderflow {
            value: (1.0 / divisor).to_string(),
            max_precision,
        }
        .into());
    }
    trace!(%reciprocal, "dividing through reciprocal");
    mul(key, encrypted, &reciprocal)
}

/// Sum of two encrypted numbers, aligned like [`add`].
#[instrument(level = "debug", skip_all, fields(lhs_exp = a.exponent(), rhs_exp = b.exponent()))]
pub fn add_encrypted(
    key: &PublicKey,
    a: &EncryptedNumber,
    b: &EncryptedNumber,
) -> PaillierResult<EncryptedNumber> {
    let (low, high) = if a.exponent() <= b.exponent() {
        (a, b)
    } else {
        (b, a)
    };
    let gap = high.exponent().abs_diff(low.exponent());
    let aligned = if gap == 0 {
        high.ciphertext().clone()
    } else {
        key.mul_plain(high.ciphertext(), &pow10(gap))?
    };
    Ok(EncryptedNumber::new(
        key.add_ciphertexts(low.ciphertext(), &aligned),
        low.exponent(),
    ))
}

/// Fold [`add`] over `plains`.
pub fn sum(
    key: &PublicKey,
    encrypted: &EncryptedNumber,
    plains: &[PlainNumber],
) -> PaillierResult<EncryptedNumber> {
    plains
        .iter()
        .try_fold(encrypted.clone(), |acc, plain| add(key, &acc, plain))
}
