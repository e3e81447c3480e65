//! Runtime-checked variants of the arithmetic over [`FixedPointNumber`].
//!
//! Each function fails with [`PaillierError::EncryptionStateViolation`] unless
//! the first operand is encrypted and the second is plain.
use crate::crypto::{PaillierError, PaillierResult};
use crate::fixed::{EncryptedNumber, FixedPointNumber, PlainNumber};
use crate::keys::PublicKey;

pub fn check_args<'a>(
    encrypted: &'a FixedPointNumber,
    plain: &'a FixedPointNumber,
) -> PaillierResult<(&'a EncryptedNumber, &'a PlainNumber)> {
    let Some(encrypted) = encrypted.as_encrypted() else {
        return Err(PaillierError::state("first operand must be encrypted"));
    };
    let Some(plain) = plain.as_plain() else {
        return Err(PaillierError::state("second operand must not be encrypted"));
    };
    Ok((encrypted, plain))
}

pub fn add(
    key: &PublicKey,
    encrypted: &FixedPointNumber,
    plain: &FixedPointNumber,
) -> PaillierResult<FixedPointNumber> {
    let (encrypted, plain) = check_args(encrypted, plain)?;
    super::add(key, encrypted, plain).map(Into::into)
}

pub fn sub(
    key: &PublicKey,
    encrypted: &FixedPointNumber,
    plain: &FixedPointNumber,
) -> PaillierResult<FixedPointNumber> {
    let (encrypted, plain) = check_args(encrypted, plain)?;
    super::sub(key, encrypted, plain).map(Into::into)
}

pub fn mul(
    key: &PublicKey,
    encrypted: &FixedPointNumber,
    plain: &FixedPointNumber,
) -> PaillierResult<FixedPointNumber> {
    let (encrypted, plain) = check_args(encrypted, plain)?;
    super::mul(key, encrypted, plain).map(Into::into)
}

/// See [`super::div_approx`].
pub fn div_approx(
    key: &PublicKey,
    encrypted: &FixedPointNumber,
    plain: &FixedPointNumber,
) -> PaillierResult<FixedPointNumber> {
    let (encrypted, plain) = check_args(encrypted, plain)?;
    super::div_approx(key, encrypted, plain).map(Into::into)
}
