use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaillierError {
    #[error("Key size {bits} too small: need at least {min} bits")]
    KeySizeTooSmall { bits: u64, min: u64 },

    #[error("Key generation failed: {message}")]
    KeyGenerationFailure { message: String },

    #[error("Plaintext out of range for this key")]
    PlaintextOutOfRange,

    #[error("Ciphertext out of range for this key")]
    CiphertextOutOfRange,

    #[error("Ciphertext has no inverse modulo n^2")]
    NotInvertible,

    #[error("Encryption state violation: {message}")]
    EncryptionStateViolation { message: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Exponent overflow: {lhs} + {rhs}")]
    ExponentOverflow { lhs: i64, rhs: i64 },

    #[error("Encoding failed: {source}")]
    EncodingError {
        #[from]
        source: crate::encoding::EncodingError,
    },
}

impl PaillierError {
    pub(crate) fn state(message: impl Into<String>) -> Self {
        PaillierError::EncryptionStateViolation {
            message: message.into(),
        }
    }
}

pub type PaillierResult<T> = Result<T, PaillierError>;
