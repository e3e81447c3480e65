pub mod scaled;

pub use scaled::{DEFAULT_SCALE_PRECISION, FixedScaleEncoder};
use thiserror::Error;

pub type EncodingResult<T> = Result<T, EncodingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Cannot encode non-finite value {value}")]
    NonFinite { value: String },

    #[error("Invalid decimal: {input:?}")]
    InvalidDecimal { input: String },

    #[error("{value} rounds to zero with {max_precision} fractional digits")]
    PrecisionUnderflow { value: String, max_precision: u32 },
}
