pub mod private_key;
pub mod public_key;

pub use private_key::{KeyGenParams, MIN_KEY_BITS, PrivateKey};
pub use public_key::PublicKey;
