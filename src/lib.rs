//! Paillier additively homomorphic encryption over decimal fixed-point
//! numbers.
//!
//! Holders of the public key can add ciphertexts, and add, subtract, multiply
//! or approximately divide them by plain values, without the private key.
//!
//! ```
//! use paillier_fixed::{Client, PlainNumber, arithmetic};
//!
//! let client = Client::new(64).unwrap();
//! let a = client.encrypt_f64(2.4).unwrap();
//! let b = PlainNumber::from_f64(3.12).unwrap();
//!
//! let sum = arithmetic::add(client.public_key(), &a, &b).unwrap();
//! assert_eq!(client.decrypt(&sum).unwrap().to_f64(), 5.52);
//! ```

pub mod arithmetic;
pub mod crypto;
pub mod encoding;
pub mod fixed;
pub mod keys;
pub mod math;

pub use crypto::{Client, ClientBuilder, PaillierError, PaillierResult};
pub use encoding::{EncodingError, FixedScaleEncoder};
pub use fixed::{EncryptedNumber, FixedPointNumber, PlainNumber};
pub use keys::{KeyGenParams, PrivateKey, PublicKey};
