//! Paillier cryptographic operations
//!
//! Encryption, decryption and the homomorphic primitives live on the key
//! types; [`Client`] wraps them for fixed-point numbers.

pub mod builder;
pub mod client;
pub mod errors;
pub mod operations;

pub use builder::{ClientBuilder, DEFAULT_KEY_BITS};
pub use client::Client;
pub use errors::{PaillierError, PaillierResult};
