pub mod primes;
pub mod sampling;

pub use primes::{is_probable_prime, random_prime};
pub use sampling::random_bits;
pub(crate) use sampling::random_unit;
