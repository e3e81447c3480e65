use num_bigint::{BigInt, BigUint};
use paillier_fixed::{KeyGenParams, PaillierError, PrivateKey};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::LazyLock;

static KEY: LazyLock<PrivateKey> = LazyLock::new(|| {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let params = KeyGenParams::new(96).unwrap();
    PrivateKey::generate_with_rng(&params, &mut rng).unwrap()
});

fn encrypt(m: i64) -> BigUint {
    KEY.public_key().encrypt_signed(&BigInt::from(m)).unwrap()
}

fn decrypt(c: &BigUint) -> BigInt {
    KEY.decrypt(c).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip(m in any::<u64>()) {
        let c = KEY.public_key().encrypt(&BigUint::from(m)).unwrap();
        prop_assert_eq!(decrypt(&c), BigInt::from(m));
    }

    #[test]
    fn signed_roundtrip(m in any::<i64>()) {
        prop_assert_eq!(decrypt(&encrypt(m)), BigInt::from(m));
    }

    #[test]
    fn ciphertext_sum(a in any::<i64>(), b in any::<i64>()) {
        let sum = KEY.public_key().add_ciphertexts(&encrypt(a), &encrypt(b));
        prop_assert_eq!(decrypt(&sum), BigInt::from(a) + BigInt::from(b));
    }

    #[test]
    fn plain_sum(a in any::<i64>(), b in any::<i64>()) {
        let sum = KEY.public_key().add_plain(&encrypt(a), &BigInt::from(b));
        prop_assert_eq!(decrypt(&sum), BigInt::from(a) + BigInt::from(b));
    }

    #[test]
    fn plain_product(a in any::<i64>(), k in any::<i64>()) {
        let product = KEY.public_key().mul_plain(&encrypt(a), &BigInt::from(k)).unwrap();
        prop_assert_eq!(decrypt(&product), BigInt::from(a) * BigInt::from(k));
    }

    #[test]
    fn ciphertexts_stay_in_range(m in any::<i64>()) {
        let c = encrypt(m);
        prop_assert!(&c < KEY.public_key().n_squared());
    }
}

#[test]
fn plaintext_boundary() {
    let pk = KEY.public_key();
    assert_eq!(
        pk.encrypt(pk.n()).unwrap_err(),
        PaillierError::PlaintextOutOfRange
    );
    assert!(pk.encrypt(&(pk.n() - 1u32)).is_ok());
}

#[test]
fn key_size_boundary() {
    assert!(matches!(
        PrivateKey::generate(8),
        Err(PaillierError::KeySizeTooSmall { .. })
    ));
    assert!(PrivateKey::generate(64).is_ok());
}

#[test]
fn keys_are_shareable_across_threads() {
    let pk = KEY.public_key();
    let handles_sum: BigInt = std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8i64)
            .map(|i| {
                scope.spawn(move || {
                    let c = pk.encrypt_signed(&BigInt::from(i)).unwrap();
                    let c = pk.mul_plain(&c, &BigInt::from(10)).unwrap();
                    KEY.decrypt(&c).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });
    assert_eq!(handles_sum, BigInt::from(360));
}
