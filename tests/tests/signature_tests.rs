//! Integration tests for ECDSA P-256 through the facade crate

use ecsig::prelude::*;
use ecsig_tests::{hex32, vectors};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_known_answer_vectors() {
    for v in vectors::ALL {
        let secret = EcdsaP256SecretKey::import(&hex32(v.private_key)).unwrap();
        let public = secret.public_key().unwrap();
        assert_eq!(hex::encode(public.export()), v.public_key, "{}", v.name);

        let digest = Digest::new(hex32(v.digest));
        let mut engine = EcdsaP256::deterministic();
        let signature = engine.sign(&digest, &secret).unwrap();

        assert_eq!(hex::encode(signature.r()), v.r, "{}", v.name);
        assert_eq!(hex::encode(signature.s()), v.s, "{}", v.name);
        assert!(engine.verify(&digest, &public, &signature).unwrap());
    }
}

#[test]
fn test_imported_public_key_verifies_vector() {
    let v = vectors::HELLO_BOB;
    let public = EcdsaP256PublicKey::import(&hex::decode(v.public_key).unwrap()).unwrap();
    let mut wire = hex::decode(v.r).unwrap();
    wire.extend_from_slice(&hex::decode(v.s).unwrap());

    let signature = EcdsaP256Signature::from_bytes(&wire).unwrap();
    let engine = EcdsaP256::deterministic();
    assert!(engine
        .verify(&Digest::new(hex32(v.digest)), &public, &signature)
        .unwrap());
}

#[test]
fn test_every_strategy_verifies_against_one_verifier() {
    let secret = EcdsaP256SecretKey::import(&[0x5a; 32]).unwrap();
    let public = secret.public_key().unwrap();
    let digest = Digest::new([0xa5; 32]);
    let verifier = EcdsaP256::deterministic();

    let mut deterministic = EcdsaP256::deterministic();
    let mut random = EcdsaP256::with_rng(ChaCha20Rng::seed_from_u64(1));
    let mut hedged = EcdsaP256::hedged(ChaCha20Rng::seed_from_u64(2));

    let signatures = [
        deterministic.sign(&digest, &secret).unwrap(),
        random.sign(&digest, &secret).unwrap(),
        hedged.sign(&digest, &secret).unwrap(),
    ];
    for sig in &signatures {
        assert!(verifier.verify(&digest, &public, sig).unwrap());
    }
}

#[test]
fn test_digest_reduction_above_order() {
    // a digest ≥ n signs and verifies like its reduction mod n
    let secret = EcdsaP256SecretKey::import(&[0x11; 32]).unwrap();
    let public = secret.public_key().unwrap();
    let high = Digest::new([0xFF; 32]);

    let mut engine = EcdsaP256::deterministic();
    let sig = engine.sign(&high, &secret).unwrap();
    assert!(engine.verify(&high, &public, &sig).unwrap());

    let reduced = Digest::new(hex32(
        "00000000ffffffff00000000000000004319055258e8617b0c46353d039cdaae",
    ));
    assert!(engine.verify(&reduced, &public, &sig).unwrap());
}

#[test]
fn test_digest_length_is_checked() {
    assert!(matches!(
        Digest::from_slice(&[0u8; 31]),
        Err(Error::InvalidLength { expected: 32, actual: 31, .. })
    ));
    assert!(Digest::from_slice(&[0u8; 32]).is_ok());
}

#[test]
fn test_error_classification() {
    let malformed = EcdsaP256Signature::from_bytes(&[0u8; 10]).unwrap_err();
    assert!(malformed.is_malformed_input());

    let disposed = {
        let mut key = EcdsaP256SecretKey::import(&[0x11; 32]).unwrap();
        key.dispose();
        key.export().unwrap_err()
    };
    assert!(matches!(disposed, Error::KeyDisposed { .. }));
    assert!(!disposed.is_malformed_input());
    assert!(disposed.to_string().contains("disposed"));
}
