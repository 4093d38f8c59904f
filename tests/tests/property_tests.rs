//! Property tests: sign/verify agreement and tamper rejection

use ecsig::prelude::*;
use ecsig_params::traditional::ecdsa::NIST_P256;
use proptest::prelude::*;

fn below_order(bytes: &[u8; 32]) -> bool {
    bytes.iter().any(|&b| b != 0) && bytes[..] < NIST_P256.n[..]
}

fn valid_key() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_filter("scalar in [1, n-1]", below_order)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_then_verify_accepts(key in valid_key(), digest in any::<[u8; 32]>()) {
        let secret = EcdsaP256SecretKey::import(&key).unwrap();
        let public = secret.public_key().unwrap();
        let digest = Digest::new(digest);

        let mut engine = EcdsaP256::deterministic();
        let sig = engine.sign(&digest, &secret).unwrap();
        prop_assert!(engine.verify(&digest, &public, &sig).unwrap());
    }

    #[test]
    fn flipped_digest_bit_rejects(
        key in valid_key(),
        digest in any::<[u8; 32]>(),
        bit in 0usize..256,
    ) {
        let secret = EcdsaP256SecretKey::import(&key).unwrap();
        let public = secret.public_key().unwrap();

        let mut engine = EcdsaP256::deterministic();
        let sig = engine.sign(&Digest::new(digest), &secret).unwrap();

        let mut flipped = digest;
        flipped[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!engine.verify(&Digest::new(flipped), &public, &sig).unwrap());
    }

    #[test]
    fn flipped_signature_bit_rejects(
        key in valid_key(),
        digest in any::<[u8; 32]>(),
        bit in 0usize..512,
    ) {
        let secret = EcdsaP256SecretKey::import(&key).unwrap();
        let public = secret.public_key().unwrap();
        let digest = Digest::new(digest);

        let mut engine = EcdsaP256::deterministic();
        let mut wire = engine.sign(&digest, &secret).unwrap().to_bytes();
        wire[bit / 8] ^= 1 << (bit % 8);

        let tampered = EcdsaP256Signature::from_bytes(&wire).unwrap();
        // out-of-range components are malformed; in-range ones must not verify
        let outcome = engine.verify(&digest, &public, &tampered);
        prop_assert!(!matches!(outcome, Ok(true)));
    }

    #[test]
    fn public_key_export_roundtrips(key in valid_key()) {
        let public = EcdsaP256SecretKey::import(&key).unwrap().public_key().unwrap();
        let once = EcdsaP256PublicKey::import(&public.export()).unwrap();
        let twice = EcdsaP256PublicKey::import(&once.export()).unwrap();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once, public);
    }

    #[test]
    fn private_key_rejects_at_or_above_order(tail in any::<[u8; 16]>()) {
        // sixteen leading 0xFF bytes already exceed n
        let mut bytes = [0xFFu8; 32];
        bytes[16..].copy_from_slice(&tail);
        let rejected = matches!(
            EcdsaP256SecretKey::import(&bytes),
            Err(Error::InvalidScalarRange { .. })
        );
        prop_assert!(rejected);
    }
}
