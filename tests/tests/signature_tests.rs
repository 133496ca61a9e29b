//! Integration tests for ECDSA over secp256k1

use coincrypt::prelude::*;
use coincrypt_sign::{recover_public_key, sign_prehashed, verify_prehashed};
use coincrypt_tests::vectors::{REFERENCE_KEY, SIGN_VECTORS};
use coincrypt_tests::{hex_array, setup_tracing};
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_reference_public_keys() {
    let private_key: [u8; 32] = hex_array(REFERENCE_KEY.private_key);

    let compressed = coincrypt::derive_public_key(&private_key, true).unwrap();
    assert_eq!(hex::encode(&compressed), REFERENCE_KEY.compressed);

    let uncompressed = coincrypt::derive_public_key(&private_key, false).unwrap();
    assert_eq!(hex::encode(&uncompressed), REFERENCE_KEY.uncompressed);
}

#[test]
fn test_derive_rejects_invalid_private_keys() {
    assert!(matches!(
        coincrypt::derive_public_key(&[0u8; 32], true),
        Err(Error::InvalidPrivateKey { .. })
    ));
    let n = coincrypt::params::traditional::ecdsa::SECP256K1.n;
    for compressed in [true, false] {
        assert!(matches!(
            coincrypt::derive_public_key(&n, compressed),
            Err(Error::InvalidPrivateKey { .. })
        ));
        assert!(matches!(
            coincrypt::derive_public_key(&[0xff; 32], compressed),
            Err(Error::InvalidPrivateKey { .. })
        ));
    }
    assert!(matches!(
        coincrypt::sign(&n, &[1u8; 32]),
        Err(Error::InvalidPrivateKey { .. })
    ));
}

#[test]
fn test_known_signatures() {
    setup_tracing();

    for v in SIGN_VECTORS {
        let private_key: [u8; 32] = hex_array(v.private_key);
        let digest: [u8; 32] = hex_array(v.digest);

        let der = coincrypt::sign(&private_key, &digest).unwrap();
        assert_eq!(hex::encode(&der), v.der);

        let key = Key::from_bytes(&private_key).unwrap();
        let sig = key.sign_recoverable(&digest).unwrap();
        assert_eq!(sig.recovery_id(), Some(v.recovery_id));
        assert_eq!(key.sign(&digest).unwrap(), der);

        let public_key = coincrypt::derive_public_key(&private_key, true).unwrap();
        assert!(coincrypt::verify(&public_key, &digest, &der));
        assert!(key.verify(&digest, &der));
    }
}

#[test]
fn test_recovery_matches_signer() {
    for v in SIGN_VECTORS {
        let private_key: [u8; 32] = hex_array(v.private_key);
        let digest: [u8; 32] = hex_array(v.digest);
        let key = Key::from_bytes(&private_key).unwrap();

        let sig = Signature::from_der(&hex::decode(v.der).unwrap()).unwrap();
        let recovered = recover_public_key(&digest, &sig, v.recovery_id).unwrap();
        assert_eq!(&recovered, key.public_key());
    }
}

#[test]
fn test_verify_rejects_tampering() {
    let private_key: [u8; 32] = hex_array(REFERENCE_KEY.private_key);
    let public_key = hex::decode(REFERENCE_KEY.uncompressed).unwrap();
    let digest = coincrypt::hash::sha256(b"pay 1 BTC").unwrap();
    let der = coincrypt::sign(&private_key, &digest).unwrap();

    assert!(coincrypt::verify(&public_key, &digest, &der));

    let other_digest = coincrypt::hash::sha256(b"pay 2 BTC").unwrap();
    assert!(!coincrypt::verify(&public_key, &other_digest, &der));

    // flip a bit inside s
    let mut bad = der.clone();
    let last = bad.len() - 1;
    bad[last] ^= 0x01;
    assert!(!coincrypt::verify(&public_key, &digest, &bad));

    // malformed inputs verify as false
    assert!(!coincrypt::verify(&public_key, &digest, &der[..der.len() - 1]));
    assert!(!coincrypt::verify(&[0u8; 33], &digest, &der));
    assert!(!coincrypt::verify(&public_key[..40], &digest, &der));
}

#[test]
fn test_random_keys_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for i in 0..3u8 {
        let key = Key::generate(&mut rng).unwrap();
        let digest = coincrypt::hash::sha256(&[i; 7]).unwrap();
        let sig = key.sign_recoverable(&digest).unwrap();

        assert!(verify_prehashed(key.public_key(), &digest, &sig));
        let recovered = recover_public_key(&digest, &sig, sig.recovery_id().unwrap()).unwrap();
        assert_eq!(&recovered, key.public_key());

        assert_eq!(key.public_key_bytes().len(), 33);
        assert_eq!(key.public_key_uncompressed().len(), 65);
        assert_eq!(
            key.public_key_hash().unwrap(),
            coincrypt::hash::hash160(&key.public_key_bytes()).unwrap()
        );
    }
}

#[test]
fn test_signature_trait_with_os_rng() {
    let keypair = EcdsaSecp256k1::keypair(&mut OsRng).unwrap();
    let public_key = EcdsaSecp256k1::public_key(&keypair);
    let secret_key = EcdsaSecp256k1::secret_key(&keypair);

    let message = b"Test message for secp256k1 signature";
    let signature = EcdsaSecp256k1::sign(message, &secret_key).unwrap();
    assert!(EcdsaSecp256k1::verify(message, &signature, &public_key).is_ok());

    let modified_message = b"Modified message that should not verify";
    assert!(EcdsaSecp256k1::verify(modified_message, &signature, &public_key).is_err());
}

#[test]
fn test_sign_prehashed_matches_facade() {
    let private_key: [u8; 32] = hex_array(REFERENCE_KEY.private_key);
    let secret_key = Secp256k1SecretKey::from_bytes(&private_key).unwrap();
    let digest = [0x33; 32];

    let sig = sign_prehashed(&secret_key, &digest).unwrap();
    assert_eq!(sig.to_der(), coincrypt::sign(&private_key, &digest).unwrap());

    let compact = sig.to_compact();
    assert_eq!(Signature::from_compact(&compact).unwrap(), sig);
}

#[test]
fn test_key_debug_does_not_leak() {
    let private_key: [u8; 32] = hex_array(REFERENCE_KEY.private_key);
    let key = Key::from_bytes(&private_key).unwrap();
    let rendered = format!("{:?}", key);
    assert!(!rendered.contains("e580512c"));
}
