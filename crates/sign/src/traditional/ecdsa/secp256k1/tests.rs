use super::*;
use coincrypt_algorithms::ec::k256::{base_point_g, K256_SCALAR_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const TEST_KEY: &str = "e580512c800c6de3bd5e65695b4cab739211b7ac41ffc2991b0cf75c4d3ccbdf";

fn bytes32(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(hex_str).unwrap());
    out
}

fn test_key() -> Secp256k1SecretKey {
    Secp256k1SecretKey::from_bytes(&bytes32(TEST_KEY)).unwrap()
}

fn key_from_u8(v: u8) -> Secp256k1SecretKey {
    let mut bytes = [0u8; K256_SCALAR_SIZE];
    bytes[31] = v;
    Secp256k1SecretKey::from_bytes(&bytes).unwrap()
}

fn n_minus_1_key() -> Secp256k1SecretKey {
    let mut bytes = SECP256K1.n;
    bytes[31] -= 1;
    Secp256k1SecretKey::from_bytes(&bytes).unwrap()
}

#[test]
fn test_private_key_range() {
    assert!(matches!(
        Secp256k1SecretKey::from_bytes(&[0u8; 32]),
        Err(ApiError::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        Secp256k1SecretKey::from_bytes(&SECP256K1.n),
        Err(ApiError::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        Secp256k1SecretKey::from_bytes(&[0xFF; 32]),
        Err(ApiError::InvalidPrivateKey { .. })
    ));
    assert!(Secp256k1SecretKey::from_bytes(&SECP256K1.half_n).is_ok());
    let _ = n_minus_1_key();

    assert!(matches!(
        Secp256k1SecretKey::from_slice(&[1u8; 31]),
        Err(ApiError::InvalidLength {
            expected: 32,
            actual: 31,
            ..
        })
    ));
}

#[test]
fn test_secret_key_debug_is_redacted() {
    let rendered = format!("{:?}", test_key());
    assert!(!rendered.contains("e580"));
    assert!(rendered.contains("REDACTED"));
}

#[test]
fn test_derive_public_key() {
    let pk = derive_public_key(&test_key()).unwrap();
    assert!(pk.is_compressed());
    assert_eq!(
        hex::encode(pk.to_bytes()),
        "0254dec37f0858dd993798f8b31ba912eb3cee803ac4209596cc79c804a2f3c201"
    );
    assert_eq!(
        hex::encode(pk.to_uncompressed().to_bytes()),
        "0454dec37f0858dd993798f8b31ba912eb3cee803ac4209596cc79c804a2f3c201\
         c5c8c530ebd8af6cce71d1b2250dee29e660b1d10140226a7f5cbff46228de60"
    );

    // key 1 gives the generator
    let g = derive_public_key(&key_from_u8(1)).unwrap();
    assert_eq!(
        hex::encode(g.serialize_compressed()),
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );
}

#[test]
fn test_public_key_parsing() {
    let pk = derive_public_key(&test_key()).unwrap();

    let compressed = Secp256k1PublicKey::from_bytes(&pk.serialize_compressed()).unwrap();
    assert_eq!(compressed.format(), PointFormat::Compressed);
    assert_eq!(compressed.point(), pk.point());

    let uncompressed = Secp256k1PublicKey::from_bytes(&pk.serialize_uncompressed()).unwrap();
    assert_eq!(uncompressed.format(), PointFormat::Uncompressed);
    assert_eq!(uncompressed.to_bytes().len(), 65);

    // identity encodings
    assert!(matches!(
        Secp256k1PublicKey::from_bytes(&[0u8; 33]),
        Err(ApiError::InvalidPoint { .. })
    ));
    assert!(matches!(
        Secp256k1PublicKey::from_bytes(&[0u8; 65]),
        Err(ApiError::InvalidPoint { .. })
    ));

    // off-curve
    let mut bad = pk.serialize_uncompressed();
    bad[64] ^= 0x01;
    assert!(matches!(
        Secp256k1PublicKey::from_bytes(&bad),
        Err(ApiError::InvalidPoint { .. })
    ));

    assert!(Secp256k1PublicKey::from_bytes(&[0x02; 20]).is_err());
}

#[test]
fn test_rfc6979_nonce() {
    let k = derive_nonce::<NativeHashSuite>(test_key().scalar(), &[0x01; 32]).unwrap();
    assert_eq!(
        hex::encode(k.serialize()),
        "feac2b1de1868b5eb5e85c8ccbe113d79bc93af8a58c25307532be6cda53b849"
    );
}

#[test]
fn test_rfc6979_retry_yields_second_candidate() {
    let mut seen = 0;
    let k = nonce::derive_nonce_with::<NativeHashSuite, _>(
        test_key().scalar(),
        &[0x01; 32],
        |_| {
            seen += 1;
            seen > 1
        },
    )
    .unwrap();
    assert_eq!(seen, 2);
    assert_eq!(
        hex::encode(k.serialize()),
        "4ffa8308b6c5c88681f32c9c3ddd61ee57125e9f0bfb7ca9b392abaf97b1664b"
    );
}

#[test]
fn test_rfc6979_attempt_limit() {
    let mut calls = 0;
    let result = nonce::derive_nonce_with::<NativeHashSuite, _>(
        test_key().scalar(),
        &[0x01; 32],
        |_| {
            calls += 1;
            false
        },
    );
    assert!(matches!(result, Err(ApiError::SignFailed { .. })));
    assert_eq!(calls, MAX_NONCE_ATTEMPTS);
}

#[test]
fn test_sign_known_vectors() {
    let sig = sign_prehashed(&test_key(), &[0x01; 32]).unwrap();
    assert_eq!(
        hex::encode(sig.to_der()),
        "304402203b63adb7a4d0f364269c7008cbb5647cbe825b3986ad7d245927ec2be78fed91\
         02207cc0bcc62dd9add67d27c590e978d5777591e1d7e738e3b05844e968164041a3"
    );
    assert_eq!(sig.recovery_id(), Some(0));

    let digest = NativeHashSuite::sha256(b"hello").unwrap();
    let sig = sign_prehashed(&test_key(), &digest).unwrap();
    assert_eq!(
        hex::encode(sig.to_der()),
        "30440220222fdea7bbee337ee07c9e0f1d079828989ec3682282531f4f7c50667c7100a4\
         02205f599b5e18fcc2a646bec2bcc0894a553e35fc765b32b4e7908e22ce9fdbb233"
    );
    assert_eq!(sig.recovery_id(), Some(1));
}

#[test]
fn test_sign_satoshi_vectors() {
    let digest = NativeHashSuite::sha256(b"Satoshi Nakamoto").unwrap();

    let sig = sign_prehashed(&key_from_u8(1), &digest).unwrap();
    assert_eq!(
        hex::encode(sig.to_der()),
        "3045022100934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8\
         02202442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5"
    );
    assert_eq!(sig.recovery_id(), Some(1));

    let sig = sign_prehashed(&n_minus_1_key(), &digest).unwrap();
    assert_eq!(
        hex::encode(sig.to_der()),
        "3045022100fd567d121db66e382991534ada77a6bd3106f0a1098c231e47993447cd6af2d0\
         02206b39cd0eb1bc8603e159ef5c20a5c8ad685a45b06ce9bebed3f153d10d93bed5"
    );
    assert_eq!(sig.recovery_id(), Some(0));
}

#[test]
fn test_sign_is_deterministic_and_low_s() {
    let key = test_key();
    let digest = NativeHashSuite::sha256(b"deterministic").unwrap();
    let a = sign_prehashed(&key, &digest).unwrap();
    let b = sign_prehashed(&key, &digest).unwrap();
    assert_eq!(a.to_der(), b.to_der());
    assert_eq!(a.recovery_id(), b.recovery_id());

    for i in 0..4u8 {
        let sig = sign_prehashed(&key, &[i; 32]).unwrap();
        assert!(sig.s() <= &SECP256K1.half_n);
    }
}

#[test]
fn test_sign_verify_roundtrip() {
    let key = test_key();
    let pk = derive_public_key(&key).unwrap();
    let digest = [0x42; 32];
    let sig = sign_prehashed(&key, &digest).unwrap();

    assert!(verify_prehashed(&pk, &digest, &sig));
    assert!(verify_prehashed(&pk.to_uncompressed(), &digest, &sig));

    let parsed = Signature::from_der(&sig.to_der()).unwrap();
    assert!(verify_prehashed(&pk, &digest, &parsed));

    // wrong digest and wrong key
    assert!(!verify_prehashed(&pk, &[0x43; 32], &sig));
    let other = derive_public_key(&key_from_u8(2)).unwrap();
    assert!(!verify_prehashed(&other, &digest, &sig));
}

#[test]
fn test_verify_rejects_out_of_range_components() {
    let key = test_key();
    let pk = derive_public_key(&key).unwrap();
    let digest = [0x42; 32];
    let sig = sign_prehashed(&key, &digest).unwrap();

    assert!(!verify_prehashed(&pk, &digest, &Signature::new([0; 32], *sig.s())));
    assert!(!verify_prehashed(&pk, &digest, &Signature::new(*sig.r(), [0; 32])));
    assert!(!verify_prehashed(&pk, &digest, &Signature::new(SECP256K1.n, *sig.s())));
    assert!(!verify_prehashed(&pk, &digest, &Signature::new(*sig.r(), SECP256K1.n)));
}

#[test]
fn test_verify_accepts_high_s() {
    let key = test_key();
    let pk = derive_public_key(&key).unwrap();
    let digest = [0x42; 32];
    let sig = sign_prehashed(&key, &digest).unwrap();

    let s = Scalar::from_bytes_checked(sig.s()).unwrap();
    let high = Signature::new(*sig.r(), s.negate().serialize());
    assert!(verify_prehashed(&pk, &digest, &high));
}

#[test]
fn test_r_zero_fails() {
    let key = test_key();
    let k = Scalar::one();
    let result = sign_with_nonce_point(key.scalar(), &k, &Point::identity(), &[0x01; 32]);
    assert_eq!(
        result,
        Err(ApiError::SignFailed {
            context: "ECDSA-secp256k1 sign",
            reason: "r is zero",
        })
    );
}

#[test]
fn test_s_zero_fails() {
    // k = 1 so R = G; choose z = -r·d so that z + r·d = 0
    let key = test_key();
    let g = base_point_g().unwrap();
    let r = Scalar::reduce(&g.x_coordinate_bytes());
    let z = r.mul_mod_n(key.scalar()).negate();

    let result = sign_with_nonce_point(key.scalar(), &Scalar::one(), &g, &z.serialize());
    assert_eq!(
        result,
        Err(ApiError::SignFailed {
            context: "ECDSA-secp256k1 sign",
            reason: "s is zero",
        })
    );
}

#[test]
fn test_recover_public_key() {
    let key = test_key();
    let pk = derive_public_key(&key).unwrap();

    for msg in [&b"hello"[..], &b"Satoshi Nakamoto"[..], &b""[..]] {
        let digest = NativeHashSuite::sha256(msg).unwrap();
        let sig = sign_prehashed(&key, &digest).unwrap();
        let recid = sig.recovery_id().unwrap();
        let recovered = recover_public_key(&digest, &sig, recid).unwrap();
        assert_eq!(recovered, pk);

        // the other parity recovers a different key
        if let Ok(other) = recover_public_key(&digest, &sig, recid ^ 1) {
            assert_ne!(other, pk);
        }
    }
}

#[test]
fn test_recover_rejects_bad_input() {
    let key = test_key();
    let digest = [0x07; 32];
    let sig = sign_prehashed(&key, &digest).unwrap();

    assert!(matches!(
        recover_public_key(&digest, &sig, 4),
        Err(ApiError::InvalidParameter { .. })
    ));
    assert!(matches!(
        recover_public_key(&digest, &Signature::new([0; 32], *sig.s()), 0),
        Err(ApiError::InvalidParameter { .. })
    ));
    // r + n is not a field element for a typical r
    assert!(recover_public_key(&digest, &sig, 2).is_err());
}

#[test]
fn test_signature_trait() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let keypair = EcdsaSecp256k1::keypair(&mut rng).unwrap();
    let pk = EcdsaSecp256k1::public_key(&keypair);
    let sk = EcdsaSecp256k1::secret_key(&keypair);

    assert_eq!(EcdsaSecp256k1::name(), "ECDSA-secp256k1");
    assert_eq!(derive_public_key(&sk).unwrap(), pk);

    let message = b"coincrypt signature trait";
    let sig = EcdsaSecp256k1::sign(message, &sk).unwrap();
    assert!(EcdsaSecp256k1::verify(message, &sig, &pk).is_ok());
    assert!(EcdsaSecp256k1::verify(b"tampered", &sig, &pk).is_err());

    let digest = NativeHashSuite::sha256(message).unwrap();
    assert_eq!(sign_prehashed(&sk, &digest).unwrap(), sig);
}
