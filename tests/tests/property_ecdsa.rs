//! Property-based tests for signing, verification and the DER codec

use coincrypt::sign::{
    derive_public_key, recover_public_key, sign_prehashed, verify_prehashed, Secp256k1SecretKey,
    Signature,
};
use coincrypt_params::traditional::ecdsa::{SECP256K1, SECP256K1_DER_SIGNATURE_MAX_SIZE};
use proptest::prelude::*;

/// Private keys in [1, n-1]
fn private_key() -> impl Strategy<Value = Secp256k1SecretKey> {
    any::<[u8; 32]>().prop_filter_map("key out of range", |bytes| {
        Secp256k1SecretKey::from_bytes(&bytes).ok()
    })
}

/// Arbitrary component values, biased towards short and high-bit integers
fn component() -> impl Strategy<Value = [u8; 32]> {
    prop_oneof![
        any::<[u8; 32]>(),
        (any::<u8>(), 0usize..32).prop_map(|(b, zeros)| {
            let mut out = [0u8; 32];
            out[zeros..].fill(b);
            out
        }),
    ]
}

proptest! {
    // Each case runs several 256-bit scalar multiplications
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn sign_verify_recover(key in private_key(), digest in any::<[u8; 32]>()) {
        let public_key = derive_public_key(&key).unwrap();
        let sig = sign_prehashed(&key, &digest).unwrap();

        prop_assert!(sig.s() <= &SECP256K1.half_n);
        prop_assert!(sig.r().iter().any(|&b| b != 0));
        prop_assert!(verify_prehashed(&public_key, &digest, &sig));

        let recovered = recover_public_key(&digest, &sig, sig.recovery_id().unwrap()).unwrap();
        prop_assert_eq!(recovered, public_key);

        let again = sign_prehashed(&key, &digest).unwrap();
        prop_assert_eq!(again.to_der(), sig.to_der());
    }

    #[test]
    fn signature_does_not_verify_other_digest(
        key in private_key(),
        digest in any::<[u8; 32]>(),
        flip in 0usize..256,
    ) {
        let public_key = derive_public_key(&key).unwrap();
        let sig = sign_prehashed(&key, &digest).unwrap();

        let mut other = digest;
        other[flip / 8] ^= 1 << (flip % 8);
        prop_assert!(!verify_prehashed(&public_key, &other, &sig));
    }
}

proptest! {
    #[test]
    fn der_roundtrip(r in component(), s in component()) {
        let sig = Signature::new(r, s);
        let der = sig.to_der();

        prop_assert!(der.len() <= SECP256K1_DER_SIGNATURE_MAX_SIZE);
        prop_assert_eq!(der.len(), sig.der_len());
        prop_assert_eq!(Signature::from_der(&der).unwrap(), sig);
    }

    #[test]
    fn der_rejects_truncation(r in component(), s in component(), cut in 1usize..8) {
        let der = Signature::new(r, s).to_der();
        let cut = cut.min(der.len());
        prop_assert!(Signature::from_der(&der[..der.len() - cut]).is_err());
    }

    #[test]
    fn der_rejects_trailing_bytes(r in component(), s in component(), extra in any::<u8>()) {
        let mut der = Signature::new(r, s).to_der();
        der.push(extra);
        prop_assert!(Signature::from_der(&der).is_err());
    }

    #[test]
    fn der_parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..80)) {
        let _ = Signature::from_der(&bytes);
    }
}
