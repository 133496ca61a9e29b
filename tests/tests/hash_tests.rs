//! Known-answer tests for the facade hash functions

use coincrypt::hash;
use coincrypt_tests::vectors::REFERENCE_KEY;

#[test]
fn test_sha1() {
    assert_eq!(
        hex::encode(hash::sha1(b"abc").unwrap()),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn test_sha256() {
    assert_eq!(
        hex::encode(hash::sha256(b"").unwrap()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex::encode(hash::sha256(b"hello").unwrap()),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn test_sha512() {
    assert_eq!(
        hex::encode(hash::sha512(b"abc").unwrap()),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_ripemd160() {
    assert_eq!(
        hex::encode(hash::ripemd160(b"").unwrap()),
        "9c1185a5c5e9fc54612808977ee8f548b2258d31"
    );
    assert_eq!(
        hex::encode(hash::ripemd160(b"abc").unwrap()),
        "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
    );
}

#[test]
fn test_hash160_composes_sha256_and_ripemd160() {
    let public_key = hex::decode(REFERENCE_KEY.compressed).unwrap();
    let h = hash::hash160(&public_key).unwrap();
    assert_eq!(hex::encode(h), REFERENCE_KEY.hash160);
    assert_eq!(
        h,
        hash::ripemd160(&hash::sha256(&public_key).unwrap()).unwrap()
    );
}

#[test]
fn test_hmac_sha512() {
    assert_eq!(
        hex::encode(
            hash::hmac_sha512(b"key", b"The quick brown fox jumps over the lazy dog").unwrap()
        ),
        "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb\
         82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a"
    );
}

#[test]
fn test_hex_helpers() {
    assert_eq!(coincrypt::hex::encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    assert_eq!(coincrypt::hex::decode("DEADbeef").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
    assert!(matches!(
        coincrypt::hex::decode("abc"),
        Err(coincrypt::Error::HexDecodeFailed { .. })
    ));
    assert!(matches!(
        coincrypt::hex::decode("zz"),
        Err(coincrypt::Error::HexDecodeFailed { .. })
    ));
}
