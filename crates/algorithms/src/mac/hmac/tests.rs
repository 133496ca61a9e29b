use super::*;
use crate::hash::{Sha256, Sha512};
use hex;

struct Rfc4231Case {
    key: Vec<u8>,
    data: Vec<u8>,
    sha256: &'static str,
    sha512: &'static str,
}

fn rfc4231_cases() -> Vec<Rfc4231Case> {
    vec![
        // Test case 1
        Rfc4231Case {
            key: vec![0x0b; 20],
            data: b"Hi There".to_vec(),
            sha256: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
            sha512: "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        },
        // Test case 2
        Rfc4231Case {
            key: b"Jefe".to_vec(),
            data: b"what do ya want for nothing?".to_vec(),
            sha256: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
            sha512: "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        },
        // Test case 6: key longer than both block sizes
        Rfc4231Case {
            key: vec![0xaa; 131],
            data: b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
            sha256: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
            sha512: "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
        },
    ]
}

#[test]
fn test_hmac_sha256_rfc4231() {
    for case in rfc4231_cases() {
        let tag = Hmac::<Sha256>::mac(&case.key, &case.data).unwrap();
        assert_eq!(hex::encode(tag), case.sha256);
    }
}

#[test]
fn test_hmac_sha512_rfc4231() {
    for case in rfc4231_cases() {
        let tag = Hmac::<Sha512>::mac(&case.key, &case.data).unwrap();
        assert_eq!(hex::encode(tag), case.sha512);
    }
}

#[test]
fn test_hmac_streaming() {
    let key = [0xaa; 20];
    let data = [0xdd; 50];

    let mut mac = Hmac::<Sha256>::new(&key).unwrap();
    mac.update(&data[..17]).unwrap().update(&data[17..]).unwrap();
    let tag = mac.finalize().unwrap();
    assert_eq!(
        hex::encode(tag),
        "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe"
    );
}

#[test]
fn test_hmac_state_errors() {
    let mut mac = Hmac::<Sha256>::new(b"key").unwrap();
    mac.update(b"data").unwrap();
    mac.finalize().unwrap();
    assert!(matches!(mac.update(b"more"), Err(Error::MacError { .. })));
    assert!(matches!(mac.finalize(), Err(Error::MacError { .. })));
}

#[test]
fn test_hmac_verify() {
    let tag = Hmac::<Sha256>::mac(b"Jefe", b"what do ya want for nothing?").unwrap();
    assert!(Hmac::<Sha256>::verify(b"Jefe", b"what do ya want for nothing?", tag.as_ref()).unwrap());

    let mut bad = tag.to_array();
    bad[0] ^= 1;
    assert!(!Hmac::<Sha256>::verify(b"Jefe", b"what do ya want for nothing?", &bad).unwrap());
    assert!(!Hmac::<Sha256>::verify(b"Jefe", b"what do ya want for nothing?", &tag[..16]).unwrap());
}
