// Derives a compressed secp256k1 public key from a fixed private key and
// prints its hash160, then streams the same key through SHA-256 in pieces.

use coincrypt_algorithms::ec::k256::{self, Scalar};
use coincrypt_algorithms::hash::{HashFunction, Ripemd160, Sha256};
use coincrypt_algorithms::mac::Hmac;
use coincrypt_algorithms::Error;

fn hash160(data: &[u8]) -> Result<[u8; 20], Error> {
    let sha = Sha256::digest(data)?;
    Ok(Ripemd160::digest(sha.as_ref())?.into())
}

fn main() -> Result<(), Error> {
    let mut secret = [0u8; 32];
    secret[31] = 1;
    let d = Scalar::from_bytes_checked(&secret)?;
    let public = k256::scalar_mult_base_g(&d)?;
    let encoded = public.serialize_compressed();

    println!("public key: {}", hex::encode(encoded));
    println!("hash160:    {}", hex::encode(hash160(&encoded)?));

    let mut hasher = Sha256::new();
    for chunk in encoded.chunks(8) {
        hasher.update(chunk)?;
    }
    let streamed = hasher.finalize()?;
    assert_eq!(streamed, Sha256::digest(&encoded)?);
    println!("sha256:     {}", streamed.to_hex());

    let tag = Hmac::<Sha256>::mac(b"coincrypt", &encoded)?;
    println!("hmac:       {}", hex::encode(tag));
    Ok(())
}
