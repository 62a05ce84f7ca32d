//! Generates a keypair, encrypts a message for it and decrypts it again.
//!
//! Run with `RUST_LOG=debug` to see the library's events.

use ecies_bls12381::{Compress, EciesBls12381, Error};
use tracing_subscriber::EnvFilter;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::thread_rng();
    let ecies = EciesBls12381::new();

    let (pk, sk) = ecies.generate_keypair(&mut rng)?;
    println!("Public key: {}", hex(pk.to_bytes().as_ref()));

    let message = b"Hello, BLS12381!";
    let ciphertext = ecies.encrypt(Some(&pk), Some(&message[..]), &mut rng)?;
    println!("Ciphertext: {}", hex(&ciphertext));

    let plaintext = ecies.decrypt(Some(&sk), Some(&ciphertext))?;
    println!("Plaintext: {}", String::from_utf8_lossy(&plaintext));

    Ok(())
}
