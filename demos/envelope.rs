//! Seals a payload once and grants a second recipient access by wrapping only the
//! symmetric key again.
//!
//! Run with `RUST_LOG=debug` to see the library's events.

use ecies_bls12381::{EciesBls12381, Envelope, Error};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::thread_rng();
    let ecies = EciesBls12381::new();

    let (alice_pk, alice_sk) = ecies.generate_keypair(&mut rng)?;
    let (bob_pk, bob_sk) = ecies.generate_keypair(&mut rng)?;

    let message = b"Hello, BLS12381!";
    let envelope = ecies.seal_envelope(Some(&alice_pk), Some(&message[..]), &mut rng)?;
    println!(
        "Sealed {} bytes: wrapped key {} bytes, payload {} bytes",
        message.len(),
        envelope.wrapped_key().len(),
        envelope.payload().len()
    );

    // Only the wrapped key changes hands; the payload stays where it is.
    let bob_key = ecies.rewrap_key(
        Some(&alice_sk),
        Some(&bob_pk),
        envelope.wrapped_key(),
        &mut rng,
    )?;
    let for_bob = Envelope::new(bob_key, envelope.payload().to_vec());

    let stored = for_bob.to_bytes()?;
    let received = Envelope::from_bytes(&stored)?;

    let plaintext = ecies.open_envelope(Some(&bob_sk), &received)?;
    println!("Bob reads: {}", String::from_utf8_lossy(&plaintext));

    let plaintext = ecies.open_envelope(Some(&alice_sk), &envelope)?;
    println!("Alice reads: {}", String::from_utf8_lossy(&plaintext));

    Ok(())
}
