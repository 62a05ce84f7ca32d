//! Hybrid public-key encryption (ECIES) on the [BLS12-381 pairing-friendly elliptic curve](https://github.com/zkcrypto/bls12_381) in Rust.
//!
//! Keys live in one of the prime-order groups of BLS12-381 (G2 by default, G1 with the `g1`
//! feature). Encryption performs a Diffie-Hellman exchange against an ephemeral key, derives
//! an AES-256-GCM key with a SHA-3 based KDF, and authenticates the ephemeral point along
//! with the message.
//!
//! The group and hash are chosen through the type parameters of [`Ecies`]; see [the suite
//! module](`crate::suite`). For payloads that should be shareable with more than one
//! recipient, [the envelope module](`crate::envelope`) seals the data once under a symmetric
//! key and wraps only that key.
//!
//! Absent inputs are expressed as `None` and rejected with [`Error::InvalidArgument`]. Empty
//! plaintexts are valid.
//!
//! # Examples
//!
//! ```
//! use ecies_bls12381::{EciesBls12381, Error};
//!
//! let mut rng = rand::thread_rng();
//! let ecies = EciesBls12381::new();
//!
//! // Generate a keypair for the recipient.
//! let (pk, sk) = ecies.generate_keypair(&mut rng).unwrap();
//!
//! let c = ecies.encrypt(Some(&pk), Some(&b"Hello, BLS12381!"[..]), &mut rng).unwrap();
//! let m = ecies.decrypt(Some(&sk), Some(&c)).unwrap();
//!
//! assert_eq!(m, b"Hello, BLS12381!");
//!
//! // Any other key is refused.
//! let (_, other) = ecies.generate_keypair(&mut rng).unwrap();
//! assert_eq!(ecies.decrypt(Some(&other), Some(&c)), Err(Error::Decryption));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
extern crate std;

extern crate alloc;

#[cfg(test)]
#[macro_use]
mod test_macros;

#[allow(unused)]
mod util;

pub mod ecies;
pub mod envelope;
pub mod error;
pub mod keys;
pub mod suite;

pub use crate::ecies::{Ecies, EciesBls12381};
pub use crate::envelope::{Envelope, SymmetricKey};
pub use crate::error::{EncryptionFailure, Error};
pub use crate::keys::{PrivateKey, PublicKey};

/// Artifacts of the system that can be compressed should implement this trait.
///
/// Secret artifacts such as the private key should implement this in constant-time.
pub trait Compress: Sized {
    const OUTPUT_SIZE: usize;
    type Output: Sized + Copy + Clone + AsRef<[u8]>;

    /// Compresses this artifact to a short serialized byte representation.
    fn to_bytes(&self) -> Self::Output;

    /// Decompresses a serialized artifact.
    fn from_bytes(output: &Self::Output) -> subtle::CtOption<Self>;
}
