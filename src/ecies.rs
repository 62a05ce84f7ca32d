//! Elliptic-Curve Integrated Encryption Scheme over a BLS12-381 group.
//!
//! Encryption of `m` for public key `X = x·G`:
//! 1. sample an ephemeral scalar `r`, compute `R = r·G` and `S = r·X`,
//! 2. derive an AES-256-GCM key and nonce from `S` with the configured hash, bound to `R`,
//! 3. output `R || AES-256-GCM(m, aad = R)`.
//!
//! The nonce is derived rather than sampled: every encryption uses a fresh ephemeral key, so
//! a key is never used twice.

use crate::error::{EncryptionFailure, Error};
use crate::keys::{PrivateKey, PublicKey};
use crate::suite::{Curve, KdfHash, Sha3_256, G2};
use crate::util::kdf;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use alloc::vec::Vec;
use arrayref::array_refs;
use core::fmt;
use core::marker::PhantomData;
use group::Group;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

/// Size of the AES-256-GCM key in bytes.
pub const KEY_BYTES: usize = 32;

/// Size of the AES-GCM nonce in bytes.
pub const NONCE_BYTES: usize = 12;

/// Size of the AES-GCM authentication tag in bytes.
pub const TAG_BYTES: usize = 16;

const DOMAIN: &[u8] = b"ecies-bls12381";

/// ECIES bound to a group `C` and a key-derivation hash `H`.
///
/// The parameters are fixed for the lifetime of the value. The value itself is zero-sized
/// and can be freely copied and shared between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ecies<C: Curve = G2, H: KdfHash = Sha3_256> {
    _params: PhantomData<(C, H)>,
}

/// ECIES on BLS12-381 G2 with SHA3-256.
pub type EciesBls12381 = Ecies<G2, Sha3_256>;

impl<C: Curve, H: KdfHash> fmt::Display for Ecies<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecies-bls12381-{}-{}", C::NAME, H::NAME)
    }
}

impl<C: Curve, H: KdfHash> Ecies<C, H> {
    pub const fn new() -> Self {
        Ecies {
            _params: PhantomData,
        }
    }

    /// Length of the ciphertext produced for a plaintext of `plaintext_len` bytes.
    pub const fn ciphertext_len(&self, plaintext_len: usize) -> usize {
        C::POINT_BYTES + plaintext_len + TAG_BYTES
    }

    /// Samples a fresh private key.
    ///
    /// A failing random source yields [`Error::Randomness`].
    pub fn generate_private_key<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<PrivateKey<C>, Error> {
        PrivateKey::random(rng)
    }

    /// Samples a fresh keypair.
    pub fn generate_keypair<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(PublicKey<C>, PrivateKey<C>), Error> {
        let sk = self.generate_private_key(rng)?;
        let pk = PublicKey::from(&sk);

        debug!(scheme = %self, "generated keypair");

        Ok((pk, sk))
    }

    /// Derives the public key belonging to a private key.
    pub fn derive_public_key(&self, sk: Option<&PrivateKey<C>>) -> Result<PublicKey<C>, Error> {
        let sk = sk.ok_or(Error::InvalidArgument("private key"))?;

        Ok(PublicKey::from(sk))
    }

    /// Encrypts `plaintext` for the holder of the private key belonging to `pk`.
    ///
    /// An empty plaintext is valid; only an absent one is rejected.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk: Option<&PublicKey<C>>,
        plaintext: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Vec<u8>, Error> {
        let pk = pk.ok_or(Error::InvalidArgument("public key"))?;
        let plaintext = plaintext.ok_or(Error::InvalidArgument("plaintext"))?;

        let r = PrivateKey::<C>::random(rng).map_err(|_| EncryptionFailure::Randomness)?;
        let ephemeral = C::compress(&(C::Point::generator() * r.scalar()));
        let shared = *pk.point() * r.scalar();

        let (cipher, nonce) = Self::cipher(&shared, ephemeral.as_ref());
        let payload = Payload {
            msg: plaintext,
            aad: ephemeral.as_ref(),
        };
        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce[..]), payload)
            .map_err(|_| EncryptionFailure::Aead)?;

        let mut out = Vec::with_capacity(C::POINT_BYTES + sealed.len());
        out.extend_from_slice(ephemeral.as_ref());
        out.extend_from_slice(&sealed);

        debug!(scheme = %self, plaintext_len = plaintext.len(), "encrypted");

        Ok(out)
    }

    /// Decrypts a ciphertext produced by [`Self::encrypt`].
    ///
    /// Every failure after argument validation is reported as [`Error::Decryption`], whatever
    /// the cause.
    pub fn decrypt(
        &self,
        sk: Option<&PrivateKey<C>>,
        ciphertext: Option<&[u8]>,
    ) -> Result<Vec<u8>, Error> {
        let sk = sk.ok_or(Error::InvalidArgument("private key"))?;
        let ciphertext = ciphertext.ok_or(Error::InvalidArgument("ciphertext"))?;

        match Self::open(sk, ciphertext) {
            Some(plaintext) => {
                debug!(scheme = %self, plaintext_len = plaintext.len(), "decrypted");
                Ok(plaintext)
            }
            None => {
                debug!(scheme = %self, "decryption rejected");
                Err(Error::Decryption)
            }
        }
    }

    fn open(sk: &PrivateKey<C>, ciphertext: &[u8]) -> Option<Vec<u8>> {
        if ciphertext.len() < C::POINT_BYTES + TAG_BYTES {
            return None;
        }

        let (ephemeral, sealed) = ciphertext.split_at(C::POINT_BYTES);
        let r = C::decompress(ephemeral)?;
        let shared = r * sk.scalar();

        let (cipher, nonce) = Self::cipher(&shared, ephemeral);
        let payload = Payload {
            msg: sealed,
            aad: ephemeral,
        };

        cipher.decrypt(Nonce::from_slice(&nonce[..]), payload).ok()
    }

    /// Derives the AEAD key and nonce from the shared point, bound to the parameters and
    /// the ephemeral point.
    fn cipher(shared: &C::Point, ephemeral: &[u8]) -> (Aes256Gcm, [u8; NONCE_BYTES]) {
        let z = C::compress(shared);
        let mut okm = Zeroizing::new([0u8; KEY_BYTES + NONCE_BYTES]);

        kdf::<H>(
            z.as_ref(),
            &[
                DOMAIN,
                C::NAME.as_bytes(),
                H::NAME.as_bytes(),
                ephemeral,
            ],
            &mut okm[..],
        );

        let (key, nonce) = array_refs![&*okm, KEY_BYTES, NONCE_BYTES];

        (Aes256Gcm::new(key.into()), *nonce)
    }
}
