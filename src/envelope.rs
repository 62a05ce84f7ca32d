//! Envelope encryption: bulk data under a random symmetric key, the key wrapped with ECIES.
//!
//! Only the small wrapped key is addressed to a recipient. Granting another recipient access
//! means wrapping the same symmetric key again with [`Ecies::rewrap_key`]; the bulk payload is
//! neither re-encrypted nor re-sent. This is not proxy re-encryption: the party re-wrapping
//! must be able to unwrap.
//!
//! # Example
//!
//! ```
//! use ecies_bls12381::{EciesBls12381, Envelope};
//!
//! let mut rng = rand::thread_rng();
//! let ecies = EciesBls12381::new();
//!
//! let (alice_pk, alice_sk) = ecies.generate_keypair(&mut rng).unwrap();
//! let (bob_pk, bob_sk) = ecies.generate_keypair(&mut rng).unwrap();
//!
//! let env = ecies.seal_envelope(Some(&alice_pk), Some(&[7u8; 10_240][..]), &mut rng).unwrap();
//!
//! // Alice grants Bob access by wrapping the key again; the payload is shared.
//! let bob_key = ecies.rewrap_key(Some(&alice_sk), Some(&bob_pk), env.wrapped_key(), &mut rng).unwrap();
//! let bob_env = Envelope::new(bob_key, env.payload().to_vec());
//!
//! assert_eq!(ecies.open_envelope(Some(&bob_sk), &bob_env).unwrap(), [7u8; 10_240]);
//! ```

use crate::ecies::{Ecies, NONCE_BYTES};
use crate::error::{EncryptionFailure, Error};
use crate::keys::{PrivateKey, PublicKey};
use crate::suite::{Curve, KdfHash};
use crate::util::rand_bytes;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

/// Size of the symmetric key in bytes.
pub const SYMMETRIC_KEY_BYTES: usize = 32;

/// Size of the length prefix in a serialized [`Envelope`].
const HEADER_BYTES: usize = 4;

/// A 256-bit AES-GCM key. Zeroed on drop.
#[derive(Clone)]
pub struct SymmetricKey(Zeroizing<[u8; SYMMETRIC_KEY_BYTES]>);

impl SymmetricKey {
    /// Samples a fresh key.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_BYTES]);
        rand_bytes(rng, &mut key[..])?;

        Ok(SymmetricKey(key))
    }

    /// Reads a key from exactly [`SYMMETRIC_KEY_BYTES`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SYMMETRIC_KEY_BYTES {
            return Err(Error::MalformedInput("symmetric key length"));
        }

        let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_BYTES]);
        key.copy_from_slice(bytes);

        Ok(SymmetricKey(key))
    }

    pub fn as_bytes(&self) -> &[u8; SYMMETRIC_KEY_BYTES] {
        &self.0
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new((&*self.0).into())
    }

    /// Encrypts `payload` under a fresh random nonce.
    ///
    /// Output: `nonce || ciphertext || tag`.
    pub fn seal<R: RngCore + CryptoRng>(
        &self,
        payload: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>, Error> {
        let mut nonce = [0u8; NONCE_BYTES];
        rand_bytes(rng, &mut nonce)?;

        let ct = self
            .cipher()
            .encrypt(Nonce::from_slice(&nonce), payload)
            .map_err(|_| EncryptionFailure::Aead)?;

        let mut out = Vec::with_capacity(NONCE_BYTES + ct.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ct);

        Ok(out)
    }

    /// Decrypts the output of [`Self::seal`].
    ///
    /// Input shorter than a nonce is [`Error::MalformedInput`]; anything that fails
    /// authentication is [`Error::Decryption`].
    pub fn open(&self, sealed: &[u8]) -> Result<Vec<u8>, Error> {
        if sealed.len() < NONCE_BYTES {
            return Err(Error::MalformedInput("sealed payload shorter than nonce"));
        }

        let (nonce, ct) = sealed.split_at(NONCE_BYTES);

        self.cipher()
            .decrypt(Nonce::from_slice(nonce), ct)
            .map_err(|_| Error::Decryption)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}

/// A wrapped symmetric key together with the payload sealed under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    wrapped_key: Vec<u8>,
    payload: Vec<u8>,
}

impl Envelope {
    pub fn new(wrapped_key: Vec<u8>, payload: Vec<u8>) -> Self {
        Envelope {
            wrapped_key,
            payload,
        }
    }

    /// The ECIES ciphertext of the symmetric key.
    pub fn wrapped_key(&self) -> &[u8] {
        &self.wrapped_key
    }

    /// The sealed bulk payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Serializes as `len(wrapped_key) as u32 BE || wrapped_key || payload`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let len = u32::try_from(self.wrapped_key.len())
            .map_err(|_| Error::MalformedInput("wrapped key too long"))?;

        let mut header = [0u8; HEADER_BYTES];
        BigEndian::write_u32(&mut header, len);

        let mut out =
            Vec::with_capacity(HEADER_BYTES + self.wrapped_key.len() + self.payload.len());

        out.extend_from_slice(&header);
        out.extend_from_slice(&self.wrapped_key);
        out.extend_from_slice(&self.payload);

        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < HEADER_BYTES {
            return Err(Error::MalformedInput("envelope header"));
        }

        let (header, rest) = bytes.split_at(HEADER_BYTES);
        let len = BigEndian::read_u32(header) as usize;

        if len > rest.len() {
            return Err(Error::MalformedInput("wrapped key length"));
        }

        let (wrapped_key, payload) = rest.split_at(len);

        Ok(Envelope::new(wrapped_key.to_vec(), payload.to_vec()))
    }
}

impl<C: Curve, H: KdfHash> Ecies<C, H> {
    /// Seals `payload` under a fresh symmetric key and wraps that key for `pk`.
    pub fn seal_envelope<R: RngCore + CryptoRng>(
        &self,
        pk: Option<&PublicKey<C>>,
        payload: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Envelope, Error> {
        let pk = pk.ok_or(Error::InvalidArgument("public key"))?;
        let payload = payload.ok_or(Error::InvalidArgument("payload"))?;

        let key = SymmetricKey::generate(rng)?;
        let sealed = key.seal(payload, rng)?;
        let wrapped_key = self.encrypt(Some(pk), Some(&key.as_bytes()[..]), rng)?;

        debug!(scheme = %self, payload_len = payload.len(), "sealed envelope");

        Ok(Envelope::new(wrapped_key, sealed))
    }

    /// Unwraps the symmetric key with `sk` and opens the payload.
    pub fn open_envelope(
        &self,
        sk: Option<&PrivateKey<C>>,
        envelope: &Envelope,
    ) -> Result<Vec<u8>, Error> {
        let key = self.unwrap_key(sk, envelope.wrapped_key())?;

        key.open(envelope.payload())
    }

    /// Unwraps a symmetric key with `sk` and wraps it again for `recipient`.
    ///
    /// The returned wrapped key opens the same payload as the input one.
    pub fn rewrap_key<R: RngCore + CryptoRng>(
        &self,
        sk: Option<&PrivateKey<C>>,
        recipient: Option<&PublicKey<C>>,
        wrapped_key: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>, Error> {
        let recipient = recipient.ok_or(Error::InvalidArgument("recipient public key"))?;
        let key = self.unwrap_key(sk, wrapped_key)?;

        self.encrypt(Some(recipient), Some(&key.as_bytes()[..]), rng)
    }

    fn unwrap_key(
        &self,
        sk: Option<&PrivateKey<C>>,
        wrapped_key: &[u8],
    ) -> Result<SymmetricKey, Error> {
        let raw = Zeroizing::new(self.decrypt(sk, Some(wrapped_key))?);

        SymmetricKey::from_slice(&raw).map_err(|_| Error::Decryption)
    }
}
