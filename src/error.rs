//! Error types shared by the facade and the envelope pattern.

use thiserror::Error;

/// Internal cause of an encryption failure.
///
/// Never carries key material or plaintext.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncryptionFailure {
    /// The random source failed while sampling the ephemeral scalar.
    #[error("random source failed")]
    Randomness,

    /// The AEAD rejected its input.
    #[error("authenticated encryption failed")]
    Aead,
}

/// Errors returned by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A required input was absent. Raised before any cryptographic work.
    #[error("{0} is required")]
    InvalidArgument(&'static str),

    /// Encryption failed internally.
    #[error("encryption failed: {0}")]
    Encryption(#[from] EncryptionFailure),

    /// Decryption failed.
    ///
    /// Wrong key, tampered data and truncated or unparseable ciphertexts are deliberately
    /// indistinguishable.
    #[error("decryption failed")]
    Decryption,

    /// Input is too short or its framing is inconsistent.
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    /// The random source failed.
    #[error("random source failed")]
    Randomness,
}
