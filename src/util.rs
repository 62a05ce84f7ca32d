use crate::error::Error;
use crate::suite::KdfHash;
use byteorder::{BigEndian, ByteOrder};
use irmaseal_curve::Scalar;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tiny_keccak::Hasher;
use zeroize::Zeroizing;

/// Size of a compressed G1 group element.
pub(crate) const G1_BYTES: usize = 48;

/// Size of a compressed G2 group element.
pub(crate) const G2_BYTES: usize = 96;

/// Size of a serialized scalar.
pub(crate) const SCALAR_BYTES: usize = 32;

/// Largest digest any supported KDF hash produces.
pub(crate) const MAX_DIGEST_BYTES: usize = 64;

/// Draws allowed before a source that keeps producing zero is treated as broken.
const MAX_SCALAR_DRAWS: usize = 8;

/// Samples a uniformly random non-zero scalar.
///
/// Draws 64 bytes and reduces them modulo the field order, so the bias is negligible.
/// A failing random source is reported, never papered over. So is one that reduces to zero
/// on every one of [`MAX_SCALAR_DRAWS`] draws.
pub(crate) fn rand_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar, Error> {
    let mut wide = Zeroizing::new([0u8; 2 * SCALAR_BYTES]);

    for _ in 0..MAX_SCALAR_DRAWS {
        rng.try_fill_bytes(&mut wide[..])
            .map_err(|_| Error::Randomness)?;

        let s = Scalar::from_bytes_wide(&wide);
        if !bool::from(s.ct_eq(&Scalar::zero())) {
            return Ok(s);
        }
    }

    Err(Error::Randomness)
}

/// Fills `out` from a random source, reporting failure.
pub(crate) fn rand_bytes<R: RngCore + CryptoRng>(rng: &mut R, out: &mut [u8]) -> Result<(), Error> {
    rng.try_fill_bytes(out).map_err(|_| Error::Randomness)
}

/// Counter-mode key derivation (NIST SP 800-56A concatenation KDF).
///
/// Block `i` is `H(i || secret || info[0] || info[1] || ...)` with a 32-bit big-endian counter
/// starting at one. Blocks are concatenated until `out` is full.
pub(crate) fn kdf<H: KdfHash>(secret: &[u8], info: &[&[u8]], out: &mut [u8]) {
    let mut block = Zeroizing::new([0u8; MAX_DIGEST_BYTES]);
    let mut counter = [0u8; 4];

    for (i, chunk) in out.chunks_mut(H::OUTPUT_BYTES).enumerate() {
        BigEndian::write_u32(&mut counter, i as u32 + 1);

        let mut h = H::hasher();
        h.update(&counter);
        h.update(secret);
        for part in info {
            h.update(part);
        }
        h.finalize(&mut block[..H::OUTPUT_BYTES]);

        chunk.copy_from_slice(&block[..chunk.len()]);
    }
}
