//! Private scalars and public points.

use crate::error::Error;
use crate::suite::Curve;
use crate::util::{rand_scalar, SCALAR_BYTES};
use crate::Compress;
use core::fmt;
use core::marker::PhantomData;
use group::Group;
use irmaseal_curve::Scalar;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq, CtOption};
use zeroize::{DefaultIsZeroes, Zeroize, ZeroizeOnDrop};

#[derive(Clone, Copy)]
struct SecretScalar(Scalar);

impl Default for SecretScalar {
    fn default() -> Self {
        SecretScalar(Scalar::zero())
    }
}

impl DefaultIsZeroes for SecretScalar {}

/// A private key: a non-zero scalar of the BLS12-381 scalar field.
///
/// The scalar is overwritten when the key is dropped.
pub struct PrivateKey<C: Curve> {
    s: SecretScalar,
    _curve: PhantomData<C>,
}

impl<C: Curve> PrivateKey<C> {
    /// Samples a fresh private key.
    ///
    /// Fails with [`Error::Randomness`] if the random source fails.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        rand_scalar(rng).map(Self::from_scalar)
    }

    pub(crate) fn from_scalar(s: Scalar) -> Self {
        PrivateKey {
            s: SecretScalar(s),
            _curve: PhantomData,
        }
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.s.0
    }
}

impl<C: Curve> Clone for PrivateKey<C> {
    fn clone(&self) -> Self {
        Self::from_scalar(self.s.0)
    }
}

impl<C: Curve> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey<{}>(..)", C::NAME)
    }
}

impl<C: Curve> ConstantTimeEq for PrivateKey<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.scalar().ct_eq(other.scalar())
    }
}

impl<C: Curve> PartialEq for PrivateKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> Eq for PrivateKey<C> {}

impl<C: Curve> Zeroize for PrivateKey<C> {
    fn zeroize(&mut self) {
        self.s.zeroize();
    }
}

impl<C: Curve> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: Curve> ZeroizeOnDrop for PrivateKey<C> {}

/// Little-endian canonical scalar encoding. Decoding rejects zero.
impl<C: Curve> Compress for PrivateKey<C> {
    const OUTPUT_SIZE: usize = SCALAR_BYTES;
    type Output = [u8; SCALAR_BYTES];

    fn to_bytes(&self) -> [u8; SCALAR_BYTES] {
        self.scalar().to_bytes()
    }

    fn from_bytes(output: &[u8; SCALAR_BYTES]) -> CtOption<Self> {
        let s = Scalar::from_bytes(output);
        let is_some = s.is_some();
        let s = s.unwrap_or(Scalar::zero());
        let nonzero = !s.ct_eq(&Scalar::zero());

        CtOption::new(Self::from_scalar(s), is_some & nonzero)
    }
}

/// A public key: the generator of `C` multiplied by a private scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey<C: Curve>(pub(crate) C::Point);

impl<C: Curve> PublicKey<C> {
    pub(crate) fn point(&self) -> &C::Point {
        &self.0
    }
}

impl<C: Curve> From<&PrivateKey<C>> for PublicKey<C> {
    fn from(sk: &PrivateKey<C>) -> Self {
        PublicKey(C::Point::generator() * sk.scalar())
    }
}

/// Compressed point encoding. Decoding rejects points outside the prime-order subgroup and
/// the identity.
impl<C: Curve> Compress for PublicKey<C> {
    const OUTPUT_SIZE: usize = C::POINT_BYTES;
    type Output = C::Compressed;

    fn to_bytes(&self) -> C::Compressed {
        C::compress(&self.0)
    }

    fn from_bytes(output: &C::Compressed) -> CtOption<Self> {
        match C::decompress(output.as_ref()) {
            Some(p) => CtOption::new(PublicKey(p), Choice::from(1)),
            None => CtOption::new(PublicKey(C::Point::identity()), Choice::from(0)),
        }
    }
}
