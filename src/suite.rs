//! Parameter selection: which BLS12-381 group carries the keys and which hash drives key
//! derivation.
//!
//! Both choices are types. An [`Ecies`](crate::Ecies) value binds one of each at
//! construction, so different parameterisations coexist in the same process and nothing is
//! ever swapped at runtime.

use crate::util::G2_BYTES;
use core::fmt::Debug;
use group::Group;
use irmaseal_curve::Scalar;
use tiny_keccak::Sha3;

#[cfg(feature = "g1")]
use crate::util::G1_BYTES;
#[cfg(feature = "g1")]
use irmaseal_curve::{G1Affine, G1Projective};

use irmaseal_curve::{G2Affine, G2Projective};

/// A prime-order group of BLS12-381 in which keys and ephemeral points live.
pub trait Curve: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Short name, used for domain separation and display.
    const NAME: &'static str;

    /// Size of a compressed point in bytes.
    const POINT_BYTES: usize;

    /// Group element (projective representation).
    type Point: Group<Scalar = Scalar>;

    /// Compressed point representation.
    type Compressed: Copy + AsRef<[u8]>;

    /// Compresses a point.
    fn compress(p: &Self::Point) -> Self::Compressed;

    /// Decompresses a point.
    ///
    /// Returns `None` for input of the wrong length, points not in the prime-order subgroup,
    /// and the identity.
    fn decompress(bytes: &[u8]) -> Option<Self::Point>;
}

/// The first source group of BLS12-381 (48-byte points).
#[cfg(feature = "g1")]
#[cfg_attr(docsrs, doc(cfg(feature = "g1")))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct G1;

#[cfg(feature = "g1")]
impl Curve for G1 {
    const NAME: &'static str = "g1";
    const POINT_BYTES: usize = G1_BYTES;

    type Point = G1Projective;
    type Compressed = [u8; G1_BYTES];

    fn compress(p: &G1Projective) -> [u8; G1_BYTES] {
        G1Affine::from(p).to_compressed()
    }

    fn decompress(bytes: &[u8]) -> Option<G1Projective> {
        let bytes: &[u8; G1_BYTES] = bytes.try_into().ok()?;
        let p: Option<G1Affine> = G1Affine::from_compressed(bytes).into();

        p.map(G1Projective::from)
            .filter(|p| !bool::from(p.is_identity()))
    }
}

/// The second source group of BLS12-381 (96-byte points). This is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct G2;

impl Curve for G2 {
    const NAME: &'static str = "g2";
    const POINT_BYTES: usize = G2_BYTES;

    type Point = G2Projective;
    type Compressed = [u8; G2_BYTES];

    fn compress(p: &G2Projective) -> [u8; G2_BYTES] {
        G2Affine::from(p).to_compressed()
    }

    fn decompress(bytes: &[u8]) -> Option<G2Projective> {
        let bytes: &[u8; G2_BYTES] = bytes.try_into().ok()?;
        let p: Option<G2Affine> = G2Affine::from_compressed(bytes).into();

        p.map(G2Projective::from)
            .filter(|p| !bool::from(p.is_identity()))
    }
}

/// Hash function driving the ECIES key derivation.
pub trait KdfHash: Copy + Debug + Default + Send + Sync + 'static {
    /// Short name, used for domain separation and display.
    const NAME: &'static str;

    /// Digest size in bytes. At most 64.
    const OUTPUT_BYTES: usize;

    type Hasher: tiny_keccak::Hasher;

    /// Creates a fresh hasher.
    fn hasher() -> Self::Hasher;
}

/// SHA3-256. This is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha3_256;

impl KdfHash for Sha3_256 {
    const NAME: &'static str = "sha3-256";
    const OUTPUT_BYTES: usize = 32;

    type Hasher = Sha3;

    fn hasher() -> Sha3 {
        Sha3::v256()
    }
}

/// SHA3-512.
#[cfg(feature = "sha3_512")]
#[cfg_attr(docsrs, doc(cfg(feature = "sha3_512")))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha3_512;

#[cfg(feature = "sha3_512")]
impl KdfHash for Sha3_512 {
    const NAME: &'static str = "sha3-512";
    const OUTPUT_BYTES: usize = 64;

    type Hasher = Sha3;

    fn hasher() -> Sha3 {
        Sha3::v512()
    }
}
