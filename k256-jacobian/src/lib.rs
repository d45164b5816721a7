#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! secp256k1 group arithmetic on arbitrary-precision integers.
//!
//! Points are added and doubled in Jacobian coordinates, converted back to
//! affine coordinates with a single modular inversion, and multiplied by
//! scalars with a double-and-add ladder. Every temporary big integer is
//! borrowed from a [`NumPool`] owned by the [`Secp256k1Curve`] engine, so
//! repeated operations under concurrent load do not churn the allocator.
//!
//! ## Usage
//!
//! ```
//! use k256_jacobian::{AffinePoint, Secp256k1Curve};
//!
//! let curve = Secp256k1Curve::new();
//! let g = AffinePoint::generator();
//!
//! let two_g = curve.double(&g);
//! assert_eq!(curve.add(&g, &g), two_g);
//! assert_eq!(curve.mul_base(&[2]), two_g);
//! assert!(curve.is_on_curve(two_g.x(), two_g.y()));
//! ```
//!
//! ## ⚠️ Security Warning
//!
//! Scalar multiplication branches on the bits of the scalar and big-integer
//! arithmetic is not constant-time. Do not use this crate with secret scalars
//! where timing side channels matter.

pub mod arithmetic;
pub mod params;
pub mod pool;

#[cfg(test)]
mod test_vectors;

pub use crate::{
    arithmetic::{AffinePoint, EllipticCurve, JacobianPoint, Secp256k1Curve},
    params::CurveParams,
    pool::{AllocatingPool, NumPool, Scratch, ScratchPool},
};
pub use elliptic_curve::{self, Error, Result};
pub use num_bigint::BigUint;

use elliptic_curve::{FieldBytesEncoding, PrimeCurve, bigint::U256, consts::U32};

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
///
/// This marker type projects [`CurveParams`] into the `elliptic-curve`
/// trait shape so the curve can be named by generic RustCrypto code.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl elliptic_curve::Curve for Secp256k1 {
    /// 32-byte serialized field elements.
    type FieldBytesSize = U32;

    /// 256-bit integer type used for internally representing field elements.
    type Uint = U256;

    /// Order of secp256k1's elliptic curve group (i.e. scalar modulus).
    const ORDER: U256 =
        U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
}

impl PrimeCurve for Secp256k1 {}

impl FieldBytesEncoding<Secp256k1> for U256 {}

/// Bytes representing a secp256k1 field element or scalar, big-endian.
pub type FieldBytes = elliptic_curve::FieldBytes<Secp256k1>;
