//! Affine points

use super::{Secp256k1Curve, field};
use crate::{CurveParams, JacobianPoint, NumPool};
use core::ops::Neg;
use elliptic_curve::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// A point on the secp256k1 curve in affine coordinates.
///
/// `(0, 0)` is not a solution of the curve equation and stands for the
/// identity (point at infinity).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Base point of secp256k1.
    pub fn generator() -> Self {
        CurveParams::secp256k1().generator()
    }

    /// Creates a point from its coordinates, checking that both lie in
    /// `[0, p)` and that the point is on the curve or is the identity.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self> {
        let params = CurveParams::secp256k1();
        if x >= params.p || y >= params.p {
            return Err(Error);
        }

        let point = Self { x, y };
        if point.is_identity() || params.is_on_curve(&point.x, &point.y) {
            Ok(point)
        } else {
            Err(Error)
        }
    }

    /// Creates a point from its coordinates without any validation.
    ///
    /// Arithmetic on coordinates outside `[0, p)` or off the curve is
    /// well-defined but produces meaningless results.
    pub fn from_coordinates_unchecked(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Affine `x`-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Affine `y`-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Splits the point into its `(x, y)` coordinates.
    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    /// Returns `(x, p − y mod p)`; the identity negates to itself.
    fn neg(self) -> AffinePoint {
        let p = &CurveParams::secp256k1().p;
        AffinePoint {
            x: self.x.clone(),
            y: (p - &self.y % p) % p,
        }
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -&self
    }
}

impl<P: NumPool> Secp256k1Curve<P> {
    /// Returns the affine representation of `point`.
    ///
    /// Costs one modular inversion. The identity maps to `(0, 0)` without
    /// attempting to invert `Z = 0`.
    pub fn to_affine(&self, point: &JacobianPoint) -> AffinePoint {
        if point.is_identity() {
            return AffinePoint::identity();
        }

        let p = &self.params.p;
        let Some(zinv) = field::invert(&point.z, p) else {
            return AffinePoint::identity();
        };

        let mut zinv_pow = self.scratch();
        field::set_square(&mut zinv_pow, &zinv, p);

        let mut x = BigUint::default();
        field::set_mul(&mut x, &point.x, &zinv_pow, p);

        field::mul_assign(&mut zinv_pow, &zinv, p);
        let mut y = BigUint::default();
        field::set_mul(&mut y, &point.y, &zinv_pow, p);

        AffinePoint { x, y }
    }
}
