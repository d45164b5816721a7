//! Jacobian points

use super::{Secp256k1Curve, field};
use crate::{AffinePoint, CurveParams, NumPool};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A point on the secp256k1 curve in Jacobian coordinates.
///
/// `(X, Y, Z)` stands for the affine point `(X/Z², Y/Z³)`; any triple with
/// `Z = 0` is the identity. Equality of representations is not equality of
/// points, so compare via [`Secp256k1Curve::to_affine`].
#[derive(Clone, Debug, Default)]
pub struct JacobianPoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl JacobianPoint {
    /// The identity `(0, 0, 0)`.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a point from Jacobian coordinates, reducing each modulo `p`.
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        let p = &CurveParams::secp256k1().p;
        Self {
            x: x % p,
            y: y % p,
            z: z % p,
        }
    }

    /// Jacobian `X`-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Jacobian `Y`-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Jacobian `Z`-coordinate.
    pub fn z(&self) -> &BigUint {
        &self.z
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }
}

impl From<&AffinePoint> for JacobianPoint {
    /// Lifts with `Z = 1`, or `Z = 0` for the identity `(0, 0)`.
    fn from(p: &AffinePoint) -> Self {
        if p.is_identity() {
            return Self::identity();
        }
        Self::new(p.x.clone(), p.y.clone(), BigUint::one())
    }
}

impl From<AffinePoint> for JacobianPoint {
    fn from(p: AffinePoint) -> Self {
        Self::from(&p)
    }
}

impl<P: NumPool> Secp256k1Curve<P> {
    /// Returns `lhs + rhs`.
    ///
    /// Implements the `add-2007-bl` formula for `a = 0` from the Explicit-Formulas
    /// Database: <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#addition-add-2007-bl>.
    /// Equal inputs are routed to [`Self::double_jacobian`]; for `rhs = -lhs`
    /// the formula itself yields `Z = 0`.
    pub fn add_jacobian(&self, lhs: &JacobianPoint, rhs: &JacobianPoint) -> JacobianPoint {
        if lhs.is_identity() {
            return rhs.clone();
        }
        if rhs.is_identity() {
            return lhs.clone();
        }

        let p = &self.params.p;

        // Bring both points over the common denominator z1·z2:
        // u1 = x1·z2², u2 = x2·z1², s1 = y1·z2³, s2 = y2·z1³
        let mut z1z1 = self.scratch();
        field::set_square(&mut z1z1, &lhs.z, p);
        let mut z2z2 = self.scratch();
        field::set_square(&mut z2z2, &rhs.z, p);

        let mut u1 = self.scratch();
        field::set_mul(&mut u1, &lhs.x, &z2z2, p);
        let mut u2 = self.scratch();
        field::set_mul(&mut u2, &rhs.x, &z1z1, p);

        let mut t = self.scratch();
        field::set_mul(&mut t, &rhs.z, &z2z2, p);
        let mut s1 = self.scratch();
        field::set_mul(&mut s1, &lhs.y, &t, p);

        field::set_mul(&mut t, &lhs.z, &z1z1, p);
        let mut s2 = self.scratch();
        field::set_mul(&mut s2, &rhs.y, &t, p);

        let mut h = self.scratch();
        field::set_sub(&mut h, &u2, &u1, p);
        field::set_sub(&mut t, &s2, &s1, p);
        if h.is_zero() && t.is_zero() {
            return self.double_jacobian(lhs);
        }

        // r = 2(s2 - s1), i = (2h)², j = h·i, v = u1·i
        let mut r = self.scratch();
        field::set_double(&mut r, &t, p);
        field::set_double(&mut t, &h, p);
        let mut i = self.scratch();
        field::set_square(&mut i, &t, p);
        let mut j = self.scratch();
        field::set_mul(&mut j, &h, &i, p);
        let mut v = self.scratch();
        field::set_mul(&mut v, &u1, &i, p);

        // x3 = r² - j - 2v
        let mut x3 = BigUint::default();
        field::set_square(&mut x3, &r, p);
        field::sub_assign(&mut x3, &j, p);
        field::set_double(&mut t, &v, p);
        field::sub_assign(&mut x3, &t, p);

        // y3 = r(v - x3) - 2·s1·j
        let mut y3 = BigUint::default();
        field::set_sub(&mut t, &v, &x3, p);
        field::set_mul(&mut y3, &r, &t, p);
        field::set_mul(&mut t, &s1, &j, p);
        field::double_assign(&mut t, p);
        field::sub_assign(&mut y3, &t, p);

        // z3 = ((z1 + z2)² - z1² - z2²)·h = 2·z1·z2·h
        let mut z3 = BigUint::default();
        field::set_add(&mut t, &lhs.z, &rhs.z, p);
        field::set_square(&mut z3, &t, p);
        field::sub_assign(&mut z3, &z1z1, p);
        field::sub_assign(&mut z3, &z2z2, p);
        field::mul_assign(&mut z3, &h, p);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Doubles `point`.
    ///
    /// Implements the `dbl-2009-l` formula for `a = 0` from the Explicit-Formulas
    /// Database: <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#doubling-dbl-2009-l>.
    pub fn double_jacobian(&self, point: &JacobianPoint) -> JacobianPoint {
        if point.is_identity() {
            return point.clone();
        }

        let p = &self.params.p;

        let mut a = self.scratch();
        field::set_square(&mut a, &point.x, p);
        let mut b = self.scratch();
        field::set_square(&mut b, &point.y, p);
        let mut c = self.scratch();
        field::set_square(&mut c, &b, p);

        // d = 2((x + b)² - a - c)
        let mut t = self.scratch();
        field::set_add(&mut t, &point.x, &b, p);
        let mut t2 = self.scratch();
        field::set_square(&mut t2, &t, p);
        field::sub_assign(&mut t2, &a, p);
        field::sub_assign(&mut t2, &c, p);
        let mut d = self.scratch();
        field::set_double(&mut d, &t2, p);

        // e = 3a, f = e²
        let mut e = self.scratch();
        field::set_double(&mut e, &a, p);
        field::add_assign(&mut e, &a, p);
        let mut f = self.scratch();
        field::set_square(&mut f, &e, p);

        // x3 = f - 2d
        let mut x3 = BigUint::default();
        field::set_double(&mut t, &d, p);
        field::set_sub(&mut x3, &f, &t, p);

        // y3 = e(d - x3) - 8c
        let mut y3 = BigUint::default();
        field::set_double(&mut t, &c, p);
        field::double_assign(&mut t, p);
        field::double_assign(&mut t, p);
        field::set_sub(&mut t2, &d, &x3, p);
        field::set_mul(&mut y3, &e, &t2, p);
        field::sub_assign(&mut y3, &t, p);

        // z3 = 2·y·z
        let mut z3 = BigUint::default();
        field::set_mul(&mut z3, &point.y, &point.z, p);
        field::double_assign(&mut z3, p);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
