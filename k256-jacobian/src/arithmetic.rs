//! A pure-Rust implementation of group operations on secp256k1.

mod affine;
mod field;
mod mul;
mod projective;

pub use self::{affine::AffinePoint, projective::JacobianPoint};

use crate::{CurveParams, NumPool, Scratch, ScratchPool};
use num_bigint::BigUint;
use std::sync::Arc;

/// Group operations in the coordinate-pair shape a generic elliptic-curve
/// signature framework calls.
///
/// Coordinates are expected in `[0, p)`, with `(0, 0)` standing for the
/// identity. Nothing is validated; out-of-range input gives a defined but
/// meaningless answer.
pub trait EllipticCurve {
    /// Domain parameters of the curve.
    fn params(&self) -> &CurveParams;

    /// Reports whether `(x, y)` lies on the curve.
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    /// Returns `(x1, y1) + (x2, y2)`.
    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> (BigUint, BigUint);

    /// Returns `2 · (x1, y1)`.
    fn double(&self, x1: &BigUint, y1: &BigUint) -> (BigUint, BigUint);

    /// Returns `k · (x, y)` for a big-endian scalar `k`.
    fn scalar_mult(&self, x: &BigUint, y: &BigUint, k: &[u8]) -> (BigUint, BigUint);

    /// Returns `k · G` for a big-endian scalar `k`.
    fn scalar_base_mult(&self, k: &[u8]) -> (BigUint, BigUint);
}

/// secp256k1 arithmetic engine.
///
/// Owns a reference to the [`NumPool`] its temporaries are drawn from.
/// Clones share that pool, so one engine can be cloned into (or borrowed by)
/// many threads.
#[derive(Debug)]
pub struct Secp256k1Curve<P: NumPool = ScratchPool> {
    params: &'static CurveParams,
    pool: Arc<P>,
}

impl Secp256k1Curve {
    /// Creates an engine with its own [`ScratchPool`].
    pub fn new() -> Self {
        Self::with_pool(Arc::new(ScratchPool::new()))
    }
}

impl Default for Secp256k1Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NumPool> Clone for Secp256k1Curve<P> {
    fn clone(&self) -> Self {
        Self {
            params: self.params,
            pool: Arc::clone(&self.pool),
        }
    }
}

impl<P: NumPool> Secp256k1Curve<P> {
    /// Creates an engine drawing temporaries from `pool`.
    pub fn with_pool(pool: Arc<P>) -> Self {
        Self {
            params: CurveParams::secp256k1(),
            pool,
        }
    }

    /// Domain parameters of secp256k1.
    pub fn params(&self) -> &'static CurveParams {
        self.params
    }

    /// The pool temporaries are drawn from.
    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Reports whether `(x, y)` lies on the curve.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        self.params.is_on_curve(x, y)
    }

    /// Returns `a + b`.
    pub fn add(&self, a: &AffinePoint, b: &AffinePoint) -> AffinePoint {
        self.to_affine(&self.add_jacobian(&JacobianPoint::from(a), &JacobianPoint::from(b)))
    }

    /// Returns `a + a`.
    pub fn double(&self, a: &AffinePoint) -> AffinePoint {
        self.to_affine(&self.double_jacobian(&JacobianPoint::from(a)))
    }

    fn scratch(&self) -> Scratch<'_, P> {
        Scratch::new(&*self.pool)
    }
}

impl<P: NumPool> EllipticCurve for Secp256k1Curve<P> {
    fn params(&self) -> &CurveParams {
        self.params
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        self.params.is_on_curve(x, y)
    }

    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> (BigUint, BigUint) {
        let a = AffinePoint::from_coordinates_unchecked(x1.clone(), y1.clone());
        let b = AffinePoint::from_coordinates_unchecked(x2.clone(), y2.clone());
        Self::add(self, &a, &b).into_coordinates()
    }

    fn double(&self, x1: &BigUint, y1: &BigUint) -> (BigUint, BigUint) {
        let a = AffinePoint::from_coordinates_unchecked(x1.clone(), y1.clone());
        Self::double(self, &a).into_coordinates()
    }

    fn scalar_mult(&self, x: &BigUint, y: &BigUint, k: &[u8]) -> (BigUint, BigUint) {
        let point = AffinePoint::from_coordinates_unchecked(x.clone(), y.clone());
        self.mul(&point, k).into_coordinates()
    }

    fn scalar_base_mult(&self, k: &[u8]) -> (BigUint, BigUint) {
        self.mul_base(k).into_coordinates()
    }
}
