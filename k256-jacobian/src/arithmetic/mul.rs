//! Scalar multiplication.
//!
//! The scalar is any big-endian byte string; it is not reduced modulo the
//! group order, so `[n + k] P = [k] P` falls out of the group law rather than
//! from a preprocessing step.

use super::Secp256k1Curve;
use crate::{AffinePoint, JacobianPoint, NumPool};

impl<P: NumPool> Secp256k1Curve<P> {
    /// Returns `[k] point`, where `k` is an unsigned big-endian integer of any
    /// length.
    ///
    /// # Security
    ///
    /// Double-and-add: one doubling per bit of `k` and one addition per set
    /// bit, so running time depends on `k`. Do not pass secret scalars where
    /// timing can be observed.
    pub fn mul(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        self.to_affine(&self.mul_jacobian(&JacobianPoint::from(point), k))
    }

    /// Returns `[k] G`, where `G` is the base point.
    ///
    /// Same timing caveat as [`Secp256k1Curve::mul`].
    pub fn mul_base(&self, k: &[u8]) -> AffinePoint {
        self.mul(&self.params.generator(), k)
    }

    /// Returns `[k] base` without leaving Jacobian coordinates.
    pub fn mul_jacobian(&self, base: &JacobianPoint, k: &[u8]) -> JacobianPoint {
        let mut acc = JacobianPoint::identity();
        for &byte in k {
            for bit in (0..8).rev() {
                acc = self.double_jacobian(&acc);
                if (byte >> bit) & 1 == 1 {
                    acc = self.add_jacobian(base, &acc);
                }
            }
        }
        acc
    }
}
