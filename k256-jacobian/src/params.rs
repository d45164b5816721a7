//! secp256k1 domain parameters.

use crate::arithmetic::AffinePoint;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Field modulus: `p = 2²⁵⁶ − 2³² − 977`.
const P_BYTES: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Order of the subgroup generated by the base point.
const N_BYTES: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

const CURVE_EQUATION_B_SINGLE: u32 = 7u32;

// SECP256k1 basepoint in affine coordinates:
// x = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
// y = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
const GX_BYTES: [u8; 32] = hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
const GY_BYTES: [u8; 32] = hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

static SECP256K1: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: BigUint::from_bytes_be(&P_BYTES),
    n: BigUint::from_bytes_be(&N_BYTES),
    b: BigUint::from(CURVE_EQUATION_B_SINGLE),
    gx: BigUint::from_bytes_be(&GX_BYTES),
    gy: BigUint::from_bytes_be(&GY_BYTES),
    bit_size: 256,
    name: "secp256k1",
});

/// Domain parameters of a short Weierstrass curve `y² = x³ + b` over a prime
/// field.
///
/// There is exactly one instance, [`CurveParams::secp256k1`], built on first
/// use and read-only for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Order of the underlying field.
    pub p: BigUint,
    /// Order of the base point.
    pub n: BigUint,
    /// Constant `b` of the curve equation.
    pub b: BigUint,
    /// Affine `x` of the base point.
    pub gx: BigUint,
    /// Affine `y` of the base point.
    pub gy: BigUint,
    /// Size of the underlying field in bits.
    pub bit_size: usize,
    /// Canonical name of the curve.
    pub name: &'static str,
}

impl CurveParams {
    /// Returns the secp256k1 parameter table.
    pub fn secp256k1() -> &'static CurveParams {
        &SECP256K1
    }

    /// Returns the base point `G`.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::from_coordinates_unchecked(self.gx.clone(), self.gy.clone())
    }

    /// Reports whether `(x, y)` satisfies `y² = x³ + b (mod p)`.
    ///
    /// Inputs are expected in `[0, p)`. The identity `(0, 0)` is not a
    /// solution and is reported as off the curve.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let y2 = (y * y) % &self.p;
        let x3 = (x * x * x + &self.b) % &self.p;
        x3 == y2
    }
}
