//! Arithmetic modulo the field prime on caller-provided registers.
//!
//! Every helper takes operands in `[0, p)` and leaves its result in `[0, p)`,
//! so subtraction never goes negative and nothing un-reduced is ever
//! multiplied or compared. Results are written into existing `BigUint`s to
//! reuse their storage.

use num_bigint::BigUint;
use num_traits::Zero;

/// `out = a · b mod p`
#[inline]
pub(crate) fn set_mul(out: &mut BigUint, a: &BigUint, b: &BigUint, p: &BigUint) {
    out.clone_from(a);
    mul_assign(out, b, p);
}

/// `out = a² mod p`
#[inline]
pub(crate) fn set_square(out: &mut BigUint, a: &BigUint, p: &BigUint) {
    set_mul(out, a, a, p);
}

/// `out = a + b mod p`
#[inline]
pub(crate) fn set_add(out: &mut BigUint, a: &BigUint, b: &BigUint, p: &BigUint) {
    out.clone_from(a);
    add_assign(out, b, p);
}

/// `out = 2a mod p`
#[inline]
pub(crate) fn set_double(out: &mut BigUint, a: &BigUint, p: &BigUint) {
    set_add(out, a, a, p);
}

/// `out = a − b mod p`
#[inline]
pub(crate) fn set_sub(out: &mut BigUint, a: &BigUint, b: &BigUint, p: &BigUint) {
    out.clone_from(a);
    sub_assign(out, b, p);
}

#[inline]
pub(crate) fn mul_assign(a: &mut BigUint, b: &BigUint, p: &BigUint) {
    *a *= b;
    *a %= p;
}

#[inline]
pub(crate) fn add_assign(a: &mut BigUint, b: &BigUint, p: &BigUint) {
    *a += b;
    if *a >= *p {
        *a -= p;
    }
}

#[inline]
pub(crate) fn double_assign(a: &mut BigUint, p: &BigUint) {
    *a <<= 1u32;
    if *a >= *p {
        *a -= p;
    }
}

#[inline]
pub(crate) fn sub_assign(a: &mut BigUint, b: &BigUint, p: &BigUint) {
    if *a < *b {
        *a += p;
    }
    *a -= b;
}

/// Returns `z⁻¹ mod p`, or `None` if `z ≡ 0`.
///
/// Computed as `z^(p−2)`, which relies on `p` being prime.
pub(crate) fn invert(z: &BigUint, p: &BigUint) -> Option<BigUint> {
    if (z % p).is_zero() {
        return None;
    }
    Some(z.modpow(&(p - 2u32), p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveParams;
    use num_traits::One;
    use proptest::prelude::*;

    fn modulus() -> &'static BigUint {
        &CurveParams::secp256k1().p
    }

    #[test]
    fn sub_wraps_instead_of_going_negative() {
        let p = modulus();
        let mut out = BigUint::default();
        set_sub(&mut out, &BigUint::from(3u32), &BigUint::from(5u32), p);
        assert_eq!(out, p - 2u32);

        sub_assign(&mut out, &(p - 2u32), p);
        assert!(out.is_zero());
    }

    #[test]
    fn add_reduces_once() {
        let p = modulus();
        let mut out = BigUint::default();
        let p_minus_one = p - 1u32;
        set_add(&mut out, &p_minus_one, &p_minus_one, p);
        assert_eq!(out, p - 2u32);

        set_double(&mut out, &p_minus_one, p);
        assert_eq!(out, p - 2u32);

        double_assign(&mut out, p);
        assert_eq!(out, p - 4u32);
    }

    #[test]
    fn invert() {
        let p = modulus();
        assert!(super::invert(&BigUint::zero(), p).is_none());
        assert!(super::invert(p, p).is_none());

        let one = BigUint::one();
        assert_eq!(super::invert(&one, p).unwrap(), one);

        let two = BigUint::from(2u32);
        let inv_two = super::invert(&two, p).unwrap();
        let mut res = BigUint::default();
        set_mul(&mut res, &two, &inv_two, p);
        assert_eq!(res, one);
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> BigUint {
            let mut res = BigUint::from_bytes_be(&bytes);
            let m = modulus();
            // Modulus is 256 bit long, same as the maximum `res`,
            // so this is guaranteed to land us in the correct range.
            if res >= *m {
                res -= m;
            }
            res
        }
    }

    proptest! {
        #[test]
        fn fuzzy_add(a in field_element(), b in field_element()) {
            let p = modulus();
            let mut res = BigUint::default();
            set_add(&mut res, &a, &b, p);
            prop_assert_eq!(res, (&a + &b) % p);
        }

        #[test]
        fn fuzzy_sub(a in field_element(), b in field_element()) {
            let p = modulus();
            let mut res = BigUint::default();
            set_sub(&mut res, &a, &b, p);
            prop_assert!(res < *p);
            prop_assert_eq!((&res + &b) % p, a);
        }

        #[test]
        fn fuzzy_mul(a in field_element(), b in field_element()) {
            let p = modulus();
            let mut res = BigUint::default();
            set_mul(&mut res, &a, &b, p);
            prop_assert_eq!(res, (&a * &b) % p);
        }

        #[test]
        fn fuzzy_invert(a in field_element()) {
            let p = modulus();
            let a = if a.is_zero() { BigUint::one() } else { a };
            let inv = super::invert(&a, p).unwrap();
            let mut res = BigUint::default();
            set_square(&mut res, &inv, p);
            mul_assign(&mut res, &a, p);
            mul_assign(&mut res, &a, p);
            prop_assert!(res.is_one());
        }
    }
}
