#![no_main]
use k256_jacobian::{BigUint, NumPool, Secp256k1Curve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // first byte splits the input into two scalars
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let (k1, k2) = data[1..].split_at(split - 1);

    let curve = Secp256k1Curve::new();
    let p1 = curve.mul_base(k1);
    let p2 = curve.mul_base(k2);

    // Results are on the curve unless they are the identity
    for p in [&p1, &p2] {
        assert!(p.is_identity() || curve.is_on_curve(p.x(), p.y()));
    }

    // Addition is commutative and consistent with doubling
    let sum = curve.add(&p1, &p2);
    assert!(sum == curve.add(&p2, &p1));
    assert!(curve.double(&p1) == curve.add(&p1, &p1));

    // Negation works correctly
    assert!(curve.add(&sum, &-&sum).is_identity());

    // Scalar multiplication distributes over scalar addition
    let k_sum = BigUint::from_bytes_be(k1) + BigUint::from_bytes_be(k2);
    assert!(sum == curve.mul_base(&k_sum.to_bytes_be()));

    // The pool ends balanced
    assert!(curve.pool().outstanding() == 0);
});
