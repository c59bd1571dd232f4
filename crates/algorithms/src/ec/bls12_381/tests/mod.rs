//! BLS12-381 test suite and shared fixtures



use super::{Fp, G1Affine};
use num_bigint::BigUint;

/// Field element from a hex literal without `0x`
pub(super) fn fp(hex: &str) -> Fp {
    Fp::from_biguint_checked(&BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()).unwrap()
}

/// Finite point from hex coordinates
pub(super) fn point(x: &str, y: &str) -> G1Affine {
    G1Affine::new(fp(x), fp(y)).unwrap()
}

/// k * P by double-and-add over the affine addition law
pub(super) fn mul(p: &G1Affine, mut k: u64) -> G1Affine {
    let mut acc = G1Affine::identity();
    let mut base = p.clone();
    while k > 0 {
        if k & 1 == 1 {
            acc = &acc + &base;
        }
        base = base.double();
        k >>= 1;
    }
    acc
}
