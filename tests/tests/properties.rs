// tests/properties.rs
use blsprims_algorithms::{
    from_limbs, i2osp, os2ip, to_limbs, Fp, G1Affine, HashFunction, LimbConfig, Sha256,
};
use num_bigint::BigUint;
use proptest::prelude::*;
use sha2::Digest;

fn arb_point() -> impl Strategy<Value = G1Affine> {
    // small multiples of the generator, identity included
    (0u32..24).prop_map(|k| {
        (0..k).fold(G1Affine::identity(), |acc, _| acc.add(&G1Affine::generator()))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn limbs_recombine(bytes in proptest::collection::vec(any::<u8>(), 0..=48)) {
        let v = BigUint::from_bytes_be(&bytes);
        let limbs = to_limbs(&v, LimbConfig::BLS12_381).unwrap();
        prop_assert_eq!(from_limbs(limbs.limbs(), 55).unwrap(), v);
    }

    #[test]
    fn octets_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 1..=64)) {
        let v = os2ip(&bytes);
        prop_assert_eq!(i2osp(&v, bytes.len()).unwrap(), bytes);
    }

    #[test]
    fn sha256_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        let ours = Sha256::digest(&data).unwrap();
        let theirs = sha2::Sha256::digest(&data);
        prop_assert_eq!(ours.as_ref(), theirs.as_slice());
    }

    #[test]
    fn addition_commutes(a in arb_point(), b in arb_point()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn addition_associates(a in arb_point(), b in arb_point(), c in arb_point()) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn identity_is_neutral(a in arb_point()) {
        prop_assert_eq!(a.add(&G1Affine::identity()), a.clone());
        prop_assert!(a.add(&-&a).is_identity());
    }

    #[test]
    fn reduction_is_canonical(bytes in proptest::collection::vec(any::<u8>(), 64)) {
        let v = BigUint::from_bytes_be(&bytes);
        let fp = Fp::from_biguint(&v);
        prop_assert!(Fp::from_biguint_checked(fp.as_biguint()).is_ok());
    }
}
