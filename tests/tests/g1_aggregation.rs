// tests/g1_aggregation.rs
//
// Aggregation over every 4-bit selection of four public keys, checked
// against stored vectors and against the bls12_381 crate.

use blsprims_algorithms::{aggregate, aggregate_selected, AdditionCase, G1Affine, LimbConfig};
use blsprims_tests::{aggregate_vectors, parse_biguint};
use bls12_381::{G1Affine as RefAffine, G1Projective as RefProjective, Scalar};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn scalar_from_hex(s: &str) -> Scalar {
    let mut le = parse_biguint(s).unwrap().to_bytes_le();
    le.resize(32, 0);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&le);
    Option::from(Scalar::from_bytes(&bytes)).expect("private key must be below the group order")
}

fn from_reference(p: &RefAffine) -> G1Affine {
    G1Affine::from_uncompressed(&p.to_uncompressed()).expect("reference point must decode")
}

#[test]
fn test_pubkeys_match_reference_derivation() {
    let vectors = aggregate_vectors().expect("Failed to load aggregation vectors");
    let points = vectors.points().unwrap();

    for (sk, ours) in vectors.private_keys.iter().zip(points.iter()) {
        let reference = RefAffine::from(RefProjective::generator() * scalar_from_hex(sk));
        assert_eq!(&from_reference(&reference), ours);
        assert_eq!(ours.to_compressed(), reference.to_compressed());
    }
}

#[test]
fn test_every_selection() {
    init_tracing();
    let vectors = aggregate_vectors().expect("Failed to load aggregation vectors");
    let points = vectors.points().unwrap();
    assert_eq!(vectors.cases.len(), 16);

    for case in &vectors.cases {
        let sum = aggregate_selected(&points, &case.selection()).unwrap();
        assert_eq!(sum, case.expected().unwrap(), "bits {:?}", case.bits);
        assert_eq!(sum.is_identity(), case.infinity);

        let [x, y] = sum.to_limbs(LimbConfig::BLS12_381).unwrap();
        if !case.infinity {
            assert_eq!(x.to_decimal_strings(), case.x_limbs);
            assert_eq!(y.to_decimal_strings(), case.y_limbs);
        }
    }
}

#[test]
fn test_every_selection_against_reference() {
    let vectors = aggregate_vectors().expect("Failed to load aggregation vectors");
    let points = vectors.points().unwrap();
    let reference: Vec<RefProjective> = vectors
        .private_keys
        .iter()
        .map(|sk| RefProjective::generator() * scalar_from_hex(sk))
        .collect();

    for mask in 0u8..16 {
        let bits: Vec<bool> = (0..4).map(|i| mask & (1 << i) != 0).collect();
        let expected = reference
            .iter()
            .zip(bits.iter())
            .filter(|(_, b)| **b)
            .fold(RefProjective::identity(), |acc, (p, _)| acc + p);
        let ours = aggregate_selected(&points, &bits).unwrap();
        assert_eq!(ours, from_reference(&RefAffine::from(expected)), "mask {:04b}", mask);
    }
}

#[test]
fn test_cancelling_selection_yields_identity() {
    let vectors = aggregate_vectors().expect("Failed to load aggregation vectors");
    let p = vectors.points().unwrap()[2].clone();
    let points = [p.clone(), -&p, G1Affine::generator()];

    assert_eq!(AdditionCase::classify(&points[0], &points[1]), AdditionCase::Inverse);
    let sum = aggregate_selected(&points, &[true, true, false]).unwrap();
    assert!(sum.is_identity());
    assert_eq!(sum.to_compressed(), RefAffine::identity().to_compressed());

    let sum = aggregate_selected(&points, &[true, true, true]).unwrap();
    assert_eq!(sum, G1Affine::generator());
}

#[test]
fn test_repeated_key_doubles() {
    let vectors = aggregate_vectors().expect("Failed to load aggregation vectors");
    let p = vectors.points().unwrap()[0].clone();
    let doubled = aggregate(&[p.clone(), p.clone()]);
    assert_eq!(doubled, p.double());

    let sk = scalar_from_hex(&vectors.private_keys[0]);
    let reference = RefAffine::from(RefProjective::generator() * (sk + sk));
    assert_eq!(doubled, from_reference(&reference));
}

#[test]
fn test_mismatched_lengths_rejected() {
    let vectors = aggregate_vectors().expect("Failed to load aggregation vectors");
    let points = vectors.points().unwrap();
    assert!(aggregate_selected(&points, &[true, false]).is_err());
}
