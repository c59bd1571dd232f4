// tests/pubkey_decoding.rs
use blsprims_algorithms::{
    pubkey_x_from_compressed, pubkey_x_limbs, to_limbs, G1Affine, LimbConfig,
};
use blsprims_tests::{aggregate_vectors, parse_biguint};
use bls12_381::{G1Affine as RefAffine, G1Projective as RefProjective, Scalar};
use rand::RngCore;

const FIXTURE: &str = "891e60aff6ac35f971ce1536e6338f92c0f090415906e4097b35d1956b443d111da1d8839f35b598d92b233594d49762";

#[test]
fn test_fixture_key() {
    let bytes = hex::decode(FIXTURE).unwrap();
    let x = pubkey_x_from_compressed(&bytes).unwrap();

    let compressed: [u8; 48] = bytes.clone().try_into().unwrap();
    let reference = Option::<RefAffine>::from(RefAffine::from_compressed(&compressed))
        .expect("fixture must decompress");
    let ours = G1Affine::from_uncompressed(&reference.to_uncompressed()).unwrap();
    assert_eq!(&x, ours.x().as_biguint());

    let limbs = pubkey_x_limbs(&bytes, LimbConfig::BLS12_381).unwrap();
    assert_eq!(limbs, to_limbs(&x, LimbConfig::BLS12_381).unwrap());
}

#[test]
fn test_vector_keys() {
    let vectors = aggregate_vectors().expect("Failed to load aggregation vectors");
    for pk in &vectors.pubkeys {
        let bytes = pk.compressed_bytes().unwrap().expect("vector key has a compressed form");
        let x = pubkey_x_from_compressed(&bytes).unwrap();
        assert_eq!(x, parse_biguint(&pk.x).unwrap());

        let arr: [u8; 48] = bytes.as_slice().try_into().unwrap();
        assert_eq!(G1Affine::from_compressed(&arr).unwrap(), pk.to_point().unwrap());
    }
}

#[test]
fn test_random_keys() {
    let mut rng = rand::thread_rng();
    for _ in 0..16 {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        let sk = Scalar::from_bytes_wide(&wide);
        let pk = RefAffine::from(RefProjective::generator() * sk);
        let compressed = pk.to_compressed();

        let x = pubkey_x_from_compressed(&compressed).unwrap();
        let ours = G1Affine::from_compressed(&compressed).unwrap();
        assert_eq!(&x, ours.x().as_biguint());
        assert_eq!(ours.to_uncompressed(), pk.to_uncompressed());
        assert_eq!(ours.to_compressed(), compressed);

        let limbs = pubkey_x_limbs(&compressed, LimbConfig::BLS12_381).unwrap();
        assert_eq!(limbs.len(), 7);
        assert_eq!(limbs.value(), x);
    }
}

#[test]
fn test_wrong_length_rejected() {
    let bytes = hex::decode(FIXTURE).unwrap();
    assert!(pubkey_x_from_compressed(&bytes[..47]).is_err());
    assert!(pubkey_x_from_compressed(&[bytes.as_slice(), &[0u8]].concat()).is_err());
}
