// tests/expand_message_xmd.rs
use blsprims_algorithms::{expand_message_xmd, expand_message_xmd_sha256, Error, Sha256};
use blsprims_params::MAX_XMD_LEN;
use blsprims_tests::xmd_vectors;

#[test]
fn test_known_answers() {
    let vectors = xmd_vectors().expect("Failed to load expand_message_xmd vectors");
    assert_eq!(vectors.hash, "SHA-256");
    assert!(!vectors.cases.is_empty());

    for case in &vectors.cases {
        let out = expand_message_xmd_sha256(
            case.msg.as_bytes(),
            case.dst.as_bytes(),
            case.len_in_bytes,
        )
        .unwrap_or_else(|e| panic!("expansion of {:?} failed: {}", case.msg, e));
        assert_eq!(out.len(), case.len_in_bytes);
        assert_eq!(
            hex::encode(&out),
            case.uniform_bytes,
            "msg {:?} len {}",
            case.msg,
            case.len_in_bytes
        );
    }
}

#[test]
fn test_generic_matches_sha256_entry_point() {
    let vectors = xmd_vectors().expect("Failed to load expand_message_xmd vectors");
    for case in vectors.cases.iter().filter(|c| c.len_in_bytes == 256) {
        let out =
            expand_message_xmd::<Sha256>(case.msg.as_bytes(), case.dst.as_bytes(), 256).unwrap();
        assert_eq!(out, case.expected().unwrap());
    }
}

#[test]
fn test_prefix_is_not_a_shorter_expansion() {
    // the requested length is bound into b_0, so outputs of different
    // lengths are unrelated
    let long = expand_message_xmd_sha256(b"abc", b"DST", 64).unwrap();
    let short = expand_message_xmd_sha256(b"abc", b"DST", 32).unwrap();
    assert_ne!(&long[..32], &short[..]);
}

#[test]
fn test_bounds_surface_as_length_errors() {
    assert!(expand_message_xmd_sha256(b"", b"DST", MAX_XMD_LEN).is_err());
    assert!(expand_message_xmd_sha256(b"", b"DST", 255 * 32).is_ok());

    let err = expand_message_xmd_sha256(b"", &[0u8; 256], 32).unwrap_err();
    assert!(matches!(err, Error::Length { expected: 255, actual: 256, .. }));

    let api: blsprims_api::Error = err.into();
    assert_eq!(api.kind(), blsprims_api::ErrorKind::Length);
}
