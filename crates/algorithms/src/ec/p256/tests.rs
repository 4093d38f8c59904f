use super::*;
use crate::error::Error;
use ecsig_params::traditional::ecdsa::NIST_P256;

fn bytes32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(s).unwrap());
    out
}

fn scalar_from_u32(n: u32) -> Scalar {
    let mut b = [0u8; 32];
    b[28..].copy_from_slice(&n.to_be_bytes());
    Scalar::from_canonical_bytes(&b).unwrap()
}

fn point(x: &str, y: &str) -> Point {
    Point::new_uncompressed(&bytes32(x), &bytes32(y)).unwrap()
}

const N_MINUS_1: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550";

// ---- field ----

#[test]
fn test_field_inverse_of_two() {
    let two = FieldElement::from_u32(2);
    let inv = two.invert().unwrap();
    assert_eq!(
        inv.to_bytes(),
        bytes32("7fffffff80000000800000000000000000000000800000000000000000000000")
    );
    assert_eq!(two.mul(&inv), FieldElement::one());
}

#[test]
fn test_field_invert_zero_fails() {
    let err = FieldElement::zero().invert().unwrap_err();
    assert!(matches!(err, Error::InvalidOperand { .. }));
}

#[test]
fn test_field_mul_known_value() {
    let a = FieldElement::from_bytes(&bytes32(
        "0123456789abcdeffedcba98765432100f1e2d3c4b5a69788796a5b4c3d2e1f0",
    ))
    .unwrap();
    let b = FieldElement::from_bytes(&bytes32(
        "deadbeefcafebabe0badf00d1234567876543210fedcba9889abcdef01234567",
    ))
    .unwrap();
    assert_eq!(
        a.mul(&b).to_bytes(),
        bytes32("bd945556a9b72224560ea4738b99beaa6f9f9210567813424106440290c12e3b")
    );
    assert_eq!(a.square(), a.mul(&a));
}

#[test]
fn test_field_reduction_edges() {
    let p_minus_1 = FieldElement::from_bytes(&bytes32(
        "ffffffff00000001000000000000000000000000fffffffffffffffffffffffe",
    ))
    .unwrap();
    // (-1)² = 1
    assert_eq!(p_minus_1.square(), FieldElement::one());
    // (p-1) + 1 wraps to zero
    assert!(bool::from(p_minus_1.add(&FieldElement::one()).is_zero()));
    // 0 - 1 = p - 1
    assert_eq!(FieldElement::zero().sub(&FieldElement::one()), p_minus_1);
    assert_eq!(FieldElement::one().negate(), p_minus_1);
    assert!(bool::from(FieldElement::zero().negate().is_zero()));
}

#[test]
fn test_field_from_bytes_rejects_modulus() {
    assert!(FieldElement::from_bytes(&NIST_P256.p).is_err());
    assert!(FieldElement::from_bytes(&[0xFF; 32]).is_err());
}

// ---- scalar ----

#[test]
fn test_scalar_range_checks() {
    assert!(matches!(
        Scalar::from_canonical_bytes(&[0u8; 32]),
        Err(Error::ScalarRange { .. })
    ));
    assert!(matches!(
        Scalar::from_canonical_bytes(&NIST_P256.n),
        Err(Error::ScalarRange { .. })
    ));
    assert!(Scalar::from_canonical_bytes(&bytes32(N_MINUS_1)).is_ok());
    assert!(matches!(
        Scalar::deserialize(&[1u8; 31]),
        Err(Error::Length { .. })
    ));
}

#[test]
fn test_scalar_reduce_bytes() {
    // n reduces to zero
    assert!(bool::from(Scalar::reduce_bytes(&NIST_P256.n).is_zero()));
    // 2²⁵⁶ − 1 reduces to 2²⁵⁶ − 1 − n
    assert_eq!(
        Scalar::reduce_bytes(&[0xFF; 32]).serialize(),
        bytes32("00000000ffffffff00000000000000004319055258e8617b0c46353d039cdaae")
    );
    // values below n are untouched
    let below = bytes32(N_MINUS_1);
    assert_eq!(Scalar::reduce_bytes(&below).serialize(), below);
}

#[test]
fn test_scalar_mul_known_value() {
    let a = Scalar::from_canonical_bytes(&bytes32(
        "0123456789abcdeffedcba98765432100f1e2d3c4b5a69788796a5b4c3d2e1f0",
    ))
    .unwrap();
    let b = Scalar::from_canonical_bytes(&bytes32(
        "deadbeefcafebabe0badf00d1234567876543210fedcba9889abcdef01234567",
    ))
    .unwrap();
    assert_eq!(
        a.mul_mod_n(&b).serialize(),
        bytes32("fb14312565555b718df9c2380eef661d4bb14627e1ba61aee9103c49603dcd5e")
    );
}

#[test]
fn test_scalar_inverse() {
    let two = scalar_from_u32(2);
    let inv = two.inv_mod_n().unwrap();
    assert_eq!(
        inv.serialize(),
        bytes32("7fffffff800000007fffffffffffffffde737d56d38bcf4279dce5617e3192a9")
    );
    assert_eq!(two.mul_mod_n(&inv), Scalar::one());

    let n_minus_1 = Scalar::from_canonical_bytes(&bytes32(N_MINUS_1)).unwrap();
    // (n-1)⁻¹ = n-1
    assert_eq!(n_minus_1.inv_mod_n().unwrap(), n_minus_1);
    assert!(Scalar::zero().inv_mod_n().is_err());
}

#[test]
fn test_scalar_add_sub_negate() {
    let n_minus_1 = Scalar::from_canonical_bytes(&bytes32(N_MINUS_1)).unwrap();
    assert!(bool::from(n_minus_1.add_mod_n(&Scalar::one()).is_zero()));
    assert_eq!(Scalar::zero().sub_mod_n(&Scalar::one()), n_minus_1);
    assert_eq!(Scalar::one().negate(), n_minus_1);
    assert!(bool::from(Scalar::zero().negate().is_zero()));
}

// ---- points ----

#[test]
fn test_small_multiples_of_generator() {
    let g = base_point_g();
    let two_g = point(
        "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
        "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
    );
    let three_g = point(
        "5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c",
        "8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032",
    );

    assert_eq!(g.double(), two_g);
    assert_eq!(g.add(&g), two_g);
    assert_eq!(scalar_mult_base_g(&scalar_from_u32(2)), two_g);
    assert_eq!(two_g.add(&g), three_g);
    assert_eq!(scalar_mult_base_g(&scalar_from_u32(3)), three_g);
    assert_eq!(scalar_mult_base_g(&Scalar::one()), g);
}

#[test]
fn test_order_minus_one_is_negated_generator() {
    let g = base_point_g();
    let k = Scalar::from_canonical_bytes(&bytes32(N_MINUS_1)).unwrap();
    let p = scalar_mult_base_g(&k);
    assert_eq!(
        p.y_coordinate_bytes(),
        bytes32("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a")
    );
    assert_eq!(p, g.negate());
    assert!(p.add(&g).is_identity());
}

#[test]
fn test_group_order_annihilates_generator() {
    let g = base_point_g();
    assert!(g.mul_be_bytes(&NIST_P256.n).is_identity());
    assert!(g.is_in_prime_subgroup());
    assert!(g.add(&g.negate()).is_identity());
    assert!(scalar_mult_base_g(&Scalar::zero()).is_identity());
}

#[test]
fn test_identity_laws() {
    let g = base_point_g();
    let o = Point::identity();
    assert_eq!(g.add(&o), g);
    assert_eq!(o.add(&g), g);
    assert!(o.add(&o).is_identity());
    assert!(o.double().is_identity());
    assert!(scalar_mult(&scalar_from_u32(7), &o).is_identity());
}

#[test]
fn test_mul_add_base_matches_separate_products() {
    let q = scalar_mult_base_g(&scalar_from_u32(5));
    let u1 = scalar_from_u32(11);
    let u2 = scalar_from_u32(13);
    let combined = scalar_mult_add_base(&u1, &u2, &q);
    let separate = scalar_mult_base_g(&u1).add(&scalar_mult(&u2, &q));
    assert_eq!(combined, separate);
    // 11 + 13·5 = 76
    assert_eq!(combined, scalar_mult_base_g(&scalar_from_u32(76)));
}

#[test]
fn test_mul_add_base_cancels_to_identity() {
    // 1·G + (n-1)·G = O
    let u2 = Scalar::from_canonical_bytes(&bytes32(N_MINUS_1)).unwrap();
    let out = scalar_mult_add_base(&Scalar::one(), &u2, &base_point_g());
    assert!(out.is_identity());
}

#[test]
fn test_encoding_roundtrip() {
    let p = scalar_mult_base_g(&scalar_from_u32(3));
    let enc = p.serialize_uncompressed();
    assert_eq!(enc[0], 0x04);
    assert_eq!(Point::deserialize_uncompressed(&enc).unwrap(), p);
    assert_eq!(Point::from_raw_xy(&p.to_raw_xy()).unwrap(), p);
    assert_eq!(&enc[1..], &p.to_raw_xy()[..]);
}

#[test]
fn test_decoding_errors() {
    let mut enc = base_point_g().serialize_uncompressed();

    assert!(matches!(
        Point::deserialize_uncompressed(&enc[..64]),
        Err(Error::Length { .. })
    ));

    enc[0] = 0x02;
    assert!(matches!(
        Point::deserialize_uncompressed(&enc),
        Err(Error::PointNotOnCurve { .. })
    ));

    enc[0] = 0x04;
    enc[64] ^= 0x01;
    assert!(matches!(
        Point::deserialize_uncompressed(&enc),
        Err(Error::PointNotOnCurve { .. })
    ));

    // x = p is not a reduced coordinate
    let mut raw = [0u8; 64];
    raw[..32].copy_from_slice(&NIST_P256.p);
    raw[32..].copy_from_slice(&NIST_P256.g_y);
    assert!(matches!(
        Point::from_raw_xy(&raw),
        Err(Error::PointNotOnCurve { .. })
    ));
}

#[test]
fn test_validate_point() {
    assert!(validate_point(&base_point_g()).is_ok());
    assert!(matches!(
        validate_point(&Point::identity()),
        Err(Error::PointNotOnCurve { .. })
    ));
}

#[test]
fn test_identity_serializes_to_zeros() {
    assert_eq!(Point::identity().serialize_uncompressed(), [0u8; 65]);
}
