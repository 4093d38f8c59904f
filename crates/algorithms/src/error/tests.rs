use super::*;

#[test]
fn test_error_conversion() {
    // Parameter error
    let err = Error::Parameter {
        name: "test",
        reason: "invalid value",
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidOperand { context, message } => {
            assert_eq!(context, "test");
            assert_eq!(message, "invalid value");
        }
        _ => panic!("Expected InvalidOperand error"),
    }

    // Length error
    let err = Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }
}

#[test]
fn test_curve_errors_keep_their_kind() {
    assert_eq!(
        CoreError::from(Error::PointNotOnCurve { context: "decode" }),
        CoreError::PointNotOnCurve { context: "decode" }
    );
    assert_eq!(
        CoreError::from(Error::InvalidSubgroup { context: "decode" }),
        CoreError::InvalidSubgroup { context: "decode" }
    );
    assert_eq!(
        CoreError::from(Error::ScalarRange { context: "scalar" }),
        CoreError::InvalidScalarRange { context: "scalar" }
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::length("buffer", 32, 32).is_ok());
    assert!(validate::length("buffer", 16, 32).is_err());

    assert!(validate::on_curve(true, "point").is_ok());
    assert_eq!(
        validate::on_curve(false, "point"),
        Err(Error::PointNotOnCurve { context: "point" })
    );
    assert_eq!(
        validate::scalar_range(false, "scalar"),
        Err(Error::ScalarRange { context: "scalar" })
    );
}
