use super::*;

#[test]
fn test_error_conversion() {
    let err = Error::Parameter {
        name: "test",
        reason: "invalid value",
    };
    match CoreError::from(err) {
        CoreError::InvalidParameter { context, reason } => {
            assert_eq!(context, "test");
            assert_eq!(reason, "invalid value");
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }

    let err = Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    };
    assert_eq!(
        CoreError::from(err),
        CoreError::InvalidLength {
            context: "buffer",
            expected: 32,
            actual: 16
        }
    );
}

#[test]
fn test_curve_error_conversion() {
    assert_eq!(
        CoreError::from(Error::InvalidPrivateKey { context: "k256" }),
        CoreError::InvalidPrivateKey { context: "k256" }
    );
    assert_eq!(
        CoreError::from(Error::DivisionByZero { context: "inv" }),
        CoreError::DivisionByZero { context: "inv" }
    );
    assert_eq!(
        CoreError::from(Error::InvalidPoint {
            context: "decode",
            reason: "not on curve"
        }),
        CoreError::InvalidPoint {
            context: "decode",
            reason: "not on curve"
        }
    );
}

#[test]
fn test_to_core_result_replaces_context() {
    let r: Result<()> = Err(Error::InvalidPrivateKey { context: "inner" });
    assert_eq!(
        to_core_result(r, "outer"),
        Err(CoreError::InvalidPrivateKey { context: "outer" })
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();
    assert_eq!(
        err,
        Error::Parameter {
            name: "test",
            reason: "should fail"
        }
    );

    assert!(validate::length("buffer", 32, 32).is_ok());
    let err = validate::length("buffer", 16, 32).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "buffer",
            expected: 32,
            actual: 16
        }
    );
}
