#![cfg(feature = "dev")]

use quadfit::internals::primitives::errors::FitError;

#[test]
fn test_fit_error_display() {
    let err = FitError::OutOfRange { index: 7, len: 3 };
    assert_eq!(
        format!("{}", err),
        "sample index 7 out of range for store of length 3"
    );

    let err = FitError::OutOfRange { index: 0, len: 0 };
    assert_eq!(
        format!("{}", err),
        "sample index 0 out of range for store of length 0"
    );
}

#[test]
fn test_fit_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let err = FitError::OutOfRange { index: 1, len: 1 };
    assert_error(&err);

    let boxed: Box<dyn std::error::Error> = Box::new(err.clone());
    assert_eq!(boxed.to_string(), err.to_string());
}

#[test]
fn test_fit_error_equality() {
    let a = FitError::OutOfRange { index: 2, len: 1 };
    let b = FitError::OutOfRange { index: 2, len: 1 };
    let c = FitError::OutOfRange { index: 3, len: 1 };

    assert_eq!(a, b);
    assert_ne!(a, c);
}
