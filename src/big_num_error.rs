use thiserror::Error;

/// Errors surfaced to callers of [`BigInt`](crate::BigInt) operations.
///
/// Both kinds are caller-input problems; nothing here is transient, so there is
/// nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The input is not an optional `-` followed by one or more decimal digits.
    #[error("invalid number format: '{input}', expected an optional '-' followed by decimal digits")]
    InvalidFormat { input: String },

    /// The divisor (or modulus) is zero.
    #[error("division by zero")]
    DivisionByZero,
}

pub type BigIntResult<T> = Result<T, BigIntError>;

#[test]
fn test_error_display() {
    let err = BigIntError::InvalidFormat { input: "12a3".to_string() };
    assert_eq!(
        err.to_string(),
        "invalid number format: '12a3', expected an optional '-' followed by decimal digits"
    );
    assert_eq!(BigIntError::DivisionByZero.to_string(), "division by zero");
}
