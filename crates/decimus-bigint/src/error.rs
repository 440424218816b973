//! Error types for big integer arithmetic and parsing.

use thiserror::Error;

/// Errors that can occur during big integer arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// The result's decimal digit count exceeds the fixed cap.
    ///
    /// Raised by addition, subtraction and multiplication. Division and
    /// modulo cannot grow a magnitude and never raise this.
    #[error("big integer overflow: result exceeds the decimal digit cap")]
    Overflow,

    /// The divisor of a division or modulo operation is zero.
    #[error("big integer division by zero")]
    DivisionByZero,
}

/// Errors that can occur when parsing a decimal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// The string contains a sign but no digits.
    #[error("decimal string has no digits")]
    Empty,

    /// A character after the optional sign is not a decimal digit.
    #[error("invalid character in decimal string")]
    InvalidDigit,
}
