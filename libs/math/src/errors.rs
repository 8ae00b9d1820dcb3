//! Crate errors.

use thiserror::Error;

/// Failed Interpolation Error
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InterpolationError {
    /// Division by zero.
    #[error("division by zero")]
    DivByZero,

    /// Polynomial error.
    #[error("polynomial error: {0}")]
    Polynomial(#[from] PolynomialError),

    /// Empty point sequence.
    #[error("empty point sequence")]
    EmptySequence,

    /// The point sequence has duplicate abscissas.
    #[error("point sequence has duplicate abscissas")]
    DuplicateAbscissas,
}

impl From<DivByZero> for InterpolationError {
    fn from(_: DivByZero) -> Self {
        Self::DivByZero
    }
}

/// Polynomial error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PolynomialError {
    /// Division by zero.
    #[error("division by zero")]
    DivByZero,

    /// Coefficient not found.
    #[error("polynomial coefficient not found")]
    CoefficientNotFound,

    /// Integer overflow error.
    #[error("integer overflow")]
    IntegerOverflow,
}

impl From<DivByZero> for PolynomialError {
    fn from(_: DivByZero) -> Self {
        Self::DivByZero
    }
}

/// Division by zero.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("division by zero")]
pub struct DivByZero;

/// A modulus could not be constructed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ModulusError {
    /// The value failed the primality test.
    #[error("{0} is not a prime number")]
    NotPrime(u64),

    /// The prime search ran past the largest representable value.
    #[error("no prime above {0} fits in 64 bits")]
    Overflow(u64),
}
