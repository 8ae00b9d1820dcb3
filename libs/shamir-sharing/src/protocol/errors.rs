//! Secret Sharing Scheme errors.

use math_lib::errors::{InterpolationError, ModulusError};
use thiserror::Error;

/// Secret sharing failure.
///
/// Every variant but [ShamirError::Interpolation] is a precondition failure detected before any field arithmetic
/// takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    /// The threshold is below two or above the number of shares.
    #[error("invalid threshold {threshold}: {reason}")]
    InvalidThreshold {
        /// The rejected threshold.
        threshold: usize,

        /// Why it was rejected.
        reason: &'static str,
    },

    /// Fewer shares than the threshold were provided.
    #[error("at least {threshold} shares are needed, got {provided}")]
    InsufficientShares {
        /// The threshold.
        threshold: usize,

        /// The number of shares provided.
        provided: usize,
    },

    /// The provided modulus is not a prime number.
    #[error("{0} is not a prime number")]
    NonPrimeModulus(u64),

    /// The modulus doesn't exceed a value that must live in the field.
    #[error("modulus {modulus} must be greater than {value}")]
    ModulusTooSmall {
        /// The modulus.
        modulus: u64,

        /// The value that doesn't fit.
        value: u64,
    },

    /// No 64 bit prime is large enough.
    #[error("no 64 bit prime is greater than {0}")]
    NoModulusAvailable(u64),

    /// A share abscissa is zero or shared by two shares.
    #[error("share abscissa {0} is zero or duplicated")]
    DuplicateOrZeroCoordinate(u64),

    /// The polynomial interpolation failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// Integer overflow or underflow.
    #[error("integer overflow/underflow")]
    Arithmetic,
}

impl From<ModulusError> for ShamirError {
    fn from(error: ModulusError) -> Self {
        match error {
            ModulusError::NotPrime(value) => Self::NonPrimeModulus(value),
            ModulusError::Overflow(floor) => Self::NoModulusAvailable(floor),
        }
    }
}
