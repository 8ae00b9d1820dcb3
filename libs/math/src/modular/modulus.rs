//! Runtime prime moduli.

use crate::errors::ModulusError;
use std::fmt::{Display, Formatter};

/// Checks whether a number is prime using trial division.
///
/// 0 and 1 are not prime, 2 is. Any other candidate is checked against every odd divisor up to its square root.
pub fn is_prime(candidate: u64) -> bool {
    match candidate {
        0 | 1 => false,
        2 => true,
        _ if candidate % 2 == 0 => false,
        _ => {
            let mut divisor = 3u64;
            while divisor <= candidate / divisor {
                if candidate % divisor == 0 {
                    return false;
                }
                divisor += 2;
            }
            true
        }
    }
}

/// A prime number that defines the field `Z/pZ`.
///
/// A `Modulus` can only be built out of a number that passes [is_prime], so every non-zero element in the field
/// it defines is invertible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct Modulus(u64);

impl Modulus {
    /// Constructs a modulus out of a prime number.
    pub fn new(prime: u64) -> Result<Self, ModulusError> {
        if !is_prime(prime) {
            return Err(ModulusError::NotPrime(prime));
        }
        Ok(Self(prime))
    }

    /// Finds the smallest prime strictly greater than `floor`.
    ///
    /// This is a sequential scan, each candidate being checked via [is_prime].
    pub fn next_above(floor: u64) -> Result<Self, ModulusError> {
        let mut candidate = floor.checked_add(1).ok_or(ModulusError::Overflow(floor))?;
        loop {
            if is_prime(candidate) {
                return Ok(Self(candidate));
            }
            candidate = candidate.checked_add(1).ok_or(ModulusError::Overflow(floor))?;
        }
    }

    /// The prime number itself.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Checks whether `value` is a canonical field element, i.e. `value < p`.
    pub fn contains(&self, value: u64) -> bool {
        value < self.0
    }
}

impl TryFrom<u64> for Modulus {
    type Error = ModulusError;

    fn try_from(prime: u64) -> Result<Self, Self::Error> {
        Self::new(prime)
    }
}

impl From<Modulus> for u64 {
    fn from(modulus: Modulus) -> Self {
        modulus.0
    }
}

impl Display for Modulus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
