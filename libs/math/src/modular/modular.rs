//! Modular numbers over a runtime prime.

use super::Modulus;
use rand::Rng;
use std::fmt::{Debug, Display, Formatter};

/// A number that performs modular arithmetic in every operation.
///
/// `ModularNumber` carries the [Modulus] it belongs to and keeps its value in the canonical range `[0, p)`.
/// Products are computed on 128 bit integers before being reduced, so no intermediate value ever leaves the
/// field. Operating on two numbers bound to different moduli is a logic error.
///
/// # Examples
///
/// ```
/// use math_lib::modular::{ModularNumber, Modulus};
///
/// # fn main() -> Result<(), math_lib::errors::ModulusError> {
/// let modulus = Modulus::new(13)?;
/// let two = ModularNumber::new(2, modulus);
/// let six = two * &ModularNumber::new(3, modulus);
/// let two_again = six + &ModularNumber::new(9, modulus);
///
/// assert_eq!(two_again, two);
/// # Ok(())
/// # }
/// ```
#[derive(Eq, PartialEq, Clone, Copy, Hash)]
pub struct ModularNumber {
    pub(crate) value: u64,
    pub(crate) modulus: Modulus,
}

impl ModularNumber {
    /// Constructs a new modular number, reducing `value` mod p.
    pub fn new(value: u64, modulus: Modulus) -> Self {
        Self { value: value % modulus.value(), modulus }
    }

    /// The zero value.
    pub fn zero(modulus: Modulus) -> Self {
        Self { value: 0, modulus }
    }

    /// The value one.
    pub fn one(modulus: Modulus) -> Self {
        Self::new(1, modulus)
    }

    /// Generates a number uniformly distributed in `[0, p)`.
    pub fn gen_random_with_rng<R: Rng + ?Sized>(modulus: Modulus, rng: &mut R) -> Self {
        let value = rng.gen_range(0..modulus.value());
        Self { value, modulus }
    }

    /// Generates a number uniformly distributed in `[1, p)`.
    pub fn gen_random_non_zero_with_rng<R: Rng + ?Sized>(modulus: Modulus, rng: &mut R) -> Self {
        // Every modulus is a prime so p >= 2 and this range is never empty.
        let value = rng.gen_range(1..modulus.value());
        Self { value, modulus }
    }

    /// Check if this modular number is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if this modular number is one.
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    /// The value in normal form.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The modulus this number belongs to.
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }
}

impl Display for ModularNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Debug for ModularNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}
