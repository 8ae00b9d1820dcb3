//! Modular exponentiation and inversion.

use crate::{errors::DivByZero, modular::ModularNumber};

impl ModularNumber {
    /// Raises this number to `exponent` using square-and-multiply.
    pub fn pow(&self, exponent: u64) -> ModularNumber {
        let mut result = ModularNumber::one(self.modulus);
        let mut base = *self;
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result * &base;
            }
            base = base * &base;
            exponent >>= 1;
        }
        result
    }

    /// Computes the multiplicative inverse as `a^(p-2)`.
    ///
    /// This relies on Fermat's little theorem and is only valid because every [Modulus](super::Modulus) is prime.
    pub fn inverse(&self) -> Result<ModularNumber, DivByZero> {
        if self.is_zero() {
            return Err(DivByZero);
        }
        let exponent = self.modulus.value().saturating_sub(2);
        Ok(self.pow(exponent))
    }
}
