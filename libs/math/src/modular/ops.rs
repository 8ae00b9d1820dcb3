//! ModularNumber Operations

use crate::{errors::DivByZero, modular::ModularNumber};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl ModularNumber {
    fn reduce(&self, value: u128) -> ModularNumber {
        let prime = u128::from(self.modulus.value());
        // The remainder is below p, which fits in a u64.
        let value = (value % prime) as u64;
        ModularNumber { value, modulus: self.modulus }
    }
}

impl Sub<&ModularNumber> for ModularNumber {
    type Output = ModularNumber;

    fn sub(self, other: &ModularNumber) -> ModularNumber {
        (&self).sub(other)
    }
}

impl Sub for &ModularNumber {
    type Output = ModularNumber;

    fn sub(self, other: &ModularNumber) -> ModularNumber {
        debug_assert_eq!(self.modulus, other.modulus, "operands belong to different fields");
        let prime = u128::from(self.modulus.value());
        // `other.value < p` so adding `p - other` never underflows.
        self.reduce(u128::from(self.value) + (prime - u128::from(other.value)))
    }
}

impl Add<&ModularNumber> for ModularNumber {
    type Output = ModularNumber;

    fn add(self, other: &ModularNumber) -> ModularNumber {
        (&self).add(other)
    }
}

impl Add for &ModularNumber {
    type Output = ModularNumber;

    fn add(self, other: &ModularNumber) -> ModularNumber {
        debug_assert_eq!(self.modulus, other.modulus, "operands belong to different fields");
        self.reduce(u128::from(self.value) + u128::from(other.value))
    }
}

impl Mul<&ModularNumber> for ModularNumber {
    type Output = ModularNumber;

    fn mul(self, other: &ModularNumber) -> ModularNumber {
        (&self).mul(other)
    }
}

impl Mul for &ModularNumber {
    type Output = ModularNumber;

    fn mul(self, other: &ModularNumber) -> ModularNumber {
        debug_assert_eq!(self.modulus, other.modulus, "operands belong to different fields");
        self.reduce(u128::from(self.value) * u128::from(other.value))
    }
}

impl Div<&ModularNumber> for ModularNumber {
    type Output = Result<ModularNumber, DivByZero>;

    fn div(self, other: &ModularNumber) -> Result<ModularNumber, DivByZero> {
        (&self).div(other)
    }
}

impl Div for &ModularNumber {
    type Output = Result<ModularNumber, DivByZero>;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: &ModularNumber) -> Result<ModularNumber, DivByZero> {
        Ok(self * &other.inverse()?)
    }
}

impl Neg for ModularNumber {
    type Output = ModularNumber;

    fn neg(self) -> ModularNumber {
        if self.is_zero() {
            return self;
        }
        ModularNumber { value: self.modulus.value() - self.value, modulus: self.modulus }
    }
}
