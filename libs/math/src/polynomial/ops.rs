//! `Polynomial` Operations

use crate::{errors::PolynomialError, modular::ModularNumber, polynomial::Polynomial};
use std::ops::{Add, Mul};

impl Add<&Polynomial> for Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Self) -> Polynomial {
        if self.coefficients().is_empty() {
            return Polynomial::new(other.modulus(), other.coefficients().clone());
        }
        let mut coefficients: Vec<ModularNumber> = self.coefficients().clone();

        let mut other_iter = other.coefficients().iter();
        for (coef, other_coef) in coefficients.iter_mut().zip(other_iter.by_ref()) {
            *coef = *coef + other_coef;
        }
        for remaining_coef in other_iter {
            coefficients.push(*remaining_coef);
        }

        Polynomial::new(self.modulus(), coefficients)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Result<Polynomial, PolynomialError>;

    fn mul(self, other: &Self) -> Result<Polynomial, PolynomialError> {
        let modulus = self.modulus();
        if self.coefficients().is_empty() || other.coefficients().is_empty() {
            return Ok(Polynomial::new(modulus, Vec::new()));
        }
        let len = self.coefficients().len().checked_add(other.degree()?).ok_or(PolynomialError::IntegerOverflow)?;
        let mut product = Polynomial::new(modulus, vec![ModularNumber::zero(modulus); len]);
        for (i, c) in self.coefficients().iter().enumerate() {
            for (j, o) in other.coefficients().iter().enumerate() {
                let k = i.checked_add(j).ok_or(PolynomialError::IntegerOverflow)?;
                let coef_k = product.get_coefficient_mut(k)?;
                *coef_k = *coef_k + &(*c * o);
            }
        }
        Ok(product)
    }
}
