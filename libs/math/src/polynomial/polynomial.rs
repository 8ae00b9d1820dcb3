//! Polynomial in a prime field.

use crate::{
    errors::PolynomialError,
    modular::{ModularNumber, Modulus},
};

/// Polynomial Expression.
///
/// Coefficients are stored in ascending order of power: the first one is the constant term and the last one is
/// the leading coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    /// The field the coefficients live in.
    modulus: Modulus,

    /// Coefficients of the polynomial.
    coefficients: Vec<ModularNumber>,
}

impl Polynomial {
    /// Creates a new polynomial expression.
    pub fn new(modulus: Modulus, coefficients: Vec<ModularNumber>) -> Polynomial {
        Polynomial { modulus, coefficients }
    }

    /// Creates a polynomial out of plain integer coefficients, reducing each of them mod p.
    pub fn from_values(modulus: Modulus, coefficients: &[u64]) -> Polynomial {
        let coefficients = coefficients.iter().map(|c| ModularNumber::new(*c, modulus)).collect();
        Polynomial { modulus, coefficients }
    }

    /// Add a coefficient to the polynomial.
    pub fn add_coefficient(&mut self, coefficient: ModularNumber) {
        self.coefficients.push(coefficient);
    }

    /// Remove leading zeros.
    pub fn canonicalize(&mut self) -> Result<(), PolynomialError> {
        while (!self.coefficients.is_empty()) && self.last_coefficient()?.is_zero() {
            self.coefficients.pop();
        }
        Ok(())
    }

    /// The modulus of the field this polynomial is defined over.
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Get coefficients.
    pub fn coefficients(&self) -> &Vec<ModularNumber> {
        &self.coefficients
    }

    /// Get the degree of the polynomial.
    pub fn degree(&self) -> Result<usize, PolynomialError> {
        if self.coefficients.is_empty() {
            return Ok(0);
        }
        self.coefficients.len().checked_sub(1).ok_or(PolynomialError::IntegerOverflow)
    }

    /// Evaluates the polynomial at a given x using Horner's method.
    pub fn eval(&self, x: &ModularNumber) -> ModularNumber {
        let mut eval = ModularNumber::zero(self.modulus);
        for coefficient in self.coefficients.iter().rev() {
            eval = eval * x + coefficient;
        }
        eval
    }

    /// Evaluates the polynomial at a plain integer abscissa.
    pub fn eval_at(&self, x: u64) -> ModularNumber {
        self.eval(&ModularNumber::new(x, self.modulus))
    }

    /// Get mutable coefficient at index.
    pub fn get_coefficient_mut(&mut self, idx: usize) -> Result<&mut ModularNumber, PolynomialError> {
        self.coefficients.get_mut(idx).ok_or(PolynomialError::CoefficientNotFound)
    }

    /// The constant term, which is the value at zero.
    pub fn constant_term(&self) -> Result<&ModularNumber, PolynomialError> {
        self.coefficients.first().ok_or(PolynomialError::CoefficientNotFound)
    }

    /// Get the last coefficient.
    pub fn last_coefficient(&self) -> Result<&ModularNumber, PolynomialError> {
        self.coefficients.last().ok_or(PolynomialError::CoefficientNotFound)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    fn make_polynomial(coefficients: &[u64]) -> Polynomial {
        Polynomial::from_values(Modulus::new(11).unwrap(), coefficients)
    }

    #[test]
    fn test_evaluator() {
        let polynomial = make_polynomial(&[10, 2, 3]);
        assert_eq!(polynomial.eval_at(2).value(), 4);
    }

    #[test]
    fn empty_evaluates_to_zero() {
        let polynomial = make_polynomial(&[]);
        assert!(polynomial.eval_at(5).is_zero());
        assert_eq!(polynomial.degree().unwrap(), 0);
        assert!(polynomial.constant_term().is_err());
    }

    #[test]
    fn canonicalize_drops_leading_zeros() {
        let mut polynomial = make_polynomial(&[4, 1, 0, 11]);
        polynomial.canonicalize().unwrap();
        assert_eq!(polynomial, make_polynomial(&[4, 1]));
        assert_eq!(polynomial.degree().unwrap(), 1);
        assert_eq!(polynomial.constant_term().unwrap().value(), 4);
        assert!(polynomial.last_coefficient().unwrap().is_one());
    }
}
