//! Lagrange polynomial construction.

use crate::{
    errors::InterpolationError,
    modular::{ModularNumber, Modulus},
    polynomial::{point_sequence::PointSequence, Polynomial},
};

/// Construct a new lagrange polynomial from point sequence, O(n^3).
///
/// The result is the unique polynomial of degree at most `n - 1` going through all `n` points, with its leading
/// zeros removed.
pub fn lagrange_polynomial(sequence: &PointSequence, modulus: Modulus) -> Result<Polynomial, InterpolationError> {
    if sequence.is_empty() {
        return Err(InterpolationError::EmptySequence);
    }
    if sequence.has_duplicates() {
        return Err(InterpolationError::DuplicateAbscissas);
    }
    let one = ModularNumber::one(modulus);
    let mut res = Polynomial::new(modulus, Vec::new());
    for (i, pi) in sequence.points().iter().enumerate() {
        let xi = ModularNumber::new(pi.x, modulus);
        let mut den = one;
        let mut num = Polynomial::new(modulus, vec![one]);
        for (j, pj) in sequence.points().iter().enumerate() {
            if j != i {
                let xj = ModularNumber::new(pj.x, modulus);
                den = den * &(xi - &xj);
                let px = Polynomial::new(modulus, vec![-xj, one]);
                num = (num * &px)?;
            }
        }
        let fac = (ModularNumber::new(pi.y, modulus) / &den)?;
        let f = Polynomial::new(modulus, vec![fac]);
        num = (num * &f)?;
        res = res + &num;
    }
    res.canonicalize()?;
    Ok(res)
}
