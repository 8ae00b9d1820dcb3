//! Point Sequence.

use crate::{
    errors::InterpolationError,
    modular::{ModularNumber, Modulus},
    polynomial::point::Point,
};
use std::collections::HashSet;

/// Point sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Get the points in the sequence.
    pub fn points(&self) -> &Vec<Point> {
        &self.points
    }

    /// Consume the point sequence and return the points in it.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// The number of points in the sequence.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if points is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Checks if there are any duplicated abscissas.
    pub fn has_duplicates(&self) -> bool {
        let mut x_set = HashSet::new();
        for p in self.points.iter() {
            x_set.insert(p.x);
        }
        x_set.len() != self.points.len()
    }

    /// Add a point to the point sequence.
    pub fn push(&mut self, point: Point) {
        self.points.push(point)
    }

    /// Lagrange interpolation for Point Sequence at Zero.
    ///
    /// For each point `j` the basis numerator is the product of `-x_m` and the denominator the product of
    /// `x_j - x_m` over every other point `m`. The result is `Σ y_j · num_j / den_j` in the field.
    pub fn lagrange_interpolate(&self, modulus: Modulus) -> Result<ModularNumber, InterpolationError> {
        if self.points.is_empty() {
            return Err(InterpolationError::EmptySequence);
        }

        let mut res = ModularNumber::zero(modulus);

        for (i, pi) in self.points().iter().enumerate() {
            let xi = ModularNumber::new(pi.x, modulus);
            let mut den = ModularNumber::one(modulus);
            let mut num = ModularNumber::one(modulus);
            for (j, pj) in self.points().iter().enumerate() {
                if j != i {
                    let xj = ModularNumber::new(pj.x, modulus);
                    den = den * &(xi - &xj);
                    num = num * &-xj;
                }
            }
            let yi = ModularNumber::new(pi.y, modulus);
            res = res + &((num / &den)? * &yi);
        }
        Ok(res)
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl IntoIterator for PointSequence {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
