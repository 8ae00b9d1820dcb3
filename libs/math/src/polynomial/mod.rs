//! Polynomial operations

pub mod lagrange;
pub mod ops;
pub mod point;
pub mod point_sequence;
pub mod polynomial;

pub use lagrange::*;
pub use polynomial::*;
