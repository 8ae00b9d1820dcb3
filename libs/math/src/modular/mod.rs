//! Prime moduli and modular arithmetic.

pub mod modular;
pub mod modulus;
pub mod ops;
pub mod power;

pub use modular::*;
pub use modulus::*;
