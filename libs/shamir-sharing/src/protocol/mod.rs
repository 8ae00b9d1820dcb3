//! Shamir Secret Sharing Protocol

pub mod config;
pub mod errors;
pub mod field;
pub mod protocol;

pub use config::*;
pub use errors::*;
pub use field::*;
pub use protocol::*;
