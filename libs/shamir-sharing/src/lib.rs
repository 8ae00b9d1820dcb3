//! Threshold secret sharing over a prime field.
//!
//! A secret is hidden as the constant term of a random polynomial of degree `k - 1` and every share is a point on
//! that polynomial. Any `k` shares recover the secret through Lagrange interpolation. When more than `k` shares are
//! available the [audit] module checks that every `k`-sized subset agrees and points at the shares that do not.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod audit;
pub mod protocol;

pub use audit::{AuditConfig, AuditError, AuditOutcome, AuditReport, Auditor, Suspect};
pub use math_lib::{modular::Modulus, polynomial::point::Point};
pub use protocol::{select_prime, Shamir, ShamirError, ThresholdConfig, ThresholdRisk};
