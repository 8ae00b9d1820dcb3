//! Audit errors.

use crate::protocol::ShamirError;
use thiserror::Error;

/// Audit failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The shares failed validation or interpolation.
    #[error(transparent)]
    Shamir(#[from] ShamirError),

    /// There are more subsets to evaluate than the configured ceiling.
    #[error("{subsets} subsets exceed the configured limit of {limit}")]
    TooManySubsets {
        /// The number of subsets the audit would evaluate.
        subsets: u64,

        /// The configured ceiling.
        limit: u64,
    },

    /// The number of subsets doesn't fit in 64 bits.
    #[error("the number of {threshold}-sized subsets of {points} points overflows")]
    SubsetCountOverflow {
        /// The number of points.
        points: usize,

        /// The subset size.
        threshold: usize,
    },

    /// No subset was evaluated.
    #[error("no subsets evaluated")]
    NoSubsets,
}
