//! Audit configuration.

/// The default ceiling on the number of subsets a single audit evaluates.
pub const DEFAULT_MAX_SUBSETS: u64 = 1_000_000;

/// Subsets counts above this are logged as a warning before being evaluated.
pub(crate) const LARGE_SUBSET_COUNT: u64 = 10_000;

/// The configuration of an [Auditor](super::Auditor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AuditConfig {
    /// The maximum number of `k`-sized subsets an audit may evaluate, `None` meaning unbounded.
    pub max_subsets: Option<u64>,

    /// Whether subsets are evaluated on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { max_subsets: Some(DEFAULT_MAX_SUBSETS), parallel: false }
    }
}
