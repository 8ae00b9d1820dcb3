//! Threshold parameters.

use super::ShamirError;

/// The threshold parameters of a sharing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdConfig {
    /// The minimum number of shares needed to reconstruct the secret, `k`.
    pub threshold: usize,

    /// The number of shares handed out, `n`.
    pub share_count: usize,
}

impl ThresholdConfig {
    /// Constructs a validated configuration.
    pub fn new(threshold: usize, share_count: usize) -> Result<Self, ShamirError> {
        let config = Self { threshold, share_count };
        config.validate()?;
        Ok(config)
    }

    /// Checks that `2 <= k <= n`.
    pub fn validate(&self) -> Result<(), ShamirError> {
        validate_threshold(self.threshold)?;
        if self.share_count < self.threshold {
            return Err(ShamirError::InvalidThreshold {
                threshold: self.threshold,
                reason: "threshold exceeds the share count",
            });
        }
        Ok(())
    }

    /// Rates the balance between secrecy and availability of these parameters.
    pub fn assess(&self) -> ThresholdRisk {
        let threshold = self.threshold;
        let share_count = self.share_count;
        if threshold.saturating_mul(10) <= share_count.saturating_mul(3) {
            ThresholdRisk::Exposed
        } else if threshold >= share_count.saturating_sub(2) {
            ThresholdRisk::Fragile
        } else {
            ThresholdRisk::Balanced
        }
    }
}

/// How well a threshold balances secrecy against availability.
///
/// This is advisory only, every valid configuration can be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdRisk {
    /// `k <= 0.3 n`: an attacker only needs a small fraction of the shares.
    Exposed,

    /// `k >= n - 2`: losing or corrupting a couple of shares prevents reconstruction.
    Fragile,

    /// Neither of the above.
    Balanced,
}

pub(crate) fn validate_threshold(threshold: usize) -> Result<(), ShamirError> {
    if threshold < 2 {
        return Err(ShamirError::InvalidThreshold { threshold, reason: "threshold must be at least 2" });
    }
    Ok(())
}
