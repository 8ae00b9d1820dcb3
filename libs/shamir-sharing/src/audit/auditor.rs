//! Consistency auditor.

use super::{
    binomial,
    config::LARGE_SUBSET_COUNT,
    report::{AuditReport, Tally},
    AuditConfig, AuditError, Subsets,
};
use crate::protocol::{Shamir, ShamirError};
use math_lib::polynomial::{point::Point, point_sequence::PointSequence};
use rayon::iter::{ParallelBridge, ParallelIterator};
use tracing::{debug, info, warn};

/// A share whose removal makes the rest of the shares consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suspect {
    /// The position of the share in the audited input.
    pub index: usize,

    /// The share itself.
    pub point: Point,

    /// The secret every subset agrees on once the share is left out.
    pub secret: u64,
}

/// Reconstructs the secret from every `k`-sized subset of a set of shares and tallies the results.
///
/// With exactly `k` shares there is a single subset and the audit can't detect anything. Every extra share adds
/// redundancy that a corrupted share has to agree with.
#[derive(Clone, Debug)]
pub struct Auditor {
    shamir: Shamir,
    config: AuditConfig,
}

impl Auditor {
    /// Creates an auditor for the given session.
    pub fn new(shamir: Shamir, config: AuditConfig) -> Self {
        Self { shamir, config }
    }

    /// Evaluates every `k`-sized subset of `points` and builds the histogram of the secrets they reconstruct.
    ///
    /// Each subset is interpolated as is, there is no further random sampling involved.
    pub fn audit(&self, points: &[Point]) -> Result<AuditReport, AuditError> {
        self.shamir.validate_points(points)?;
        let threshold = self.shamir.threshold();
        let subsets = self.subset_count(points.len())?;
        debug!(points = points.len(), threshold, subsets, parallel = self.config.parallel, "auditing shares");

        let enumeration = Subsets::new(points, threshold).enumerate();
        let tally = if self.config.parallel {
            enumeration
                .par_bridge()
                .try_fold(Tally::default, |mut tally, (index, subset)| {
                    tally.record(self.evaluate(&subset)?, index);
                    Ok::<_, ShamirError>(tally)
                })
                .try_reduce(Tally::default, |left, right| Ok(left.merge(right)))?
        } else {
            let mut tally = Tally::default();
            for (index, subset) in enumeration {
                tally.record(self.evaluate(&subset)?, index);
            }
            tally
        };

        let report = AuditReport::from_tally(tally).ok_or(AuditError::NoSubsets)?;
        if report.is_consistent() {
            debug!(secret = report.best_guess(), "shares are consistent");
        } else {
            warn!(
                best_guess = report.best_guess(),
                candidates = report.histogram().len(),
                unique = report.has_unique_winner(),
                "shares are inconsistent"
            );
        }
        Ok(report)
    }

    /// Finds the shares whose removal leaves a consistent set.
    ///
    /// Every share is left out in turn and the remaining ones are audited, so this costs `len` audits. At least
    /// `k + 1` shares are needed for the remaining ones to be auditable.
    pub fn locate_suspects(&self, points: &[Point]) -> Result<Vec<Suspect>, AuditError> {
        self.shamir.validate_points(points)?;
        let threshold = self.shamir.threshold();
        let remaining = points.len().saturating_sub(1);
        if remaining < threshold {
            return Err(ShamirError::InsufficientShares { threshold, provided: remaining }.into());
        }

        let mut suspects = Vec::new();
        for (index, point) in points.iter().enumerate() {
            let others: Vec<Point> =
                points.iter().enumerate().filter(|(other, _)| *other != index).map(|(_, other)| *other).collect();
            let report = self.audit(&others)?;
            if report.is_consistent() {
                info!(index, x = point.x(), y = point.y(), secret = report.best_guess(), "found suspect share");
                suspects.push(Suspect { index, point: *point, secret: report.best_guess() });
            }
        }
        Ok(suspects)
    }

    fn evaluate(&self, subset: &PointSequence) -> Result<u64, ShamirError> {
        self.shamir.interpolate(subset)
    }

    fn subset_count(&self, points: usize) -> Result<u64, AuditError> {
        let threshold = self.shamir.threshold();
        let subsets = binomial(points, threshold).ok_or(AuditError::SubsetCountOverflow { points, threshold })?;
        if let Some(limit) = self.config.max_subsets {
            if subsets > limit {
                return Err(AuditError::TooManySubsets { subsets, limit });
            }
        }
        if subsets > LARGE_SUBSET_COUNT {
            warn!(subsets, "auditing a large number of subsets");
        }
        Ok(subsets)
    }
}
