//! The operations behind each subcommand.

use crate::config::{RecoverConfig, SplitConfig};
use anyhow::{Context, Result};
use math_lib::{modular::Modulus, polynomial::point::Point};
use rand::Rng;
use shamir_sharing::{select_prime, AuditReport, Auditor, Shamir, Suspect, ThresholdRisk};
use tracing::{info, warn};

/// The shares produced by a split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOutput {
    /// The prime the shares live in. Needed again for reconstruction.
    pub modulus: Modulus,

    /// The rating of the threshold parameters.
    pub risk: ThresholdRisk,

    /// The shares.
    pub shares: Vec<Point>,
}

/// The result of auditing a set of shares.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    /// The tally of every subset.
    pub report: AuditReport,

    /// The shares whose removal makes the rest consistent. Only searched for when the shares disagree and there
    /// are enough of them.
    pub suspects: Vec<Suspect>,
}

/// Splits the configured secret into shares.
pub fn split<R: Rng + ?Sized>(config: &SplitConfig, rng: &mut R) -> Result<SplitOutput> {
    let secret = config.secret.resolve(config.non_integer)?;
    config.threshold.validate().context("invalid threshold parameters")?;

    let risk = config.threshold.assess();
    match risk {
        ThresholdRisk::Exposed => {
            warn!(share_count = config.threshold.share_count, "threshold is at most 30% of the shares")
        }
        ThresholdRisk::Fragile => {
            warn!(share_count = config.threshold.share_count, "losing a few shares prevents recovery")
        }
        ThresholdRisk::Balanced => info!("threshold parameters look balanced"),
    }

    let modulus = match config.prime {
        Some(modulus) => modulus,
        None => select_prime(secret, &config.threshold).context("selecting prime")?,
    };
    info!(prime = %modulus, "sharing secret");

    let shamir = Shamir::new(config.threshold.threshold, modulus)?;
    let shares = shamir.generate_shares(secret, config.threshold.share_count, rng).context("generating shares")?;
    Ok(SplitOutput { modulus, risk, shares: shares.into_points() })
}

/// Recovers the secret out of a random subset of the configured shares.
pub fn reconstruct<R: Rng + ?Sized>(config: &RecoverConfig, rng: &mut R) -> Result<u64> {
    let shamir = Shamir::new(config.threshold, config.prime)?;
    shamir.reconstruct(&config.shares, rng).context("reconstruction failed")
}

/// Audits the configured shares, looking for the corrupted ones if they disagree.
pub fn audit(config: &RecoverConfig) -> Result<AuditOutput> {
    let shamir = Shamir::new(config.threshold, config.prime)?;
    let auditor = Auditor::new(shamir, config.audit);
    let report = auditor.audit(&config.shares).context("audit failed")?;
    let suspects = if !report.is_consistent() && config.shares.len() > config.threshold {
        auditor.locate_suspects(&config.shares).context("locating suspects")?
    } else {
        Vec::new()
    };
    Ok(AuditOutput { report, suspects })
}

/// Renders shares as `x,y` pairs separated by `;`.
pub fn format_shares(shares: &[Point]) -> String {
    shares.iter().map(|share| format!("{},{}", share.x(), share.y())).collect::<Vec<_>>().join(";")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use shamir_sharing::AuditOutcome;

    const TAMPERED: &str = r#"
prime: 127
threshold: 3
shares:
  - { x: 1, y: 1 }
  - { x: 2, y: 10 }
  - { x: 3, y: 24 }
  - { x: 4, y: 40 }
  - { x: 5, y: 61 }
"#;

    fn recover_config(shares: &[Point], prime: Modulus, threshold: usize) -> RecoverConfig {
        let shares: String =
            shares.iter().map(|share| format!("  - {{ x: \"{}\", y: \"{}\" }}\n", share.x(), share.y())).collect();
        let document = format!("prime: \"{}\"\nthreshold: {threshold}\nshares:\n{shares}", prime.value());
        RecoverConfig::from_yaml(&document).unwrap()
    }

    #[test]
    fn split_then_reconstruct() {
        let config = SplitConfig::from_yaml("secret: 123\nthreshold: 3\nshare_count: 5\n").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let output = split(&config, &mut rng).unwrap();
        assert_eq!(output.modulus.value(), 127);
        assert_eq!(output.risk, ThresholdRisk::Fragile);
        assert_eq!(output.shares.len(), 5);

        let recover = recover_config(&output.shares, output.modulus, 3);
        assert_eq!(reconstruct(&recover, &mut rng).unwrap(), 123);

        let audited = audit(&recover).unwrap();
        assert_eq!(audited.report.outcome(), AuditOutcome::Consistent(123));
        assert!(audited.suspects.is_empty());
    }

    #[test]
    fn split_with_explicit_prime() {
        let config = SplitConfig::from_yaml("secret: 4321\nthreshold: 4\nshare_count: 20\nprime: 7919\n").unwrap();
        let output = split(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(output.modulus.value(), 7919);
        assert_eq!(output.risk, ThresholdRisk::Exposed);
        assert_eq!(output.shares.len(), 20);
    }

    #[test]
    fn split_rejects_small_prime() {
        let config = SplitConfig::from_yaml("secret: 500\nthreshold: 2\nshare_count: 3\nprime: 13\n").unwrap();
        assert!(split(&config, &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn split_rejects_fractional_secret() {
        let config = SplitConfig::from_yaml("secret: 6.5\nthreshold: 2\nshare_count: 3\n").unwrap();
        assert!(split(&config, &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn split_rejects_bad_threshold() {
        let config = SplitConfig::from_yaml("secret: 5\nthreshold: 4\nshare_count: 3\n").unwrap();
        assert!(split(&config, &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn audit_tampered_shares() {
        let config = RecoverConfig::from_yaml(TAMPERED).unwrap();
        let output = audit(&config).unwrap();
        assert_eq!(output.report.outcome(), AuditOutcome::Majority(123));
        assert_eq!(output.suspects.len(), 1);
        assert_eq!(output.suspects[0].index, 2);
        assert_eq!(output.suspects[0].point, Point::new(3, 24));
    }

    #[test]
    fn format() {
        let shares = [Point::new(1, 2), Point::new(3, 4)];
        assert_eq!(format_shares(&shares), "1,2;3,4");
        assert_eq!(format_shares(&[]), "");
    }
}
