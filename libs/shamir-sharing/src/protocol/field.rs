//! Field selection.

use super::{ShamirError, ThresholdConfig};
use math_lib::modular::Modulus;
use tracing::debug;

/// Selects the smallest prime greater than both the secret and the share count.
///
/// The secret must be representable in the field and there must be at least `n` non-zero abscissas to hand out,
/// so `p > s` and `p > n` both need to hold.
pub fn select_prime(secret: u64, config: &ThresholdConfig) -> Result<Modulus, ShamirError> {
    config.validate()?;
    let share_count = u64::try_from(config.share_count).map_err(|_| ShamirError::Arithmetic)?;
    let modulus = Modulus::next_above(secret.max(share_count))?;
    debug!(%modulus, "selected prime modulus");
    Ok(modulus)
}
