//! Shamir Secret Sharing Protocol

use super::{config::validate_threshold, ShamirError, ThresholdConfig};
use math_lib::{
    modular::{ModularNumber, Modulus},
    polynomial::{point::Point, point_sequence::PointSequence, Polynomial},
};
use rand::{seq::SliceRandom, Rng};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Shamir Secret Sharing Protocol
///
/// A session is fully described by its threshold and its prime modulus. Both must be the same on the distribution
/// and the recovery side, nothing in the shares themselves allows detecting a mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shamir {
    /// The minimum number of shares needed to recover a secret.
    pub(crate) threshold: usize,

    /// The prime defining the field.
    pub(crate) modulus: Modulus,
}

impl Shamir {
    /// Creates a new Shamir Secret Sharing Protocol.
    pub fn new(threshold: usize, modulus: Modulus) -> Result<Self, ShamirError> {
        validate_threshold(threshold)?;
        Ok(Self { threshold, modulus })
    }

    /// Creates a protocol out of a raw prime number, checking it is actually prime.
    pub fn with_prime(threshold: usize, prime: u64) -> Result<Self, ShamirError> {
        let modulus = Modulus::new(prime)?;
        Self::new(threshold, modulus)
    }

    /// The minimum number of shares needed to recover a secret.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The prime modulus.
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Generates a random polynomial of degree exactly `k - 1` whose constant term is the secret.
    ///
    /// The leading coefficient is drawn from `[1, p)` so the degree is preserved, the ones in between from `[0, p)`.
    pub fn generate_polynomial<R: Rng + ?Sized>(&self, secret: u64, rng: &mut R) -> Result<Polynomial, ShamirError> {
        self.check_bound(secret)?;
        let leading = ModularNumber::gen_random_non_zero_with_rng(self.modulus, rng);
        let mut polynomial = Polynomial::new(self.modulus, Vec::with_capacity(self.threshold));
        polynomial.add_coefficient(ModularNumber::new(secret, self.modulus));
        for _ in 2..self.threshold {
            polynomial.add_coefficient(ModularNumber::gen_random_with_rng(self.modulus, rng));
        }
        polynomial.add_coefficient(leading);
        Ok(polynomial)
    }

    /// Generate the Shares from a secret.
    ///
    /// The abscissas are `share_count` distinct values sampled from `[1, p)`. Zero is never handed out as its
    /// ordinate is the secret itself. The polynomial is dropped once the shares are evaluated.
    pub fn generate_shares<R: Rng + ?Sized>(
        &self,
        secret: u64,
        share_count: usize,
        rng: &mut R,
    ) -> Result<PointSequence, ShamirError> {
        ThresholdConfig::new(self.threshold, share_count)?;
        let share_count_value = u64::try_from(share_count).map_err(|_| ShamirError::Arithmetic)?;
        self.check_bound(share_count_value)?;
        let polynomial = self.generate_polynomial(secret, rng)?;

        let non_zero_elements = self.modulus.value().checked_sub(1).ok_or(ShamirError::Arithmetic)?;
        let non_zero_elements = usize::try_from(non_zero_elements).map_err(|_| ShamirError::Arithmetic)?;
        let indices = rand::seq::index::sample(rng, non_zero_elements, share_count);

        let mut shares = PointSequence::default();
        for index in indices.iter() {
            let x = u64::try_from(index).map_err(|_| ShamirError::Arithmetic)?;
            let x = x.checked_add(1).ok_or(ShamirError::Arithmetic)?;
            let y = polynomial.eval_at(x);
            shares.push(Point::new(x, y.value()));
        }
        debug!(share_count, threshold = self.threshold, modulus = %self.modulus, "generated shares");
        Ok(shares)
    }

    /// Checks the preconditions every recovery shares.
    ///
    /// There must be at least `k` points, every abscissa must be non-zero and unique, and both coordinates of
    /// every point must be canonical field elements.
    pub fn validate_points(&self, points: &[Point]) -> Result<(), ShamirError> {
        if points.len() < self.threshold {
            return Err(ShamirError::InsufficientShares { threshold: self.threshold, provided: points.len() });
        }
        let mut abscissas = FxHashSet::default();
        for point in points {
            if point.x() == 0 || !abscissas.insert(point.x()) {
                return Err(ShamirError::DuplicateOrZeroCoordinate(point.x()));
            }
            self.check_bound(point.x())?;
            self.check_bound(point.y())?;
        }
        Ok(())
    }

    /// Recovers the secret from a random subset of exactly `k` of the given points.
    ///
    /// When exactly `k` points are provided there is a single subset and the result is deterministic.
    pub fn reconstruct<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> Result<u64, ShamirError> {
        self.validate_points(points)?;
        let subset: PointSequence = points.choose_multiple(rng, self.threshold).copied().collect();
        self.interpolate(&subset)
    }

    /// Recovers the secret by interpolating through every given point.
    pub fn recover_secret(&self, points: &[Point]) -> Result<u64, ShamirError> {
        self.validate_points(points)?;
        let sequence: PointSequence = points.iter().copied().collect();
        self.interpolate(&sequence)
    }

    /// Interpolates at zero without validating the points again.
    pub(crate) fn interpolate(&self, sequence: &PointSequence) -> Result<u64, ShamirError> {
        let secret = sequence.lagrange_interpolate(self.modulus)?;
        Ok(secret.value())
    }

    fn check_bound(&self, value: u64) -> Result<(), ShamirError> {
        if !self.modulus.contains(value) {
            return Err(ShamirError::ModulusTooSmall { modulus: self.modulus.value(), value });
        }
        Ok(())
    }
}
