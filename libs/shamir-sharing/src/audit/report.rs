//! Audit results.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// The votes a candidate secret received.
#[derive(Clone, Copy, Debug)]
struct Vote {
    count: u64,
    first_seen: usize,
}

/// Running tally of the secret each subset reconstructed.
#[derive(Default, Debug)]
pub(crate) struct Tally {
    votes: FxHashMap<u64, Vote>,
}

impl Tally {
    /// Records the secret reconstructed by the subset at position `index` in the enumeration.
    pub(crate) fn record(&mut self, candidate: u64, index: usize) {
        let vote = self.votes.entry(candidate).or_insert(Vote { count: 0, first_seen: index });
        vote.count = vote.count.saturating_add(1);
        vote.first_seen = vote.first_seen.min(index);
    }

    /// Combines two partial tallies.
    pub(crate) fn merge(mut self, other: Tally) -> Tally {
        for (candidate, other_vote) in other.votes {
            self.votes
                .entry(candidate)
                .and_modify(|vote| {
                    vote.count = vote.count.saturating_add(other_vote.count);
                    vote.first_seen = vote.first_seen.min(other_vote.first_seen);
                })
                .or_insert(other_vote);
        }
        self
    }
}

/// The way an audit concluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditOutcome {
    /// Every subset reconstructed this secret.
    Consistent(u64),

    /// Subsets disagree but this secret has strictly more votes than any other.
    Majority(u64),

    /// Several secrets share the highest number of votes, in order of first appearance.
    Tie(Vec<u64>),
}

/// The result of auditing a set of shares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditReport {
    best_guess: u64,
    is_consistent: bool,
    histogram: BTreeMap<u64, u64>,
    subsets_evaluated: u64,
    leaders: Vec<u64>,
}

impl AuditReport {
    /// Builds the report out of a tally, `None` if nothing was tallied.
    pub(crate) fn from_tally(tally: Tally) -> Option<Self> {
        let top = tally.votes.values().map(|vote| vote.count).max()?;
        let mut leaders: Vec<_> = tally
            .votes
            .iter()
            .filter(|(_, vote)| vote.count == top)
            .map(|(candidate, vote)| (vote.first_seen, *candidate))
            .collect();
        leaders.sort_unstable();
        let leaders: Vec<u64> = leaders.into_iter().map(|(_, candidate)| candidate).collect();
        let best_guess = *leaders.first()?;

        let histogram: BTreeMap<u64, u64> =
            tally.votes.into_iter().map(|(candidate, vote)| (candidate, vote.count)).collect();
        let subsets_evaluated = histogram.values().fold(0u64, |total, count| total.saturating_add(*count));
        let is_consistent = top == subsets_evaluated;
        Some(Self { best_guess, is_consistent, histogram, subsets_evaluated, leaders })
    }

    /// The secret reconstructed by the most subsets.
    ///
    /// On a tie, this is the tied secret that appeared first in the subset enumeration. Use [AuditReport::leaders]
    /// or [AuditReport::outcome] to tell ties apart.
    pub fn best_guess(&self) -> u64 {
        self.best_guess
    }

    /// Whether every subset reconstructed the same secret.
    pub fn is_consistent(&self) -> bool {
        self.is_consistent
    }

    /// The number of subsets that reconstructed each candidate secret.
    pub fn histogram(&self) -> &BTreeMap<u64, u64> {
        &self.histogram
    }

    /// The number of subsets evaluated.
    pub fn subsets_evaluated(&self) -> u64 {
        self.subsets_evaluated
    }

    /// The candidates sharing the highest count, in order of first appearance.
    pub fn leaders(&self) -> &[u64] {
        &self.leaders
    }

    /// Whether a single candidate has the highest count.
    pub fn has_unique_winner(&self) -> bool {
        self.leaders.len() == 1
    }

    /// Classifies the result.
    pub fn outcome(&self) -> AuditOutcome {
        if self.is_consistent {
            AuditOutcome::Consistent(self.best_guess)
        } else if self.has_unique_winner() {
            AuditOutcome::Majority(self.best_guess)
        } else {
            AuditOutcome::Tie(self.leaders.clone())
        }
    }
}
