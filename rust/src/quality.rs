//! Scoring of candidate schedules.

use rustc_hash::FxHashMap;

use crate::config::CapKey;
use crate::models::{Schedule, SendEvent};
use crate::roster::ParticipantId;

/// Quality of one candidate (lower is better on both axes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualityScore {
    /// Unfilled (participant, round) slots.
    pub missing: usize,
    /// Largest per-round tally for a single participant under the cap key.
    pub max_per_round: usize,
}

impl QualityScore {
    pub fn is_perfect(&self) -> bool {
        self.missing == 0
    }

    pub fn within_cap(&self, cap: usize) -> bool {
        self.max_per_round <= cap
    }
}

/// Sum over chains of `rounds - chain length`.
pub fn missing_count(schedule: &Schedule, rounds: usize) -> usize {
    schedule
        .chains()
        .iter()
        .map(|c| rounds.saturating_sub(c.len()))
        .sum()
}

#[inline]
fn key_of(event: &SendEvent, key: CapKey) -> ParticipantId {
    match key {
        CapKey::Recipient => event.to,
        CapKey::Sender => event.from,
    }
}

/// Events per participant in one zero-based round, grouped by `key`.
pub fn round_counts(
    schedule: &Schedule,
    round: usize,
    key: CapKey,
) -> FxHashMap<ParticipantId, usize> {
    let mut counts: FxHashMap<ParticipantId, usize> = FxHashMap::default();
    for event in schedule.round_events(round) {
        *counts.entry(key_of(event, key)).or_insert(0) += 1;
    }
    counts
}

/// Maximum over all rounds of the largest per-participant group in that round.
///
/// Returns 0 for a schedule without events.
pub fn max_submissions_per_round(schedule: &Schedule, key: CapKey) -> usize {
    (0..schedule.depth())
        .filter_map(|round| round_counts(schedule, round, key).into_values().max())
        .max()
        .unwrap_or(0)
}

/// Score a candidate against the requested round count.
pub fn evaluate(schedule: &Schedule, rounds: usize, key: CapKey) -> QualityScore {
    QualityScore {
        missing: missing_count(schedule, rounds),
        max_per_round: max_submissions_per_round(schedule, key),
    }
}
