//! Pairing history: who has already sent to whom in the schedule being built.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::roster::ParticipantId;

/// Per-participant set of recipients already used.
///
/// One history lives for exactly one schedule-generation pass. It is threaded
/// by `&mut` through every chain built in that pass, in roster order, so a pair
/// recorded while building one participant's chain blocks it for all later
/// chains too.
#[derive(Clone, Debug, Default)]
pub struct PairingHistory {
    sent: FxHashMap<ParticipantId, FxHashSet<ParticipantId>>,
}

impl PairingHistory {
    /// Empty sent-set for every participant.
    pub fn for_participants(ids: &[ParticipantId]) -> Self {
        let mut sent = FxHashMap::with_capacity_and_hasher(ids.len(), Default::default());
        for &id in ids {
            sent.insert(id, FxHashSet::default());
        }
        Self { sent }
    }

    #[inline]
    pub fn has_sent(&self, from: ParticipantId, to: ParticipantId) -> bool {
        self.sent.get(&from).is_some_and(|s| s.contains(&to))
    }

    /// Record `from → to`. Recording an existing pair is a no-op.
    pub fn record(&mut self, from: ParticipantId, to: ParticipantId) {
        self.sent.entry(from).or_default().insert(to);
    }

    /// Number of distinct recipients `from` has sent to.
    pub fn sent_count(&self, from: ParticipantId) -> usize {
        self.sent.get(&from).map_or(0, |s| s.len())
    }

    /// Total number of recorded pairs.
    pub fn pair_count(&self) -> usize {
        self.sent.values().map(|s| s.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ParticipantId = ParticipantId(1);
    const B: ParticipantId = ParticipantId(2);
    const C: ParticipantId = ParticipantId(3);

    #[test]
    fn test_fresh_history_is_empty() {
        let history = PairingHistory::for_participants(&[A, B, C]);
        assert!(!history.has_sent(A, B));
        assert_eq!(history.pair_count(), 0);
        assert_eq!(history.sent_count(C), 0);
    }

    #[test]
    fn test_record_is_directed() {
        let mut history = PairingHistory::for_participants(&[A, B, C]);
        history.record(A, B);
        assert!(history.has_sent(A, B));
        assert!(!history.has_sent(B, A));
        assert_eq!(history.sent_count(A), 1);
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut history = PairingHistory::for_participants(&[A, B]);
        history.record(A, B);
        history.record(A, B);
        assert_eq!(history.pair_count(), 1);
    }

    #[test]
    fn test_unknown_sender_is_tracked() {
        let mut history = PairingHistory::default();
        assert!(!history.has_sent(C, A));
        history.record(C, A);
        assert!(history.has_sent(C, A));
    }
}
