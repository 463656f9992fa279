//! Schedule generation: one chain per participant over a shared history.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::chain::build_chain;
use crate::history::PairingHistory;
use crate::log_debug;
use crate::models::Schedule;
use crate::roster::ParticipantId;

/// Source of visiting orders for the chain builder.
///
/// The generator asks for one arrangement of "everyone else" per participant.
/// Production code shuffles; tests can script exact orders.
pub trait VisitOrder {
    /// Reorder `candidates` in place.
    fn arrange(&mut self, candidates: &mut [ParticipantId]);
}

impl<T: VisitOrder + ?Sized> VisitOrder for &mut T {
    fn arrange(&mut self, candidates: &mut [ParticipantId]) {
        (**self).arrange(candidates);
    }
}

/// Uniformly random permutations drawn from an RNG.
#[derive(Clone, Debug)]
pub struct ShuffledOrder<R> {
    rng: R,
}

impl<R: Rng> ShuffledOrder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ShuffledOrder<StdRng> {
    /// Reproducible orders for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> VisitOrder for ShuffledOrder<R> {
    fn arrange(&mut self, candidates: &mut [ParticipantId]) {
        candidates.shuffle(&mut self.rng);
    }
}

/// Generate one candidate schedule.
///
/// Participants are processed in the order of `ids`; each gets a chain built
/// from a fresh arrangement of the others. The pairing history is shared
/// across all chains, so earlier participants constrain later ones.
pub fn generate_schedule<O: VisitOrder + ?Sized>(
    ids: &[ParticipantId],
    rounds: usize,
    order: &mut O,
    verbosity: u8,
) -> Schedule {
    let mut history = PairingHistory::for_participants(ids);

    let chains = ids
        .iter()
        .map(|&start| {
            let mut others: Vec<ParticipantId> =
                ids.iter().copied().filter(|&id| id != start).collect();
            order.arrange(&mut others);
            log_debug!(verbosity, "  chain from {}", start);
            build_chain(start, &others, &mut history, rounds, verbosity)
        })
        .collect();

    Schedule::new(chains)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::SendEvent;
    use rustc_hash::FxHashSet;
    use std::collections::VecDeque;

    const A: ParticipantId = ParticipantId(1);
    const B: ParticipantId = ParticipantId(2);
    const C: ParticipantId = ParticipantId(3);

    /// Hands out pre-set arrangements; falls back to the given order when empty.
    pub(crate) struct ScriptedOrder {
        script: VecDeque<Vec<ParticipantId>>,
    }

    impl ScriptedOrder {
        pub(crate) fn new(script: Vec<Vec<ParticipantId>>) -> Self {
            Self {
                script: script.into(),
            }
        }
    }

    impl VisitOrder for ScriptedOrder {
        fn arrange(&mut self, candidates: &mut [ParticipantId]) {
            if let Some(next) = self.script.pop_front() {
                assert_eq!(next.len(), candidates.len(), "script length mismatch");
                candidates.copy_from_slice(&next);
            }
        }
    }

    fn ev(from: ParticipantId, to: ParticipantId) -> SendEvent {
        SendEvent::new(from, to)
    }

    fn ids(n: u32) -> Vec<ParticipantId> {
        (1..=n).map(ParticipantId).collect()
    }

    #[test]
    fn test_shared_history_blocks_repeat_across_chains() {
        // A's chain uses B -> C; B's own chain must not reuse B -> C.
        let mut order = ScriptedOrder::new(vec![vec![B, C], vec![C, A], vec![A, B]]);
        let schedule = generate_schedule(&[A, B, C], 2, &mut order, 0);

        assert_eq!(schedule.chains()[0].events(), &[ev(A, B), ev(B, C)]);
        assert_eq!(schedule.chains()[1].events(), &[ev(B, A), ev(A, C)]);
        // C -> A then A has used B and C already: dead end after one hop.
        assert_eq!(schedule.chains()[2].events(), &[ev(C, A)]);
    }

    #[test]
    fn test_second_occurrence_falls_to_dead_end() {
        // B's only candidates are C (already used via A's chain) then A.
        let mut order = ScriptedOrder::new(vec![vec![B, C], vec![C, A], vec![B, A]]);
        let schedule = generate_schedule(&[A, B, C], 2, &mut order, 0);
        let b_chain = &schedule.chains()[1];
        assert_ne!(b_chain.event_at(0), Some(&ev(B, C)));
        assert_eq!(b_chain.event_at(0), Some(&ev(B, A)));
    }

    #[test]
    fn test_one_chain_per_participant_in_roster_order() {
        let roster = ids(6);
        let mut order = ShuffledOrder::seeded(7);
        let schedule = generate_schedule(&roster, 4, &mut order, 0);
        assert_eq!(schedule.len(), 6);
        for (chain, &id) in schedule.chains().iter().zip(&roster) {
            if let Some(origin) = chain.origin() {
                assert_eq!(origin, id);
            }
        }
    }

    #[test]
    fn test_invariants_hold_over_many_seeds() {
        let roster = ids(7);
        for seed in 0..200 {
            let mut order = ShuffledOrder::seeded(seed);
            let schedule = generate_schedule(&roster, 6, &mut order, 0);

            let mut pairs = FxHashSet::default();
            for chain in schedule.chains() {
                assert!(chain.len() <= 6.min(roster.len() - 1));
                for w in chain.events().windows(2) {
                    assert_eq!(w[0].to, w[1].from, "chain must pass along");
                }
                for e in chain.events() {
                    assert_ne!(e.from, e.to, "self pairing");
                    assert!(pairs.insert((e.from, e.to)), "repeated pairing {}", e);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let roster = ids(8);
        let a = generate_schedule(&roster, 5, &mut ShuffledOrder::seeded(42), 0);
        let b = generate_schedule(&roster, 5, &mut ShuffledOrder::seeded(42), 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_boundaries() {
        let mut order = ShuffledOrder::seeded(1);
        assert!(generate_schedule(&[], 3, &mut order, 0).is_empty());

        let single = generate_schedule(&[A], 3, &mut order, 0);
        assert_eq!(single.len(), 1);
        assert!(single.chains()[0].is_empty());

        let no_rounds = generate_schedule(&ids(5), 0, &mut order, 0);
        assert_eq!(no_rounds.len(), 5);
        assert!(no_rounds.chains().iter().all(|c| c.is_empty()));
    }
}
