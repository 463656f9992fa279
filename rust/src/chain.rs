//! Greedy chain builder.
//!
//! Walks one participant's chain of passes: in each round the current holder
//! sends to the first candidate it has not sent to before, and that recipient
//! becomes the holder for the next round. First-fit, no backtracking.

use crate::history::PairingHistory;
use crate::models::{Chain, SendEvent};
use crate::roster::ParticipantId;
use crate::{log_checks, log_debug};

/// Build the chain starting at `start`.
///
/// `candidates` is the visiting order (the generator passes a fresh random
/// permutation of everyone except `start`). Each hop removes its recipient
/// from the candidates, so recursion depth is bounded by
/// `min(candidates.len(), rounds_remaining)`.
///
/// Every hop is recorded in `history`. A dead end (no unused recipient left)
/// truncates the chain; it is logged, not reported as an error.
pub fn build_chain(
    start: ParticipantId,
    candidates: &[ParticipantId],
    history: &mut PairingHistory,
    rounds_remaining: usize,
    verbosity: u8,
) -> Chain {
    if candidates.is_empty() || rounds_remaining == 0 {
        return Chain::empty();
    }

    let Some(pos) = candidates.iter().position(|&to| !history.has_sent(start, to)) else {
        log_checks!(
            verbosity,
            "    dead end at {} with {} round(s) unfilled",
            start,
            rounds_remaining
        );
        return Chain::empty();
    };

    let to = candidates[pos];
    log_debug!(verbosity, "    hop {} -> {}", start, to);
    history.record(start, to);

    let remaining: Vec<ParticipantId> = candidates
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pos)
        .map(|(_, &id)| id)
        .collect();

    build_chain(to, &remaining, history, rounds_remaining - 1, verbosity)
        .prepend(SendEvent::new(start, to))
}
