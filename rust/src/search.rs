//! Best-of-N randomized search over generated schedules.
//!
//! Each try generates a fresh candidate (fresh history, fresh visiting orders)
//! and keeps it if it strictly reduces the missing count while staying within
//! the submission cap. The loop ends on the first perfect candidate or when
//! the try budget runs out.

use crate::config::SearchConfig;
use crate::generator::{generate_schedule, VisitOrder};
use crate::models::Schedule;
use crate::quality::{evaluate, QualityScore};
use crate::roster::ParticipantId;
use crate::{log_checks, log_progress};

/// A schedule together with its score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub schedule: Schedule,
    pub score: QualityScore,
}

/// How the search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every participant fills every round, within the cap.
    Perfect(Candidate),
    /// Best candidate within the cap, with some rounds unfilled.
    BestEffort(Candidate),
    /// No candidate satisfied the cap within the try budget.
    NoneQualified,
}

impl SearchOutcome {
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Perfect(c) | Self::BestEffort(c) => Some(c),
            Self::NoneQualified => None,
        }
    }

    pub fn into_candidate(self) -> Option<Candidate> {
        match self {
            Self::Perfect(c) | Self::BestEffort(c) => Some(c),
            Self::NoneQualified => None,
        }
    }

    pub fn is_perfect(&self) -> bool {
        matches!(self, Self::Perfect(_))
    }

    /// Short status label for callers that render the outcome.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Perfect(_) => "perfect",
            Self::BestEffort(_) => "best_effort",
            Self::NoneQualified => "none_found",
        }
    }
}

/// A candidate accepted as the new best.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Improvement {
    /// Zero-based try on which the candidate was generated.
    pub try_index: usize,
    pub missing: usize,
}

/// Result of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Candidates actually generated.
    pub tries: usize,
    /// Every accepted candidate, in order. Missing counts strictly decrease.
    pub improvements: Vec<Improvement>,
}

/// Run the best-of-N search for participants `ids`.
pub fn search<O: VisitOrder + ?Sized>(
    ids: &[ParticipantId],
    config: &SearchConfig,
    order: &mut O,
) -> SearchReport {
    let verbosity = config.verbosity;
    let mut best_missing = config.missing_sentinel(ids.len());
    let mut best: Option<Candidate> = None;
    let mut improvements = Vec::new();
    let mut tries = 0;

    while tries < config.max_tries && best_missing > 0 {
        let schedule = generate_schedule(ids, config.rounds, order, verbosity);
        let score = evaluate(&schedule, config.rounds, config.cap_key);

        if score.missing < best_missing && score.within_cap(config.submission_cap) {
            log_progress!(
                verbosity,
                "try {}: new best missing={} max_per_round={}",
                tries,
                score.missing,
                score.max_per_round
            );
            best_missing = score.missing;
            improvements.push(Improvement {
                try_index: tries,
                missing: score.missing,
            });
            best = Some(Candidate { schedule, score });
        } else {
            log_checks!(
                verbosity,
                "try {}: rejected missing={} max_per_round={} (best {}, cap {})",
                tries,
                score.missing,
                score.max_per_round,
                best_missing,
                config.submission_cap
            );
        }
        tries += 1;
    }

    let outcome = match best {
        Some(c) if c.score.is_perfect() => SearchOutcome::Perfect(c),
        Some(c) => SearchOutcome::BestEffort(c),
        None => SearchOutcome::NoneQualified,
    };
    log_progress!(
        verbosity,
        "search finished after {} tries: {}",
        tries,
        outcome.status()
    );

    SearchReport {
        outcome,
        tries,
        improvements,
    }
}
