//! Weekly pass schedules: who sends to whom, round by round.
//!
//! Every participant starts a chain of passes; the recipient of one round
//! sends in the next. No participant sends to the same recipient twice in a
//! schedule. A greedy chain builder produces one candidate per run and a
//! best-of-N search keeps the candidate with the fewest unfilled rounds that
//! respects the per-round submission cap.
//!
//! ```
//! use pass_schedule::{search, Roster, SearchConfig, ShuffledOrder};
//!
//! let roster = Roster::with_size(5);
//! let config = SearchConfig::new(3, 2);
//! let report = search(&roster.ids(), &config, &mut ShuffledOrder::seeded(1));
//! if let Some(best) = report.outcome.candidate() {
//!     assert!(best.score.max_per_round <= 2);
//! }
//! ```

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

pub mod chain;
pub mod config;
pub mod generator;
pub mod grid;
pub mod history;
pub mod logging;
pub mod models;
pub mod quality;
pub mod roster;
pub mod search;

#[cfg(feature = "python")]
mod bindings;

pub use chain::build_chain;
pub use config::{CapKey, ConfigError, SearchConfig, DEFAULT_MAX_TRIES};
pub use generator::{generate_schedule, ShuffledOrder, VisitOrder};
pub use grid::{GridCell, ScheduleGrid};
pub use history::PairingHistory;
pub use models::{Chain, Schedule, SendEvent};
pub use quality::{evaluate, max_submissions_per_round, missing_count, QualityScore};
pub use roster::{Participant, ParticipantId, Roster, RosterError, DEFAULT_ROSTER_SIZE};
pub use search::{search, Candidate, Improvement, SearchOutcome, SearchReport};
