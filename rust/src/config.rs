//! Configuration types for schedule search.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Try budget used when the caller does not pick one.
pub const DEFAULT_MAX_TRIES: usize = 2000;

/// Errors raised while parsing configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown cap key: {0:?} (expected \"recipient\" or \"sender\")")]
    UnknownCapKey(String),
}

/// Which side of a send event the per-round submission cap counts.
///
/// `Recipient` limits how often one participant is contacted in a round.
/// `Sender` groups by the sending participant, which with unique ids can only
/// exceed 1 when a participant is handed the pass in several chains at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CapKey {
    #[default]
    Recipient,
    Sender,
}

impl FromStr for CapKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recipient" | "to" => Ok(Self::Recipient),
            "sender" | "from" => Ok(Self::Sender),
            _ => Err(ConfigError::UnknownCapKey(s.to_string())),
        }
    }
}

impl fmt::Display for CapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recipient => write!(f, "recipient"),
            Self::Sender => write!(f, "sender"),
        }
    }
}

/// Configuration for the best-of-N search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of rounds (weeks) to fill.
    pub rounds: usize,
    /// Maximum per-round tally a candidate may have to be accepted.
    pub submission_cap: usize,
    /// Number of candidates to generate before giving up.
    pub max_tries: usize,
    /// Grouping key for the submission cap.
    pub cap_key: CapKey,
    /// Verbosity level: 0=silent, 1=progress, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rounds: 6,
            submission_cap: 2,
            max_tries: DEFAULT_MAX_TRIES,
            cap_key: CapKey::Recipient,
            verbosity: 0,
        }
    }
}

impl SearchConfig {
    /// Default configuration for the given rounds and cap.
    pub fn new(rounds: usize, submission_cap: usize) -> Self {
        Self {
            rounds,
            submission_cap,
            ..Self::default()
        }
    }

    /// Sentinel larger than any achievable missing count for `participants`.
    pub fn missing_sentinel(&self, participants: usize) -> usize {
        self.rounds * participants + 1
    }
}
