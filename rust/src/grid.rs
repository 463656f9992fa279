//! Table view of a schedule for the presentation layer.
//!
//! Rows are chains (one per participant), columns are rounds. Cells carry
//! names resolved through the roster plus a `flagged` marker for participants
//! over quota in that round.

use std::fmt;

use crate::config::CapKey;
use crate::models::Schedule;
use crate::quality::round_counts;
use crate::roster::{ParticipantId, Roster};

/// One filled cell of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// One-based round number.
    pub round: usize,
    pub from: ParticipantId,
    pub from_name: String,
    pub to: ParticipantId,
    pub to_name: String,
    /// The cap-key participant of this cell appears in more than one event this round.
    pub flagged: bool,
}

/// Rows of optional cells; `None` marks an unfilled round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleGrid {
    rounds: usize,
    rows: Vec<Vec<Option<GridCell>>>,
}

impl ScheduleGrid {
    /// Lay out `schedule` over `rounds` columns.
    ///
    /// Ids missing from the roster render by their id.
    pub fn build(schedule: &Schedule, roster: &Roster, rounds: usize, key: CapKey) -> Self {
        let counts: Vec<_> = (0..rounds)
            .map(|round| round_counts(schedule, round, key))
            .collect();
        let name = |id: ParticipantId| {
            roster
                .name_of(id)
                .map_or_else(|| id.to_string(), str::to_string)
        };

        let rows = schedule
            .chains()
            .iter()
            .map(|chain| {
                (0..rounds)
                    .map(|round| {
                        chain.event_at(round).map(|event| {
                            let keyed = match key {
                                CapKey::Recipient => event.to,
                                CapKey::Sender => event.from,
                            };
                            GridCell {
                                round: round + 1,
                                from: event.from,
                                from_name: name(event.from),
                                to: event.to,
                                to_name: name(event.to),
                                flagged: counts[round].get(&keyed).copied().unwrap_or(0) > 1,
                            }
                        })
                    })
                    .collect()
            })
            .collect();

        Self { rounds, rows }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn rows(&self) -> &[Vec<Option<GridCell>>] {
        &self.rows
    }

    /// Number of flagged cells.
    pub fn flagged_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .flatten()
            .filter(|c| c.flagged)
            .count()
    }
}

impl fmt::Display for ScheduleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(c) if c.flagged => format!("{}→{} !", c.from_name, c.to_name),
                        Some(c) => format!("{}→{}", c.from_name, c.to_name),
                        None => "-".to_string(),
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..self.rounds)
            .map(|round| {
                let header = format!("Week {}", round + 1).chars().count();
                labels
                    .iter()
                    .map(|row| row[round].chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header)
            })
            .collect();

        let header: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(round, &w)| format!("{:<w$}", format!("Week {}", round + 1)))
            .collect();
        writeln!(f, "{}", header.join(" | ").trim_end())?;

        for row in &labels {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(label, &w)| {
                    let pad = w.saturating_sub(label.chars().count());
                    format!("{}{}", label, " ".repeat(pad))
                })
                .collect();
            writeln!(f, "{}", cells.join(" | ").trim_end())?;
        }
        Ok(())
    }
}
