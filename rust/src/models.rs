//! Core data types for schedules.

use std::fmt;

use crate::roster::ParticipantId;

/// One round's assignment for `from`: `from` sends to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SendEvent {
    pub from: ParticipantId,
    pub to: ParticipantId,
}

impl SendEvent {
    pub fn new(from: ParticipantId, to: ParticipantId) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for SendEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}

/// A participant's path of passes across rounds.
///
/// Element `k` is the event for round `k + 1`; the recipient of one event is
/// the sender of the next. May be shorter than the requested round count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    events: Vec<SendEvent>,
}

impl Chain {
    pub fn new(events: Vec<SendEvent>) -> Self {
        Self { events }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Prepend an event, used while unwinding the chain recursion.
    pub(crate) fn prepend(mut self, event: SendEvent) -> Self {
        self.events.insert(0, event);
        self
    }

    pub fn events(&self) -> &[SendEvent] {
        &self.events
    }

    /// Event for a zero-based round index, if the chain reaches that round.
    pub fn event_at(&self, round: usize) -> Option<&SendEvent> {
        self.events.get(round)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Participant that starts this chain.
    pub fn origin(&self) -> Option<ParticipantId> {
        self.events.first().map(|e| e.from)
    }
}

/// One candidate solution: a chain per roster participant, in roster order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    chains: Vec<Chain>,
}

impl Schedule {
    pub fn new(chains: Vec<Chain>) -> Self {
        Self { chains }
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Number of chains (one per participant).
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Length of the longest chain, i.e. the number of rounds with any event.
    pub fn depth(&self) -> usize {
        self.chains.iter().map(Chain::len).max().unwrap_or(0)
    }

    /// All events in one zero-based round, taken from every chain that reaches it.
    pub fn round_events(&self, round: usize) -> impl Iterator<Item = &SendEvent> + '_ {
        self.chains.iter().filter_map(move |c| c.event_at(round))
    }

    /// Every event in the schedule, chain by chain.
    pub fn events(&self) -> impl Iterator<Item = &SendEvent> + '_ {
        self.chains.iter().flat_map(|c| c.events().iter())
    }
}
