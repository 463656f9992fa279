//! Participants and the roster that owns them.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Roster size used when the caller does not pick one.
pub const DEFAULT_ROSTER_SIZE: usize = 7;

/// Stable participant identifier, unique within a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant: fixed identity, editable display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Errors raised while building or editing a roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(ParticipantId),
    #[error("Unknown participant id: {0}")]
    UnknownParticipant(ParticipantId),
}

/// Ordered collection of participants.
///
/// Order matters: the schedule generator processes participants in roster
/// order, and earlier participants get first pick of unused pairings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

fn default_name(id: u32) -> String {
    format!("Participant {}", id)
}

impl Roster {
    /// Create `size` participants with ids `1..=size` and default names.
    pub fn with_size(size: usize) -> Self {
        let participants = (1..=size as u32)
            .map(|n| Participant::new(ParticipantId(n), default_name(n)))
            .collect();
        Self { participants }
    }

    /// Create participants with ids `1..=names.len()` carrying the given names.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let participants = names
            .into_iter()
            .zip(1u32..)
            .map(|(name, n)| Participant::new(ParticipantId(n), name))
            .collect();
        Self { participants }
    }

    /// Build a roster from caller-supplied participants, rejecting duplicate ids.
    pub fn from_participants(participants: Vec<Participant>) -> Result<Self, RosterError> {
        let mut seen = FxHashSet::with_capacity_and_hasher(participants.len(), Default::default());
        for p in &participants {
            if !seen.insert(p.id) {
                return Err(RosterError::DuplicateParticipant(p.id));
            }
        }
        Ok(Self { participants })
    }

    /// Change a display name. Identity and any pairing history are unaffected.
    pub fn rename(&mut self, id: ParticipantId, name: impl Into<String>) -> Result<(), RosterError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RosterError::UnknownParticipant(id))?;
        participant.name = name.into();
        Ok(())
    }

    /// Grow or shrink to `size`, keeping existing participants in place.
    ///
    /// New participants get the next free ids above the current maximum.
    pub fn resize(&mut self, size: usize) {
        if size <= self.participants.len() {
            self.participants.truncate(size);
            return;
        }
        let mut next = self.participants.iter().map(|p| p.id.0).max().unwrap_or(0);
        while self.participants.len() < size {
            next += 1;
            self.participants
                .push(Participant::new(ParticipantId(next), default_name(next)));
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Participant ids in roster order.
    pub fn ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Display name for an id, if the id belongs to this roster.
    pub fn name_of(&self, id: ParticipantId) -> Option<&str> {
        self.get(id).map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_assigns_sequential_ids() {
        let roster = Roster::with_size(3);
        assert_eq!(
            roster.ids(),
            vec![ParticipantId(1), ParticipantId(2), ParticipantId(3)]
        );
        assert_eq!(roster.name_of(ParticipantId(2)), Some("Participant 2"));
        assert!(Roster::with_size(0).is_empty());
    }

    #[test]
    fn test_from_names_allows_duplicate_names() {
        let roster = Roster::from_names(["Ann", "Ann", "Bo"]);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.name_of(ParticipantId(1)), Some("Ann"));
        assert_eq!(roster.name_of(ParticipantId(2)), Some("Ann"));
        assert_ne!(roster.ids()[0], roster.ids()[1]);
    }

    #[test]
    fn test_from_participants_rejects_duplicate_ids() {
        let result = Roster::from_participants(vec![
            Participant::new(ParticipantId(4), "a"),
            Participant::new(ParticipantId(4), "b"),
        ]);
        assert_eq!(
            result,
            Err(RosterError::DuplicateParticipant(ParticipantId(4)))
        );
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut roster = Roster::with_size(2);
        roster.rename(ParticipantId(2), "Zoe").unwrap();
        assert_eq!(roster.name_of(ParticipantId(2)), Some("Zoe"));
        assert_eq!(roster.ids(), vec![ParticipantId(1), ParticipantId(2)]);

        let err = roster.rename(ParticipantId(9), "x").unwrap_err();
        assert_eq!(err, RosterError::UnknownParticipant(ParticipantId(9)));
        assert_eq!(err.to_string(), "Unknown participant id: #9");
    }

    #[test]
    fn test_resize_preserves_existing() {
        let mut roster = Roster::from_names(["Ann", "Bo"]);
        roster.resize(4);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.name_of(ParticipantId(1)), Some("Ann"));
        assert_eq!(roster.name_of(ParticipantId(4)), Some("Participant 4"));

        roster.resize(1);
        assert_eq!(roster.ids(), vec![ParticipantId(1)]);
    }
}
