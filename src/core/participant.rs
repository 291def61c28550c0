//! Participant identification.
//!
//! Every game session has exactly two logical participants. A participant is
//! a turn-holder, not a person: it may be bound to a human input source or
//! to a scripted agent by the session layer. The rules engine never knows
//! the difference.

use serde::{Deserialize, Serialize};

/// Identifier for one of the two participants in a session.
///
/// Indices are 0-based: the starting participant is `ParticipantId::FIRST`.
///
/// ```
/// use turncore::ParticipantId;
///
/// assert_eq!(ParticipantId::FIRST.opponent(), ParticipantId::SECOND);
/// assert_eq!(ParticipantId::SECOND.opponent(), ParticipantId::FIRST);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u8);

impl ParticipantId {
    /// The participant who moves first in every game.
    pub const FIRST: ParticipantId = ParticipantId(0);

    /// The other participant.
    pub const SECOND: ParticipantId = ParticipantId(1);

    /// Create a participant ID. Panics on indices other than 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Exactly two participants are supported");
        Self(id)
    }

    /// Get the raw participant index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both participant IDs in turn order.
    pub fn both() -> impl Iterator<Item = ParticipantId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_basics() {
        assert_eq!(ParticipantId::FIRST.index(), 0);
        assert_eq!(ParticipantId::SECOND.index(), 1);
        assert_eq!(ParticipantId::new(1), ParticipantId::SECOND);
        assert_eq!(format!("{}", ParticipantId::FIRST), "Participant 0");
    }

    #[test]
    fn test_opponent_is_involutive() {
        for p in ParticipantId::both() {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_both_in_turn_order() {
        let both: Vec<_> = ParticipantId::both().collect();
        assert_eq!(both, vec![ParticipantId::FIRST, ParticipantId::SECOND]);
    }

    #[test]
    #[should_panic(expected = "Exactly two participants are supported")]
    fn test_third_participant_rejected() {
        let _ = ParticipantId::new(2);
    }

    #[test]
    fn test_serialization() {
        let p = ParticipantId::SECOND;
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
