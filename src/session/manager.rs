//! Session registry keyed by explicit identifiers.
//!
//! Every session is an owned [`TurnController`] looked up by a
//! [`SessionId`] the external caller holds. Sessions share no mutable
//! state, and dropping one requires no cleanup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::controller::TurnController;
use crate::rules::engine::Rules;

/// Opaque identifier for one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl SessionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Owns every live session for one game type.
///
/// All calls affecting one session go through `session_mut`, so a
/// concurrent host needs exactly one mutual-exclusion boundary: around the
/// manager (or around each controller, if it distributes them).
#[derive(Clone, Debug, Default)]
pub struct SessionManager<R: Rules> {
    sessions: FxHashMap<SessionId, TurnController<R>>,
    next_id: u32,
}

impl<R: Rules> SessionManager<R> {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Start a new session and return its identifier.
    pub fn create_session(&mut self, rules: R) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, TurnController::new(rules));
        id
    }

    /// Look up a session read-only.
    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&TurnController<R>> {
        self.sessions.get(&id)
    }

    /// Look up a session for play.
    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut TurnController<R>> {
        self.sessions.get_mut(&id)
    }

    /// Abandon a session. Returns true if it existed.
    pub fn remove_session(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Are there no live sessions?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Iterate over live session IDs.
    pub fn session_ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.sessions.keys().copied()
    }
}
