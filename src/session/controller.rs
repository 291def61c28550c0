//! Turn controller: turn ownership, terminal absorption, reset.

use serde::{Deserialize, Serialize};

use crate::core::error::MoveError;
use crate::core::participant::ParticipantId;
use crate::rules::engine::{GameState, Rules};

/// What drives a participant's moves.
///
/// The controller owns the binding; the rules engine never sees it. The
/// presentation layer reads the binding to decide whether to prompt a
/// human or invoke an agent, then feeds the move in through `submit_move`
/// either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantBinding {
    /// Moves come from human input.
    #[default]
    Human,
    /// Moves come from a scripted agent.
    Agent,
}

/// Orchestrates one game session.
///
/// Holds the rules and the current state. Validation order on
/// `submit_move`: terminal check (`GameOver`), turn ownership
/// (`NotYourTurn`), then the rules' own legality check. On any error the
/// held state is exactly what it was before the call; the successor state
/// is only installed on success.
///
/// ```
/// use turncore::{Coord, GameState, ParticipantId, Rules, TicTacToeRules, TurnController};
///
/// let mut session = TurnController::new(TicTacToeRules::default());
///
/// let state = session
///     .submit_move(ParticipantId::FIRST, &Coord::new(1, 1))
///     .unwrap();
/// assert_eq!(state.active_participant(), ParticipantId::SECOND);
/// ```
#[derive(Clone, Debug)]
pub struct TurnController<R: Rules> {
    rules: R,
    state: R::State,
    bindings: [ParticipantBinding; 2],
}

impl<R: Rules> TurnController<R> {
    /// Create a session with both participants bound to human input.
    #[must_use]
    pub fn new(rules: R) -> Self {
        let state = rules.initial_state();
        Self {
            rules,
            state,
            bindings: [ParticipantBinding::Human; 2],
        }
    }

    /// Bind a participant to a human or an agent.
    #[must_use]
    pub fn with_binding(mut self, participant: ParticipantId, binding: ParticipantBinding) -> Self {
        self.bindings[participant.index()] = binding;
        self
    }

    /// The rules this session plays by.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// How a participant's moves are produced.
    #[must_use]
    pub fn binding(&self, participant: ParticipantId) -> ParticipantBinding {
        self.bindings[participant.index()]
    }

    /// Read-only snapshot of the current state. No side effects.
    #[must_use]
    pub fn current_state(&self) -> &R::State {
        &self.state
    }

    /// Submit a move on behalf of a participant.
    ///
    /// Returns the new state snapshot on success. On error the held state
    /// is unchanged and the caller may retry (`IllegalMove`,
    /// `NotYourTurn`) or must reset (`GameOver`).
    pub fn submit_move(
        &mut self,
        participant: ParticipantId,
        mv: &R::Move,
    ) -> Result<&R::State, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if participant != self.state.active_participant() {
            return Err(MoveError::NotYourTurn {
                active: self.state.active_participant(),
            });
        }

        let next = self.rules.apply_move(&self.state, mv)?;
        self.state = next;
        Ok(&self.state)
    }

    /// Discard the held state and start over from the initial state.
    pub fn reset(&mut self) -> &R::State {
        self.state = self.rules.initial_state();
        &self.state
    }
}
