//! Rock-paper-scissors: one round per session.
//!
//! The simultaneous reveal is serialized through the turn order: the first
//! participant commits a shape, then the second, and the verdict lands on
//! the second move. Keeping the first choice hidden until the reveal is the
//! presentation layer's job; the core just records it.

use serde::{Deserialize, Serialize};

use crate::core::error::MoveError;
use crate::core::participant::ParticipantId;
use crate::rules::engine::{GameState, Outcome, Rules};

/// A thrown shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    /// All shapes, for legal-move enumeration.
    pub const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    /// Does this shape beat the other?
    #[must_use]
    pub const fn beats(self, other: Shape) -> bool {
        matches!(
            (self, other),
            (Shape::Rock, Shape::Scissors)
                | (Shape::Scissors, Shape::Paper)
                | (Shape::Paper, Shape::Rock)
        )
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shape::Rock => "rock",
            Shape::Paper => "paper",
            Shape::Scissors => "scissors",
        };
        f.write_str(name)
    }
}

/// Rock-paper-scissors rules. Stateless: everything lives in the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsRules;

impl RpsRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// One round of rock-paper-scissors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsState {
    choices: [Option<Shape>; 2],
    active: ParticipantId,
    outcome: Option<Outcome>,
}

impl RpsState {
    /// The shape a participant has committed, if any.
    #[must_use]
    pub fn choice(&self, participant: ParticipantId) -> Option<Shape> {
        self.choices[participant.index()]
    }
}

impl GameState for RpsState {
    fn active_participant(&self) -> ParticipantId {
        self.active
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl Rules for RpsRules {
    type State = RpsState;
    type Move = Shape;

    fn initial_state(&self) -> RpsState {
        RpsState {
            choices: [None, None],
            active: ParticipantId::FIRST,
            outcome: None,
        }
    }

    fn legal_moves(&self, state: &RpsState) -> Vec<Shape> {
        if state.is_terminal() {
            return Vec::new();
        }
        Shape::ALL.to_vec()
    }

    fn check_move(&self, state: &RpsState, _mv: &Shape) -> Result<(), MoveError> {
        // Any shape is legal while the round is open.
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn apply_move(&self, state: &RpsState, mv: &Shape) -> Result<RpsState, MoveError> {
        self.check_move(state, mv)?;

        let mut next = state.clone();
        next.choices[state.active.index()] = Some(*mv);

        match (next.choices[0], next.choices[1]) {
            (Some(first), Some(second)) => {
                next.outcome = Some(if first.beats(second) {
                    Outcome::Winner(ParticipantId::FIRST)
                } else if second.beats(first) {
                    Outcome::Winner(ParticipantId::SECOND)
                } else {
                    Outcome::Draw
                });
            }
            _ => next.active = state.active.opponent(),
        }

        Ok(next)
    }
}
