//! The `Rules` trait, game state trait, and terminal outcomes.

use crate::core::error::MoveError;
use crate::core::participant::ParticipantId;

/// Verdict of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(ParticipantId),
    /// The named participant lost (movement games: a fatal collision ends
    /// the game without crowning anyone).
    Loss(ParticipantId),
    /// Draw (no winner).
    Draw,
}

impl Outcome {
    /// Check if a participant won.
    #[must_use]
    pub fn is_winner(&self, participant: ParticipantId) -> bool {
        match self {
            Outcome::Winner(p) => *p == participant,
            Outcome::Loss(_) | Outcome::Draw => false,
        }
    }
}

/// Read-only view every game state exposes to the session layer.
///
/// A state is a snapshot: the controller replaces it wholesale on each
/// applied move, so holding an old reference across turns is impossible by
/// construction.
pub trait GameState: Clone + std::fmt::Debug {
    /// Whose turn it is. Meaningless once terminal but must still return
    /// the participant who would have moved.
    fn active_participant(&self) -> ParticipantId;

    /// The verdict, populated exactly when the state is terminal.
    fn outcome(&self) -> Option<Outcome>;

    /// Is this a terminal state? Terminal states accept no further moves.
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

/// Rules engine trait.
///
/// Games implement this trait to define their rules. All methods are pure:
/// `apply_move` returns a *new* state and never mutates its input, so a
/// failed call leaves the caller's state untouched by construction.
///
/// ## Implementation Notes
///
/// - `initial_state`: Must be deterministic for a given rules value. Games
///   that need randomness (snake food placement) carry a seed in the rules
///   and embed a `GameRng` in the state.
/// - `legal_moves`: Must return an empty vec for terminal states.
/// - `apply_move`: Must fail with exactly the error `check_move` reports.
pub trait Rules {
    /// The game's state type.
    type State: GameState;

    /// The game's move type.
    type Move: Clone;

    /// Construct the deterministic initial state: empty board, fixed
    /// starting participant (`ParticipantId::FIRST`).
    fn initial_state(&self) -> Self::State;

    /// Enumerate all legal moves for the active participant.
    ///
    /// Used by agents for uniform-random selection. Empty once terminal.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Validate a proposed move against the current state.
    ///
    /// Errors with `GameOver` if the state is terminal, otherwise with
    /// `IllegalMove` carrying the reason.
    fn check_move(&self, state: &Self::State, mv: &Self::Move) -> Result<(), MoveError>;

    /// Is the proposed move legal?
    #[must_use]
    fn is_legal(&self, state: &Self::State, mv: &Self::Move) -> bool {
        self.check_move(state, mv).is_ok()
    }

    /// Apply a move, returning the successor state.
    ///
    /// The successor carries the next active participant and, once a win,
    /// draw, or fatal collision is detected, the terminal outcome.
    fn apply_move(&self, state: &Self::State, mv: &Self::Move) -> Result<Self::State, MoveError>;
}
