//! Scripted participants.
//!
//! An agent selects a move for the active participant, synchronously and
//! without side effects beyond its own RNG. The core never schedules
//! agents: the presentation layer calls [`Agent::select_move`] on the
//! agent's turn and feeds the result into the controller, exactly as it
//! would a human's input.

use crate::core::rng::GameRng;
use crate::rules::engine::Rules;

/// A move-selection strategy for one participant.
pub trait Agent<R: Rules> {
    /// Select a move for the active participant.
    ///
    /// Returns `None` when no legal move exists (terminal state).
    fn select_move(&mut self, rules: &R, state: &R::State) -> Option<R::Move>;
}

/// Uniform-random selection over the legal-move set.
///
/// The RNG is injected so agent behavior is reproducible: same seed, same
/// state sequence, same moves.
///
/// ```
/// use turncore::{Agent, RandomAgent, Rules, TicTacToeRules};
///
/// let rules = TicTacToeRules::default();
/// let state = rules.initial_state();
///
/// let mut a = RandomAgent::new(42);
/// let mut b = RandomAgent::new(42);
/// assert_eq!(a.select_move(&rules, &state), b.select_move(&rules, &state));
/// ```
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with its own seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create an agent from an existing RNG, e.g. a fork of the session's.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<R: Rules> Agent<R> for RandomAgent {
    fn select_move(&mut self, rules: &R, state: &R::State) -> Option<R::Move> {
        let legal = rules.legal_moves(state);
        self.rng.choose(&legal).cloned()
    }
}
