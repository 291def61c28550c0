//! Snake: direction moves, growth, and fatal collisions.
//!
//! One mover on a rectangular arena. Every move is a [`Direction`]; the
//! snake advances one cell per applied move. Eating food grows the body by
//! one segment, adds 10 points, and relocates the food to a uniformly
//! random unoccupied cell drawn from the seeded RNG embedded in the state.
//! Hitting a wall or the snake's own body ends the game as a loss; filling
//! `win_fill` of the arena (default 80%) ends it as a win.
//!
//! Reversing the current heading 180 degrees is an illegal move, not a
//! loss: the caller is expected to re-prompt. Moving into a wall, by
//! contrast, is a legal move with a fatal result.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::{IllegalMoveReason, MoveError};
use crate::core::grid::{Coord, Direction, GridSize};
use crate::core::participant::ParticipantId;
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::engine::{GameState, Outcome, Rules};

/// Points awarded per food eaten.
const FOOD_SCORE: u32 = 10;

/// Snake rules: arena size, win threshold, and the session seed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeRules {
    size: GridSize,
    /// Fraction of the arena the body must fill to win.
    win_fill: f64,
    /// Seed for food placement. Same seed, same food sequence.
    seed: u64,
}

impl SnakeRules {
    /// The default 20×15 arena with an 80% fill win threshold.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            size: GridSize::new(20, 15),
            win_fill: 0.8,
            seed,
        }
    }

    /// Use a custom arena size. The arena must hold at least two cells so
    /// the initial food has somewhere to go.
    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        let size = GridSize::new(width, height);
        assert!(size.cell_count() >= 2, "Arena must hold at least two cells");
        self.size = size;
        self
    }

    /// Use a custom win threshold in `(0.0, 1.0]`.
    #[must_use]
    pub fn with_win_fill(mut self, win_fill: f64) -> Self {
        assert!(
            win_fill > 0.0 && win_fill <= 1.0,
            "Win threshold must be in (0.0, 1.0]"
        );
        self.win_fill = win_fill;
        self
    }

    /// Arena dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Does a body of `len` segments meet the win threshold?
    fn is_winning_length(&self, len: usize) -> bool {
        len as f64 >= self.size.cell_count() as f64 * self.win_fill
    }
}

/// Snake state: body segments (head first), heading, food, score.
///
/// Not serializable as a whole because it embeds the food-placement RNG;
/// checkpoint the RNG separately via [`SnakeState::rng_state`].
#[derive(Clone, Debug)]
pub struct SnakeState {
    size: GridSize,
    /// Body cells, head first. Never empty.
    body: Vector<Coord>,
    heading: Direction,
    food: Coord,
    score: u32,
    outcome: Option<Outcome>,
    /// Food placement stream. Carried in the state so `apply_move` stays
    /// pure: the successor's RNG has advanced, the input's has not.
    rng: GameRng,
}

impl SnakeState {
    /// Arena dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Body cells, head first.
    #[must_use]
    pub fn body(&self) -> &Vector<Coord> {
        &self.body
    }

    /// The head cell.
    #[must_use]
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    /// Current heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Current food cell.
    #[must_use]
    pub fn food(&self) -> Coord {
        self.food
    }

    /// Current score (10 per food eaten).
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Fraction of the arena occupied by the body.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.body.len() as f64 / self.size.cell_count() as f64
    }

    /// Snapshot of the food-placement RNG, for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    fn occupies(&self, coord: Coord) -> bool {
        self.body.iter().any(|&c| c == coord)
    }

    /// Place food uniformly at random on an unoccupied cell.
    ///
    /// Returns `None` when the body covers the whole arena.
    fn place_food(&mut self) -> Option<Coord> {
        let free: Vec<Coord> = self
            .size
            .coords()
            .filter(|&c| !self.occupies(c))
            .collect();
        let idx = match free.len() {
            0 => return None,
            n => self.rng.gen_range_usize(0..n),
        };
        Some(free[idx])
    }
}

impl GameState for SnakeState {
    fn active_participant(&self) -> ParticipantId {
        // Single mover: the first participant holds every turn.
        ParticipantId::FIRST
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl Rules for SnakeRules {
    type State = SnakeState;
    type Move = Direction;

    fn initial_state(&self) -> SnakeState {
        let mut state = SnakeState {
            size: self.size,
            body: Vector::unit(self.size.center()),
            heading: Direction::Right,
            food: self.size.center(), // placeholder until placed below
            score: 0,
            outcome: None,
            rng: GameRng::new(self.seed),
        };
        state.food = state
            .place_food()
            .expect("Arena holds at least two cells");
        state
    }

    fn legal_moves(&self, state: &SnakeState) -> Vec<Direction> {
        if state.is_terminal() {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&d| d != state.heading.reverse())
            .collect()
    }

    fn check_move(&self, state: &SnakeState, mv: &Direction) -> Result<(), MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if *mv == state.heading.reverse() {
            return Err(MoveError::IllegalMove(IllegalMoveReason::ReversesHeading));
        }
        Ok(())
    }

    fn apply_move(&self, state: &SnakeState, mv: &Direction) -> Result<SnakeState, MoveError> {
        self.check_move(state, mv)?;

        let mut next = state.clone();
        next.heading = *mv;
        let new_head = state.head().step(*mv);

        // Wall hit: fatal, body unchanged.
        if !self.size.contains(new_head) {
            next.outcome = Some(Outcome::Loss(ParticipantId::FIRST));
            return Ok(next);
        }

        // Body hit: fatal. The tail cell counts as occupied even though it
        // would vacate this step.
        if state.occupies(new_head) {
            next.outcome = Some(Outcome::Loss(ParticipantId::FIRST));
            return Ok(next);
        }

        next.body.push_front(new_head);

        if new_head == state.food {
            next.score += FOOD_SCORE;
            if self.is_winning_length(next.body.len()) {
                next.outcome = Some(Outcome::Winner(ParticipantId::FIRST));
            } else {
                match next.place_food() {
                    Some(food) => next.food = food,
                    // Arena full without meeting the threshold: nothing
                    // left to eat, so the game ends as a win.
                    None => next.outcome = Some(Outcome::Winner(ParticipantId::FIRST)),
                }
            }
        } else {
            next.body.pop_back();
        }

        Ok(next)
    }
}
