//! Tic-tac-toe: N-in-a-row on an N×N board.
//!
//! The classic 3×3 board with 3-in-a-row is the default; both the board
//! size and the run length are configurable. The win scan is a pure
//! function of the final cell layout, so any permutation of moves producing
//! the same layout yields the same outcome.
//!
//! ```
//! use turncore::{Coord, GameState, Outcome, ParticipantId, Rules, TicTacToeRules};
//!
//! let rules = TicTacToeRules::default();
//! let mut state = rules.initial_state();
//!
//! // X takes the top row.
//! for mv in [
//!     Coord::new(0, 0), // X
//!     Coord::new(1, 1), // O
//!     Coord::new(1, 0), // X
//!     Coord::new(0, 1), // O
//!     Coord::new(2, 0), // X
//! ] {
//!     state = rules.apply_move(&state, &mv).unwrap();
//! }
//!
//! assert_eq!(state.outcome(), Some(Outcome::Winner(ParticipantId::FIRST)));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{IllegalMoveReason, MoveError};
use crate::core::grid::{Coord, GridSize};
use crate::core::participant::ParticipantId;
use crate::rules::engine::{GameState, Outcome, Rules};

/// A winning run of cells. Inline storage covers the default 3-in-a-row.
pub type WinningLine = SmallVec<[Coord; 3]>;

/// Tic-tac-toe rules: board size and run length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeRules {
    size: GridSize,
    win_len: u16,
}

impl Default for TicTacToeRules {
    fn default() -> Self {
        Self {
            size: GridSize::new(3, 3),
            win_len: 3,
        }
    }
}

impl TicTacToeRules {
    /// The classic 3×3 board with 3-in-a-row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An N×N board. `win_len` stays at its current value.
    #[must_use]
    pub fn with_board_size(mut self, n: u16) -> Self {
        assert!(n > 0, "Board must be non-empty");
        self.size = GridSize::new(n, n);
        assert!(
            self.win_len <= n,
            "Run length cannot exceed the board size"
        );
        self
    }

    /// Require `k` in a row to win.
    #[must_use]
    pub fn with_win_len(mut self, k: u16) -> Self {
        assert!(
            k >= 1 && k <= self.size.width,
            "Run length must be between 1 and the board size"
        );
        self.win_len = k;
        self
    }

    /// Board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Run length required to win.
    #[must_use]
    pub fn win_len(&self) -> u16 {
        self.win_len
    }

    /// All scan lines in verdict order: rows top-to-bottom, columns
    /// left-to-right, main diagonal, anti-diagonal. The first line holding
    /// a full run decides the game.
    fn scan_lines(&self) -> Vec<Vec<Coord>> {
        let n = self.size.width as i16;
        let mut lines = Vec::with_capacity(2 * n as usize + 2);

        for y in 0..n {
            lines.push((0..n).map(|x| Coord::new(x, y)).collect());
        }
        for x in 0..n {
            lines.push((0..n).map(|y| Coord::new(x, y)).collect());
        }
        lines.push((0..n).map(|i| Coord::new(i, i)).collect());
        lines.push((0..n).map(|i| Coord::new(n - 1 - i, i)).collect());

        lines
    }

    /// Find the first winning run in scan order, if any.
    fn scan_winner(&self, state: &TicTacToeState) -> Option<(ParticipantId, WinningLine)> {
        let k = self.win_len as usize;

        for line in self.scan_lines() {
            for window in line.windows(k) {
                let first = state.cell(window[0])?;
                let first = match first {
                    Some(p) => p,
                    None => continue,
                };
                if window
                    .iter()
                    .all(|&c| state.cell(c) == Some(Some(first)))
                {
                    return Some((first, WinningLine::from_slice(window)));
                }
            }
        }

        None
    }
}

/// Tic-tac-toe state: cell layout, active participant, verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    size: GridSize,
    /// Row-major cell contents. `None` is an empty cell.
    cells: Vector<Option<ParticipantId>>,
    active: ParticipantId,
    outcome: Option<Outcome>,
    winning_line: Option<WinningLine>,
}

impl TicTacToeState {
    fn empty(size: GridSize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(None).take(size.cell_count()).collect(),
            active: ParticipantId::FIRST,
            outcome: None,
            winning_line: None,
        }
    }

    /// Board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The occupant of a cell: `Some(None)` for an empty in-bounds cell,
    /// `None` for an out-of-bounds coordinate.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Option<ParticipantId>> {
        if !self.size.contains(coord) {
            return None;
        }
        self.cells.get(self.size.index(coord)).copied()
    }

    /// Iterate over `(coord, occupant)` pairs in scan order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<ParticipantId>)> + '_ {
        self.size
            .coords()
            .map(|c| (c, self.cells[self.size.index(c)]))
    }

    /// The winning run, once a participant has won.
    #[must_use]
    pub fn winning_line(&self) -> Option<&[Coord]> {
        self.winning_line.as_deref()
    }

    /// Number of empty cells remaining.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

impl GameState for TicTacToeState {
    fn active_participant(&self) -> ParticipantId {
        self.active
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl Rules for TicTacToeRules {
    type State = TicTacToeState;
    type Move = Coord;

    fn initial_state(&self) -> TicTacToeState {
        TicTacToeState::empty(self.size)
    }

    fn legal_moves(&self, state: &TicTacToeState) -> Vec<Coord> {
        if state.is_terminal() {
            return Vec::new();
        }
        state
            .cells()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(coord, _)| coord)
            .collect()
    }

    fn check_move(&self, state: &TicTacToeState, mv: &Coord) -> Result<(), MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match state.cell(*mv) {
            None => Err(MoveError::IllegalMove(IllegalMoveReason::OutOfBounds(*mv))),
            Some(Some(_)) => Err(MoveError::IllegalMove(IllegalMoveReason::CellOccupied(
                *mv,
            ))),
            Some(None) => Ok(()),
        }
    }

    fn apply_move(&self, state: &TicTacToeState, mv: &Coord) -> Result<TicTacToeState, MoveError> {
        self.check_move(state, mv)?;

        let mut next = state.clone();
        let idx = next.size.index(*mv);
        next.cells.set(idx, Some(state.active));

        if let Some((winner, line)) = self.scan_winner(&next) {
            next.outcome = Some(Outcome::Winner(winner));
            next.winning_line = Some(line);
        } else if next.empty_cells() == 0 {
            next.outcome = Some(Outcome::Draw);
        } else {
            next.active = state.active.opponent();
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(rules: &TicTacToeRules, moves: &[(i16, i16)]) -> TicTacToeState {
        let mut state = rules.initial_state();
        for &(x, y) in moves {
            state = rules.apply_move(&state, &Coord::new(x, y)).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let rules = TicTacToeRules::default();
        let state = rules.initial_state();

        assert_eq!(state.active_participant(), ParticipantId::FIRST);
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.empty_cells(), 9);
        assert!(state.cells().all(|(_, occupant)| occupant.is_none()));
    }

    #[test]
    fn test_alternation() {
        let rules = TicTacToeRules::default();
        let s1 = play(&rules, &[(0, 0)]);
        assert_eq!(s1.active_participant(), ParticipantId::SECOND);
        assert_eq!(s1.cell(Coord::new(0, 0)), Some(Some(ParticipantId::FIRST)));

        let s2 = rules.apply_move(&s1, &Coord::new(1, 1)).unwrap();
        assert_eq!(s2.active_participant(), ParticipantId::FIRST);
        assert_eq!(s2.cell(Coord::new(1, 1)), Some(Some(ParticipantId::SECOND)));
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let rules = TicTacToeRules::default();
        let state = rules.initial_state();
        let snapshot = state.clone();

        let _ = rules.apply_move(&state, &Coord::new(0, 0)).unwrap();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_top_row_win() {
        // (0,0)=X (1,1)=O (0,1)=X (1,0)=O (0,2)=X in (row, col)
        // positions; here y is the row.
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(0, 0), (1, 1), (1, 0), (0, 1), (2, 0)]);

        assert_eq!(state.outcome(), Some(Outcome::Winner(ParticipantId::FIRST)));
        assert_eq!(
            state.winning_line().unwrap(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_column_win() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(state.outcome(), Some(Outcome::Winner(ParticipantId::FIRST)));
        assert_eq!(
            state.winning_line().unwrap(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_main_diagonal_win() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);

        assert_eq!(state.outcome(), Some(Outcome::Winner(ParticipantId::FIRST)));
        assert_eq!(
            state.winning_line().unwrap(),
            &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(2, 0), (0, 0), (1, 1), (1, 0), (0, 2)]);

        assert_eq!(state.outcome(), Some(Outcome::Winner(ParticipantId::FIRST)));
        assert_eq!(
            state.winning_line().unwrap(),
            &[Coord::new(2, 0), Coord::new(1, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_second_participant_can_win() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(0, 0), (0, 2), (1, 0), (1, 2), (1, 1), (2, 2)]);

        assert_eq!(
            state.outcome(),
            Some(Outcome::Winner(ParticipantId::SECOND))
        );
    }

    #[test]
    fn test_draw() {
        // X O X
        // X O O
        // O X X
        let rules = TicTacToeRules::default();
        let state = play(
            &rules,
            &[
                (0, 0), // X
                (1, 0), // O
                (2, 0), // X
                (1, 1), // O
                (0, 1), // X
                (2, 1), // O
                (1, 2), // X
                (0, 2), // O
                (2, 2), // X
            ],
        );

        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert!(state.winning_line().is_none());
        assert_eq!(state.empty_cells(), 0);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(1, 1)]);
        let snapshot = state.clone();

        let err = rules.apply_move(&state, &Coord::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalMove(IllegalMoveReason::CellOccupied(Coord::new(1, 1)))
        );
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let rules = TicTacToeRules::default();
        let state = rules.initial_state();

        let err = rules.apply_move(&state, &Coord::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalMove(IllegalMoveReason::OutOfBounds(Coord::new(3, 0)))
        );

        let err = rules.apply_move(&state, &Coord::new(0, -1)).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalMove(IllegalMoveReason::OutOfBounds(Coord::new(0, -1)))
        );
    }

    #[test]
    fn test_terminal_rejects_moves() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(0, 0), (1, 1), (1, 0), (0, 1), (2, 0)]);
        assert!(state.is_terminal());

        let err = rules.apply_move(&state, &Coord::new(2, 2)).unwrap_err();
        assert_eq!(err, MoveError::GameOver);
        assert!(rules.legal_moves(&state).is_empty());
    }

    #[test]
    fn test_legal_moves_are_empty_cells() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(0, 0), (1, 1)]);

        let legal = rules.legal_moves(&state);
        assert_eq!(legal.len(), 7);
        assert!(!legal.contains(&Coord::new(0, 0)));
        assert!(!legal.contains(&Coord::new(1, 1)));
        for mv in &legal {
            assert!(rules.is_legal(&state, mv));
        }
    }

    #[test]
    fn test_win_depends_only_on_layout() {
        // Two different move orders reaching the same final layout.
        let rules = TicTacToeRules::default();
        let a = play(&rules, &[(0, 0), (1, 1), (1, 0), (0, 1), (2, 0)]);
        let b = play(&rules, &[(1, 0), (0, 1), (0, 0), (1, 1), (2, 0)]);

        assert_eq!(a.outcome(), b.outcome());
        assert_eq!(a.winning_line(), b.winning_line());
        let layout_a: Vec<_> = a.cells().collect();
        let layout_b: Vec<_> = b.cells().collect();
        assert_eq!(layout_a, layout_b);
    }

    #[test]
    fn test_larger_board() {
        // 4-in-a-row on a 5x5 board.
        let rules = TicTacToeRules::new().with_board_size(5).with_win_len(4);
        let state = play(
            &rules,
            &[
                (0, 0),
                (0, 4),
                (1, 0),
                (1, 4),
                (2, 0),
                (2, 4),
                (3, 0), // X completes four in the top row
            ],
        );

        assert_eq!(state.outcome(), Some(Outcome::Winner(ParticipantId::FIRST)));
        assert_eq!(state.winning_line().unwrap().len(), 4);
    }

    #[test]
    fn test_row_scanned_before_column() {
        // X's final move at (2,0) completes both row 0 and column 2; the
        // row is reported because rows are scanned first.
        let rules = TicTacToeRules::default();
        let state = play(
            &rules,
            &[
                (2, 1), // X
                (0, 1), // O
                (2, 2), // X
                (0, 2), // O
                (0, 0), // X
                (1, 1), // O
                (1, 0), // X
                (1, 2), // O
                (2, 0), // X completes row 0 and column 2
            ],
        );

        assert_eq!(state.outcome(), Some(Outcome::Winner(ParticipantId::FIRST)));
        assert_eq!(
            state.winning_line().unwrap(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_state_serialization() {
        let rules = TicTacToeRules::default();
        let state = play(&rules, &[(0, 0), (1, 1)]);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TicTacToeState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    #[should_panic(expected = "Run length must be between 1 and the board size")]
    fn test_win_len_bounded_by_board() {
        let _ = TicTacToeRules::new().with_win_len(4);
    }
}
