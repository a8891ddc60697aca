use rand::{seq::SliceRandom, thread_rng, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardPoint};
use crate::cell::{Cell, CellState, PlayerCell};

/// Dimensions and mine count for a new game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinefieldOpts {
    pub rows: usize,
    pub cols: usize,
    pub num_mines: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{rows}x{cols} board cannot hold {num_mines} mines")]
    InvalidConfiguration {
        rows: usize,
        cols: usize,
        num_mines: usize,
    },
    #[error("({}, {}) is outside the board", .point.row, .point.col)]
    OutOfBounds { point: BoardPoint },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A cell newly uncovered by a reveal, so callers can re-render by diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub point: BoardPoint,
    pub contents: Cell,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continued(Vec<RevealedCell>),
    Won(Vec<RevealedCell>),
    Lost(Vec<RevealedCell>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    Rejected,
}

/// The board-state engine: a grid of cells plus the counters needed for
/// flag-cap enforcement and win detection.
pub struct Minefield {
    num_mines: usize,
    flagged: usize,
    safe_remaining: usize,
    status: GameStatus,
    board: Board<(Cell, CellState)>,
}

impl Minefield {
    fn empty(opts: MinefieldOpts) -> Result<Self, GameError> {
        if opts.rows == 0 || opts.cols == 0 || opts.num_mines >= opts.rows * opts.cols {
            return Err(GameError::InvalidConfiguration {
                rows: opts.rows,
                cols: opts.cols,
                num_mines: opts.num_mines,
            });
        }
        Ok(Minefield {
            num_mines: opts.num_mines,
            flagged: 0,
            safe_remaining: opts.rows * opts.cols - opts.num_mines,
            status: GameStatus::Playing,
            board: Board::new(opts.rows, opts.cols, (Cell::default(), CellState::default())),
        })
    }

    /// Create a game with mines placed by the thread-local RNG.
    pub fn new(opts: MinefieldOpts) -> Result<Self, GameError> {
        Self::with_rng(opts, &mut thread_rng())
    }

    /// Create a game with mines drawn from the given RNG. A partial shuffle
    /// over all points picks `num_mines` distinct positions uniformly.
    pub fn with_rng(opts: MinefieldOpts, rng: &mut impl Rng) -> Result<Self, GameError> {
        let mut game = Self::empty(opts)?;
        let mut points: Vec<BoardPoint> = game.board.points().collect();
        points.shuffle(rng);
        for point in &points[..opts.num_mines] {
            game.plant(*point);
        }
        Ok(game)
    }

    /// Place a mine and bump the counts of its non-mine neighbors.
    fn plant(&mut self, point: BoardPoint) {
        self.board[point].0 = Cell::Mine;
        for neighbor in self.board.neighbors(point) {
            self.board[neighbor].0 = self.board[neighbor].0.increment();
        }
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn num_mines(&self) -> usize {
        self.num_mines
    }

    /// Mine counter for status displays: total mines minus flags placed.
    pub fn mines_remaining(&self) -> usize {
        self.num_mines - self.flagged
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Reveal the cell at `point`, cascading through blank regions.
    ///
    /// Flagged and already-revealed targets are silent no-ops. Revealing a
    /// mine triggers the loss sequence; uncovering the last safe cell wins.
    /// After the game has ended, returns the terminal outcome again without
    /// touching the board.
    pub fn reveal(&mut self, point: BoardPoint) -> Result<RevealOutcome, GameError> {
        if !self.board.is_in_bounds(point) {
            return Err(GameError::OutOfBounds { point });
        }
        match self.status {
            GameStatus::Lost => return Ok(RevealOutcome::Lost(Vec::new())),
            GameStatus::Won => return Ok(RevealOutcome::Won(Vec::new())),
            GameStatus::Playing => {}
        }
        let (cell, state) = self.board[point];
        if state.revealed || state.flagged {
            return Ok(RevealOutcome::Continued(Vec::new()));
        }
        if cell.is_mine() {
            return Ok(self.lose());
        }
        let revealed = self.cascade(point);
        if self.safe_remaining == 0 {
            self.status = GameStatus::Won;
            Ok(RevealOutcome::Won(revealed))
        } else {
            Ok(RevealOutcome::Continued(revealed))
        }
    }

    /// Work-list flood reveal. Starting from a safe cell, uncovers the
    /// connected blank region and its numbered border. Mines are never
    /// pushed and flagged cells stop the flood, so each iteration consumes
    /// an unrevealed safe cell and the loop is bounded by the grid.
    fn cascade(&mut self, start: BoardPoint) -> Vec<RevealedCell> {
        let mut revealed = Vec::new();
        let mut work = vec![start];
        while let Some(point) = work.pop() {
            let (cell, state) = self.board[point];
            if state.revealed || state.flagged {
                continue;
            }
            self.board[point].1.revealed = true;
            self.safe_remaining -= 1;
            revealed.push(RevealedCell {
                point,
                contents: cell,
            });
            if cell == Cell::Empty(0) {
                for neighbor in self.board.neighbors(point) {
                    let (n_cell, n_state) = self.board[neighbor];
                    if !n_state.revealed && !n_cell.is_mine() {
                        work.push(neighbor);
                    }
                }
            }
        }
        revealed
    }

    /// Loss sequence: every mine is force-unflagged and shown.
    fn lose(&mut self) -> RevealOutcome {
        self.status = GameStatus::Lost;
        let mut shown = Vec::new();
        for index in 0..self.board.len() {
            let point = self.board.point_from_index(index);
            let (cell, _) = self.board[point];
            if !cell.is_mine() {
                continue;
            }
            let state = &mut self.board[point].1;
            if state.flagged {
                state.flagged = false;
                self.flagged -= 1;
            }
            state.revealed = true;
            shown.push(RevealedCell {
                point,
                contents: cell,
            });
        }
        RevealOutcome::Lost(shown)
    }

    /// Toggle the flag at `point`. Flagging is capped at `num_mines`
    /// outstanding flags; unflagging is always allowed. Revealed cells and
    /// finished games reject the toggle. Never reveals anything.
    pub fn toggle_flag(&mut self, point: BoardPoint) -> Result<FlagOutcome, GameError> {
        if !self.board.is_in_bounds(point) {
            return Err(GameError::OutOfBounds { point });
        }
        if self.is_over() || self.board[point].1.revealed {
            return Ok(FlagOutcome::Rejected);
        }
        let state = &mut self.board[point].1;
        if state.flagged {
            state.flagged = false;
            self.flagged -= 1;
            Ok(FlagOutcome::Unflagged)
        } else if self.flagged < self.num_mines {
            state.flagged = true;
            self.flagged += 1;
            Ok(FlagOutcome::Flagged)
        } else {
            Ok(FlagOutcome::Rejected)
        }
    }

    /// The cell at `point` as the player sees it, `None` out of bounds.
    pub fn player_cell(&self, point: BoardPoint) -> Option<PlayerCell> {
        if !self.board.is_in_bounds(point) {
            return None;
        }
        Some(self.view_of(point))
    }

    /// The whole grid as the player sees it.
    pub fn player_board(&self) -> Board<PlayerCell> {
        let mut view = Board::new(self.rows(), self.cols(), PlayerCell::default());
        for point in self.board.points() {
            view[point] = self.view_of(point);
        }
        view
    }

    fn view_of(&self, point: BoardPoint) -> PlayerCell {
        let (cell, state) = self.board[point];
        if state.revealed {
            PlayerCell::Revealed(cell)
        } else if state.flagged {
            PlayerCell::Flag
        } else {
            PlayerCell::Hidden
        }
    }
}
