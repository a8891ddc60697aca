use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Contents of one grid position: a mine, or the count of adjacent mines.
///
/// The adjacency count only exists for non-mine cells, so there is no
/// sentinel value to keep out of displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = "e")]
    Empty(u8),
    #[serde(rename = "m")]
    Mine,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty(0)
    }
}

impl Cell {
    pub(crate) fn increment(self) -> Self {
        match self {
            Self::Empty(x) => Cell::Empty(x + 1),
            Self::Mine => Cell::Mine,
        }
    }

    pub fn is_mine(&self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count, `None` for a mine.
    pub fn value(&self) -> Option<u8> {
        match self {
            Self::Empty(x) => Some(*x),
            Self::Mine => None,
        }
    }
}

/// Mutable bookkeeping for one grid position. Cells know nothing about
/// their neighbors or the board; the flag cap lives in the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellState {
    pub revealed: bool,
    pub flagged: bool,
}

/// One cell as the player sees it. Mine positions stay hidden until
/// revealed by play or by the loss sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCell {
    #[serde(rename = "h")]
    Hidden,
    #[serde(rename = "f")]
    Flag,
    #[serde(rename = "r")]
    Revealed(Cell),
}

impl Default for PlayerCell {
    fn default() -> Self {
        PlayerCell::Hidden
    }
}

impl Display for PlayerCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "-"),
            Self::Flag => write!(f, "f"),
            Self::Revealed(cell) => match cell.value() {
                Some(v) => write!(f, "{v}"),
                None => write!(f, "*"),
            },
        }
    }
}
