use core::fmt;
use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
    slice::{Chunks, Iter},
};

use serde::{Deserialize, Serialize};

/// A position on the grid, addressed as `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardPoint {
    pub row: usize,
    pub col: usize,
}

/// Rectangular grid backed by a flat vector, indexed by [`BoardPoint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<T> {
    rows: usize,
    cols: usize,
    items: Vec<T>,
}

impl<T> Board<T> {
    pub fn new(rows: usize, cols: usize, item: T) -> Self
    where
        T: Clone,
    {
        Board {
            rows,
            cols,
            items: vec![item; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn point_from_index(&self, index: usize) -> BoardPoint {
        BoardPoint {
            row: index / self.cols,
            col: index % self.cols,
        }
    }

    pub fn is_in_bounds(&self, point: BoardPoint) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    /// Every point on the board, in row-major order.
    pub fn points(&self) -> impl Iterator<Item = BoardPoint> + '_ {
        (0..self.len()).map(|i| self.point_from_index(i))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn rows_iter(&self) -> Chunks<'_, T> {
        self.items.chunks(self.cols)
    }

    /// The up-to-8 in-bounds points surrounding `point`.
    pub fn neighbors(&self, point: BoardPoint) -> Vec<BoardPoint> {
        let mut neighbors = Vec::with_capacity(8);
        let row_lo = point.row.saturating_sub(1);
        let row_hi = (point.row + 1).min(self.rows - 1);
        let col_lo = point.col.saturating_sub(1);
        let col_hi = (point.col + 1).min(self.cols - 1);
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                if row != point.row || col != point.col {
                    neighbors.push(BoardPoint { row, col });
                }
            }
        }
        neighbors
    }
}

impl<T> Index<BoardPoint> for Board<T> {
    type Output = T;

    fn index(&self, point: BoardPoint) -> &Self::Output {
        &self.items[point.row * self.cols + point.col]
    }
}

impl<T> IndexMut<BoardPoint> for Board<T> {
    fn index_mut(&mut self, point: BoardPoint) -> &mut Self::Output {
        &mut self.items[point.row * self.cols + point.col]
    }
}

impl<T: Display> Display for Board<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut rows = self.rows_iter().peekable();
        while let Some(row) = rows.next() {
            for item in row {
                write!(f, "{}", item)?;
            }
            if rows.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: Copy> From<&Board<T>> for Vec<Vec<T>> {
    fn from(value: &Board<T>) -> Self {
        value.rows_iter().map(|row| row.to_vec()).collect()
    }
}
