//! SOS board model and pattern scan.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Default side length of the square board
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// A board coordinate as (row, col)
pub type Cell = (usize, usize);

/// A completed SOS pattern as (end, center, end) coordinates
pub type PatternLine = [Cell; 3];

/// One of the two symbols players place on the board.
///
/// `S` is the end mark, `O` the center mark. A pattern is completed only
/// when an `O` is placed with two `S` cells symmetric about it along a
/// shared line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    S,
    O,
}

impl Mark {
    /// Get the wire representation of this mark.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::S => "S",
            Mark::O => "O",
        }
    }
}

/// Square grid of cells, each holding at most one mark.
///
/// Once a cell is non-empty it never changes; the only mutation is
/// [`Board::place`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Create an empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the mark at a cell, or None if the cell is empty or out of range.
    pub fn mark_at(&self, row: usize, col: usize) -> Option<Mark> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Place a mark at the given cell.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfBounds` if the coordinate is outside the
    /// board, `BoardError::CellOccupied` if the cell already holds a mark.
    /// The board is not mutated in either case.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = row * self.size + col;
        if self.cells[idx].is_some() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[idx] = Some(mark);
        Ok(())
    }

    /// True iff every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Scan for SOS patterns completed by the mark at (row, col).
    ///
    /// Only an `O` at the scanned cell can complete a pattern: for each of
    /// the 4 undirected axis directions the two cells symmetric about
    /// (row, col) at distance 1 are checked for in-bounds `S` marks. If the
    /// scanned cell holds anything other than `O` the scan returns no lines.
    /// Placing an `S` never completes a pattern by itself; that is part of
    /// the game rules, not an oversight.
    pub fn scan_patterns(&self, row: usize, col: usize) -> Vec<PatternLine> {
        if self.mark_at(row, col) != Some(Mark::O) {
            return Vec::new();
        }

        // Horizontal, vertical, and the two diagonals
        const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        let mut lines = Vec::new();
        for (dr, dc) in DIRECTIONS {
            let before = (row as i64 - dr, col as i64 - dc);
            let after = (row as i64 + dr, col as i64 + dc);
            if self.is_end_mark(before) && self.is_end_mark(after) {
                lines.push([
                    (before.0 as usize, before.1 as usize),
                    (row, col),
                    (after.0 as usize, after.1 as usize),
                ]);
            }
        }
        lines
    }

    /// Collect the cells as rows, outermost Vec indexed by row.
    pub fn rows(&self) -> Vec<Vec<Option<Mark>>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.cells[row * self.size + col])
                    .collect()
            })
            .collect()
    }

    fn is_end_mark(&self, (row, col): (i64, i64)) -> bool {
        if row < 0 || col < 0 || row >= self.size as i64 || col >= self.size as i64 {
            return false;
        }
        self.mark_at(row as usize, col as usize) == Some(Mark::S)
    }
}
