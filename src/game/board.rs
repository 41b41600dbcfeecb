use serde::Serialize;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    /// Owner's sign, 0 when empty
    pub fn sign(self) -> i8 {
        self.owner().map_or(0, Player::sign)
    }
}

/// The 7x6 grid, stored column by column.
/// Row 0 is the bottom, row 5 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS` or `row >= ROWS`.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.columns[col][row]
    }

    /// Number of tokens stacked in a column
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`. Use [`Board::is_column_full`] or
    /// [`Board::drop_token`] for columns that come from input.
    pub fn column_height(&self, col: usize) -> usize {
        self.columns[col]
            .iter()
            .take_while(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if a column is full. Out of range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.columns[col][ROWS - 1] != Cell::Empty
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Lowest empty row, scanning up from the bottom
        let row = self.columns[col]
            .iter()
            .position(|&cell| cell == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;

        self.columns[col][row] = player.to_cell();
        Ok(row)
    }

    /// Columns that can still accept a token
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of empty cells left on the board
    pub fn empty_cells(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }

    /// Number of tokens placed so far
    pub fn token_count(&self) -> usize {
        ROWS * COLS - self.empty_cells()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Build a board from cells listed as (col, row, player), bypassing gravity.
    /// Only meant for setting up positions in tests.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[(usize, usize, Player)]) -> Self {
        let mut board = Board::new();
        for &(col, row, player) in cells {
            board.columns[col][row] = player.to_cell();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
