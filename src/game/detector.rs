//! Four-in-a-row detection over a whole board.
//!
//! Every cell is tried as the start of a line, columns first and then rows,
//! and each start is checked in the fixed [`Direction::ALL`] order. The first
//! line found decides the result, which keeps reports deterministic even for
//! positions that could not arise from legal play.

use serde::Serialize;

use super::{Board, Player, COLS, ROWS};

/// Length of a winning line.
pub const LINE_LEN: usize = 4;

/// Current standing of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tie,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Axis along which a line is read, always away from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Right,
    UpRight,
    DownRight,
}

impl Direction {
    /// Check order at each start cell.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::UpRight,
        Direction::DownRight,
    ];

    /// (column step, row step)
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::DownRight => (1, -1),
        }
    }

    /// Whether a full line starting at (col, row) stays on the board.
    fn fits(self, col: usize, row: usize) -> bool {
        let reach = LINE_LEN - 1;
        match self {
            Direction::Up => row + reach < ROWS,
            Direction::Right => col + reach < COLS,
            Direction::UpRight => col + reach < COLS && row + reach < ROWS,
            Direction::DownRight => col + reach < COLS && row >= reach,
        }
    }

    /// The four (col, row) coordinates of the line starting at (col, row).
    /// Callers must check [`Direction::fits`] first.
    fn cells(self, col: usize, row: usize) -> [(usize, usize); LINE_LEN] {
        let (dc, dr) = self.step();
        std::array::from_fn(|i| {
            let i = i as isize;
            (
                (col as isize + dc * i) as usize,
                (row as isize + dr * i) as usize,
            )
        })
    }
}

/// A four-in-a-row found on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub owner: Player,
    pub direction: Direction,
    pub cells: [(usize, usize); LINE_LEN],
}

impl Line {
    pub fn contains(&self, col: usize, row: usize) -> bool {
        self.cells.contains(&(col, row))
    }
}

/// Evaluate the board: a winner, a tie, or a game still in progress.
///
/// A tie needs a completely full board; an open cell keeps the game going
/// even when no line can be completed any more.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(line) = find_line(board) {
        return GameStatus::Won(line.owner);
    }
    if board.empty_cells() == 0 {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}

/// First four-in-a-row in scan order, if any.
pub fn find_line(board: &Board) -> Option<Line> {
    for col in 0..COLS {
        for row in 0..ROWS {
            for direction in Direction::ALL {
                if let Some(line) = line_at(board, col, row, direction) {
                    return Some(line);
                }
            }
        }
    }
    None
}

fn line_at(board: &Board, col: usize, row: usize, direction: Direction) -> Option<Line> {
    if !direction.fits(col, row) {
        return None;
    }
    let cells = direction.cells(col, row);

    // Signs are +1/-1/0, so only four tokens of one player reach 4 in magnitude
    let sum: i8 = cells.iter().map(|&(c, r)| board.get(c, r).sign()).sum();
    if sum.unsigned_abs() as usize != LINE_LEN {
        return None;
    }

    let owner = board.get(col, row).owner()?;
    Some(Line {
        owner,
        direction,
        cells,
    })
}
