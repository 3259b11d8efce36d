//! Board state representation and winner detection

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::One),
            'O' | 'o' => Some(Cell::Two),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// A 3x3 Tic-Tac-Toe board in row-major order.
///
/// Boards are value types; two boards with the same cells are the same board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a 9-character string ('.', 'X', 'O'), whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly 9 cell
    /// characters or any character is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength { got: chars.len() });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Place a player's piece at a position, overwriting whatever is there.
    ///
    /// This is deliberately unchecked: the move selector can pick a cell that
    /// is occupied on the acting board when its state-table entry was matched
    /// through a non-identity symmetry, and the reference machine applies that
    /// move anyway. Callers wanting legality checks must validate first (see
    /// [`crate::play`] for the human-input path).
    pub fn place(&mut self, pos: usize, player: Player) {
        self.cells[pos] = player.to_cell();
    }

    /// Determine the winner, if any.
    ///
    /// Lines are scanned in a fixed order: main diagonal and anti-diagonal for
    /// player one, the same for player two, then for each index 0..3 the row
    /// and column pair, again player one before player two. The order matters
    /// on corrupted boards where both players could hold a line.
    pub fn winner(&self) -> Option<Player> {
        const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

        for diagonal in &DIAGONALS {
            if self.line_held_by(diagonal, Player::One) {
                return Some(Player::One);
            }
        }
        for diagonal in &DIAGONALS {
            if self.line_held_by(diagonal, Player::Two) {
                return Some(Player::Two);
            }
        }

        for i in 0..3 {
            let row = [3 * i, 3 * i + 1, 3 * i + 2];
            let column = [i, i + 3, i + 6];
            if self.line_held_by(&row, Player::One) || self.line_held_by(&column, Player::One) {
                return Some(Player::One);
            }
            if self.line_held_by(&row, Player::Two) || self.line_held_by(&column, Player::Two) {
                return Some(Player::Two);
            }
        }

        None
    }

    fn line_held_by(&self, line: &[usize; 3], player: Player) -> bool {
        let target = player.to_cell();
        line.iter().all(|&idx| self.cells[idx] == target)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if i % 3 == 2 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
