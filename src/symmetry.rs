//! The 8 symmetries of the square, used to deduplicate learned board states

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};

/// A symmetry of the square (dihedral group of order 8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply a left-right reflection before rotating
    pub reflection: bool,
}

impl Symmetry {
    /// Create the identity symmetry
    pub fn identity() -> Self {
        Symmetry {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 symmetries of the square
    pub fn all() -> [Symmetry; 8] {
        let mut symmetries = [Symmetry::identity(); 8];
        let mut i = 0;
        for rotation in [0, 90, 180, 270] {
            for reflection in [false, true] {
                symmetries[i] = Symmetry {
                    rotation,
                    reflection,
                };
                i += 1;
            }
        }
        symmetries
    }

    /// Apply the symmetry to a position (0-8)
    ///
    /// Reflection is applied first (mirror across the vertical axis), then the
    /// rotation, clockwise in 90-degree steps.
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        if self.reflection {
            col = 2 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }

    /// Apply the symmetry to a board
    pub fn apply(&self, board: &Board) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (idx, &cell) in board.cells.iter().enumerate() {
            cells[self.transform_position(idx)] = cell;
        }
        Board { cells }
    }
}

/// Check whether `pattern` equals any of the 8 symmetric variants of `board`.
///
/// This is the state-table matching rule: a stored pattern represents the
/// whole equivalence class of boards under the symmetries of the square.
pub fn matches(board: &Board, pattern: &Board) -> bool {
    Symmetry::all().iter().any(|s| s.apply(board) == *pattern)
}
