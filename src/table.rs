//! The learned state table and weighted move selection

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{board::Board, symmetry};

/// Initial weight given to each legal cell of a fresh entry
pub const INITIAL_WEIGHT: i32 = 10;

/// One learned state: the board pattern seen at creation time and a weight
/// per cell.
///
/// Weights are signed: credit assignment may drive a weight, or the whole
/// sum, to zero or below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    pattern: Board,
    weights: [i32; 9],
}

impl StateEntry {
    /// Create a fresh entry for a board: the pattern is stored unmodified and
    /// every cell that is empty on it starts at [`INITIAL_WEIGHT`], occupied
    /// cells at 0.
    fn fresh(board: &Board) -> Self {
        let mut weights = [0; 9];
        for (pos, weight) in weights.iter_mut().enumerate() {
            if board.is_empty(pos) {
                *weight = INITIAL_WEIGHT;
            }
        }
        StateEntry {
            pattern: *board,
            weights,
        }
    }

    /// The board pattern this entry was created from.
    ///
    /// The pattern stands for its whole symmetry class; a caller that looked
    /// up a differently-oriented board must keep its own copy of that board.
    pub fn pattern(&self) -> &Board {
        &self.pattern
    }

    /// Per-cell weights, indexed in the pattern's orientation
    pub fn weights(&self) -> &[i32; 9] {
        &self.weights
    }

    /// Sum of all cell weights
    pub fn total_weight(&self) -> i32 {
        self.weights.iter().sum()
    }
}

/// Growable collection of learned states, keyed by symmetry class.
///
/// Entries are only ever appended, and only for boards no existing entry
/// matches, so at most one entry per symmetry class exists at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTable {
    entries: Vec<StateEntry>,
}

impl StateTable {
    /// Create a table holding the single entry for the empty board
    pub fn new() -> Self {
        StateTable {
            entries: vec![StateEntry::fresh(&Board::new())],
        }
    }

    /// Number of learned states
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by index
    pub fn entry(&self, index: usize) -> &StateEntry {
        &self.entries[index]
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &StateEntry> {
        self.entries.iter()
    }

    /// Find the entry whose pattern matches `board` under any of the 8
    /// symmetries, creating a fresh one on a miss. Returns the entry index.
    pub fn find_or_create(&mut self, board: &Board) -> usize {
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| symmetry::matches(board, entry.pattern()))
        {
            return index;
        }

        self.entries.push(StateEntry::fresh(board));
        self.entries.len() - 1
    }

    /// Select a move for `board` by weighted random sampling.
    ///
    /// Looks up (or creates) the board's entry, draws `r` uniformly from
    /// `[1, total]` over the entry's weight sum, and returns the first cell
    /// index whose running cumulative weight reaches `r`, together with the
    /// entry index.
    ///
    /// The returned cell index is in the *entry pattern's* orientation. When
    /// the entry was matched through a non-identity symmetry it may name a
    /// cell that is occupied on `board`; the reference machine plays it
    /// regardless, and so does the self-play driver.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMove`] when the weight sum is zero or
    /// negative, which makes the draw range empty.
    pub fn select_move(&mut self, board: &Board, rng: &mut impl Rng) -> crate::Result<(usize, usize)> {
        let index = self.find_or_create(board);
        let entry = &self.entries[index];

        let total = entry.total_weight();
        if total <= 0 {
            return Err(crate::Error::NoLegalMove { total });
        }

        let r = rng.random_range(1..=total);
        let mut cumulative = 0;
        for (cell, &weight) in entry.weights.iter().enumerate() {
            cumulative += weight;
            if cumulative >= r {
                return Ok((index, cell));
            }
        }

        // The cumulative sum ends at total >= r, so the loop always returns;
        // fall back to the last cell for safety.
        Ok((index, entry.weights.len() - 1))
    }

    /// Add `delta` to the weight of `cell` in the entry at `index`
    pub fn reinforce(&mut self, index: usize, cell: usize, delta: i32) {
        self.entries[index].weights[cell] += delta;
    }
}

impl Default for StateTable {
    fn default() -> Self {
        Self::new()
    }
}
