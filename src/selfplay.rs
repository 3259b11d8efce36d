//! Self-play training driver

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board::{Board, Player},
    credit,
    table::StateTable,
};

/// Default number of self-play games to train on
pub const DEFAULT_ITERATIONS: usize = 300;

/// The (entry index, chosen cell) decisions of one game, in play order
pub type Trajectory = Vec<(usize, usize)>;

/// Result of a single self-play game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub trajectory: Trajectory,
}

/// Configuration for a training run
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// Number of self-play games
    pub iterations: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

/// Self-play driver: plays complete games against itself and feeds each
/// finished game's trajectory to the credit updater.
///
/// Holds no state across games except the RNG; the state table being trained
/// is passed through explicitly.
pub struct Trainer {
    config: TrainerConfig,
    rng: StdRng,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Trainer { config, rng }
    }

    /// Train a fresh state table over the configured number of games.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::NoLegalMove`] if a game reaches a state
    /// whose weights have been exhausted by penalties.
    pub fn train(&mut self) -> crate::Result<StateTable> {
        self.train_observed(|_, _| {})
    }

    /// Train, calling `observe(game_number, winner)` after each game.
    pub fn train_observed(
        &mut self,
        mut observe: impl FnMut(usize, Option<Player>),
    ) -> crate::Result<StateTable> {
        let mut table = StateTable::new();
        for game in 0..self.config.iterations {
            let record = self.play_game(&mut table)?;
            observe(game + 1, record.winner);
        }
        Ok(table)
    }

    /// Play one self-play game against `table`, applying the credit update if
    /// the game produced a winner. Draws leave the table untouched.
    ///
    /// Moves are applied unchecked: when the selector answers through a
    /// symmetry-matched entry it can name an occupied cell, which gets
    /// overwritten exactly as the reference machine does. Such a corrupted
    /// game may run its nine plies without a detected winner and score as a
    /// draw.
    pub fn play_game(&mut self, table: &mut StateTable) -> crate::Result<GameRecord> {
        let mut board = Board::new();
        let mut trajectory: Trajectory = Vec::with_capacity(9);
        let mut player = Player::One;
        let mut winner = None;

        for _ply in 0..9 {
            let (entry, cell) = table.select_move(&board, &mut self.rng)?;
            board.place(cell, player);
            trajectory.push((entry, cell));

            if let Some(w) = board.winner() {
                winner = Some(w);
                break;
            }
            player = player.opponent();
        }

        if let Some(w) = winner {
            credit::apply(table, &trajectory, w);
        }

        Ok(GameRecord { winner, trajectory })
    }
}
