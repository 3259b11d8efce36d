//! Credit assignment for finished self-play games

use crate::{board::Player, table::StateTable};

/// Weight added to a ply credited as winning
pub const WIN_REWARD: i32 = 3;
/// Weight added to a ply credited as losing
pub const LOSS_PENALTY: i32 = -1;

/// Apply the matchbox machine's credit rule to a finished game.
///
/// Walks the trajectory in ply order. A flag starts at `winner == Player::One`
/// and flips after every ply: plies where it is set get [`WIN_REWARD`], the
/// others [`LOSS_PENALTY`]. The flag tracks ply parity only, not which player
/// actually made each move, so on odd-length games the credited side and the
/// acting side drift apart. That is the original machine's rule, reproduced
/// as-is.
///
/// Draws never reach this function; no update occurs for them.
pub fn apply(table: &mut StateTable, trajectory: &[(usize, usize)], winner: Player) {
    let mut crediting_winner = winner == Player::One;
    for &(entry, cell) in trajectory {
        let delta = if crediting_winner {
            WIN_REWARD
        } else {
            LOSS_PENALTY
        };
        table.reinforce(entry, cell, delta);
        crediting_winner = !crediting_winner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Board, table::INITIAL_WEIGHT};

    fn weight(table: &StateTable, entry: usize, cell: usize) -> i32 {
        table.entry(entry).weights()[cell]
    }

    #[test]
    fn five_ply_game_won_by_player_one() {
        let mut table = StateTable::new();
        // Five plies, all recorded against distinct cells of the root entry
        // so each update is visible in isolation.
        let trajectory = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];

        apply(&mut table, &trajectory, Player::One);

        for cell in [0, 2, 4] {
            assert_eq!(weight(&table, 0, cell), INITIAL_WEIGHT + WIN_REWARD);
        }
        for cell in [1, 3] {
            assert_eq!(weight(&table, 0, cell), INITIAL_WEIGHT + LOSS_PENALTY);
        }
    }

    #[test]
    fn player_two_win_starts_with_a_penalty() {
        let mut table = StateTable::new();
        let trajectory = [(0, 0), (0, 1), (0, 2)];

        apply(&mut table, &trajectory, Player::Two);

        assert_eq!(weight(&table, 0, 0), INITIAL_WEIGHT + LOSS_PENALTY);
        assert_eq!(weight(&table, 0, 1), INITIAL_WEIGHT + WIN_REWARD);
        assert_eq!(weight(&table, 0, 2), INITIAL_WEIGHT + LOSS_PENALTY);
    }

    #[test]
    fn updates_follow_entries_across_the_table() {
        let mut table = StateTable::new();
        let board = Board::from_string("X........").unwrap();
        let second = table.find_or_create(&board);

        apply(&mut table, &[(0, 0), (second, 4)], Player::One);

        assert_eq!(weight(&table, 0, 0), INITIAL_WEIGHT + WIN_REWARD);
        assert_eq!(weight(&table, second, 4), INITIAL_WEIGHT + LOSS_PENALTY);
    }

    #[test]
    fn repeated_penalties_can_push_a_weight_negative() {
        let mut table = StateTable::new();
        for _ in 0..(INITIAL_WEIGHT + 2) {
            apply(&mut table, &[(0, 0), (0, 1)], Player::One);
        }
        assert!(weight(&table, 0, 1) < 0);
    }
}
