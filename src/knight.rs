//! Minimum knight moves between chessboard squares
//!
//! Breadth-first frontier expansion over the 64 squares of a chessboard:
//! each level holds every square reachable in exactly that many knight moves.

use std::collections::HashSet;

/// Number of squares on the board
pub const SQUARES: usize = 64;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Minimum number of knight moves from `src` to `dest`, both squares given
/// as row-major indices 0-63.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidSquare`] if either index is out of range.
pub fn min_moves(src: usize, dest: usize) -> crate::Result<u32> {
    for square in [src, dest] {
        if square >= SQUARES {
            return Err(crate::Error::InvalidSquare { square });
        }
    }

    if src == dest {
        return Ok(0);
    }

    let mut frontier: HashSet<usize> = HashSet::from([src]);
    let mut moves = 0;
    loop {
        moves += 1;
        let next: HashSet<usize> = frontier.iter().flat_map(|&sq| reachable_from(sq)).collect();
        if next.contains(&dest) {
            return Ok(moves);
        }
        // A knight changes square color every move, so the first level that
        // contains `dest` is at the minimum distance and the loop terminates.
        frontier = next;
    }
}

/// All squares a knight can reach from `square` in one move
fn reachable_from(square: usize) -> Vec<usize> {
    let (rank, file) = ((square / 8) as i32, (square % 8) as i32);
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dr, df)| {
            let (r, f) = (rank + dr, file + df);
            ((0..8).contains(&r) && (0..8).contains(&f)).then(|| (r * 8 + f) as usize)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_square_takes_no_moves() {
        assert_eq!(min_moves(27, 27).unwrap(), 0);
    }

    #[test]
    fn adjacent_knight_move_takes_one() {
        // a8 to b6 in board terms
        assert_eq!(min_moves(0, 17).unwrap(), 1);
    }

    #[test]
    fn corner_to_corner_takes_six() {
        assert_eq!(min_moves(0, 63).unwrap(), 6);
    }

    #[test]
    fn central_diagonal_neighbor_takes_two() {
        assert_eq!(min_moves(27, 36).unwrap(), 2);
    }

    #[test]
    fn corner_diagonal_neighbor_takes_four() {
        // The corner squeezes out the two-move paths that exist mid-board
        assert_eq!(min_moves(0, 9).unwrap(), 4);
    }

    #[test]
    fn corner_moves_are_clipped_to_the_board() {
        let from_corner = reachable_from(0);
        assert_eq!(from_corner.len(), 2);
        assert!(from_corner.contains(&10));
        assert!(from_corner.contains(&17));
    }

    #[test]
    fn out_of_range_square_is_rejected() {
        assert!(matches!(
            min_moves(64, 0),
            Err(crate::Error::InvalidSquare { square: 64 })
        ));
        assert!(matches!(
            min_moves(0, 100),
            Err(crate::Error::InvalidSquare { square: 100 })
        ));
    }
}
