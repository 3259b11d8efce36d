//! Interactive human-vs-machine play loop

use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    board::{Board, Player},
    table::StateTable,
};

/// Play one interactive game against the machine.
///
/// Who moves first is decided by a coin flip on `rng`. The machine draws its
/// moves from `table` (growing it for unseen states); the human enters cell
/// indices 0-8, row-major from the top left. Returns the winner, or `None`
/// for a draw.
///
/// Human input is validated: an index outside 0-8 or naming an occupied cell
/// is reported and re-prompted instead of corrupting the board. The machine's
/// own moves stay unchecked, matching the learner's reference behavior.
///
/// # Errors
///
/// Returns an error if the input stream ends before the game does, on IO
/// failure, or if the machine runs out of weighted moves.
pub fn play_game<R: BufRead, W: Write>(
    table: &mut StateTable,
    rng: &mut impl Rng,
    input: &mut R,
    output: &mut W,
) -> crate::Result<Option<Player>> {
    let human_first = rng.random_bool(0.5);
    run_game(table, rng, human_first, input, output)
}

fn run_game<R: BufRead, W: Write>(
    table: &mut StateTable,
    rng: &mut impl Rng,
    human_first: bool,
    input: &mut R,
    output: &mut W,
) -> crate::Result<Option<Player>> {
    let mut board = Board::new();
    let mut human_turn = human_first;
    let mut player = Player::One;
    let mut winner = None;

    writeln!(output, "starting game")?;

    for _ply in 0..9 {
        if human_turn {
            writeln!(output, "{board}")?;
            writeln!(output, "player {player}'s turn")?;
            let cell = read_human_move(&board, input, output)?;
            board.place(cell, player);
            human_turn = false;
        } else {
            let (_, cell) = table.select_move(&board, rng)?;
            board.place(cell, player);
            human_turn = true;
        }

        if let Some(w) = board.winner() {
            winner = Some(w);
            break;
        }
        player = player.opponent();
    }

    match winner {
        Some(w) => writeln!(output, "player {w} won")?,
        None => writeln!(output, "draw")?,
    }
    writeln!(output, "{board}")?;

    Ok(winner)
}

/// Prompt until the human enters a legal cell index for `board`.
fn read_human_move<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> crate::Result<usize> {
    loop {
        writeln!(output, "your move (0-8, top left to bottom right):")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(crate::Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            )));
        }

        match line.trim().parse::<usize>() {
            Ok(position) => match validate_human_move(board, position) {
                Ok(()) => return Ok(position),
                Err(err) => writeln!(output, "{err}")?,
            },
            Err(_) => writeln!(output, "enter a number between 0 and 8")?,
        }
    }
}

/// Check that a human-entered position is on the board and unoccupied.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMoveInput`] otherwise.
pub fn validate_human_move(board: &Board, position: usize) -> crate::Result<()> {
    if position < 9 && board.is_empty(position) {
        Ok(())
    } else {
        Err(crate::Error::InvalidMoveInput { position })
    }
}
