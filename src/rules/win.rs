//! Win and draw conditions
//!
//! Win condition: five or more stones in a row (overlines allowed).
//! Draw: every cell occupied with no winner.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

use super::line::longest_run;

/// Check whether the stone at `pos` is part of a winning run for `stone`.
#[inline]
pub fn is_win_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    longest_run(board, pos, stone) >= WIN_LENGTH
}

/// Check if there's 5+ in a row anywhere for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_origin(board, stone).is_some()
}

/// First stone (row-major) of `stone` that lies on a winning run
pub fn find_five_origin(board: &Board, stone: Stone) -> Option<Pos> {
    let stones = board.stones(stone)?;
    stones.iter_ones().find(|&pos| is_win_at(board, pos, stone))
}

/// Check if every cell is occupied
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.stone_count() as usize == crate::board::TOTAL_CELLS
}

/// Check for a winner
///
/// Returns `Some(Stone)` if there's a winner, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}
