//! Threat scanning for one-move tactics
//!
//! Both scans walk the board row-major, tentatively place the stone on each
//! empty cell, measure the run through it and take the stone back. The first
//! qualifying cell wins, so ties resolve to the smallest (row, col).
//!
//! - Immediate move: the placement completes [`WIN_LENGTH`] or more
//! - Urgent move: the placement makes a run of `WIN_LENGTH - 1` or more

use crate::board::{Board, Pos, Stone, TOTAL_CELLS, WIN_LENGTH};
use crate::rules::longest_run;

/// First empty cell (row-major) where placing `stone` yields a run of `min_run` or more.
///
/// The board is restored before returning.
fn scan_for_run(board: &mut Board, stone: Stone, min_run: u32) -> Option<Pos> {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }

        board.place_stone(pos, stone);
        let run = longest_run(board, pos, stone);
        board.remove_stone(pos);

        if run >= min_run {
            return Some(pos);
        }
    }
    None
}

/// Find a cell that wins immediately for `stone`.
///
/// Used both to take a win (own stone) and to find the block (opponent's stone).
#[must_use]
pub fn find_immediate_move(board: &mut Board, stone: Stone) -> Option<Pos> {
    scan_for_run(board, stone, WIN_LENGTH)
}

/// Find a cell that gives `stone` a four.
#[must_use]
pub fn find_urgent_move(board: &mut Board, stone: Stone) -> Option<Pos> {
    scan_for_run(board, stone, WIN_LENGTH - 1)
}
