//! Line analysis: contiguous runs through a cell
//!
//! The origin cell is counted as part of the run whether or not it holds
//! the stone; callers place the stone first. Runs longer than
//! [`WIN_LENGTH`](crate::board::WIN_LENGTH) are reported as-is, so an
//! overline still satisfies a `>= WIN_LENGTH` test.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `stone` cells walking from `pos` along (dr, dc), excluding `pos`.
#[inline]
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u32 {
    let mut count = 0;
    let mut step = 1;
    while let Some(next) = pos.offset(dr, dc, step) {
        if board.get(next) != stone {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Length of the run through `pos` along one orientation.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u32 {
    1 + count_direction(board, pos, dr, dc, stone) + count_direction(board, pos, -dr, -dc, stone)
}

/// Longest run of `stone` through `pos` across the four orientations. Always >= 1.
#[must_use]
pub fn longest_run(board: &Board, pos: Pos, stone: Stone) -> u32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| run_length(board, pos, dr, dc, stone))
        .max()
        .unwrap_or(1)
}
