//! Heuristic evaluation function for Gomoku board positions
//!
//! This module provides the static evaluation used at the search horizon.
//! It evaluates board positions based on:
//! - Line windows: every length-5 window fully on the board
//! - Positional bonuses (center control)

use crate::board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS, WIN_LENGTH};
use crate::rules::DIRECTIONS;

use super::patterns::line_value;

/// Weight per unit of closeness to the center
const POSITION_WEIGHT: i32 = 2;

/// Evaluate the board from the perspective of `me`.
///
/// Returns a score where:
/// - Positive values indicate advantage for `me`
/// - Negative values indicate advantage for `opponent`
///
/// The evaluation is antisymmetric:
/// `evaluate(b, x, y) == -evaluate(b, y, x)`.
#[must_use]
pub fn evaluate(board: &Board, me: Stone, opponent: Stone) -> i32 {
    evaluate_lines(board, me, opponent) + evaluate_positions(board, me, opponent)
}

/// Sum of window scores over all four orientations.
///
/// A window containing only `me` stones adds `line_value(count)`, one
/// containing only `opponent` stones subtracts it; mixed and empty
/// windows contribute nothing.
pub fn evaluate_lines(board: &Board, me: Stone, opponent: Stone) -> i32 {
    let span = WIN_LENGTH as i32;
    let mut score = 0;

    for idx in 0..TOTAL_CELLS {
        let start = Pos::from_index(idx);
        for &(dr, dc) in &DIRECTIONS {
            if start.offset(dr, dc, span - 1).is_none() {
                continue;
            }

            let mut mine = 0;
            let mut theirs = 0;
            for k in 0..span {
                let Some(cell) = start.offset(dr, dc, k) else {
                    break;
                };
                let stone = board.get(cell);
                if stone == me {
                    mine += 1;
                } else if stone == opponent {
                    theirs += 1;
                }
            }

            if theirs == 0 && mine > 0 {
                score += line_value(mine);
            } else if mine == 0 && theirs > 0 {
                score -= line_value(theirs);
            }
        }
    }

    score
}

/// Center-control score: each stone is worth `(N - distance) * 2`.
pub fn evaluate_positions(board: &Board, me: Stone, opponent: Stone) -> i32 {
    let mut score = 0;
    for pos in board.occupied() {
        let bonus = (BOARD_SIZE as i32 - pos.center_distance()) * POSITION_WEIGHT;
        let stone = board.get(pos);
        if stone == me {
            score += bonus;
        } else if stone == opponent {
            score -= bonus;
        }
    }
    score
}
