//! Candidate move generation
//!
//! Restricts the search to empty cells near existing stones. Candidates are
//! produced in insertion order: stones are visited row-major and each stone's
//! neighborhood is scanned row by row, skipping cells already emitted. The
//! order is stable for a given board, which is what the candidate caps in the
//! search and the move selector rely on.

use crate::board::{Board, Pos, BOARD_SIZE};

/// Generate candidate moves within Chebyshev distance `radius` of any stone.
///
/// An empty board yields the single center cell.
#[must_use]
pub fn candidates(board: &Board, radius: u8) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let radius = i32::from(radius);
    let mut moves = Vec::with_capacity(32);
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];

    for pos in board.occupied() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;

                if !Pos::is_valid(r, c) {
                    continue;
                }

                #[allow(clippy::cast_sign_loss)]
                let (ru, cu) = (r as usize, c as usize);
                if seen[ru][cu] {
                    continue;
                }
                seen[ru][cu] = true;

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let new_pos = Pos::new(r as u8, c as u8);

                if board.is_empty(new_pos) {
                    moves.push(new_pos);
                }
            }
        }
    }

    moves
}
