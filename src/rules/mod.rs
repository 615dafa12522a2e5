//! Game rules for standard Gomoku
//!
//! This module implements the rule set:
//! - Line analysis (longest run through a cell)
//! - Win conditions (5-in-a-row, overlines count)
//! - Draw detection (full board)

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{longest_run, run_length, DIRECTIONS};
pub use win::{check_winner, find_five_origin, has_five_in_row, is_board_full, is_win_at};
