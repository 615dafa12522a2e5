//! Evaluation module for Gomoku positions
//!
//! The evaluation considers:
//! - Line windows (ones through fives) held by a single side
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_lines, evaluate_positions};
pub use patterns::{line_value, PatternScore};
