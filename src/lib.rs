//! Gomoku AI Engine
//!
//! A move-selection engine for five-in-a-row on a 9x9 board:
//! - 5-in-a-row to win (overlines allowed)
//! - Symmetric sides: every call names the side to play and its opponent
//! - Three strength levels plus a fallback profile
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line analysis, win and draw detection
//! - [`eval`]: Static position evaluation
//! - [`search`]: Candidate generation, threat scanning, alpha-beta search
//! - [`difficulty`]: Named strength presets
//! - [`engine`]: Move selector integrating all components
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//! engine.set_difficulty("medium");
//!
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! // AI responds as White
//! let pos = engine.best_move(&board, Stone::White, Stone::Black);
//! board.place_stone(pos, Stone::White);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Search Priority
//!
//! The AI engine follows this search priority:
//! 1. Random move (easy level, by chance)
//! 2. Immediate winning move
//! 3. Block the opponent's immediate win
//! 4. Make or stop a four (medium and hard)
//! 5. Alpha-Beta search over nearby candidates

pub mod board;
pub mod difficulty;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, MoveError, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use difficulty::{Difficulty, DifficultyProfile, ParseDifficultyError};
pub use engine::{AIEngine, MoveResult, SearchType};
