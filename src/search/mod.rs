//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation near existing stones
//! - Threat scanning for immediate wins and fours
//! - Alpha-Beta minimax search

pub mod alphabeta;
pub mod movegen;
pub mod threat;

pub use alphabeta::{SearchStats, Searcher, INF, SEARCH_CANDIDATE_CAP};
pub use movegen::candidates;
pub use threat::{find_immediate_move, find_urgent_move};
