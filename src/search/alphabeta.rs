//! Alpha-Beta minimax search
//!
//! This module implements the adversarial search used by the move selector.
//! It runs plain minimax with alpha-beta pruning on a single shared board,
//! placing and removing stones as it descends.
//!
//! # Features
//!
//! - Terminal five-in-a-row detection at every node, before the depth check
//! - Static evaluation at the horizon
//! - Move generation with proximity filtering and a fixed branching cap
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::search::{Searcher, INF};
//!
//! let mut searcher = Searcher::new(1);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! let score = searcher.minimax(&mut board, 2, false, Stone::Black, Stone::White, -INF, INF);
//! println!("score {score} after {} nodes", searcher.stats().nodes);
//! ```

use crate::board::{Board, Stone};
use crate::eval::{evaluate, PatternScore};
use crate::rules::has_five_in_row;

use super::movegen::candidates;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = PatternScore::WIN * 10;

/// Maximum candidates tried at any search node
pub const SEARCH_CANDIDATE_CAP: usize = 15;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (every `minimax` call)
    pub nodes: u64,
    /// Cutoffs where `beta <= alpha` stopped a node early
    pub beta_cutoffs: u64,
}

/// Depth-limited minimax searcher.
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Neighborhood radius for candidate generation
    radius: u8,
    /// Branching cap applied at every node
    max_candidates: usize,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher generating candidates within `radius` of existing stones.
    #[must_use]
    pub fn new(radius: u8) -> Self {
        Self::with_candidate_cap(radius, SEARCH_CANDIDATE_CAP)
    }

    /// Create a searcher with an explicit per-node candidate cap.
    #[must_use]
    pub fn with_candidate_cap(radius: u8, max_candidates: usize) -> Self {
        Self {
            radius,
            max_candidates: max_candidates.max(1),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Minimax with alpha-beta pruning, scored from `me`'s perspective.
    ///
    /// `maximizing` selects whose ply this is: `me` on maximizing plies,
    /// `opponent` on minimizing ones. Every stone placed is removed again
    /// before the next candidate is tried, so `board` is unchanged on return.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        me: Stone,
        opponent: Stone,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        // Terminal: full-board scan, regardless of remaining depth
        if has_five_in_row(board, me) {
            return PatternScore::WIN;
        }
        if has_five_in_row(board, opponent) {
            return -PatternScore::WIN;
        }

        if depth == 0 {
            return evaluate(board, me, opponent);
        }

        let mut moves = candidates(board, self.radius);
        if moves.is_empty() {
            return 0;
        }
        moves.truncate(self.max_candidates);

        if maximizing {
            let mut best_score = -INF;
            for mov in moves {
                board.place_stone(mov, me);
                let score = self.minimax(board, depth - 1, false, me, opponent, alpha, beta);
                board.remove_stone(mov);

                best_score = best_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best_score
        } else {
            let mut best_score = INF;
            for mov in moves {
                board.place_stone(mov, opponent);
                let score = self.minimax(board, depth - 1, true, me, opponent, alpha, beta);
                board.remove_stone(mov);

                best_score = best_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best_score
        }
    }
}
