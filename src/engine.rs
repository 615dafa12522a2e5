//! Main AI Engine integrating all search components
//!
//! This module provides the move selector that orchestrates threat scanning,
//! candidate generation and minimax search. The decision follows a priority
//! system, first applicable step wins:
//!
//! 1. **Random move**: easy level only, with probability `randomness`
//! 2. **Immediate win**: any move that completes five for us
//! 3. **Block**: any move that would complete five for the opponent
//! 4. **Urgent fours**: make our own four, else stop theirs (not at easy)
//! 5. **Alpha-Beta**: score every candidate with minimax, break ties toward the center
//! 6. **Fallback**: the center cell when nothing else produced a move
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(7);
//! engine.set_difficulty("hard");
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White, Stone::Black);
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! # assert_eq!(engine.profile(), &Difficulty::Hard.profile());
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::difficulty::DifficultyProfile;
use crate::eval::PatternScore;
use crate::search::{
    candidates, find_immediate_move, find_urgent_move, Searcher, INF, SEARCH_CANDIDATE_CAP,
};

/// Spread of the score noise added below the hard level
const NOISE_AMPLITUDE: f64 = 50.0;

/// Type of search that produced the result.
///
/// This indicates which step of the decision order chose the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Random candidate picked without searching (easy level)
    Random,
    /// Found a move completing five
    ImmediateWin,
    /// Blocks the opponent's five
    Block,
    /// Makes our own four
    UrgentAttack,
    /// Stops the opponent's four
    UrgentDefense,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// No candidate existed; center cell returned
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move chosen
    pub best_move: Pos,
    /// Score backing the choice (tactical steps report fixed scores)
    pub score: i32,
    /// Step of the decision order that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn new(best_move: Pos, score: i32, search_type: SearchType, start: Instant, nodes: u64) -> Self {
        Self {
            best_move,
            score,
            search_type,
            time_ms: start.elapsed().as_millis() as u64,
            nodes,
        }
    }

    #[inline]
    fn tactical(best_move: Pos, search_type: SearchType, start: Instant) -> Self {
        let score = match search_type {
            SearchType::ImmediateWin => PatternScore::WIN,
            SearchType::Block => -PatternScore::WIN,
            SearchType::UrgentAttack => PatternScore::FOUR,
            SearchType::UrgentDefense => -PatternScore::FOUR,
            _ => 0,
        };
        Self::new(best_move, score, search_type, start, 0)
    }
}

/// Main AI Engine for Gomoku.
///
/// Holds the active [`DifficultyProfile`] and the random source used for
/// random moves and score noise. The engine keeps no game state: every call
/// is a function of the board and sides passed in.
///
/// # Configuration
///
/// - Difficulty by name ([`AIEngine::set_difficulty`]) or by profile
/// - Per-node candidate cap of the minimax search
/// - Random source: entropy, a seed, or any [`rand::Rng`]
pub struct AIEngine<R = StdRng> {
    profile: DifficultyProfile,
    /// Candidate cap inside the search, separate from the profile's selector cap
    search_candidate_cap: usize,
    rng: R,
}

impl AIEngine<StdRng> {
    /// Create an engine with the fallback profile, seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(DifficultyProfile::default(), StdRng::from_entropy())
    }

    /// Create a deterministic engine with the fallback profile.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(DifficultyProfile::default(), StdRng::seed_from_u64(seed))
    }
}

impl Default for AIEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    /// Create an engine with an explicit profile and random source.
    #[must_use]
    pub fn with_rng(profile: DifficultyProfile, rng: R) -> Self {
        Self {
            profile,
            search_candidate_cap: SEARCH_CANDIDATE_CAP,
            rng,
        }
    }

    /// Select a preset by name. Unknown names select the fallback profile.
    pub fn set_difficulty(&mut self, name: &str) {
        self.profile = DifficultyProfile::from_name(name);
        debug!(level = name, profile = ?self.profile, "difficulty changed");
    }

    /// Replace the whole profile.
    pub fn set_profile(&mut self, profile: DifficultyProfile) {
        self.profile = profile;
    }

    #[must_use]
    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    /// Set the per-node candidate cap of the minimax search.
    pub fn set_search_candidate_cap(&mut self, cap: usize) {
        self.search_candidate_cap = cap.max(1);
    }

    #[must_use]
    pub fn search_candidate_cap(&self) -> usize {
        self.search_candidate_cap
    }

    /// Get the best move for `me` against `opponent`.
    ///
    /// This is a convenience method that returns only the position.
    /// The caller's board is never modified.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, me: Stone, opponent: Stone) -> Pos {
        self.get_move_with_stats(board, me, opponent).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// Works on a private copy of `board`; scratch stones placed during
    /// scanning and search are removed again before each step returns.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, me: Stone, opponent: Stone) -> MoveResult {
        let start = Instant::now();
        let profile = self.profile;
        let probability = profile.probability();
        let mut work_board = board.clone();

        let result = 'decide: {
            // 1. Random candidate, no search (easy only)
            if profile.allows_random_move() && self.rng.gen_bool(probability) {
                let moves = candidates(&work_board, profile.neighborhood_radius);
                if let Some(&pos) = moves.choose(&mut self.rng) {
                    break 'decide MoveResult::tactical(pos, SearchType::Random, start);
                }
            }

            // 2. Take the win
            if let Some(pos) = find_immediate_move(&mut work_board, me) {
                break 'decide MoveResult::tactical(pos, SearchType::ImmediateWin, start);
            }

            // 3. Block the opponent's win
            if let Some(pos) = find_immediate_move(&mut work_board, opponent) {
                break 'decide MoveResult::tactical(pos, SearchType::Block, start);
            }

            // 4. Fours, attack before defense
            if !profile.is_lowest() {
                if let Some(pos) = find_urgent_move(&mut work_board, me) {
                    break 'decide MoveResult::tactical(pos, SearchType::UrgentAttack, start);
                }
                if let Some(pos) = find_urgent_move(&mut work_board, opponent) {
                    break 'decide MoveResult::tactical(pos, SearchType::UrgentDefense, start);
                }
            }

            // 5. Search
            self.search_root(&mut work_board, me, opponent, start)
        };

        debug_assert_eq!(&work_board, board);
        debug!(
            row = result.best_move.row,
            col = result.best_move.col,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move selected"
        );
        result
    }

    /// Score every candidate with minimax and pick the best, ties toward the center.
    fn search_root(
        &mut self,
        board: &mut Board,
        me: Stone,
        opponent: Stone,
        start: Instant,
    ) -> MoveResult {
        let profile = self.profile;
        let probability = profile.probability();

        let mut moves = candidates(board, profile.neighborhood_radius);
        if let Some(cap) = profile.candidate_cap {
            moves.truncate(cap);
        }

        let mut searcher =
            Searcher::with_candidate_cap(profile.neighborhood_radius, self.search_candidate_cap);
        let depth = profile.search_depth.saturating_sub(1);

        let mut best_score = -INF;
        let mut best_moves: Vec<Pos> = Vec::new();

        for mov in moves {
            board.place_stone(mov, me);
            let mut score = searcher.minimax(board, depth, false, me, opponent, -INF, INF);
            board.remove_stone(mov);

            if !profile.is_highest() && self.rng.gen_bool(probability) {
                let noise = (self.rng.gen::<f64>() - 0.5) * NOISE_AMPLITUDE;
                score += noise as i32;
            }
            trace!(row = mov.row, col = mov.col, score, "candidate scored");

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mov);
            } else if score == best_score {
                best_moves.push(mov);
            }
        }

        let nodes = searcher.stats().nodes;

        // Stable sort keeps candidate order among equally central moves
        best_moves.sort_by_key(|pos| pos.center_distance());
        match best_moves.first() {
            Some(&pos) => MoveResult::new(pos, best_score, SearchType::AlphaBeta, start, nodes),
            None => MoveResult::new(Pos::center(), 0, SearchType::Fallback, start, nodes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::{Difficulty, EASY_CANDIDATE_CAP};
    use rand_chacha::ChaCha8Rng;

    fn engine(level: Difficulty, seed: u64) -> AIEngine<ChaCha8Rng> {
        AIEngine::with_rng(level.profile(), ChaCha8Rng::seed_from_u64(seed))
    }

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_engine_default_profile() {
        let engine = AIEngine::new();
        assert_eq!(engine.profile(), &DifficultyProfile::FALLBACK);
        assert_eq!(engine.search_candidate_cap(), SEARCH_CANDIDATE_CAP);
    }

    #[test]
    fn test_set_difficulty_replaces_profile() {
        let mut engine = AIEngine::with_seed(1);
        engine.set_difficulty("hard");
        assert_eq!(engine.profile(), &DifficultyProfile::HARD);
        engine.set_difficulty("easy");
        assert_eq!(engine.profile(), &DifficultyProfile::EASY);
        engine.set_difficulty("grandmaster");
        assert_eq!(engine.profile(), &DifficultyProfile::FALLBACK);
    }

    #[test]
    fn test_engine_empty_board_hard() {
        let board = Board::new();
        let mut engine = engine(Difficulty::Hard, 3);
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.best_move, Pos::new(4, 4));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(4, 4), (4, 5), (4, 6), (4, 7)], Stone::Black);
        place_all(&mut board, &[(0, 0), (8, 0), (0, 8)], Stone::White);

        for level in [Difficulty::Medium, Difficulty::Hard] {
            let mut engine = engine(level, 11);
            let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
            assert_eq!(result.best_move, Pos::new(4, 3));
            assert_eq!(result.search_type, SearchType::ImmediateWin);
        }
    }

    #[test]
    fn test_win_takes_precedence_over_block() {
        let mut board = Board::new();
        place_all(&mut board, &[(1, 1), (1, 2), (1, 3), (1, 4)], Stone::White);
        place_all(&mut board, &[(7, 2), (7, 3), (7, 4), (7, 5)], Stone::Black);

        let mut engine = engine(Difficulty::Hard, 5);
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert!(result.best_move == Pos::new(7, 1) || result.best_move == Pos::new(7, 6));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 2), (2, 3), (2, 4), (2, 5)], Stone::White);
        board.place_stone(Pos::new(6, 6), Stone::Black);

        let mut engine = engine(Difficulty::Hard, 9);
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.best_move, Pos::new(2, 1));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_urgent_attack_before_defense() {
        let mut board = Board::new();
        place_all(&mut board, &[(6, 3), (6, 4), (6, 5)], Stone::Black);
        place_all(&mut board, &[(1, 3), (1, 4), (1, 5)], Stone::White);

        let mut engine = engine(Difficulty::Medium, 2);
        // Medium randomness only perturbs search scores; the scan is deterministic
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.search_type, SearchType::UrgentAttack);
        assert_eq!(result.best_move, Pos::new(6, 2));

        let result = engine.get_move_with_stats(&board, Stone::White, Stone::Black);
        assert_eq!(result.search_type, SearchType::UrgentAttack);
        assert_eq!(result.best_move, Pos::new(1, 2));
    }

    #[test]
    fn test_urgent_defense() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (3, 4), (3, 5)], Stone::White);
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let mut engine = engine(Difficulty::Hard, 4);
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.search_type, SearchType::UrgentDefense);
        assert_eq!(result.best_move, Pos::new(3, 2));
    }

    #[test]
    fn test_easy_skips_urgent_scan() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (3, 4), (3, 5)], Stone::White);
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let mut profile = DifficultyProfile::EASY;
        profile.randomness = 0.0;
        let mut engine = AIEngine::with_rng(profile, ChaCha8Rng::seed_from_u64(0));
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
    }

    #[test]
    fn test_easy_random_move_is_candidate() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::White);

        let mut profile = DifficultyProfile::EASY;
        profile.randomness = 1.0;
        let mut engine = AIEngine::with_rng(profile, ChaCha8Rng::seed_from_u64(21));
        for _ in 0..10 {
            let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
            assert_eq!(result.search_type, SearchType::Random);
            assert!(board.is_empty(result.best_move));
            assert!(result.best_move.center_distance() <= 2);
        }
    }

    #[test]
    fn test_hard_is_deterministic() {
        let mut board = Board::new();
        place_all(&mut board, &[(4, 4), (3, 5)], Stone::Black);
        place_all(&mut board, &[(4, 5), (5, 3)], Stone::White);

        let mut a = engine(Difficulty::Hard, 100);
        let mut b = engine(Difficulty::Hard, 200);
        let first = a.best_move(&board, Stone::White, Stone::Black);
        for _ in 0..3 {
            assert_eq!(a.best_move(&board, Stone::White, Stone::Black), first);
            assert_eq!(b.best_move(&board, Stone::White, Stone::Black), first);
        }
    }

    #[test]
    fn test_full_board_falls_back_to_center() {
        let mut board = Board::new();
        for idx in 0..crate::board::TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let stone = if (pos.col as usize + 2 * pos.row as usize) % 4 < 2 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_stone(pos, stone);
        }
        let mut engine = engine(Difficulty::Hard, 0);
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.best_move, Pos::center());
        assert_eq!(result.search_type, SearchType::Fallback);
    }

    #[test]
    fn test_board_untouched_by_search() {
        let mut board = Board::new();
        place_all(&mut board, &[(4, 4), (5, 5)], Stone::Black);
        place_all(&mut board, &[(4, 5), (3, 3)], Stone::White);
        let before = board.clone();

        for level in Difficulty::ALL {
            let mut engine = engine(level, 8);
            let _ = engine.best_move(&board, Stone::Black, Stone::White);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut engine = engine(Difficulty::Medium, 33);
        let mut board = Board::new();

        for turn in 0..6 {
            let (me, opp) = if turn % 2 == 0 {
                (Stone::Black, Stone::White)
            } else {
                (Stone::White, Stone::Black)
            };
            let pos = engine.best_move(&board, me, opp);
            assert!(board.is_empty(pos));
            board.place_stone(pos, me);
        }
        assert_eq!(board.stone_count(), 6);
    }

    #[test]
    fn test_easy_cap_limits_root_candidates() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 4), (0, 8)], Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::Black);

        // Rows 0-1 come first, the ring around (4, 4) last
        let moves = candidates(&board, 1);
        assert_eq!(moves.len(), 19);
        let prefix = &moves[..EASY_CANDIDATE_CAP];
        assert!(prefix.iter().all(|p| p.row <= 1));

        let mut profile = DifficultyProfile::EASY;
        profile.randomness = 0.0;
        let mut capped = AIEngine::with_rng(profile, ChaCha8Rng::seed_from_u64(0));
        let result = capped.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(prefix.contains(&result.best_move), "{}", result.best_move);

        profile.candidate_cap = None;
        let mut uncapped = AIEngine::with_rng(profile, ChaCha8Rng::seed_from_u64(0));
        let result = uncapped.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert!(!prefix.contains(&result.best_move), "{}", result.best_move);
        assert!(result.best_move.row >= 3);
    }

    #[test]
    fn test_ties_break_toward_center() {
        // White already has five, so every candidate scores -WIN
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Stone::White);
        board.place_stone(Pos::new(0, 5), Stone::Black);
        assert_eq!(candidates(&board, 2)[0], Pos::new(1, 0));

        let mut engine = engine(Difficulty::Hard, 0);
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(result.score, -PatternScore::WIN);
        assert_eq!(result.best_move, Pos::new(2, 4));
    }

    #[test]
    fn test_score_noise_below_hard_only() {
        let mut board = Board::new();
        place_all(&mut board, &[(4, 4), (3, 5)], Stone::Black);
        place_all(&mut board, &[(4, 5), (5, 3)], Stone::White);

        let mut profile = DifficultyProfile::MEDIUM;
        profile.randomness = 1.0;
        let mut noisy: Vec<i32> = (0..8)
            .map(|seed| {
                let mut engine = AIEngine::with_rng(profile, ChaCha8Rng::seed_from_u64(seed));
                engine.get_move_with_stats(&board, Stone::White, Stone::Black).score
            })
            .collect();
        noisy.sort_unstable();
        noisy.dedup();
        assert!(noisy.len() > 1, "{noisy:?}");

        let exact: Vec<i32> = (0..4)
            .map(|seed| {
                engine(Difficulty::Hard, seed)
                    .get_move_with_stats(&board, Stone::White, Stone::Black)
                    .score
            })
            .collect();
        assert!(exact.windows(2).all(|w| w[0] == w[1]), "{exact:?}");
    }

    #[test]
    fn test_search_reports_nodes() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let mut engine = engine(Difficulty::Hard, 6);
        let result = engine.get_move_with_stats(&board, Stone::White, Stone::Black);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.nodes > 0);
    }
}
