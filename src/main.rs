//! Gomoku AI Engine CLI
//!
//! A command-line runner for the engine. Checks the canonical scenarios at
//! every difficulty, then plays a seeded engine-vs-engine game.

use gomoku::rules::{check_winner, is_board_full};
use gomoku::{AIEngine, Board, Difficulty, Pos, SearchType, Stone};

fn main() {
    println!("===========================================");
    println!("       Gomoku AI Engine v0.1.0");
    println!("===========================================");

    for level in Difficulty::ALL {
        println!("\n=== Difficulty: {level} ===");
        let mut engine = AIEngine::with_seed(42);
        engine.set_difficulty(level.name());

        println!("--- Empty Board ---");
        test_empty_board(&mut engine, level);

        println!("--- Find Winning Move ---");
        test_winning_move(&mut engine);

        println!("--- Block Opponent Win ---");
        test_block_opponent(&mut engine);

        println!("--- Urgent Four ---");
        test_urgent_four(&mut engine, level);
    }

    println!("\n--- Self-play: hard (X) vs medium (O) ---");
    self_play(Difficulty::Hard, Difficulty::Medium, 2024);

    println!("\n===========================================");
    println!("          All Scenarios Completed!");
    println!("===========================================");
}

fn report(engine: &mut AIEngine, board: &Board, me: Stone, expected: &[Pos]) -> SearchType {
    let result = engine.get_move_with_stats(board, me, me.opponent());
    println!("  {:?} plays: {}", me, result.best_move);
    println!("  Search type: {:?}", result.search_type);
    println!("  Time: {}ms, nodes: {}", result.time_ms, result.nodes);
    if expected.contains(&result.best_move) {
        println!("  Result: PASS");
    } else if result.search_type == SearchType::Random {
        println!("  Result: RANDOM (easy level chance move)");
    } else {
        println!("  Result: FAIL - expected one of {expected:?}");
    }
    result.search_type
}

fn test_empty_board(engine: &mut AIEngine, level: Difficulty) {
    let board = Board::new();
    let kind = report(engine, &board, Stone::Black, &[Pos::center()]);
    if level == Difficulty::Hard && kind != SearchType::AlphaBeta {
        println!("  Note: unexpected decision step at hard level");
    }
}

fn test_winning_move(engine: &mut AIEngine) {
    let mut board = Board::new();
    for c in 4..8 {
        board.place_stone(Pos::new(4, c), Stone::Black);
    }
    board.place_stone(Pos::new(0, 0), Stone::White);
    board.place_stone(Pos::new(8, 8), Stone::White);
    println!("  Position: Black has 4 at row 4, cols 4-7");
    report(engine, &board, Stone::Black, &[Pos::new(4, 3), Pos::new(4, 8)]);
}

fn test_block_opponent(engine: &mut AIEngine) {
    let mut board = Board::new();
    for c in 2..6 {
        board.place_stone(Pos::new(2, c), Stone::White);
    }
    board.place_stone(Pos::new(6, 6), Stone::Black);
    println!("  Position: White has 4 at row 2, cols 2-5");
    report(engine, &board, Stone::Black, &[Pos::new(2, 1), Pos::new(2, 6)]);
}

fn test_urgent_four(engine: &mut AIEngine, level: Difficulty) {
    let mut board = Board::new();
    for c in 3..6 {
        board.place_stone(Pos::new(3, c), Stone::White);
    }
    board.place_stone(Pos::new(7, 7), Stone::Black);
    println!("  Position: White has 3 at row 3, cols 3-5");
    if level == Difficulty::Easy {
        println!("  (easy skips the four scan, any reply is accepted)");
        let result = engine.get_move_with_stats(&board, Stone::Black, Stone::White);
        println!("  Black plays: {} ({:?})", result.best_move, result.search_type);
        return;
    }
    report(engine, &board, Stone::Black, &[Pos::new(3, 2), Pos::new(3, 6)]);
}

fn self_play(black_level: Difficulty, white_level: Difficulty, seed: u64) {
    let mut black = AIEngine::with_seed(seed);
    black.set_difficulty(black_level.name());
    let mut white = AIEngine::with_seed(seed.wrapping_add(1));
    white.set_difficulty(white_level.name());

    let mut board = Board::new();
    let mut to_move = Stone::Black;
    let mut moves = 0;

    let outcome = loop {
        let engine = if to_move == Stone::Black {
            &mut black
        } else {
            &mut white
        };
        let pos = engine.best_move(&board, to_move, to_move.opponent());
        if let Err(err) = board.make_move(i32::from(pos.row), i32::from(pos.col), to_move) {
            break format!("engine produced an illegal move: {err}");
        }
        moves += 1;

        if let Some(winner) = check_winner(&board) {
            break format!("{winner:?} wins after {moves} moves");
        }
        if is_board_full(&board) {
            break format!("draw after {moves} moves");
        }
        to_move = to_move.opponent();
    };

    print!("{board}");
    println!("  {outcome}");
}
