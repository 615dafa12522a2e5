//! Pattern scores for Gomoku evaluation
//!
//! Exponential weights so a single higher-order window outweighs any
//! realistic number of lower-order ones.

/// Scores for a length-5 window holding stones of only one side
pub struct PatternScore;

impl PatternScore {
    /// Five in a window (a completed line)
    pub const FIVE: i32 = 10_000;
    /// Four stones, one gap
    pub const FOUR: i32 = 1_000;
    /// Three stones, two gaps
    pub const THREE: i32 = 100;
    /// Two stones, three gaps
    pub const TWO: i32 = 10;
    /// A lone stone
    pub const ONE: i32 = 1;

    /// Terminal score returned by the search when a side has five in a row
    pub const WIN: i32 = 100_000;
}

/// Score of a window holding `count` stones of one side and nothing of the other.
#[inline]
#[must_use]
pub fn line_value(count: u32) -> i32 {
    match count {
        1 => PatternScore::ONE,
        2 => PatternScore::TWO,
        3 => PatternScore::THREE,
        4 => PatternScore::FOUR,
        5 => PatternScore::FIVE,
        _ => 0,
    }
}
