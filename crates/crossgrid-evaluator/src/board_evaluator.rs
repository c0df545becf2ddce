//! Board evaluation: fitness of a finished crossword.
//!
//! This is the top level of the evaluator architecture. A [`BoardEvaluator`] turns a
//! complete [`Board`] into one integer score; the search keeps the board with the
//! highest score across all attempts.
//!
//! # Fitness Function
//!
//! [`FitnessEvaluator`] ranks boards in three tiers:
//!
//! ```text
//! area == 0                 -> EMPTY_BOARD_SCORE
//! words < desired           -> UNDERFILLED_BOARD_SCORE + words
//! otherwise                 -> intersection_reward - hole_penalty - balance_penalty
//!
//! where:
//!   hole_penalty        = Σ (region - 3)²  over empty regions larger than 3 cells
//!   balance_penalty     = |horizontal words - vertical words|⁴
//!   intersection_reward = intersections²
//! ```
//!
//! Empty regions are maximal 4-connected groups of empty cells inside the bounding
//! box (see [`BoardAnalysis::empty_regions`]). Small pockets of up to
//! [`HOLE_TOLERANCE`] cells are free; larger ones are penalized quadratically.
//!
//! # Design: Sentinel Tiers
//!
//! The sentinels are far below any score a filled board can reach on realistic
//! limits, so an under-filled board never beats a filled one, while under-filled
//! boards still rank among themselves by how many words they hold.

use std::fmt;

use crossgrid_engine::Board;
use serde::Serialize;

use crate::board_analysis::BoardAnalysis;

/// Score of a board with zero area.
pub const EMPTY_BOARD_SCORE: i64 = -1_000_000_000;

/// Base score of a board holding fewer words than desired.
pub const UNDERFILLED_BOARD_SCORE: i64 = -1_000_000;

/// Largest empty region that carries no penalty.
pub const HOLE_TOLERANCE: usize = 3;

/// Scores finished boards.
pub trait BoardEvaluator: fmt::Debug + Send + Sync {
    /// Evaluates `board` and returns its score (higher is better).
    ///
    /// Implementations must be pure: the same board always yields the same score.
    fn evaluate_board(&self, board: &Board) -> i64;
}

/// Components of a filled board's fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitnessBreakdown {
    pub hole_penalty: i64,
    pub balance_penalty: i64,
    pub intersection_reward: i64,
}

impl FitnessBreakdown {
    /// Computes the breakdown from a board analysis.
    #[must_use]
    pub fn from_analysis(analysis: &BoardAnalysis) -> Self {
        let hole_penalty = analysis
            .empty_regions()
            .iter()
            .filter(|&&size| size > HOLE_TOLERANCE)
            .map(|&size| to_score(size - HOLE_TOLERANCE).saturating_pow(2))
            .fold(0, i64::saturating_add);

        let imbalance = analysis
            .horizontal_word_count()
            .abs_diff(analysis.vertical_word_count());
        let balance_penalty = to_score(imbalance).saturating_pow(4);

        let intersection_reward = to_score(analysis.intersection_count()).saturating_pow(2);

        Self {
            hole_penalty,
            balance_penalty,
            intersection_reward,
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.intersection_reward
            .saturating_sub(self.hole_penalty)
            .saturating_sub(self.balance_penalty)
    }
}

/// Default fitness function for finished boards.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator {
    desired_word_count: usize,
}

impl FitnessEvaluator {
    #[must_use]
    pub fn new(desired_word_count: usize) -> Self {
        Self { desired_word_count }
    }

    #[must_use]
    pub fn desired_word_count(&self) -> usize {
        self.desired_word_count
    }

    /// Returns the fitness components of `board`, or `None` if the board is scored by
    /// one of the sentinel tiers.
    #[must_use]
    pub fn breakdown(&self, board: &Board) -> Option<FitnessBreakdown> {
        if board.area() == 0 || board.word_count() < self.desired_word_count {
            return None;
        }
        Some(FitnessBreakdown::from_analysis(&BoardAnalysis::from_board(
            board,
        )))
    }
}

impl BoardEvaluator for FitnessEvaluator {
    fn evaluate_board(&self, board: &Board) -> i64 {
        if board.area() == 0 {
            return EMPTY_BOARD_SCORE;
        }
        if board.word_count() < self.desired_word_count {
            return UNDERFILLED_BOARD_SCORE + to_score(board.word_count());
        }
        FitnessBreakdown::from_analysis(&BoardAnalysis::from_board(board)).score()
    }
}

fn to_score(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
