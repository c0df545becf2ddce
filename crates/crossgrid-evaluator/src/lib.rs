//! Evaluator system for building and ranking crossword boards.
//!
//! This crate implements a three-level evaluation architecture:
//!
//! 1. **Intersection Evaluation** ([`intersection_evaluator`]) - Scores one candidate
//!    crossing for the word being placed.
//!
//! 2. **Intersection Selection** ([`intersection_selector`]) - Picks the best candidate
//!    for a word; [`board_generator`] uses it to build a whole board greedily.
//!
//! 3. **Board Evaluation** ([`board_evaluator`]) - Scores a finished board with a
//!    fitness function so the search can keep the best of many attempts.
//!
//! # Architecture
//!
//! ```text
//! Board Evaluation (fitness of a finished board)
//!     ↑ ranks output of
//! Board Generation (greedy placement with deferral)
//!     ↓ uses
//! Intersection Selection (pick best candidate)
//!     ↓ uses
//! Intersection Evaluation (score single candidate)
//! ```
//!
//! # Supporting Modules
//!
//! - [`board_analysis`] - Lazily computed board metrics (empty regions, word counts by
//!   direction, intersections) used by the fitness function
//!
//! # Example: Generating and Scoring a Board
//!
//! ```rust
//! use crossgrid_engine::BoardLimits;
//! use crossgrid_evaluator::{
//!     board_evaluator::{BoardEvaluator, FitnessEvaluator},
//!     board_generator::BoardGenerator,
//!     intersection_selector::IntersectionSelector,
//! };
//!
//! let generator = BoardGenerator::new(BoardLimits::new(8, 8), IntersectionSelector::default());
//! let board = generator.generate(vec!["tan".into(), "ant".into(), "nat".into()]);
//!
//! let fitness = FitnessEvaluator::new(2);
//! assert!(board.word_count() >= 2);
//! assert!(fitness.evaluate_board(&board) > -1_000_000);
//! ```

pub mod board_analysis;
pub mod board_evaluator;
pub mod board_generator;
pub mod intersection_evaluator;
pub mod intersection_selector;
