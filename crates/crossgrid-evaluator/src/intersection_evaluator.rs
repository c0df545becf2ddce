//! Intersection evaluation: scoring one candidate crossing.
//!
//! This is the first level of the evaluator architecture. Given the current board
//! and one [`Intersection`] produced by `crossgrid_engine::find_intersections`, an
//! [`IntersectionEvaluator`] assigns an integer score (higher is better).
//!
//! # Overlap Density
//!
//! [`OverlapDensityEvaluator`] rewards candidates that share many cells with the
//! board and penalizes candidates that would stretch the bounding box:
//!
//! ```text
//! along  = max(board extent along the candidate, extent the candidate needs)
//! across = board extent perpendicular to the candidate
//! score  = crossings / along / across        (integer division, twice)
//! ```
//!
//! On realistic boards the quotient truncates to zero for most candidates, so the
//! selector's tie rule (first candidate wins) and the finder's scan order decide
//! most placements. This is kept as is; changing the arithmetic changes which
//! grids get generated.

use std::fmt;

use crossgrid_engine::{Board, Intersection};

/// Scores candidate crossings.
pub trait IntersectionEvaluator: fmt::Debug + Send + Sync {
    /// Evaluates `candidate` against the board it would be placed on.
    fn evaluate_intersection(&self, board: &Board, candidate: &Intersection) -> usize;
}

/// Crossing count divided by the board extents the candidate would occupy.
#[derive(Debug, Default, Clone, Copy)]
pub struct OverlapDensityEvaluator;

impl OverlapDensityEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IntersectionEvaluator for OverlapDensityEvaluator {
    fn evaluate_intersection(&self, board: &Board, candidate: &Intersection) -> usize {
        let direction = candidate.direction();
        let along = usize::max(board.extent_along(direction), candidate.required_extent());
        let across = board.extent_along(direction.perpendicular());
        candidate
            .crossings()
            .len()
            .checked_div(along)
            .and_then(|score| score.checked_div(across))
            .unwrap_or(0)
    }
}
