//! Intersection selection: choosing which candidate crossing to place.
//!
//! This is the second level of the evaluator architecture. [`IntersectionSelector`]
//! scores every candidate with an [`IntersectionEvaluator`] and keeps the first one
//! whose score is strictly greater than every earlier score. Ties keep the earlier
//! candidate, so the order produced by `crossgrid_engine::find_intersections`
//! decides between equally scored crossings.
//!
//! # Design: Greedy Placement
//!
//! Selection looks only at the word being placed. It never revisits earlier
//! placements or plans ahead for words still in the queue; quality comes from
//! running many independent attempts and keeping the best finished board.

use crossgrid_engine::{Board, Intersection};

use crate::intersection_evaluator::{IntersectionEvaluator, OverlapDensityEvaluator};

/// Picks the best candidate crossing for a word.
#[derive(Debug)]
pub struct IntersectionSelector<'a> {
    evaluator: Box<dyn IntersectionEvaluator + 'a>,
}

impl Default for IntersectionSelector<'_> {
    fn default() -> Self {
        Self::new(Box::new(OverlapDensityEvaluator::new()))
    }
}

impl<'a> IntersectionSelector<'a> {
    /// Creates a new selector with the given intersection evaluator.
    #[must_use]
    pub fn new(evaluator: Box<dyn IntersectionEvaluator + 'a>) -> Self {
        Self { evaluator }
    }

    /// Returns the highest-scoring candidate, or `None` if there are no candidates.
    ///
    /// On equal scores the candidate that appears first wins.
    #[must_use]
    pub fn select_best<'c>(
        &self,
        board: &Board,
        candidates: &'c [Intersection],
    ) -> Option<&'c Intersection> {
        let mut best: Option<(usize, &Intersection)> = None;
        for candidate in candidates {
            let score = self.evaluator.evaluate_intersection(board, candidate);
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }
        best.map(|(_, candidate)| candidate)
    }
}
