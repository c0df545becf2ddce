use crate::core::{
    board::{Board, BoardLimits},
    point::{Direction, Point},
};

use super::placement::{Placement, check_placement};

/// A legal way to cross `word` into the current board.
///
/// Candidates are short-lived: they are produced by [`find_intersections`] and
/// consumed when one of them is selected and placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    placement: Placement,
    length: usize,
}

impl Intersection {
    #[must_use]
    pub fn root(&self) -> Point {
        self.placement.root()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.placement.direction()
    }

    /// Occupied cells this candidate shares with placed words.
    #[must_use]
    pub fn crossings(&self) -> &[Point] {
        self.placement.crossings()
    }

    /// Length of the candidate word.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Extent the board would need along this candidate's direction to contain it.
    #[must_use]
    pub fn required_extent(&self) -> usize {
        usize::try_from(self.root().along(self.direction())).unwrap_or(0) + self.length
    }
}

/// Collects every legal crossing of `word` against the words already on `board`.
///
/// Occupied cells are visited in [`Board::cells_in_scan_order`]. For each cell,
/// every position in `word` holding the cell's letter is tried in the direction
/// perpendicular to the cell's owner. Candidates are returned in discovery
/// order; an empty result means the word cannot be attached yet.
#[must_use]
pub fn find_intersections(board: &Board, limits: &BoardLimits, word: &str) -> Vec<Intersection> {
    let letters: Vec<char> = word.chars().collect();
    let mut intersections = vec![];
    for cell in board.cells_in_scan_order() {
        let direction = cell.direction().perpendicular();
        for (offset, _) in letters
            .iter()
            .enumerate()
            .filter(|&(_, &letter)| letter == cell.letter())
        {
            if let Some(placement) =
                check_placement(board, limits, &letters, offset, cell.point(), direction)
            {
                intersections.push(Intersection {
                    placement,
                    length: letters.len(),
                });
            }
        }
    }
    intersections
}
