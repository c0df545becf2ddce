//! Placement validation and candidate search.
//!
//! A word joins the board only by crossing a letter that is already there. For a
//! given word, [`find_intersections`] walks the occupied cells in scan order and
//! asks [`check_placement`] whether the word fits through each matching letter in
//! the perpendicular direction. Accepted positions come back as [`Intersection`]
//! candidates.
//!
//! # Example
//!
//! ```
//! use crossgrid_engine::{Board, BoardLimits, Direction, Point, find_intersections};
//!
//! let mut board = Board::new();
//! board.place_word("cat", Point::ORIGIN, Direction::Horizontal);
//!
//! let candidates = find_intersections(&board, &BoardLimits::new(8, 8), "tan");
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].root(), Point::new(2, 0));
//! assert_eq!(candidates[0].direction(), Direction::Vertical);
//! ```

pub use self::{intersection::*, placement::*};

mod intersection;
mod placement;
