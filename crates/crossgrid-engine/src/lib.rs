//! Crossword grid primitives and placement rules.
//!
//! - [`core`] holds the data: [`Point`], [`Direction`], [`Board`] and the cell and
//!   word records it owns.
//! - [`engine`] holds the grid-legality logic: [`check_placement`] decides whether a
//!   word may cross an occupied cell, and [`find_intersections`] enumerates every
//!   legal crossing for a word against the current board.
//!
//! Choosing between candidates and scoring finished boards live in
//! `crossgrid-evaluator`.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
