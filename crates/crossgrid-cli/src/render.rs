use std::fmt;

use crossgrid_engine::{Board, Direction, PlacedChar, Point};

/// Text rendering of a board with column and row indexes.
///
/// Each occupied cell shows its letter and a marker: `+` for a shared cell, `>` or
/// `^` for the direction of the owning word.
///
/// ```text
///     0   1   2
///   +---+---+---+
/// 0 | c>| a>| t+|
///   +---+---+---+
/// 1 |   |   | a^|
///   +---+---+---+
/// ```
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoardGrid<'a> {
    board: &'a Board,
}

impl<'a> BoardGrid<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self { board }
    }
}

impl fmt::Display for BoardGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.board.width();
        let height = self.board.height();

        write!(f, "   ")?;
        for x in 0..width {
            write!(f, "{x:^3} ")?;
        }
        writeln!(f)?;

        let border = format!("  +{}", "---+".repeat(width));
        writeln!(f, "{border}")?;

        for y in 0..height {
            write!(f, "{y:<2}|")?;
            for x in 0..width {
                match self.board.cell(point(x, y)) {
                    Some(cell) => write!(f, " {}{}|", cell.letter(), marker(cell))?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}

fn marker(cell: &PlacedChar) -> char {
    if cell.is_intersection() {
        return '+';
    }
    match cell.direction() {
        Direction::Horizontal => '>',
        Direction::Vertical => '^',
    }
}

fn point(x: usize, y: usize) -> Point {
    let x = i32::try_from(x).unwrap_or(i32::MAX);
    let y = i32::try_from(y).unwrap_or(i32::MAX);
    Point::new(x, y)
}
