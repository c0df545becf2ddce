use crate::core::{
    board::{Board, BoardLimits},
    point::{Direction, Point},
};

/// A legal position for a word, as accepted by [`check_placement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    root: Point,
    direction: Direction,
    crossings: Vec<Point>,
}

impl Placement {
    #[must_use]
    pub fn root(&self) -> Point {
        self.root
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Already-occupied cells the word would share with existing words.
    #[must_use]
    pub fn crossings(&self) -> &[Point] {
        &self.crossings
    }
}

/// Checks whether `word` can be laid along `direction` so that its letter at
/// `offset` lands on the occupied cell `anchor`.
///
/// The root is found by walking `offset` cells back from `anchor`. The placement
/// is rejected when:
///
/// - the root has a negative coordinate, or the word would run past the limit
///   along `direction`;
/// - the cell just before the root or just after the last letter is occupied, which
///   would merge two words into one run;
/// - a covered cell is occupied by a different letter, by an intersection, or by a
///   word running in the same direction;
/// - a covered empty cell sits next to occupied cells across the word's axis in a
///   way that lets a parallel word touch it without crossing: both immediate
///   neighbours, or a neighbour and the cell beyond it on the same side.
///
/// Horizontal and vertical words obey the same rules with the axes swapped.
#[must_use]
pub fn check_placement(
    board: &Board,
    limits: &BoardLimits,
    word: &[char],
    offset: usize,
    anchor: Point,
    direction: Direction,
) -> Option<Placement> {
    let offset = i32::try_from(offset).ok()?;
    let len = i32::try_from(word.len()).ok()?;

    let start = usize::try_from(anchor.along(direction) - offset).ok()?;
    if start + word.len() > limits.along(direction) {
        return None;
    }

    let root = anchor.offset(direction, -offset);
    if board.is_occupied(root.offset(direction, -1)) || board.is_occupied(root.offset(direction, len))
    {
        return None;
    }

    let across = direction.perpendicular();
    let mut crossings = vec![];
    for (i, &letter) in (0..).zip(word) {
        let point = root.offset(direction, i);
        match board.cell(point) {
            Some(cell) => {
                if cell.letter() != letter || cell.is_intersection() || cell.direction() == direction
                {
                    return None;
                }
                crossings.push(point);
            }
            None => {
                if crowds_parallel_word(board, point, across) {
                    return None;
                }
            }
        }
    }

    Some(Placement {
        root,
        direction,
        crossings,
    })
}

fn crowds_parallel_word(board: &Board, point: Point, across: Direction) -> bool {
    let occupied = |steps| board.is_occupied(point.offset(across, steps));
    (occupied(1) && occupied(-1)) || (occupied(1) && occupied(2)) || (occupied(-1) && occupied(-2))
}
