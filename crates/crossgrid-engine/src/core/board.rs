use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

use super::point::{Direction, Point};

/// Maximum extents a board may grow to.
///
/// Placements are validated against these limits; [`Board`] itself never checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLimits {
    pub max_width: usize,
    pub max_height: usize,
}

impl BoardLimits {
    #[must_use]
    pub const fn new(max_width: usize, max_height: usize) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Limit along `direction`: width for horizontal words, height for vertical ones.
    #[must_use]
    pub const fn along(&self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.max_width,
            Direction::Vertical => self.max_height,
        }
    }

    /// Longest word that fits in at least one direction.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        usize::max(self.max_width, self.max_height)
    }
}

/// One occupied cell of a [`Board`].
///
/// When a second word crosses an occupied cell, the record of the crossing word
/// replaces the previous one: the letter is unchanged, `direction`, `root` and
/// `word` now describe the newer word, and `intersection` becomes `true`. The
/// earlier word's ownership of the cell is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedChar {
    root: Point,
    point: Point,
    letter: char,
    direction: Direction,
    word: Arc<str>,
    intersection: bool,
}

impl PlacedChar {
    /// Root of the word that owns this cell.
    #[must_use]
    pub fn root(&self) -> Point {
        self.root
    }

    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Direction of the word that owns this cell.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Full text of the word that owns this cell.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Whether this cell is shared by two words.
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.intersection
    }
}

/// A word placed on a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{text}@{root}:{direction}")]
pub struct PlacedWord {
    text: Arc<str>,
    root: Point,
    direction: Direction,
}

impl PlacedWord {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn root(&self) -> Point {
        self.root
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of letters (cells) in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cells covered by the word, paired with their letters, starting at the root.
    pub fn letters(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        (0..).zip(self.text.chars()).map(|(i, letter)| {
            (self.root.offset(self.direction, i), letter)
        })
    }
}

/// Crossword grid under construction.
///
/// The board owns every placed word and every occupied cell. Words are only ever
/// added; nothing is moved or removed. All mutation goes through
/// [`Board::place_word`], which keeps the cell map, the ordered word list and the
/// root index consistent with each other.
///
/// # Coordinate system
///
/// ```text
/// ------> x, width
/// |
/// |
/// v y, height
/// ```
///
/// [`Board::width`] and [`Board::height`] describe the bounding box of all
/// placed words, anchored at `(0, 0)`. They grow monotonically.
///
/// # Example
///
/// ```
/// use crossgrid_engine::{Board, Direction, Point};
///
/// let mut board = Board::new();
/// board.place_word("cat", Point::ORIGIN, Direction::Horizontal);
/// board.place_word("tan", Point::new(2, 0), Direction::Vertical);
///
/// assert_eq!((board.width(), board.height()), (3, 3));
/// assert!(board.cell(Point::new(2, 0)).unwrap().is_intersection());
/// assert_eq!(board.word_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: HashMap<Point, PlacedChar>,
    words: Vec<PlacedWord>,
    word_index_by_root: HashMap<Point, usize>,
    width: usize,
    height: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Board extent along `direction`.
    #[must_use]
    pub fn extent_along(&self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Placed words in placement order.
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Returns the most recently placed word rooted at `root`.
    #[must_use]
    pub fn word_at(&self, root: Point) -> Option<&PlacedWord> {
        self.word_index_by_root.get(&root).map(|&i| &self.words[i])
    }

    /// Returns the root of the first placed word with the given text.
    #[must_use]
    pub fn root_of(&self, text: &str) -> Option<Point> {
        self.words
            .iter()
            .find(|w| w.text() == text)
            .map(PlacedWord::root)
    }

    #[must_use]
    pub fn cell(&self, point: Point) -> Option<&PlacedChar> {
        self.cells.get(&point)
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, point: Point) -> bool {
        self.cells.contains_key(&point)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells shared by two words.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.cells.values().filter(|c| c.intersection).count()
    }

    /// Occupied cells in column-major scan order: `x` outer, `y` inner.
    ///
    /// Candidate search depends on this order being stable.
    pub fn cells_in_scan_order(&self) -> impl Iterator<Item = &PlacedChar> + '_ {
        let width = coord(self.width);
        let height = coord(self.height);
        (0..width).flat_map(move |x| (0..height).filter_map(move |y| self.cell(Point::new(x, y))))
    }

    /// Writes `text` onto the board starting at `root` along `direction`.
    ///
    /// Each covered cell receives a new [`PlacedChar`]. A cell that was already
    /// occupied is replaced and flagged as an intersection. No legality check is
    /// performed; validate with [`crate::check_placement`] first.
    ///
    /// # Panics
    ///
    /// Panics if `root` has a negative coordinate.
    pub fn place_word(&mut self, text: &str, root: Point, direction: Direction) {
        let word = PlacedWord {
            text: Arc::from(text),
            root,
            direction,
        };

        let end = extent(root.along(direction), word.len());
        match direction {
            Direction::Horizontal => {
                self.width = usize::max(self.width, end);
                self.height = usize::max(self.height, 1);
            }
            Direction::Vertical => {
                self.height = usize::max(self.height, end);
                self.width = usize::max(self.width, 1);
            }
        }

        for (point, letter) in word.letters() {
            let intersection = self.cells.contains_key(&point);
            self.cells.insert(
                point,
                PlacedChar {
                    root,
                    point,
                    letter,
                    direction,
                    word: Arc::clone(&word.text),
                    intersection,
                },
            );
        }

        self.word_index_by_root.insert(root, self.words.len());
        self.words.push(word);
    }
}

fn extent(start: i32, len: usize) -> usize {
    let start = usize::try_from(start)
        .unwrap_or_else(|_| panic!("word root must not be negative, got {start}"));
    start + len
}

fn coord(extent: usize) -> i32 {
    i32::try_from(extent).unwrap_or_else(|_| panic!("board extent {extent} exceeds i32"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.width(), 0);
        assert_eq!(board.height(), 0);
        assert_eq!(board.area(), 0);
        assert!(board.is_empty());
        assert_eq!(board.cells_in_scan_order().count(), 0);
    }

    #[test]
    fn test_place_horizontal_word() {
        let mut board = Board::new();
        board.place_word("dog", Point::new(1, 0), Direction::Horizontal);

        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 1, "orthogonal extent is floored at 1");
        for (i, letter) in (1..).zip("dog".chars()) {
            let cell = board.cell(Point::new(i, 0)).unwrap();
            assert_eq!(cell.letter(), letter);
            assert_eq!(cell.direction(), Direction::Horizontal);
            assert_eq!(cell.root(), Point::new(1, 0));
            assert_eq!(cell.word(), "dog");
            assert!(!cell.is_intersection());
        }
        assert!(!board.is_occupied(Point::ORIGIN));
    }

    #[test]
    fn test_place_vertical_word() {
        let mut board = Board::new();
        board.place_word("owl", Point::new(0, 2), Direction::Vertical);
        assert_eq!(board.width(), 1);
        assert_eq!(board.height(), 5);
        assert_eq!(board.cell(Point::new(0, 4)).unwrap().letter(), 'l');
    }

    #[test]
    fn test_crossing_replaces_cell_record() {
        let mut board = Board::new();
        board.place_word("cat", Point::ORIGIN, Direction::Horizontal);
        board.place_word("tan", Point::new(2, 0), Direction::Vertical);

        let shared = board.cell(Point::new(2, 0)).unwrap();
        assert!(shared.is_intersection());
        assert_eq!(shared.letter(), 't');
        assert_eq!(shared.direction(), Direction::Vertical);
        assert_eq!(shared.word(), "tan");
        assert_eq!(shared.root(), Point::new(2, 0));

        assert_eq!(board.intersection_count(), 1);
        assert_eq!(board.occupied_count(), 5);
    }

    #[test]
    fn test_extents_never_shrink() {
        let mut board = Board::new();
        board.place_word("elephant", Point::ORIGIN, Direction::Horizontal);
        board.place_word("tan", Point::new(7, 0), Direction::Vertical);
        board.place_word("nap", Point::new(7, 2), Direction::Horizontal);
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 3);
        board.place_word("ha", Point::new(4, 0), Direction::Vertical);
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 3);
    }

    #[test]
    fn test_word_lookup_tables() {
        let mut board = Board::new();
        board.place_word("cat", Point::ORIGIN, Direction::Horizontal);
        board.place_word("tan", Point::new(2, 0), Direction::Vertical);

        assert_eq!(board.word_count(), 2);
        assert_eq!(board.root_of("tan"), Some(Point::new(2, 0)));
        assert_eq!(board.root_of("dog"), None);
        assert_eq!(board.word_at(Point::ORIGIN).unwrap().text(), "cat");
        assert_eq!(board.words()[1].to_string(), "tan@(2, 0):vertical");
    }

    #[test]
    fn test_scan_order_is_column_major() {
        let mut board = Board::new();
        board.place_word("cat", Point::ORIGIN, Direction::Horizontal);
        board.place_word("coo", Point::ORIGIN, Direction::Vertical);

        let order: Vec<_> = board.cells_in_scan_order().map(PlacedChar::point).collect();
        assert_eq!(
            order,
            [
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(2, 0),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "must not be negative")]
    fn test_negative_root_panics() {
        let mut board = Board::new();
        board.place_word("cat", Point::new(-1, 0), Direction::Horizontal);
    }
}
