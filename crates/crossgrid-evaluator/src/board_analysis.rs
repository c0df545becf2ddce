use std::cell::OnceCell;

use crossgrid_engine::{Board, Direction, Point};

/// Lazily computed metrics of a finished board.
///
/// Each metric is computed on first access and cached, so evaluators only pay for
/// what they read.
#[derive(Debug)]
pub struct BoardAnalysis<'a> {
    board: &'a Board,
    empty_regions: OnceCell<Vec<usize>>,
    word_counts: OnceCell<(usize, usize)>,
    intersection_count: OnceCell<usize>,
}

impl<'a> BoardAnalysis<'a> {
    #[must_use]
    pub fn from_board(board: &'a Board) -> Self {
        Self {
            board,
            empty_regions: OnceCell::new(),
            word_counts: OnceCell::new(),
            intersection_count: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Sizes of the maximal 4-connected regions of empty cells inside the bounding
    /// box, in row-major order of each region's first cell.
    #[must_use]
    pub fn empty_regions(&self) -> &[usize] {
        self.empty_regions.get_or_init(|| {
            let width = self.board.width();
            let height = self.board.height();
            let mut visited: Vec<bool> = (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .map(|(x, y)| self.board.is_occupied(point(x, y)))
                .collect();

            let mut regions = vec![];
            let mut stack = vec![];
            for start in 0..visited.len() {
                if visited[start] {
                    continue;
                }
                visited[start] = true;
                stack.push(start);
                let mut size = 0;
                while let Some(index) = stack.pop() {
                    size += 1;
                    let (x, y) = (index % width, index / width);
                    let neighbours = [
                        (x > 0).then(|| index - 1),
                        (x + 1 < width).then(|| index + 1),
                        (y > 0).then(|| index - width),
                        (y + 1 < height).then(|| index + width),
                    ];
                    for next in neighbours.into_iter().flatten() {
                        if !visited[next] {
                            visited[next] = true;
                            stack.push(next);
                        }
                    }
                }
                regions.push(size);
            }
            regions
        })
    }

    /// Number of placed words running horizontally.
    #[must_use]
    pub fn horizontal_word_count(&self) -> usize {
        self.word_counts().0
    }

    /// Number of placed words running vertically.
    #[must_use]
    pub fn vertical_word_count(&self) -> usize {
        self.word_counts().1
    }

    fn word_counts(&self) -> (usize, usize) {
        *self.word_counts.get_or_init(|| {
            let horizontal = self
                .board
                .words()
                .iter()
                .filter(|w| w.direction() == Direction::Horizontal)
                .count();
            (horizontal, self.board.word_count() - horizontal)
        })
    }

    /// Number of cells flagged as shared by two words.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        *self
            .intersection_count
            .get_or_init(|| self.board.intersection_count())
    }
}

fn point(x: usize, y: usize) -> Point {
    let x = i32::try_from(x).unwrap_or(i32::MAX);
    let y = i32::try_from(y).unwrap_or(i32::MAX);
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_regions() {
        let board = Board::new();
        let analysis = BoardAnalysis::from_board(&board);
        assert!(analysis.empty_regions().is_empty());
        assert_eq!(analysis.horizontal_word_count(), 0);
        assert_eq!(analysis.vertical_word_count(), 0);
    }

    #[test]
    fn test_full_row_has_no_regions() {
        let mut board = Board::new();
        board.place_word("elephant", Point::ORIGIN, Direction::Horizontal);
        let analysis = BoardAnalysis::from_board(&board);
        assert!(analysis.empty_regions().is_empty());
    }

    #[test]
    fn test_regions_are_split_by_words() {
        // c a t . .
        // o . a . .
        // o . n a b
        let mut board = Board::new();
        board.place_word("cat", Point::ORIGIN, Direction::Horizontal);
        board.place_word("coo", Point::ORIGIN, Direction::Vertical);
        board.place_word("tan", Point::new(2, 0), Direction::Vertical);
        board.place_word("nab", Point::new(2, 2), Direction::Horizontal);

        let analysis = BoardAnalysis::from_board(&board);
        assert_eq!((board.width(), board.height()), (5, 3));
        assert_eq!(analysis.empty_regions(), [4, 2]);
        assert_eq!(analysis.horizontal_word_count(), 2);
        assert_eq!(analysis.vertical_word_count(), 2);
        assert_eq!(analysis.intersection_count(), 3);
    }

    #[test]
    fn test_large_open_region_does_not_overflow_stack() {
        let mut board = Board::new();
        board.place_word("a", Point::ORIGIN, Direction::Horizontal);
        board.place_word("b", Point::new(999, 0), Direction::Horizontal);
        board.place_word("c", Point::new(0, 999), Direction::Vertical);
        let analysis = BoardAnalysis::from_board(&board);
        assert_eq!(analysis.empty_regions(), [1000 * 1000 - 3]);
    }
}
