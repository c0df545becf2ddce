//! Board generation: building one crossword from a word list.
//!
//! [`BoardGenerator::generate`] places words one at a time onto a fresh [`Board`]:
//!
//! 1. Sort the words by length (stable, shortest first). The longest word is the
//!    seed and is placed unconditionally at `(0, 0)`, horizontally. One other copy
//!    of the seed word, if present, is dropped.
//! 2. Pop words from the end of the active queue, so longer words go first. Each
//!    word is placed at the candidate chosen by the [`IntersectionSelector`]; a word
//!    without any candidate is pushed onto the deferred queue.
//! 3. When the active queue runs dry, the deferred queue becomes the new active
//!    queue, but only if it is shorter than the queue of the previous round.
//!    Otherwise no progress is possible and generation stops.
//!
//! The result may hold fewer words than requested. That is a normal outcome, not an
//! error; the board evaluator ranks such boards below full ones.

use std::mem;

use crossgrid_engine::{Board, BoardLimits, Direction, Point, find_intersections};

use crate::intersection_selector::IntersectionSelector;

/// Builds boards by greedy placement with deferral.
#[derive(Debug)]
pub struct BoardGenerator<'a> {
    limits: BoardLimits,
    selector: IntersectionSelector<'a>,
}

impl<'a> BoardGenerator<'a> {
    #[must_use]
    pub fn new(limits: BoardLimits, selector: IntersectionSelector<'a>) -> Self {
        Self { limits, selector }
    }

    #[must_use]
    pub fn limits(&self) -> &BoardLimits {
        &self.limits
    }

    /// Generates a board from `words`.
    ///
    /// An empty word list yields an empty board.
    #[must_use]
    pub fn generate(&self, mut words: Vec<String>) -> Board {
        let mut board = Board::new();

        words.sort_by_key(|word| word.chars().count());
        let Some(seed) = words.pop() else {
            return board;
        };
        board.place_word(&seed, Point::ORIGIN, Direction::Horizontal);
        log::trace!("seeded board with {seed:?}");
        if let Some(duplicate) = words.iter().position(|w| *w == seed) {
            words.remove(duplicate);
        }

        let mut active = words;
        let mut deferred = vec![];
        let mut previous_round_len = active.len();

        loop {
            if active.is_empty() {
                if deferred.is_empty() {
                    break;
                }
                if deferred.len() >= previous_round_len {
                    log::debug!(
                        "placement stalled with {} deferred words, {} placed",
                        deferred.len(),
                        board.word_count()
                    );
                    break;
                }
                previous_round_len = deferred.len();
                active = mem::take(&mut deferred);
            }

            let Some(word) = active.pop() else {
                break;
            };
            let candidates = find_intersections(&board, &self.limits, &word);
            match self.selector.select_best(&board, &candidates) {
                Some(best) => {
                    log::trace!("placing {word:?} at {} {}", best.root(), best.direction());
                    board.place_word(&word, best.root(), best.direction());
                }
                None => {
                    log::trace!("deferring {word:?}");
                    deferred.push(word);
                }
            }
        }

        board
    }
}
