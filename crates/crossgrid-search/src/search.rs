use std::{panic, thread};

use crossgrid_engine::Board;
use crossgrid_evaluator::{
    board_evaluator::{BoardEvaluator, FitnessEvaluator},
    board_generator::BoardGenerator,
    intersection_selector::IntersectionSelector,
};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    config::{ConfigError, SearchConfig},
    sampler::WordSampler,
    seed::AttemptSeed,
};

/// Best-of-N crossword search.
///
/// Each attempt samples a word subset with its own seeded generator, builds a board
/// and scores it. The board with the highest score wins; on equal scores the earlier
/// attempt is kept.
///
/// # Example
///
/// ```
/// use crossgrid_search::{AttemptSeed, Search, SearchConfig};
///
/// let config = SearchConfig {
///     desired_word_count: 2,
///     sample_word_count: 3,
///     attempt_count: 10,
///     seed: Some(AttemptSeed::from_bytes([7; 16])),
///     ..SearchConfig::default()
/// };
/// let words = ["tan", "ant", "nat"].map(String::from).to_vec();
/// let outcome = Search::new(config, words)?.run()?;
/// assert!(outcome.board().word_count() >= 2);
/// # Ok::<_, crossgrid_search::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Search {
    config: SearchConfig,
    sampler: WordSampler,
    generator: BoardGenerator<'static>,
    evaluator: Box<dyn BoardEvaluator>,
}

/// Result of one finished attempt.
#[derive(Debug, Clone)]
pub struct Attempt {
    index: usize,
    seed: AttemptSeed,
    board: Board,
    score: i64,
}

impl Attempt {
    /// Position of the attempt in the search, starting at zero.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn seed(&self) -> AttemptSeed {
        self.seed
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Result of a whole search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    master_seed: AttemptSeed,
    attempt_count: usize,
    empty_score: i64,
    best: Option<Attempt>,
    empty_board: Board,
}

impl SearchOutcome {
    /// Seed that reproduces this search.
    #[must_use]
    pub fn master_seed(&self) -> AttemptSeed {
        self.master_seed
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempt_count
    }

    /// The winning attempt, or `None` if no attempt beat the empty board.
    #[must_use]
    pub fn best(&self) -> Option<&Attempt> {
        self.best.as_ref()
    }

    /// The winning board; empty if no attempt beat the empty board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.best.as_ref().map_or(&self.empty_board, Attempt::board)
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.best.as_ref().map_or(self.empty_score, Attempt::score)
    }
}

impl Search {
    /// Creates a search with the default selector and fitness function.
    pub fn new(config: SearchConfig, words: Vec<String>) -> Result<Self, ConfigError> {
        let evaluator = FitnessEvaluator::new(config.desired_word_count);
        Self::with_evaluators(
            config,
            words,
            IntersectionSelector::default(),
            Box::new(evaluator),
        )
    }

    /// Like [`Self::new`], but with custom evaluators.
    pub fn with_evaluators(
        config: SearchConfig,
        words: Vec<String>,
        selector: IntersectionSelector<'static>,
        evaluator: Box<dyn BoardEvaluator>,
    ) -> Result<Self, ConfigError> {
        config.validate(&words)?;
        let sampler = WordSampler::new(words, config.max_word_len());
        let generator = BoardGenerator::new(config.limits(), selector);
        Ok(Self {
            config,
            sampler,
            generator,
            evaluator,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs every attempt and returns the best board.
    ///
    /// Attempts are split into contiguous chunks, one per worker thread. Every
    /// attempt seed is drawn up front from the master seed, so the outcome does not
    /// depend on the number of workers.
    pub fn run(&self) -> Result<SearchOutcome, ConfigError> {
        let master_seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut master_rng = Pcg32::from_seed(master_seed.to_bytes());
        let seeds: Vec<AttemptSeed> = (0..self.config.attempt_count)
            .map(|_| master_rng.random())
            .collect();

        let empty_board = Board::new();
        let empty_score = self.evaluator.evaluate_board(&empty_board);
        let chunk_size = seeds.len().div_ceil(self.config.workers).max(1);
        log::debug!(
            "running {} attempts on {} workers (master seed {master_seed})",
            seeds.len(),
            seeds.len().div_ceil(chunk_size)
        );

        let chunk_results = thread::scope(|s| {
            let handles: Vec<_> = seeds
                .chunks(chunk_size)
                .enumerate()
                .map(|(chunk_index, chunk)| {
                    let first_index = chunk_index * chunk_size;
                    s.spawn(move || self.run_chunk(first_index, chunk, empty_score))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        let mut best: Option<Attempt> = None;
        for result in chunk_results {
            let Some(attempt) = result? else {
                continue;
            };
            let best_score = best.as_ref().map_or(empty_score, Attempt::score);
            if attempt.score > best_score {
                log::info!(
                    "attempt {} is the new best with score {}",
                    attempt.index,
                    attempt.score
                );
                best = Some(attempt);
            }
        }

        let outcome = SearchOutcome {
            master_seed,
            attempt_count: seeds.len(),
            empty_score,
            best,
            empty_board,
        };
        log::info!(
            "search finished: {} attempts, best score {} with {} words",
            outcome.attempt_count,
            outcome.score(),
            outcome.board().word_count()
        );
        Ok(outcome)
    }

    /// Runs one attempt with its own generator seeded by `seed`.
    pub fn run_attempt(&self, index: usize, seed: AttemptSeed) -> Result<Attempt, ConfigError> {
        let mut rng = Pcg32::from_seed(seed.to_bytes());
        let words = self
            .sampler
            .sample(&mut rng, self.config.sample_word_count)?;
        let board = self.generator.generate(words);
        let score = self.evaluator.evaluate_board(&board);
        log::debug!(
            "attempt {index}: {} words placed, score {score}",
            board.word_count()
        );
        Ok(Attempt {
            index,
            seed,
            board,
            score,
        })
    }

    fn run_chunk(
        &self,
        first_index: usize,
        seeds: &[AttemptSeed],
        empty_score: i64,
    ) -> Result<Option<Attempt>, ConfigError> {
        let mut best: Option<Attempt> = None;
        for (index, &seed) in (first_index..).zip(seeds) {
            let attempt = self.run_attempt(index, seed)?;
            if attempt.score > best.as_ref().map_or(empty_score, Attempt::score) {
                best = Some(attempt);
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use crossgrid_engine::PlacedWord;
    use rand::{Rng as _, SeedableRng as _};

    use super::*;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_owned()).collect()
    }

    fn pool() -> Vec<String> {
        words(&[
            "tan", "ant", "nat", "cat", "act", "tact", "cant", "scan", "nest", "sent", "tent",
            "net", "ten", "eats", "seat", "east",
        ])
    }

    fn config(workers: usize) -> SearchConfig {
        SearchConfig {
            desired_word_count: 3,
            max_width: 8,
            max_height: 8,
            sample_word_count: 6,
            attempt_count: 25,
            workers,
            seed: Some(AttemptSeed::from_bytes([3; 16])),
        }
    }

    fn layout(outcome: &SearchOutcome) -> Vec<PlacedWord> {
        outcome.board().words().to_vec()
    }

    /// Scores every board the same, including the empty one.
    #[derive(Debug)]
    struct ConstantEvaluator;

    impl BoardEvaluator for ConstantEvaluator {
        fn evaluate_board(&self, _board: &Board) -> i64 {
            0
        }
    }

    /// Scores every non-empty board the same, so only the tie rule decides.
    #[derive(Debug)]
    struct NonEmptyEvaluator;

    impl BoardEvaluator for NonEmptyEvaluator {
        fn evaluate_board(&self, board: &Board) -> i64 {
            i64::from(!board.is_empty())
        }
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = SearchConfig {
            sample_word_count: 20,
            ..config(1)
        };
        assert!(matches!(
            Search::new(config, pool()),
            Err(ConfigError::SampleExceedsPool {
                requested: 20,
                available: 16,
                ..
            })
        ));
    }

    #[test]
    fn test_outcome_is_independent_of_worker_count() {
        let sequential = Search::new(config(1), pool()).unwrap().run().unwrap();
        for workers in [2, 3, 8, 64] {
            let parallel = Search::new(config(workers), pool()).unwrap().run().unwrap();
            assert_eq!(parallel.score(), sequential.score(), "workers = {workers}");
            assert_eq!(layout(&parallel), layout(&sequential), "workers = {workers}");
            assert_eq!(
                parallel.best().map(Attempt::index),
                sequential.best().map(Attempt::index)
            );
        }
    }

    #[test]
    fn test_best_attempt_is_reproducible() {
        let search = Search::new(config(4), pool()).unwrap();
        let outcome = search.run().unwrap();
        let best = outcome.best().unwrap();
        let replay = search.run_attempt(best.index(), best.seed()).unwrap();
        assert_eq!(replay.score(), best.score());
        assert_eq!(replay.board().words(), best.board().words());
        assert_eq!(outcome.master_seed(), AttemptSeed::from_bytes([3; 16]));
    }

    #[test]
    fn test_best_score_is_maximum_over_attempts() {
        let search = Search::new(config(3), pool()).unwrap();
        let outcome = search.run().unwrap();

        let mut master = Pcg32::from_seed(outcome.master_seed().to_bytes());
        let max = (0..outcome.attempt_count())
            .map(|i| search.run_attempt(i, master.random()).unwrap().score())
            .max()
            .unwrap();
        assert_eq!(outcome.score(), max);
    }

    #[test]
    fn test_ties_keep_earliest_attempt() {
        for workers in [1, 4] {
            let search = Search::with_evaluators(
                config(workers),
                pool(),
                IntersectionSelector::default(),
                Box::new(NonEmptyEvaluator),
            )
            .unwrap();
            let outcome = search.run().unwrap();
            assert_eq!(outcome.best().map(Attempt::index), Some(0), "workers = {workers}");
            assert_eq!(outcome.score(), 1);
        }
    }

    #[test]
    fn test_attempt_must_beat_empty_board() {
        let search = Search::with_evaluators(
            config(4),
            pool(),
            IntersectionSelector::default(),
            Box::new(ConstantEvaluator),
        )
        .unwrap();
        let outcome = search.run().unwrap();
        assert!(outcome.best().is_none());
        assert_eq!(outcome.score(), 0);
        assert!(outcome.board().is_empty());
    }

    #[test]
    fn test_no_attempts_yields_empty_board() {
        let config = SearchConfig {
            attempt_count: 0,
            ..config(2)
        };
        let outcome = Search::new(config, pool()).unwrap().run().unwrap();
        assert!(outcome.best().is_none());
        assert!(outcome.board().is_empty());
        assert_eq!(outcome.score(), -1_000_000_000);
    }
}
