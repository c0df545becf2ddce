use std::{num::NonZero, thread};

use crossgrid_engine::BoardLimits;
use serde::{Deserialize, Serialize};

use crate::seed::AttemptSeed;

/// Configuration that makes a search impossible to run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display(
        "cannot sample {requested} words: only {available} words are at most {max_word_len} letters long"
    )]
    SampleExceedsPool {
        requested: usize,
        available: usize,
        max_word_len: usize,
    },
    #[display("{name} must be greater than zero")]
    ZeroDimension { name: &'static str },
    #[display("worker count must be greater than zero")]
    ZeroWorkers,
}

/// Parameters of a crossword search.
///
/// Missing fields take their [`Default`] values when deserialized, so a config file
/// only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Boards with fewer words than this rank below every filled board.
    pub desired_word_count: usize,
    pub max_width: usize,
    pub max_height: usize,
    /// Words drawn from the pool for each attempt.
    pub sample_word_count: usize,
    pub attempt_count: usize,
    pub workers: usize,
    /// Master seed; drawn from OS entropy when absent.
    pub seed: Option<AttemptSeed>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            desired_word_count: 5,
            max_width: 8,
            max_height: 8,
            sample_word_count: 7,
            attempt_count: 100,
            workers: thread::available_parallelism().map_or(1, NonZero::get),
            seed: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn limits(&self) -> BoardLimits {
        BoardLimits::new(self.max_width, self.max_height)
    }

    /// Longest word that may be sampled.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.limits().max_word_len()
    }

    /// Checks that a search over `words` can run with this configuration.
    pub fn validate(&self, words: &[String]) -> Result<(), ConfigError> {
        if self.max_width == 0 {
            return Err(ConfigError::ZeroDimension { name: "max_width" });
        }
        if self.max_height == 0 {
            return Err(ConfigError::ZeroDimension { name: "max_height" });
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }

        let max_word_len = self.max_word_len();
        let available = words
            .iter()
            .filter(|w| w.chars().count() <= max_word_len)
            .count();
        if self.sample_word_count > available {
            return Err(ConfigError::SampleExceedsPool {
                requested: self.sample_word_count,
                available,
                max_word_len,
            });
        }
        Ok(())
    }
}
