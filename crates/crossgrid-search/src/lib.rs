//! Best-of-N search for crossword grids.
//!
//! A single run of the board generator is greedy and order dependent, so its
//! quality varies a lot with the words it is given. This crate runs many
//! independent attempts and keeps the best finished board.
//!
//! # How a Search Works
//!
//! 1. **Validate** - [`SearchConfig::validate`] rejects configurations that cannot
//!    run, such as sampling more words than fit on the board
//! 2. **Seed** - A master generator draws one [`AttemptSeed`] per attempt
//! 3. **Sample** - Each attempt draws a random word subset with [`WordSampler`]
//! 4. **Generate** - The subset is placed by `crossgrid_evaluator::board_generator`
//! 5. **Score** - The finished board is scored by a `BoardEvaluator`
//! 6. **Keep** - A board replaces the current best only with a strictly greater score
//!
//! # Architecture
//!
//! ```text
//! Search (attempt seeds, worker threads)
//!     ↓ per attempt
//! WordSampler (random subset)
//!     ↓ feeds
//! BoardGenerator (crossgrid-evaluator)
//!     ↓ scored by
//! BoardEvaluator (fitness function)
//!     ↓ reduces to
//! SearchOutcome (best board)
//! ```
//!
//! # Parallelism
//!
//! Attempts are split into contiguous chunks, one per worker, and run under
//! [`std::thread::scope`]. Each attempt owns its board and its random generator,
//! so workers share nothing mutable. Chunk results are reduced in attempt order,
//! which makes the outcome identical to a sequential run with the same seed.

pub use self::{config::*, sampler::*, search::*, seed::*};

mod config;
mod sampler;
mod search;
mod seed;
