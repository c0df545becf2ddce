use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use crossgrid_evaluator::board_evaluator::FitnessEvaluator;
use crossgrid_search::{AttemptSeed, Search, SearchConfig};

use crate::{
    render::BoardGrid,
    schema::report::GridReport,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Word list file, one word or phrase per line
    words: PathBuf,
    /// Search configuration JSON file; flags given explicitly override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Boards with fewer words rank below every filled board
    #[arg(long)]
    desired_words: Option<usize>,
    /// Maximum grid width
    #[arg(long)]
    max_width: Option<usize>,
    /// Maximum grid height
    #[arg(long)]
    max_height: Option<usize>,
    /// Number of words drawn for each attempt
    #[arg(long)]
    sample_words: Option<usize>,
    /// Number of boards to generate
    #[arg(long)]
    attempts: Option<usize>,
    /// Number of worker threads
    #[arg(long)]
    workers: Option<usize>,
    /// Master seed as 32 hex digits
    #[arg(long)]
    seed: Option<AttemptSeed>,
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl GenerateArg {
    fn search_config(&self) -> anyhow::Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_search_config_file(path)?,
            None => SearchConfig::default(),
        };

        let overrides = [
            (self.desired_words, &mut config.desired_word_count),
            (self.max_width, &mut config.max_width),
            (self.max_height, &mut config.max_height),
            (self.sample_words, &mut config.sample_word_count),
            (self.attempts, &mut config.attempt_count),
            (self.workers, &mut config.workers),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let config = arg.search_config()?;
    let words = util::read_word_file(&arg.words)?;
    eprintln!("Read {} words from {}", words.len(), arg.words.display());

    let fitness = FitnessEvaluator::new(config.desired_word_count);
    let search = Search::new(config, words).context("Invalid search configuration")?;
    let config = search.config();
    eprintln!(
        "Generating {} boards on {} workers (max {}x{}, {} words each)...",
        config.attempt_count,
        config.workers,
        config.max_width,
        config.max_height,
        config.sample_word_count
    );
    let outcome = search.run().context("Search failed")?;
    eprintln!(
        "Best board: {} words, score {} (seed {})",
        outcome.board().word_count(),
        outcome.score(),
        outcome.master_seed()
    );

    match arg.format {
        OutputFormat::Text => {
            let mut output = Output::from_output_path(arg.output.clone())?;
            write!(output, "{}", BoardGrid::new(outcome.board()))
                .and_then(|()| writeln!(output, "Score: {}", outcome.score()))
                .and_then(|()| output.flush())
                .with_context(|| format!("Failed to write grid to {}", output.display_path()))?;
        }
        OutputFormat::Json => {
            let report = GridReport::new(&outcome, fitness.breakdown(outcome.board()));
            Output::save_json(&report, arg.output.clone())?;
        }
    }
    Ok(())
}
