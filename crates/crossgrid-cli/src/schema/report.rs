use crossgrid_engine::PlacedWord;
use crossgrid_evaluator::board_evaluator::FitnessBreakdown;
use crossgrid_search::{AttemptSeed, SearchOutcome};
use serde::Serialize;

/// Summary of one search run, written with `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct GridReport {
    /// Fitness score of the best board
    pub score: i64,
    /// Fitness components; absent for empty or under-filled boards
    pub fitness: Option<FitnessBreakdown>,
    pub width: usize,
    pub height: usize,
    /// Placed words in placement order
    pub words: Vec<PlacedWord>,
    /// Master seed that reproduces the run
    pub seed: AttemptSeed,
    /// Index of the winning attempt
    pub attempt: Option<usize>,
    pub attempt_count: usize,
}

impl GridReport {
    pub fn new(outcome: &SearchOutcome, fitness: Option<FitnessBreakdown>) -> Self {
        let board = outcome.board();
        Self {
            score: outcome.score(),
            fitness,
            width: board.width(),
            height: board.height(),
            words: board.words().to_vec(),
            seed: outcome.master_seed(),
            attempt: outcome.best().map(|best| best.index()),
            attempt_count: outcome.attempt_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossgrid_search::{Search, SearchConfig};

    use super::*;

    #[test]
    fn test_report_json_shape() {
        let config = SearchConfig {
            desired_word_count: 2,
            sample_word_count: 1,
            attempt_count: 1,
            workers: 1,
            seed: Some(AttemptSeed::from_bytes([0; 16])),
            ..SearchConfig::default()
        };
        let outcome = Search::new(config, vec!["cat".to_owned()])
            .unwrap()
            .run()
            .unwrap();
        let report = GridReport::new(&outcome, None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["score"], -999_999);
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 1);
        assert_eq!(json["seed"], "00000000000000000000000000000000");
        assert_eq!(json["attempt"], 0);
        assert_eq!(json["fitness"], serde_json::Value::Null);
        assert_eq!(
            json["words"],
            serde_json::json!([
                { "text": "cat", "root": { "x": 0, "y": 0 }, "direction": "horizontal" }
            ])
        );
    }
}
