use crossgrid_engine::BoardLimits;
use crossgrid_evaluator::{
    board_evaluator::{BoardEvaluator, FitnessEvaluator, UNDERFILLED_BOARD_SCORE},
    board_generator::BoardGenerator,
    intersection_selector::IntersectionSelector,
};
use proptest::prelude::*;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[aeinost]{2,7}", 1..10)
}

proptest! {
    #[test]
    fn fitness_is_pure(words in words(), desired in 1usize..6) {
        let generator = BoardGenerator::new(BoardLimits::new(8, 8), IntersectionSelector::default());
        let board = generator.generate(words);
        let evaluator = FitnessEvaluator::new(desired);
        prop_assert_eq!(evaluator.evaluate_board(&board), evaluator.evaluate_board(&board));
    }

    #[test]
    fn underfilled_boards_rank_below_hole_free_boards(words in words(), desired in 1usize..6) {
        let generator = BoardGenerator::new(BoardLimits::new(8, 8), IntersectionSelector::default());
        let board = generator.generate(words);
        let evaluator = FitnessEvaluator::new(desired);
        let score = evaluator.evaluate_board(&board);
        let threshold = UNDERFILLED_BOARD_SCORE + i64::try_from(desired).unwrap();

        if board.word_count() < desired {
            prop_assert!(score < threshold);
        } else if evaluator.breakdown(&board).unwrap().hole_penalty == 0 {
            prop_assert!(score > threshold);
        }
    }
}
