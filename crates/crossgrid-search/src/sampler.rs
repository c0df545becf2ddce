use rand::{Rng, seq::index};

use crate::config::ConfigError;

/// Draws random word subsets from the words that fit on a board.
#[derive(Debug, Clone)]
pub struct WordSampler {
    pool: Vec<String>,
    max_word_len: usize,
}

impl WordSampler {
    /// Creates a sampler over the words of at most `max_word_len` letters.
    pub fn new<I>(words: I, max_word_len: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let pool = words
            .into_iter()
            .filter(|w| w.chars().count() <= max_word_len)
            .collect();
        Self { pool, max_word_len }
    }

    /// Words eligible for sampling.
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Draws `count` words without repetition.
    ///
    /// Fails if the pool holds fewer than `count` words.
    pub fn sample<R>(&self, rng: &mut R, count: usize) -> Result<Vec<String>, ConfigError>
    where
        R: Rng + ?Sized,
    {
        if count > self.pool.len() {
            return Err(ConfigError::SampleExceedsPool {
                requested: count,
                available: self.pool.len(),
                max_word_len: self.max_word_len,
            });
        }
        Ok(index::sample(rng, self.pool.len(), count)
            .into_iter()
            .map(|i| self.pool[i].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn sampler(words: &[&str], max_word_len: usize) -> WordSampler {
        WordSampler::new(words.iter().map(|&w| w.to_owned()), max_word_len)
    }

    #[test]
    fn test_long_words_are_never_sampled() {
        let sampler = sampler(&["a", "bb", "ccc", "dddd"], 3);
        assert_eq!(sampler.pool(), ["a", "bb", "ccc"]);

        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let sample = sampler.sample(&mut rng, 2).unwrap();
            assert_eq!(sample.len(), 2);
            assert_ne!(sample[0], sample[1]);
            assert!(!sample.contains(&"dddd".to_owned()));
        }
    }

    #[test]
    fn test_oversized_request_fails() {
        let sampler = sampler(&["a", "bb", "ccc", "dddd"], 3);
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(
            sampler.sample(&mut rng, 4),
            Err(ConfigError::SampleExceedsPool {
                requested: 4,
                available: 3,
                max_word_len: 3,
            })
        );
    }

    #[test]
    fn test_letters_are_counted_not_bytes() {
        let sampler = sampler(&["café", "naïve"], 4);
        assert_eq!(sampler.pool(), ["café"]);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let sampler = sampler(&["ant", "bee", "cat", "dog", "eel", "fox"], 8);
        let a = sampler.sample(&mut Pcg32::seed_from_u64(42), 4).unwrap();
        let b = sampler.sample(&mut Pcg32::seed_from_u64(42), 4).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn sample_is_distinct_and_bounded(
            words in prop::collection::hash_set("[a-z]{1,10}", 0..30),
            max_word_len in 1usize..10,
            count in 0usize..30,
            seed in any::<u64>(),
        ) {
            let sampler = WordSampler::new(words, max_word_len);
            let mut rng = Pcg32::seed_from_u64(seed);
            match sampler.sample(&mut rng, count) {
                Ok(sample) => {
                    prop_assert_eq!(sample.len(), count);
                    prop_assert!(sample.iter().all(|w| w.len() <= max_word_len));
                    let distinct: HashSet<_> = sample.iter().collect();
                    prop_assert_eq!(distinct.len(), count);
                }
                Err(_) => prop_assert!(count > sampler.pool().len()),
            }
        }
    }
}
