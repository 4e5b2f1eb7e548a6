//! Hidden answers for one round

use super::error::SimulationError;
use crate::core::{Feedback, FeedbackMode, Word};
use rand::Rng;
use rustc_hash::FxHashSet;

/// The hidden words of a round
///
/// A game only answers guesses with feedback. The answers themselves are
/// available through [`Game::reveal`] for end-of-round reporting.
#[derive(Debug, Clone)]
pub struct Game {
    answers: Vec<Word>,
    mode: FeedbackMode,
}

impl Game {
    /// Draw `num_words` distinct answers uniformly from `dictionary`
    ///
    /// Duplicate dictionary entries count once.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `num_words` is zero or exceeds the
    /// number of distinct words.
    pub fn new<R: Rng + ?Sized>(
        dictionary: &[Word],
        num_words: usize,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let mut seen = FxHashSet::default();
        let distinct: Vec<&Word> = dictionary
            .iter()
            .filter(|word| seen.insert(*word))
            .collect();

        if num_words == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "number of words must be at least 1".to_string(),
            ));
        }
        if num_words > distinct.len() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "cannot pick {num_words} words from a dictionary of {}",
                distinct.len()
            )));
        }

        let answers = rand::seq::index::sample(rng, distinct.len(), num_words)
            .into_iter()
            .map(|i| distinct[i].clone())
            .collect();

        Ok(Self {
            answers,
            mode: FeedbackMode::default(),
        })
    }

    /// Create a game with fixed answers, in slot order
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `answers` is empty or repeats a word.
    pub fn with_answers(answers: Vec<Word>) -> Result<Self, SimulationError> {
        if answers.is_empty() {
            return Err(SimulationError::InvalidConfiguration(
                "at least one answer is required".to_string(),
            ));
        }

        if let Some(duplicate) = first_duplicate(&answers) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "duplicate answer: {duplicate}"
            )));
        }

        Ok(Self {
            answers,
            mode: FeedbackMode::default(),
        })
    }

    /// Use `mode` to evaluate guesses
    #[must_use]
    pub const fn with_mode(mut self, mode: FeedbackMode) -> Self {
        self.mode = mode;
        self
    }

    /// The feedback rule in use
    #[must_use]
    pub const fn mode(&self) -> FeedbackMode {
        self.mode
    }

    /// Number of hidden words
    #[must_use]
    pub fn num_words(&self) -> usize {
        self.answers.len()
    }

    /// Feedback for `guess` against every hidden word, in slot order
    #[must_use]
    pub fn evaluate_guess(&self, guess: &Word) -> Vec<Feedback> {
        self.answers
            .iter()
            .map(|answer| Feedback::evaluate_with(self.mode, answer, guess))
            .collect()
    }

    /// The hidden words
    #[must_use]
    pub fn reveal(&self) -> &[Word] {
        &self.answers
    }
}

/// The first word that repeats an earlier one
fn first_duplicate(words: &[Word]) -> Option<&Word> {
    let mut seen = FxHashSet::default();
    words.iter().find(|word| !seen.insert(*word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|text| Word::new(*text).unwrap()).collect()
    }

    #[test]
    fn new_picks_distinct_dictionary_words() {
        let dictionary = words(&["crane", "slate", "irate", "stone", "apple", "grape"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = Game::new(&dictionary, 4, &mut rng).unwrap();

            let answers = game.reveal();
            assert_eq!(answers.len(), 4);
            assert!(answers.iter().all(|answer| dictionary.contains(answer)));
            let unique: FxHashSet<&Word> = answers.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn new_is_reproducible_from_a_seed() {
        let dictionary = words(&["crane", "slate", "irate", "stone", "apple", "grape"]);
        let a = Game::new(&dictionary, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Game::new(&dictionary, 3, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.reveal(), b.reveal());
    }

    #[test]
    fn new_rejects_bad_word_counts() {
        let dictionary = words(&["crane", "crane", "slate"]);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            Game::new(&dictionary, 0, &mut rng),
            Err(SimulationError::InvalidConfiguration(_))
        ));
        // Only two distinct words.
        assert!(matches!(
            Game::new(&dictionary, 3, &mut rng),
            Err(SimulationError::InvalidConfiguration(_))
        ));
        assert!(Game::new(&dictionary, 2, &mut rng).is_ok());
        assert!(Game::new(&[], 1, &mut rng).is_err());
    }

    #[test]
    fn with_answers_rejects_duplicates_and_empty() {
        assert!(Game::with_answers(Vec::new()).is_err());
        assert!(Game::with_answers(words(&["crane", "slate", "crane"])).is_err());

        let game = Game::with_answers(words(&["crane", "slate"])).unwrap();
        assert_eq!(game.num_words(), 2);
    }

    #[test]
    fn evaluate_guess_answers_every_slot() {
        let game = Game::with_answers(words(&["crane", "abcde"])).unwrap();
        let feedbacks = game.evaluate_guess(&Word::new("crane").unwrap());

        assert_eq!(feedbacks.len(), 2);
        assert!(feedbacks[0].is_solved());
        assert_eq!(feedbacks[1].to_string(), "YBYBG");
    }

    #[test]
    fn mode_selects_the_evaluator() {
        let guess = Word::new("geese").unwrap();
        let single = Game::with_answers(words(&["abbey"])).unwrap();
        let strict = single.clone().with_mode(FeedbackMode::TwoPass);

        assert_eq!(single.evaluate_guess(&guess)[0].to_string(), "BYYBY");
        assert_eq!(strict.evaluate_guess(&guess)[0].to_string(), "BYBBB");
    }
}
