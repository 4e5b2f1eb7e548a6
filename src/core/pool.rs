//! Candidate pools and feedback filtering
//!
//! A [`CandidatePool`] holds the words still consistent with every feedback
//! applied to it. Filtering only ever removes words.

use super::feedback::{Feedback, FeedbackMode, FeedbackSymbol};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Check whether `candidate` survives `feedback` for `guess` under the single-pass rules
///
/// Per position `i`:
/// - `Exact`: the candidate must have `guess[i]` at `i`
/// - `Present`: the candidate must contain `guess[i]`, and must not have it at `i`
/// - `Absent`: the candidate must not contain `guess[i]` anywhere, even if the
///   same letter is marked `Exact` or `Present` at another position
///
/// # Examples
/// ```
/// use quordle_ai::core::{Word, admits};
///
/// let guess = Word::new("crane").unwrap();
/// let feedback = "BGGGG".parse().unwrap();
///
/// assert!(admits(&Word::new("drane").unwrap(), &guess, &feedback));
/// assert!(!admits(&Word::new("crane").unwrap(), &guess, &feedback));
/// ```
#[must_use]
pub fn admits(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    feedback
        .symbols()
        .iter()
        .enumerate()
        .all(|(i, &symbol)| {
            let letter = guess.char_at(i);
            match symbol {
                FeedbackSymbol::Exact => candidate.char_at(i) == letter,
                FeedbackSymbol::Present => {
                    let contains = candidate.has_letter(letter);
                    let not_here = candidate.char_at(i) != letter;
                    contains && not_here
                }
                FeedbackSymbol::Absent => !candidate.has_letter(letter),
            }
        })
}

/// Check whether `candidate` survives `feedback` under the rule selected by `mode`
///
/// In two-pass mode a candidate is kept only if guessing `guess` against it
/// would produce exactly `feedback`.
#[must_use]
pub fn admits_with(mode: FeedbackMode, candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    match mode {
        FeedbackMode::SinglePass => admits(candidate, guess, feedback),
        FeedbackMode::TwoPass => Feedback::evaluate_strict(candidate, guess) == *feedback,
    }
}

/// The words still possible for one hidden word
///
/// Each pool owns its words. Pools created for different hidden words never
/// share storage, so filtering one leaves the others untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Create a pool from owned words, keeping their order
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Create a pool holding a fresh copy of `words`
    #[must_use]
    pub fn from_slice(words: &[Word]) -> Self {
        Self::new(words.to_vec())
    }

    /// The remaining words, in their original relative order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of remaining words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word remains
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Remove every word inconsistent with `feedback` for `guess` (single-pass rules)
    ///
    /// An empty pool afterwards is a valid outcome; callers decide what it means.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        self.apply_with(FeedbackMode::SinglePass, guess, feedback);
    }

    /// Remove every word inconsistent with `feedback` under the rule selected by `mode`
    pub fn apply_with(&mut self, mode: FeedbackMode, guess: &Word, feedback: &Feedback) {
        self.words
            .retain(|candidate| admits_with(mode, candidate, guess, feedback));
    }

    /// Return a new pool with the words consistent with `feedback` (single-pass rules)
    #[must_use]
    pub fn filtered(&self, guess: &Word, feedback: &Feedback) -> Self {
        Self::new(
            self.words
                .iter()
                .filter(|candidate| admits(candidate, guess, feedback))
                .cloned()
                .collect(),
        )
    }

    /// Group the pool by the feedback `guess` would receive against each word
    ///
    /// The map values are the pool sizes that would remain after each possible
    /// feedback, so they always sum to `self.len()`.
    #[must_use]
    pub fn partition_sizes(&self, guess: &Word, mode: FeedbackMode) -> FxHashMap<Feedback, usize> {
        let mut sizes = FxHashMap::default();
        for candidate in &self.words {
            let feedback = Feedback::evaluate_with(mode, candidate, guess);
            *sizes.entry(feedback).or_insert(0) += 1;
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SAMPLE_ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    fn pool(words: &[&str]) -> CandidatePool {
        CandidatePool::new(words_from_slice(words).unwrap())
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(pool: &CandidatePool) -> Vec<&str> {
        pool.words().iter().map(Word::text).collect()
    }

    #[test]
    fn all_exact_keeps_only_the_guess() {
        let mut pool = pool(&["apple", "grape", "stage"]);
        pool.apply(&word("apple"), &Feedback::SOLVED);

        assert_eq!(texts(&pool), vec!["apple"]);
    }

    #[test]
    fn absent_letter_removes_every_word_containing_it() {
        let mut pool = pool(&["prane", "crane", "trane", "brine"]);
        pool.apply(&word("crane"), &"BGGGG".parse().unwrap());

        assert_eq!(texts(&pool), vec!["prane", "trane"]);
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let mut pool = pool(&["earth", "heart", "ratio", "otter"]);
        // 'r' at index 0 is present: must contain r, but not at index 0.
        pool.apply(&word("rxxxx"), &"YBBBB".parse().unwrap());

        assert_eq!(texts(&pool), vec!["earth", "heart", "otter"]);
    }

    #[test]
    fn absent_purges_letter_even_when_marked_elsewhere() {
        // Guess "eerie" with the first E exact and the second E absent.
        // The absent E purges every E-word, including the exact-match ones.
        let mut pool = pool(&["eagle", "ebony", "dairy"]);
        let feedback: Feedback = "GBBBB".parse().unwrap();
        pool.apply(&word("eerie"), &feedback);

        assert!(pool.is_empty());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut pool = pool(&["crane", "slate"]);
        pool.apply(&word("zzzzz"), &Feedback::SOLVED);

        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);

        pool.apply(&word("crane"), &Feedback::SOLVED);
        assert!(pool.is_empty());
    }

    #[test]
    fn filtered_leaves_original_untouched() {
        let original = pool(&["apple", "grape", "stage"]);
        let filtered = original.filtered(&word("apple"), &Feedback::SOLVED);

        assert_eq!(original.len(), 3);
        assert_eq!(texts(&filtered), vec!["apple"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();
        let secret = word("stone");
        let guess = word("crane");
        let feedback = Feedback::evaluate(&secret, &guess);

        let mut once = CandidatePool::from_slice(&dictionary);
        once.apply(&guess, &feedback);
        let mut twice = once.clone();
        twice.apply(&guess, &feedback);

        assert_eq!(once, twice);
    }

    #[test]
    fn filtering_never_grows_and_keeps_the_secret() {
        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();

        for mode in [FeedbackMode::SinglePass, FeedbackMode::TwoPass] {
            for secret in dictionary.iter().step_by(17) {
                let mut pool = CandidatePool::from_slice(&dictionary);
                for guess in dictionary.iter().step_by(41).take(6) {
                    let before = pool.len();
                    let feedback = Feedback::evaluate_with(mode, secret, guess);
                    pool.apply_with(mode, guess, &feedback);

                    assert!(pool.len() <= before);
                    assert!(pool.contains(secret), "{secret} removed by {guess}");
                }
            }
        }
    }

    #[test]
    fn single_pass_rules_match_reevaluation() {
        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();
        let guess = word("speed");
        let secret = word("erase");
        let feedback = Feedback::evaluate(&secret, &guess);

        for candidate in &dictionary {
            assert_eq!(
                admits(candidate, &guess, &feedback),
                Feedback::evaluate(candidate, &guess) == feedback,
                "{candidate}"
            );
        }
    }

    #[test]
    fn two_pass_filter_keeps_duplicate_letter_secrets() {
        // With strict feedback the second E is absent, yet ABBEY stays.
        let mut pool = pool(&["abbey", "obese", "geeky"]);
        let guess = word("geese");
        let feedback = Feedback::evaluate_strict(&word("abbey"), &guess);

        pool.apply_with(FeedbackMode::TwoPass, &guess, &feedback);
        assert_eq!(texts(&pool), vec!["abbey"]);
    }

    #[test]
    fn partition_sizes_cover_the_pool() {
        let pool = pool(&["crane", "crate", "grate", "irate", "slate"]);
        let sizes = pool.partition_sizes(&word("crate"), FeedbackMode::SinglePass);

        assert_eq!(sizes.values().sum::<usize>(), pool.len());
        assert_eq!(sizes.get(&Feedback::SOLVED), Some(&1));
    }
}
