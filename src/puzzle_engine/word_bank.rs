use rand::Rng;

/// The pool of tokens still available to fill the active line's blanks.
///
/// The bank starts as a shuffled copy of the line's words and only ever
/// shrinks; it knows nothing about blanks or lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Store a uniformly shuffled permutation of `words` as the bank.
    pub fn new_shuffled<R: Rng>(words: &[String], rng: &mut R) -> Self {
        let mut words = words.to_vec();

        // Fisher-Yates shuffle
        for i in (1..words.len()).rev() {
            let j = rng.gen_range(0..=i);
            words.swap(i, j);
        }

        WordBank { words }
    }

    /// Remove the first occurrence of `word`. No-op when absent; the engine
    /// only offers bank contents for selection, so a miss is out-of-contract.
    pub fn remove(&mut self, word: &str) {
        if let Some(at) = self.words.iter().position(|w| w == word) {
            self.words.remove(at);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Remaining words in bank order (the order the UI displays them).
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank_of(words: &[&str], seed: u64) -> WordBank {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        WordBank::new_shuffled(&words, &mut rng)
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let input = ["seen", "num", "True", "False", "set", "add", "return"];
        for seed in [1u64, 42, 999, 0xDEAD_BEEF] {
            let bank = bank_of(&input, seed);
            assert_eq!(bank.len(), input.len());
            let mut got: Vec<&str> = bank.words().iter().map(String::as_str).collect();
            let mut want = input.to_vec();
            got.sort_unstable();
            want.sort_unstable();
            assert_eq!(got, want, "element multiset changed for seed {seed}");
        }
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let input = ["seen", "num", "True", "False"];
        assert_eq!(bank_of(&input, 7), bank_of(&input, 7));
    }

    #[test]
    fn remove_takes_first_occurrence_only() {
        let mut bank = WordBank { words: vec!["num".into(), "seen".into(), "num".into()] };
        bank.remove("num");
        assert_eq!(bank.words(), ["seen", "num"]);
    }

    #[test]
    fn remove_of_absent_word_is_a_no_op() {
        let mut bank = bank_of(&["seen", "num"], 3);
        bank.remove("nope");
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn bank_empties_after_all_removals() {
        let mut bank = bank_of(&["seen", "num"], 3);
        assert!(!bank.is_empty());
        bank.remove("seen");
        bank.remove("num");
        assert!(bank.is_empty());
    }
}
