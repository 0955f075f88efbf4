use crate::dictionary::Dictionary;
use crate::game::ledger::WordLedger;
use crate::models::WordOutcome;

/// Classifies candidate words against the dictionary and the session ledger.
///
/// Candidates are case-folded to lowercase before any lookup, and the same
/// canonical form is what lands in the ledger, so "CAT" and "cat" can never
/// both be accepted.
pub struct WordValidator {
    min_word_length: usize,
}

impl Default for WordValidator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl WordValidator {
    /// `min_word_length` of 1 means no length filter. Shorter candidates
    /// classify as `RejectedNotAWord`.
    pub fn new(min_word_length: usize) -> Self {
        Self { min_word_length }
    }

    /// Validate a candidate and, on acceptance, commit it to the ledger.
    pub fn validate(
        &self,
        candidate: &str,
        ledger: &mut WordLedger,
        dictionary: &Dictionary,
    ) -> WordOutcome {
        let word = candidate.to_lowercase();

        if !self.is_playable(&word, dictionary) {
            return WordOutcome::RejectedNotAWord { word };
        }
        if !ledger.insert(&word) {
            return WordOutcome::RejectedDuplicate { word };
        }
        WordOutcome::Accepted { word }
    }

    /// Read-only would-be-valid check for rendering an in-progress path.
    /// Never mutates the ledger.
    pub fn probe(&self, candidate: &str, ledger: &WordLedger, dictionary: &Dictionary) -> bool {
        let word = candidate.to_lowercase();
        self.is_playable(&word, dictionary) && !ledger.contains(&word)
    }

    fn is_playable(&self, word: &str, dictionary: &Dictionary) -> bool {
        word.len() >= self.min_word_length && dictionary.contains(word)
    }
}
