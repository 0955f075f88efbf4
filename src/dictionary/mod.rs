use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

/// Read-only word list supplied by the host. The core only needs the
/// membership test; words are stored lowercase and every lookup is
/// case-folded to match.
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line. Blank lines are
    /// skipped; no length filter is applied here — minimum word length is a
    /// validation-time policy.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        tracing::info!("Loaded {} words into dictionary", words.len());

        Ok(Self { words })
    }

    /// Create an empty dictionary (for testing and missing-file fallback)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a dictionary from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("test"));
    }

    #[test]
    fn test_from_words_normalizes_case() {
        let dict = Dictionary::from_words(["Cat", "DOG", "  bird  ", ""]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("CAT"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("bird"));
    }

    #[test]
    fn test_single_letter_words_survive() {
        let dict = Dictionary::from_words(["a", "I"]);
        assert!(dict.contains("a"));
        assert!(dict.contains("i"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = std::env::temp_dir().join("word-trail-dict-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("words.txt");
        tokio::fs::write(&path, "CAT\n\n  dog \ntree\n").await.unwrap();

        let dict = Dictionary::load(&path).await.unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("TREE"));
    }

    #[tokio::test]
    async fn test_load_missing_file_errors() {
        let result = Dictionary::load("/nonexistent/words.txt").await;
        assert!(result.is_err());
    }
}
