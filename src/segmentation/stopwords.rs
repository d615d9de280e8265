//! Stopword set
//!
//! Words in this set are never turned into cards. Entries are always stored lowercase so
//! membership checks are case-insensitive.

use std::collections::HashSet;

/// Default English stopwords: function words that carry little meaning on their own.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    // Articles & determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "either",
    "neither",
    // Pronouns
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
    // Be-verbs
    "is", "am", "are", "was", "were", "be", "been", "being",
    // Auxiliary verbs
    "do", "does", "did", "doing", "have", "has", "had", "having", "can", "could", "will",
    "would", "shall", "should", "may", "might", "must", "ought",
    // Conjunctions
    "and", "or", "but", "nor", "yet", "so", "although", "though", "because", "since", "unless",
    "while", "whereas",
    // Prepositions
    "at", "by", "for", "from", "in", "into", "of", "on", "to", "with", "about", "above",
    "across", "after", "against", "along", "among", "around", "before", "behind", "below",
    "beneath", "beside", "between", "beyond", "during", "inside", "near", "outside", "over",
    "past", "through", "under", "until", "up", "upon", "within", "without",
    // Other common filler
    "not", "no", "yes", "if", "than", "then", "as", "such", "just", "only", "also", "too",
    "very", "more", "most", "much", "many", "fewer", "less", "few", "now", "still", "even",
    "once", "ever", "never", "already",
];

#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopwordSet {
    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self { words: HashSet::new() }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self { words: words.iter().map(|w| w.to_lowercase()).collect() }
    }

    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Only pay for the allocation when the caller passed something with uppercase.
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let set = StopwordSet::default();
        for word in ["the", "are", "and", "over", "themselves", "already"] {
            assert!(set.contains(word), "{word} should be a stopword");
        }
        assert!(!set.contains("cats"));
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len());
    }

    #[test]
    fn test_case_insensitive_membership() {
        let mut set = StopwordSet::empty();
        assert!(set.insert("Zebra"));
        assert!(!set.insert("ZEBRA"));
        assert!(set.contains("zebra"));
        assert!(set.contains("zEbRa"));
        assert!(set.remove("ZeBra"));
        assert!(set.is_empty());
    }
}
