use std::{
    collections::HashSet,
    sync::OnceLock,
};

use regex::Regex;

use super::{
    lemmatizer::lemmatize,
    stopwords::StopwordSet,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Merge inflected forms and emit the lemma instead of the surface form.
    pub lemmatize: bool,
}

fn word_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Runs of ASCII word characters. A token only counts when the whole run is letters,
    // so "abc123" and "snake_case" contribute nothing while "don't" yields "don" and "t".
    RE.get_or_init(|| Regex::new(r"[a-z0-9_]+").expect("static regex is valid"))
}

/// Lowercase the text and split it into ASCII-letter tokens, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_run_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.bytes().all(|b| b.is_ascii_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Produce the ordered, deduplicated list of study words for a piece of text.
///
/// The first occurrence of a word fixes its position. Stopwords are dropped. With
/// lemmatization enabled a token is also dropped when its lemma is a stopword, and
/// tokens sharing a lemma collapse into one entry.
pub fn extract_candidates(
    text: &str,
    stopwords: &StopwordSet,
    options: TokenizerOptions,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for token in tokenize(text) {
        let word = if options.lemmatize {
            let lemma = lemmatize(&token);
            if stopwords.contains(&token) {
                continue;
            }
            lemma
        } else {
            token
        };

        if stopwords.contains(&word) {
            continue;
        }

        if seen.insert(word.clone()) {
            candidates.push(word);
        }
    }

    candidates
}
