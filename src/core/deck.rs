pub const PLACEHOLDER_UNFETCHED: &str = "Click to load meaning...";
pub const PLACEHOLDER_LOADING: &str = "Loading...";
pub const PLACEHOLDER_NOT_FOUND: &str = "No data found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMeaning {
    Unfetched,
    Loading,
    /// Formatted card back.
    Loaded(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub word: String,
    pub meaning: CardMeaning,
}

impl CardEntry {
    pub fn new(word: String) -> Self {
        Self { word, meaning: CardMeaning::Unfetched }
    }

    /// A lookup finished for this card, successful or not.
    pub fn is_fetched(&self) -> bool {
        matches!(self.meaning, CardMeaning::Loaded(_) | CardMeaning::NotFound)
    }

    pub fn is_loading(&self) -> bool {
        self.meaning == CardMeaning::Loading
    }

    pub fn back_text(&self) -> &str {
        match &self.meaning {
            CardMeaning::Unfetched => PLACEHOLDER_UNFETCHED,
            CardMeaning::Loading => PLACEHOLDER_LOADING,
            CardMeaning::Loaded(text) => text,
            CardMeaning::NotFound => PLACEHOLDER_NOT_FOUND,
        }
    }
}

/// Ordered cards with a cursor. The cursor always points at a valid entry while the
/// deck has entries; movement past either end is a no-op.
#[derive(Debug, Default)]
pub struct CardDeck {
    entries: Vec<CardEntry>,
    cursor: usize,
}

impl CardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every card with fresh, unfetched entries and rewind to the first.
    pub fn initialize<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries = words.into_iter().map(CardEntry::new).collect();
        self.cursor = 0;
    }

    /// Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.cursor > 0 && !self.entries.is_empty() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn remove_current(&mut self) -> Option<CardEntry> {
        if self.entries.is_empty() {
            return None;
        }

        let removed = self.entries.remove(self.cursor);
        if self.entries.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.entries.len() - 1);
        }
        Some(removed)
    }

    pub fn current(&self) -> Option<&CardEntry> {
        self.entries.get(self.cursor)
    }

    pub fn current_mut(&mut self) -> Option<&mut CardEntry> {
        self.entries.get_mut(self.cursor)
    }

    /// `None` when the deck is empty.
    pub fn cursor(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.cursor)
    }

    pub fn find_mut(&mut self, word: &str) -> Option<&mut CardEntry> {
        self.entries.iter_mut().find(|entry| entry.word == word)
    }

    pub fn entries(&self) -> &[CardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(words: &[&str]) -> CardDeck {
        let mut deck = CardDeck::new();
        deck.initialize(words.iter().map(|w| w.to_string()));
        deck
    }

    fn current_word(deck: &CardDeck) -> Option<&str> {
        deck.current().map(|entry| entry.word.as_str())
    }

    #[test]
    fn test_initialize_resets_cursor_and_state() {
        let mut deck = deck_of(&["alpha", "beta"]);
        deck.next();
        deck.current_mut().unwrap().meaning = CardMeaning::Loaded("x".to_string());

        deck.initialize(vec!["beta".to_string(), "gamma".to_string()]);
        assert_eq!(deck.cursor(), Some(0));
        assert_eq!(current_word(&deck), Some("beta"));
        assert!(deck.entries().iter().all(|e| e.meaning == CardMeaning::Unfetched));
    }

    #[test]
    fn test_navigation_bounds() {
        let mut deck = deck_of(&["alpha", "beta", "gamma"]);

        assert!(!deck.previous());
        assert_eq!(deck.cursor(), Some(0));

        assert!(deck.next());
        assert!(deck.next());
        assert!(!deck.next());
        assert_eq!(deck.cursor(), Some(2));
        assert_eq!(current_word(&deck), Some("gamma"));

        assert!(deck.previous());
        assert_eq!(current_word(&deck), Some("beta"));
    }

    #[test]
    fn test_remove_current_clamps_cursor() {
        let mut deck = deck_of(&["alpha", "beta", "gamma"]);
        deck.next();
        deck.next();

        let removed = deck.remove_current().unwrap();
        assert_eq!(removed.word, "gamma");
        assert_eq!(deck.cursor(), Some(1));
        assert_eq!(current_word(&deck), Some("beta"));

        deck.previous();
        deck.remove_current();
        assert_eq!(deck.cursor(), Some(0));
        assert_eq!(current_word(&deck), Some("beta"));
    }

    #[test]
    fn test_remove_last_card_empties_deck() {
        let mut deck = deck_of(&["only"]);
        assert!(deck.remove_current().is_some());

        assert!(deck.is_empty());
        assert_eq!(deck.cursor(), None);
        assert!(deck.current().is_none());
        assert!(deck.remove_current().is_none());
        assert!(!deck.next());
        assert!(!deck.previous());
    }

    #[test]
    fn test_back_text() {
        let mut entry = CardEntry::new("word".to_string());
        assert_eq!(entry.back_text(), PLACEHOLDER_UNFETCHED);
        assert!(!entry.is_fetched());

        entry.meaning = CardMeaning::Loading;
        assert_eq!(entry.back_text(), PLACEHOLDER_LOADING);
        assert!(!entry.is_fetched());

        entry.meaning = CardMeaning::NotFound;
        assert_eq!(entry.back_text(), PLACEHOLDER_NOT_FOUND);
        assert!(entry.is_fetched());

        entry.meaning = CardMeaning::Loaded("Meaning: a unit of language".to_string());
        assert_eq!(entry.back_text(), "Meaning: a unit of language");
    }
}
