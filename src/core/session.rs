use std::{
    collections::HashSet,
    fmt,
};

use log::{
    debug,
    info,
};

use super::deck::{
    CardDeck,
    CardEntry,
    CardMeaning,
};
use crate::{
    dictionary::{
        format_card_back,
        FormatOptions,
        Resolution,
    },
    segmentation::{
        extract_candidates,
        StopwordSet,
        TokenizerOptions,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    NoWords,
    Ready(usize),
    AllIgnored,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "Paste some text and press Process."),
            SessionStatus::NoWords => write!(f, "No valid words to display."),
            SessionStatus::Ready(count) => {
                write!(f, "Found {count} unique words. Click the card to load meaning.")
            }
            SessionStatus::AllIgnored => write!(f, "All words ignored."),
        }
    }
}

/// What the caller has to do after the card was flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealAction {
    /// Deck is empty, nothing to flip.
    Nothing,
    ShowFront,
    /// The back already has content or a lookup for it is in flight.
    ShowBack,
    /// Look this word up and hand the result to [`Session::apply_resolution`].
    Fetch(String),
}

/// One study session: the stopwords, the current deck and the flip state.
#[derive(Debug)]
pub struct Session {
    stopwords: StopwordSet,
    deck: CardDeck,
    options: TokenizerOptions,
    status: SessionStatus,
    flipped: bool,
    // Words with a lookup out. Outlives the deck, so reprocessing never fetches twice.
    in_flight: HashSet<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StopwordSet::default(), TokenizerOptions::default())
    }
}

impl Session {
    pub fn new(stopwords: StopwordSet, options: TokenizerOptions) -> Self {
        Self {
            stopwords,
            deck: CardDeck::new(),
            options,
            status: SessionStatus::Idle,
            flipped: false,
            in_flight: HashSet::new(),
        }
    }

    /// Rebuild the deck from `text`. Returns the number of cards.
    pub fn process_text(&mut self, text: &str) -> usize {
        let words = extract_candidates(text, &self.stopwords, self.options);
        let count = words.len();

        self.deck.initialize(words);
        self.flipped = false;
        self.status = if count == 0 { SessionStatus::NoWords } else { SessionStatus::Ready(count) };

        info!("Processed text into {} cards", count);
        count
    }

    pub fn next(&mut self) -> bool {
        let moved = self.deck.next();
        if moved {
            self.flipped = false;
        }
        moved
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.deck.previous();
        if moved {
            self.flipped = false;
        }
        moved
    }

    /// Turn the current card over. Showing the back of a card with no content yet marks
    /// it as loading and asks the caller to fetch it, unless a lookup for the same word
    /// is already out. A word is never fetched twice at once.
    pub fn flip(&mut self) -> RevealAction {
        let Some(entry) = self.deck.current_mut() else {
            return RevealAction::Nothing;
        };

        self.flipped = !self.flipped;
        if !self.flipped {
            return RevealAction::ShowFront;
        }

        match entry.meaning {
            CardMeaning::Unfetched | CardMeaning::NotFound => {
                entry.meaning = CardMeaning::Loading;
                if !self.in_flight.insert(entry.word.clone()) {
                    debug!("Revealing '{}', lookup already in flight", entry.word);
                    return RevealAction::ShowBack;
                }
                debug!("Revealing '{}', lookup required", entry.word);
                RevealAction::Fetch(entry.word.clone())
            }
            CardMeaning::Loading | CardMeaning::Loaded(_) => RevealAction::ShowBack,
        }
    }

    /// Store a finished lookup on the card it belongs to, wherever that card is now.
    /// Results for cards that are gone or not waiting for one are dropped.
    pub fn apply_resolution(
        &mut self,
        word: &str,
        resolution: &Resolution,
        format: &FormatOptions,
    ) -> bool {
        self.in_flight.remove(word);

        let Some(entry) = self.deck.find_mut(word) else {
            debug!("Dropping lookup result for '{}': card no longer in deck", word);
            return false;
        };

        if !entry.is_loading() {
            debug!("Dropping stale lookup result for '{}'", word);
            return false;
        }

        entry.meaning = match resolution {
            Resolution::Found(definition) => CardMeaning::Loaded(format_card_back(definition, format)),
            Resolution::NotFound => CardMeaning::NotFound,
        };
        true
    }

    /// Add the current word to the stopwords and drop its card. Returns the word.
    pub fn ignore_current(&mut self) -> Option<String> {
        let removed = self.deck.remove_current()?;
        self.stopwords.insert(&removed.word);
        self.flipped = false;

        if self.deck.is_empty() {
            self.status = SessionStatus::AllIgnored;
        }

        info!("Ignored '{}'", removed.word);
        Some(removed.word)
    }

    /// Takes effect on the next call to [`Session::process_text`].
    pub fn unignore(&mut self, word: &str) -> bool {
        self.stopwords.remove(word)
    }

    pub fn set_options(&mut self, options: TokenizerOptions) {
        self.options = options;
    }

    pub fn current(&self) -> Option<&CardEntry> {
        self.deck.current()
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::Arc,
        time::Duration,
    };

    use super::*;
    use crate::dictionary::{
        cache::tests::MockSource,
        models::tests::run_definition,
        DefinitionResolver,
    };

    const SAMPLE: &str = "The cats are running and jumping over the lazy dogs.";

    fn words(session: &Session) -> Vec<&str> {
        session.deck().entries().iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_process_text_builds_deck() {
        let mut session = Session::default();
        assert_eq!(session.status(), &SessionStatus::Idle);

        assert_eq!(session.process_text(SAMPLE), 5);
        assert_eq!(words(&session), vec!["cats", "running", "jumping", "lazy", "dogs"]);
        assert_eq!(session.status(), &SessionStatus::Ready(5));
        assert_eq!(
            session.status().to_string(),
            "Found 5 unique words. Click the card to load meaning."
        );
        assert_eq!(session.current().map(|e| e.word.as_str()), Some("cats"));
    }

    #[test]
    fn test_no_words_status() {
        let mut session = Session::default();
        assert_eq!(session.process_text("the and over, 123"), 0);
        assert_eq!(session.status(), &SessionStatus::NoWords);
        assert_eq!(session.status().to_string(), "No valid words to display.");
        assert!(session.current().is_none());
        assert_eq!(session.flip(), RevealAction::Nothing);
    }

    #[test]
    fn test_ignore_current_updates_stopwords_and_deck() {
        let mut session = Session::default();
        session.process_text(SAMPLE);
        session.next();

        assert_eq!(session.ignore_current().as_deref(), Some("running"));
        assert!(session.stopwords().contains("running"));
        assert_eq!(words(&session), vec!["cats", "jumping", "lazy", "dogs"]);
        assert_eq!(session.current().map(|e| e.word.as_str()), Some("jumping"));

        // the ignored word stays out on the next run
        session.process_text(SAMPLE);
        assert_eq!(words(&session), vec!["cats", "jumping", "lazy", "dogs"]);

        assert!(session.unignore("running"));
        session.process_text(SAMPLE);
        assert_eq!(session.deck().len(), 5);
    }

    #[test]
    fn test_ignoring_last_word_empties_deck() {
        let mut session = Session::default();
        session.process_text("serendipity");

        assert_eq!(session.ignore_current().as_deref(), Some("serendipity"));
        assert_eq!(session.status(), &SessionStatus::AllIgnored);
        assert_eq!(session.status().to_string(), "All words ignored.");
        assert!(session.current().is_none());
        assert!(session.ignore_current().is_none());
        assert!(!session.next());
    }

    #[test]
    fn test_flip_requests_fetch_once() {
        let mut session = Session::default();
        session.process_text(SAMPLE);

        assert_eq!(session.flip(), RevealAction::Fetch("cats".to_string()));
        assert!(session.current().unwrap().is_loading());
        assert_eq!(session.flip(), RevealAction::ShowFront);
        // still in flight, so no second request
        assert_eq!(session.flip(), RevealAction::ShowBack);
    }

    #[test]
    fn test_navigation_resets_flip() {
        let mut session = Session::default();
        session.process_text(SAMPLE);

        session.flip();
        assert!(session.is_flipped());
        assert!(session.next());
        assert!(!session.is_flipped());

        session.flip();
        assert!(session.previous());
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_apply_resolution_targets_matching_card() {
        let mut session = Session::default();
        session.process_text(SAMPLE);
        let format = FormatOptions::default();

        assert_eq!(session.flip(), RevealAction::Fetch("cats".to_string()));
        session.next();

        // result arrives after the user moved on
        assert!(session.apply_resolution("cats", &Resolution::Found(run_definition()), &format));
        assert_eq!(session.current().map(|e| e.word.as_str()), Some("running"));
        assert_eq!(session.current().unwrap().meaning, CardMeaning::Unfetched);

        let cats = &session.deck().entries()[0];
        assert!(cats.is_fetched());
        assert!(cats.back_text().contains("To move swiftly on foot."));

        // a duplicate arrival is stale and ignored
        assert!(!session.apply_resolution("cats", &Resolution::NotFound, &format));
        assert!(!session.apply_resolution("unknown", &Resolution::NotFound, &format));
    }

    #[test]
    fn test_not_found_is_retried_on_next_reveal() {
        let mut session = Session::default();
        session.process_text("qwzx");
        let format = FormatOptions::default();

        assert_eq!(session.flip(), RevealAction::Fetch("qwzx".to_string()));
        session.apply_resolution("qwzx", &Resolution::NotFound, &format);
        assert_eq!(session.current().unwrap().back_text(), "No data found.");

        session.flip();
        assert_eq!(session.flip(), RevealAction::Fetch("qwzx".to_string()));
    }

    #[test]
    fn test_reprocessing_keeps_lookup_in_flight() {
        let mut session = Session::default();
        let format = FormatOptions::default();
        session.process_text("cats");

        assert_eq!(session.flip(), RevealAction::Fetch("cats".to_string()));

        // fresh card for the same word while the first lookup is still out
        session.process_text("cats");
        assert_eq!(session.current().unwrap().meaning, CardMeaning::Unfetched);
        assert_eq!(session.flip(), RevealAction::ShowBack);
        assert!(session.current().unwrap().is_loading());

        // the one result fills the new card
        assert!(session.apply_resolution("cats", &Resolution::Found(run_definition()), &format));
        assert!(session.current().unwrap().is_fetched());
    }

    #[test]
    fn test_failed_lookup_can_be_retried_after_reprocessing() {
        let mut session = Session::default();
        let format = FormatOptions::default();
        session.process_text("qwzx");

        assert_eq!(session.flip(), RevealAction::Fetch("qwzx".to_string()));
        session.process_text("qwzx");
        // the card it was for is gone, but the word is free again
        assert!(!session.apply_resolution("qwzx", &Resolution::NotFound, &format));

        assert_eq!(session.flip(), RevealAction::Fetch("qwzx".to_string()));
    }

    #[tokio::test]
    async fn test_slow_lookup_is_not_repeated_after_reprocessing() {
        let mock = Arc::new(MockSource::slow(run_definition(), Duration::from_millis(100)));
        let resolver = Arc::new(DefinitionResolver::new(mock.clone()));
        let format = FormatOptions::default();

        let mut session = Session::default();
        let mut pending = Vec::new();
        for _ in 0..2 {
            session.process_text("cats");
            if let RevealAction::Fetch(word) = session.flip() {
                let resolver = resolver.clone();
                pending.push(tokio::spawn(async move {
                    let resolution = resolver.resolve(&word).await;
                    (word, resolution)
                }));
            }
        }

        for handle in pending {
            let (word, resolution) = handle.await.unwrap();
            session.apply_resolution(&word, &resolution, &format);
        }

        assert_eq!(mock.calls(), 1);
        assert!(session.current().unwrap().is_fetched());
    }

    #[tokio::test]
    async fn test_reveal_round_trip_with_resolver() {
        let mock = Arc::new(MockSource::found(run_definition()));
        let resolver = DefinitionResolver::new(mock.clone());
        let format = FormatOptions::default();

        let mut session = Session::default();
        session.process_text("Run, run, RUN!");
        assert_eq!(session.deck().len(), 1);

        for _ in 0..2 {
            if let RevealAction::Fetch(word) = session.flip() {
                let resolution = resolver.resolve(&word).await;
                session.apply_resolution(&word, &resolution, &format);
            }
            session.flip();
        }

        // reprocessing resets the cards but the cache keeps the definition
        session.process_text("run");
        if let RevealAction::Fetch(word) = session.flip() {
            let resolution = resolver.resolve(&word).await;
            session.apply_resolution(&word, &resolution, &format);
        }

        assert!(session.current().unwrap().is_fetched());
        assert_eq!(mock.calls(), 1);
    }
}
