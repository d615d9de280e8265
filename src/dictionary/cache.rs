use std::{
    collections::HashMap,
    sync::{
        Arc,
        Mutex,
        MutexGuard,
    },
};

use log::{
    debug,
    warn,
};

use super::{
    client::DefinitionSource,
    models::Definition,
};

pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Successful lookups for the lifetime of the session. Never evicted.
#[derive(Debug, Default)]
pub struct DefinitionCache {
    entries: HashMap<String, Definition>,
}

impl DefinitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<&Definition> {
        self.entries.get(&normalize_word(word))
    }

    pub fn insert(&mut self, word: &str, definition: Definition) {
        self.entries.insert(normalize_word(word), definition);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Definition),
    NotFound,
}

/// Cache-first front for a [`DefinitionSource`]. A word that resolved once is never
/// looked up again; failures are not remembered so they can be retried.
pub struct DefinitionResolver {
    source: Arc<dyn DefinitionSource>,
    cache: Mutex<DefinitionCache>,
}

impl DefinitionResolver {
    pub fn new(source: Arc<dyn DefinitionSource>) -> Self {
        Self { source, cache: Mutex::new(DefinitionCache::new()) }
    }

    pub async fn resolve(&self, word: &str) -> Resolution {
        let key = normalize_word(word);
        if key.is_empty() {
            return Resolution::NotFound;
        }

        let cached = self.lock_cache().get(&key).cloned();
        if let Some(definition) = cached {
            debug!("Definition cache hit for '{}'", key);
            return Resolution::Found(definition);
        }

        debug!("Fetching definition for '{}'", key);
        match self.source.lookup(&key).await {
            Ok(definition) => {
                self.lock_cache().insert(&key, definition.clone());
                Resolution::Found(definition)
            }
            Err(e) => {
                warn!("Lookup for '{}' failed: {}", key, e);
                Resolution::NotFound
            }
        }
    }

    pub fn is_cached(&self, word: &str) -> bool {
        self.lock_cache().contains(word)
    }

    pub fn cached_words(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, DefinitionCache> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{
        sync::atomic::{
            AtomicUsize,
            Ordering,
        },
        time::Duration,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::{
        core::LexicardsError,
        dictionary::models::tests::run_definition,
    };

    /// Answers every lookup with the same result and counts the calls.
    pub(crate) struct MockSource {
        definition: Option<Definition>,
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl MockSource {
        pub(crate) fn found(definition: Definition) -> Self {
            Self { definition: Some(definition), delay: None, calls: AtomicUsize::new(0) }
        }

        pub(crate) fn failing() -> Self {
            Self { definition: None, delay: None, calls: AtomicUsize::new(0) }
        }

        pub(crate) fn slow(definition: Definition, delay: Duration) -> Self {
            Self { definition: Some(definition), delay: Some(delay), calls: AtomicUsize::new(0) }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DefinitionSource for MockSource {
        async fn lookup(&self, word: &str) -> Result<Definition, LexicardsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.definition {
                Some(definition) => Ok(definition.clone()),
                None => Err(LexicardsError::HttpStatus {
                    status: 404,
                    url: format!("mock://{word}"),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_second_resolve_is_served_from_cache() {
        let mock = Arc::new(MockSource::found(run_definition()));
        let resolver = DefinitionResolver::new(mock.clone());

        let first = resolver.resolve("run").await;
        let second = resolver.resolve("run").await;

        assert_eq!(mock.calls(), 1);
        assert_eq!(first, Resolution::Found(run_definition()));
        assert_eq!(first, second);
        assert!(resolver.is_cached("run"));
    }

    #[tokio::test]
    async fn test_cache_key_is_normalized() {
        let mock = Arc::new(MockSource::found(run_definition()));
        let resolver = DefinitionResolver::new(mock.clone());

        resolver.resolve("Run").await;
        resolver.resolve("  run ").await;

        assert_eq!(mock.calls(), 1);
        assert_eq!(resolver.cached_words(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mock = Arc::new(MockSource::failing());
        let resolver = DefinitionResolver::new(mock.clone());

        assert_eq!(resolver.resolve("zzzz").await, Resolution::NotFound);
        assert!(!resolver.is_cached("zzzz"));

        assert_eq!(resolver.resolve("zzzz").await, Resolution::NotFound);
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_blank_word_skips_lookup() {
        let mock = Arc::new(MockSource::found(run_definition()));
        let resolver = DefinitionResolver::new(mock.clone());

        assert_eq!(resolver.resolve("   ").await, Resolution::NotFound);
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn test_cache_basics() {
        let mut cache = DefinitionCache::new();
        assert!(cache.is_empty());

        cache.insert("Run", run_definition());
        assert!(cache.contains("run"));
        assert_eq!(cache.get("RUN").map(|d| d.word.as_str()), Some("run"));
        assert_eq!(cache.len(), 1);
    }
}
