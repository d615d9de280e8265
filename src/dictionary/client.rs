use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    Url,
};

use super::models::{
    ApiEntry,
    Definition,
};
use crate::core::{
    http::{
        ensure_success,
        http_client,
    },
    LexicardsError,
};

pub const DEFAULT_API_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Anything that can look a single word up. Errors are reported as-is; turning them into
/// a "not found" outcome is the resolver's job.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Definition, LexicardsError>;
}

pub struct DictionaryApiClient {
    client: Client,
    base_url: String,
}

impl DictionaryApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LexicardsError> {
        Ok(Self::with_client(http_client(timeout)?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn entry_url(&self, word: &str) -> Result<Url, LexicardsError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            LexicardsError::Custom(format!("Invalid lookup URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                LexicardsError::Custom(format!("Lookup URL {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl DefinitionSource for DictionaryApiClient {
    async fn lookup(&self, word: &str) -> Result<Definition, LexicardsError> {
        let url = self.entry_url(word)?;

        let resp = self.client.get(url).send().await?;
        ensure_success(&resp)?;

        let body = resp.text().await?;
        let entries: Vec<ApiEntry> = serde_json::from_str(&body)?;

        Definition::from_entries(word, entries)
            .ok_or_else(|| LexicardsError::NoDefinition(word.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
