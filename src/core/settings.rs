use std::{
    path::PathBuf,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::LexicardsError;
use crate::{
    dictionary::{
        client::DEFAULT_API_BASE_URL,
        CardBackStyle,
        FormatOptions,
    },
    persistence::{
        get_data_file_path,
        load_json_or_default,
        save_json,
    },
    segmentation::TokenizerOptions,
};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub lemmatize: bool,
    pub card_back_style: CardBackStyle,
    pub definitions_per_part_of_speech: usize,
    pub max_examples: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 15,
            lemmatize: false,
            card_back_style: CardBackStyle::Detailed,
            definitions_per_part_of_speech: 2,
            max_examples: 1,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        get_data_file_path(SETTINGS_FILE)
    }

    pub fn load() -> Self {
        load_json_or_default(&Self::default_path())
    }

    pub fn save(&self) -> Result<(), LexicardsError> {
        save_json(self, &Self::default_path())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions { lemmatize: self.lemmatize }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            style: self.card_back_style,
            definitions_per_part_of_speech: self.definitions_per_part_of_speech.max(1),
            max_examples: self.max_examples,
        }
    }
}
