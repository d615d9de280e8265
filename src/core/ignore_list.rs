use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::LexicardsError;
use crate::{
    persistence::{
        get_data_file_path,
        load_json,
        save_json,
    },
    segmentation::StopwordSet,
};

const IGNORE_LIST_FILE: &str = "ignore_list.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreListData {
    pub ignored_terms: Vec<String>,
}

/// Words the user chose to ignore, kept across runs. The built-in stopwords are not
/// stored here.
#[derive(Debug)]
pub struct IgnoreList {
    data: IgnoreListData,
    file_path: PathBuf,
}

impl IgnoreList {
    pub fn load() -> Result<Self, LexicardsError> {
        Self::load_from(&get_data_file_path(IGNORE_LIST_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, LexicardsError> {
        let data: IgnoreListData = load_json(path)?;
        Ok(Self { data, file_path: path.to_path_buf() })
    }

    pub fn save(&self) -> Result<(), LexicardsError> {
        save_json(&self.data, &self.file_path)
    }

    /// Newest terms go first. Returns `false` if the term was already listed.
    pub fn add_term(&mut self, term: &str) -> Result<bool, LexicardsError> {
        let term = term.to_lowercase();
        if self.data.ignored_terms.contains(&term) {
            return Ok(false);
        }
        self.data.ignored_terms.insert(0, term);
        self.save()?;
        Ok(true)
    }

    pub fn remove_term(&mut self, term: &str) -> Result<bool, LexicardsError> {
        let term = term.to_lowercase();
        if let Some(pos) = self.data.ignored_terms.iter().position(|t| *t == term) {
            self.data.ignored_terms.remove(pos);
            self.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.data.ignored_terms.iter().any(|t| *t == term)
    }

    pub fn terms(&self) -> &[String] {
        &self.data.ignored_terms
    }

    /// The default stopwords plus everything in this list.
    pub fn stopwords(&self) -> StopwordSet {
        let mut stopwords = StopwordSet::default();
        stopwords.extend(self.terms());
        stopwords
    }
}
