use serde::{
    Deserialize,
    Serialize,
};

// Wire format of the lookup endpoint. Every field is optional in practice, so everything
// defaults and missing pieces are dropped during normalization.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<ApiDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDefinition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Normalized payload kept in the definition cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub word: String,
    pub phonetic: Option<String>,
    /// One group per part of speech, in the order the API first mentions them.
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub senses: Vec<Sense>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// The single most relevant reading of a word: first part of speech, first definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefinitionSummary {
    pub part_of_speech: String,
    pub meaning: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub examples: Vec<String>,
}

fn push_unique(target: &mut Vec<String>, items: impl IntoIterator<Item = String>) {
    for item in items {
        let item = item.trim().to_string();
        if !item.is_empty() && !target.contains(&item) {
            target.push(item);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Definition {
    /// Merge every entry the API returned for `word`. Part-of-speech groups with the same
    /// name are folded together. Returns `None` when no usable definition text is left.
    pub fn from_entries(word: &str, entries: Vec<ApiEntry>) -> Option<Self> {
        let mut phonetic = None;
        let mut meanings: Vec<Meaning> = Vec::new();

        for entry in entries {
            if phonetic.is_none() {
                phonetic = non_blank(entry.phonetic);
            }

            for api_meaning in entry.meanings {
                let senses: Vec<Sense> = api_meaning
                    .definitions
                    .into_iter()
                    .filter(|d| !d.definition.trim().is_empty())
                    .map(|d| {
                        let mut synonyms = Vec::new();
                        let mut antonyms = Vec::new();
                        push_unique(&mut synonyms, d.synonyms);
                        push_unique(&mut antonyms, d.antonyms);
                        Sense {
                            definition: d.definition.trim().to_string(),
                            example: non_blank(d.example),
                            synonyms,
                            antonyms,
                        }
                    })
                    .collect();

                if senses.is_empty() {
                    continue;
                }

                let part_of_speech = api_meaning.part_of_speech.trim().to_string();
                let position = meanings.iter().position(|m| m.part_of_speech == part_of_speech);
                let meaning = match position {
                    Some(idx) => &mut meanings[idx],
                    None => {
                        meanings.push(Meaning {
                            part_of_speech,
                            senses: Vec::new(),
                            synonyms: Vec::new(),
                            antonyms: Vec::new(),
                        });
                        let last = meanings.len() - 1;
                        &mut meanings[last]
                    }
                };

                meaning.senses.extend(senses);
                push_unique(&mut meaning.synonyms, api_meaning.synonyms);
                push_unique(&mut meaning.antonyms, api_meaning.antonyms);
            }
        }

        if meanings.is_empty() {
            return None;
        }

        Some(Self { word: word.to_string(), phonetic, meanings })
    }

    pub fn primary(&self) -> Option<DefinitionSummary> {
        let meaning = self.meanings.first()?;
        let sense = meaning.senses.first()?;

        let mut synonyms = sense.synonyms.clone();
        push_unique(&mut synonyms, meaning.synonyms.iter().cloned());
        let mut antonyms = sense.antonyms.clone();
        push_unique(&mut antonyms, meaning.antonyms.iter().cloned());

        Some(DefinitionSummary {
            part_of_speech: meaning.part_of_speech.clone(),
            meaning: sense.definition.clone(),
            synonyms,
            antonyms,
            examples: sense.example.iter().cloned().collect(),
        })
    }

    /// Every example sentence, in definition order.
    pub fn examples(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .flat_map(|m| m.senses.iter())
            .filter_map(|s| s.example.as_deref())
    }
}
