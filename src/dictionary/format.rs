use serde::{
    Deserialize,
    Serialize,
};

use super::models::Definition;

pub const NO_DETAILED_INFO: &str = "No detailed info.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardBackStyle {
    /// Primary meaning only: part of speech, meaning, synonyms, antonyms, one example.
    Summary,
    /// Every part of speech with its leading definitions.
    #[default]
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub style: CardBackStyle,
    pub definitions_per_part_of_speech: usize,
    pub max_examples: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { style: CardBackStyle::Detailed, definitions_per_part_of_speech: 2, max_examples: 1 }
    }
}

/// Render a definition as plain text for the back of a card.
pub fn format_card_back(definition: &Definition, options: &FormatOptions) -> String {
    let blocks = match options.style {
        CardBackStyle::Summary => summary_blocks(definition),
        CardBackStyle::Detailed => detailed_blocks(definition, options),
    };

    let text = blocks.join("\n\n");
    let text = text.trim();
    if text.is_empty() {
        NO_DETAILED_INFO.to_string()
    } else {
        text.to_string()
    }
}

fn summary_blocks(definition: &Definition) -> Vec<String> {
    let Some(summary) = definition.primary() else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    if !summary.part_of_speech.is_empty() {
        blocks.push(format!("Part of Speech: {}", summary.part_of_speech));
    }
    if !summary.meaning.is_empty() {
        blocks.push(format!("Meaning: {}", summary.meaning));
    }
    if !summary.synonyms.is_empty() {
        blocks.push(format!("Synonyms: {}", summary.synonyms.join(", ")));
    }
    if !summary.antonyms.is_empty() {
        blocks.push(format!("Antonyms: {}", summary.antonyms.join(", ")));
    }
    if let Some(example) = summary.examples.first() {
        blocks.push(format!("Example: {example}"));
    }
    blocks
}

fn detailed_blocks(definition: &Definition, options: &FormatOptions) -> Vec<String> {
    let mut blocks = Vec::new();

    if let Some(phonetic) = &definition.phonetic {
        blocks.push(phonetic.clone());
    }

    for meaning in &definition.meanings {
        let shown = &meaning.senses[..meaning.senses.len().min(options.definitions_per_part_of_speech)];
        if shown.is_empty() {
            continue;
        }

        let mut lines = Vec::new();
        if !meaning.part_of_speech.is_empty() {
            lines.push(meaning.part_of_speech.clone());
        }
        for (idx, sense) in shown.iter().enumerate() {
            lines.push(format!("{}. {}", idx + 1, sense.definition));
        }

        let mut synonyms = meaning.synonyms.clone();
        let mut antonyms = meaning.antonyms.clone();
        for sense in shown {
            for synonym in &sense.synonyms {
                if !synonyms.contains(synonym) {
                    synonyms.push(synonym.clone());
                }
            }
            for antonym in &sense.antonyms {
                if !antonyms.contains(antonym) {
                    antonyms.push(antonym.clone());
                }
            }
        }
        if !synonyms.is_empty() {
            lines.push(format!("Synonyms: {}", synonyms.join(", ")));
        }
        if !antonyms.is_empty() {
            lines.push(format!("Antonyms: {}", antonyms.join(", ")));
        }

        blocks.push(lines.join("\n"));
    }

    let examples: Vec<String> = definition
        .examples()
        .take(options.max_examples)
        .map(|example| format!("Example: {example}"))
        .collect();
    if !examples.is_empty() {
        blocks.push(examples.join("\n"));
    }

    blocks
}
