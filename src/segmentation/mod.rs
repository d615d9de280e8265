pub mod lemmatizer;
pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordSet;
pub use tokenizer::{
    extract_candidates,
    TokenizerOptions,
};
