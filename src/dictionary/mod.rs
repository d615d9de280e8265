pub mod cache;
pub mod client;
pub mod format;
pub mod models;

pub use cache::{
    DefinitionCache,
    DefinitionResolver,
    Resolution,
};
pub use client::{
    DefinitionSource,
    DictionaryApiClient,
};
pub use format::{
    format_card_back,
    CardBackStyle,
    FormatOptions,
};
pub use models::Definition;
