pub mod deck;
pub mod errors;
pub mod http;
pub mod ignore_list;
pub mod session;
pub mod settings;
pub mod tasks;

pub use deck::{
    CardDeck,
    CardEntry,
    CardMeaning,
};
pub use errors::LexicardsError;
pub use ignore_list::IgnoreList;
pub use session::{
    RevealAction,
    Session,
    SessionStatus,
};
pub use settings::Settings;
