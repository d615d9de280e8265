pub mod app;
pub mod card_view;
pub mod ignore_list_window;
pub mod theme;

pub use app::LexicardsApp;
