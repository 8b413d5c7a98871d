pub mod app;
pub mod error_modal;
pub mod practice_card;
pub mod screens;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::TwiApp;
