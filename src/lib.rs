pub mod core;
pub mod deck;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    select_daily_index,
    SelectionKey,
    TwiError,
    VocabItem,
};
