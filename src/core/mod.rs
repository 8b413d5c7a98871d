pub mod daily;
pub mod errors;
pub mod models;
pub mod session;

pub use daily::{
    daily_hash,
    select_daily_index,
    SelectionKey,
};
pub use errors::TwiError;
pub use models::{
    ProgressState,
    VocabItem,
};
pub use session::PracticeSession;
