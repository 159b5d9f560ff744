pub mod journal;
pub mod session;

pub use journal::JournalEntry;
pub use session::Session;
