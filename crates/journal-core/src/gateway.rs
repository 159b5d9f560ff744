mod db;

pub use db::DbGateway;

use crate::error::GatewayError;
use crate::subscription::Subscription;
use async_trait::async_trait;
use journal_model::JournalEntry;

/// Every persistence operation on journal entries goes through a gateway.
///
/// Writes always stamp the caller-supplied owner onto the entry, so no caller can store an entry
/// in someone else's partition.
#[async_trait]
pub trait Gateway: Send + Sync + 'static {
    /// Allocates an id that no stored entry uses. Has no effect on stored data.
    fn new_identifier(&self) -> String;

    /// Writes `entry` under `owner`, replacing any stored entry with the same id.
    ///
    /// An entry without id gets a fresh one. Returns the id that was written.
    async fn save(&self, entry: &JournalEntry, owner: &str) -> Result<String, GatewayError>;

    /// Removes the entry. Removing an unknown id succeeds.
    async fn delete(&self, entry_id: &str) -> Result<(), GatewayError>;

    /// All entries of `owner`, newest first.
    async fn fetch_all(&self, owner: &str) -> Result<Vec<JournalEntry>, GatewayError>;

    /// Opens a live query on `owner`'s entries.
    ///
    /// `on_update` receives the complete current list right away and again after every change;
    /// each call replaces the previous one. After `on_error` no further updates arrive. Must be
    /// called from within a tokio runtime.
    fn subscribe<U, E>(&self, owner: &str, on_update: U, on_error: E) -> Subscription
    where
        U: FnMut(Vec<JournalEntry>) + Send + 'static,
        E: FnOnce(GatewayError) + Send + 'static;
}
