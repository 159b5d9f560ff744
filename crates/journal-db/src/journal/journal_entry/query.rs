use journal_entity::journal::journal_entry::{self, Entity as JournalEntry, Model as JournalEntryModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    /// All entries owned by `user_id`, newest first.
    pub async fn get_user_journal_entries<C: ConnectionTrait>(
        conn: &C,
        user_id: &str,
    ) -> Result<Vec<JournalEntryModel>, DbErr> {
        tracing::trace!(%user_id, "loading user journal entries");
        JournalEntry::find()
            .filter(journal_entry::Column::UserId.eq(user_id))
            .order_by_desc(journal_entry::Column::CreatedAt)
            .order_by_asc(journal_entry::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user journal entries"))
    }

    pub async fn get_journal_entry<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<JournalEntryModel>, DbErr> {
        JournalEntry::find_by_id(id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load journal entry"))
    }
}
