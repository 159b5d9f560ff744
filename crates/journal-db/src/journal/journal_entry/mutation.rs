use crate::util::FlattenTransactionResultExt;
use journal_entity::journal::journal_entry::{self, Entity as JournalEntry, Model as JournalEntryModel};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, TransactionTrait};
use std::error::Error;

pub struct Mutation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row was removed; carries its owner.
    Removed(String),
    Absent,
    /// The row belongs to someone other than the requested owner and was kept.
    OwnedByOther,
}

impl Mutation {
    /// Insert the entry or replace the stored one with the same id.
    ///
    /// An existing row is only replaced when it belongs to `entry.user_id`; its `created_at` is
    /// kept. Returns the number of written rows, so `0` means the id is owned by someone else.
    pub async fn replace_journal_entry<C: ConnectionTrait>(conn: &C, entry: JournalEntryModel) -> Result<u64, DbErr> {
        let owner = entry.user_id.clone();
        let mut on_conflict = OnConflict::column(journal_entry::Column::Id);
        on_conflict
            .update_columns([
                journal_entry::Column::UserId,
                journal_entry::Column::Title,
                journal_entry::Column::Content,
            ])
            .action_and_where(journal_entry::Column::UserId.eq(owner));

        JournalEntry::insert(entry.into_active_model())
            .on_conflict(on_conflict)
            .exec_without_returning(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to write journal entry"))
    }

    /// Delete the entry with the given id. With `only_owner` set, rows of other users are kept.
    pub async fn delete_journal_entry(
        db: &DatabaseConnection,
        id: &str,
        only_owner: Option<&str>,
    ) -> Result<DeleteOutcome, DbErr> {
        let id = id.to_owned();
        let only_owner = only_owner.map(str::to_owned);
        db.transaction::<_, DeleteOutcome, DbErr>(move |txn| {
            Box::pin(async move {
                let Some(existing) = JournalEntry::find_by_id(id.clone()).one(txn).await? else {
                    tracing::debug!(%id, "journal entry already absent");
                    return Ok(DeleteOutcome::Absent);
                };
                if only_owner.as_ref().is_some_and(|owner| *owner != existing.user_id) {
                    return Ok(DeleteOutcome::OwnedByOther);
                }
                JournalEntry::delete_by_id(id).exec(txn).await?;
                Ok(DeleteOutcome::Removed(existing.user_id))
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to delete journal entry"))
    }
}
