use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::session::SessionState;
use crate::subscription::{ChangeFeed, Subscription};
use async_trait::async_trait;
use journal_db::convert::{FromDbModel, IntoDbModel};
use journal_db::journal::journal_entry::{DeleteOutcome, Mutation, Query};
use journal_model::JournalEntry;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Gateway backed by a sea-orm connection.
///
/// Change notifications only cover writes made through this gateway and its clones.
#[derive(Clone, Debug)]
pub struct DbGateway {
    conn: DatabaseConnection,
    changes: ChangeFeed,
    session: Option<SessionState>,
}

impl DbGateway {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            changes: ChangeFeed::default(),
            session: None,
        }
    }

    /// Only lets the signed-in user of `session` delete entries, and only their own.
    #[must_use]
    pub fn scoped_to(mut self, session: SessionState) -> Self {
        self.session = Some(session);
        self
    }

    async fn delete_scope(&self) -> Result<Option<String>, GatewayError> {
        match &self.session {
            None => Ok(None),
            Some(session) => session
                .current_user_id()
                .await
                .map(Some)
                .ok_or(GatewayError::PermissionDenied),
        }
    }
}

async fn load_entries(conn: &DatabaseConnection, owner: &str) -> Result<Vec<JournalEntry>, GatewayError> {
    let entries = Query::get_user_journal_entries(conn, owner).await?;
    Ok(entries.into_iter().map(JournalEntry::from_db_model).collect())
}

#[async_trait]
impl Gateway for DbGateway {
    fn new_identifier(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    async fn save(&self, entry: &JournalEntry, owner: &str) -> Result<String, GatewayError> {
        if owner.is_empty() {
            return Err(GatewayError::PermissionDenied);
        }
        let id = if entry.has_id() {
            entry.id.clone()
        } else {
            self.new_identifier()
        };
        let stored = JournalEntry {
            id: id.clone(),
            user_id: owner.to_owned(),
            ..entry.clone()
        };

        let written = Mutation::replace_journal_entry(&self.conn, stored.into_db_model()).await?;
        if written == 0 {
            tracing::warn!(%id, %owner, "refusing to overwrite entry of another user");
            return Err(GatewayError::PermissionDenied);
        }
        tracing::debug!(%id, %owner, "saved journal entry");

        self.changes.notify(owner);
        Ok(id)
    }

    async fn delete(&self, entry_id: &str) -> Result<(), GatewayError> {
        let scope = self.delete_scope().await?;
        match Mutation::delete_journal_entry(&self.conn, entry_id, scope.as_deref()).await? {
            DeleteOutcome::Removed(owner) => {
                tracing::debug!(id = %entry_id, %owner, "deleted journal entry");
                self.changes.notify(&owner);
                Ok(())
            }
            DeleteOutcome::Absent => Ok(()),
            DeleteOutcome::OwnedByOther => {
                tracing::warn!(id = %entry_id, "refusing to delete entry of another user");
                Err(GatewayError::PermissionDenied)
            }
        }
    }

    async fn fetch_all(&self, owner: &str) -> Result<Vec<JournalEntry>, GatewayError> {
        load_entries(&self.conn, owner).await
    }

    fn subscribe<U, E>(&self, owner: &str, on_update: U, on_error: E) -> Subscription
    where
        U: FnMut(Vec<JournalEntry>) + Send + 'static,
        E: FnOnce(GatewayError) + Send + 'static,
    {
        let conn = self.conn.clone();
        Subscription::spawn(
            owner.to_owned(),
            self.changes.listen(),
            move |owner| {
                let conn = conn.clone();
                async move { load_entries(&conn, &owner).await }
            },
            on_update,
            on_error,
        )
    }
}
