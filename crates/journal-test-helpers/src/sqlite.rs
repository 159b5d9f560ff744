use journal_db::schema::setup_schema;
use sea_orm::{Database, DatabaseConnection, DbErr};
use tempfile::TempDir;
use thiserror::Error;

/// A sqlite database file in a temporary directory, removed on drop.
pub struct SqliteDb {
    // We keep this around so it does not get dropped early
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("test-journal-db")?;
        let uri = temp_dir
            .path()
            .join("db.sqlite")
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?
            .to_owned();
        let uri = format!("sqlite://{uri}?mode=rwc");

        tracing::info!(uri = ?uri, "return sqlite db uri");
        Ok(Self { temp_dir, uri })
    }

    pub fn db_uri(&self) -> &str {
        &self.uri
    }

    /// Connects and creates the schema.
    pub async fn connect(&self) -> Result<DatabaseConnection, SqliteError> {
        let db = Database::connect(self.uri.as_str()).await?;
        setup_schema(&db).await?;
        Ok(db)
    }
}

/// A fresh in-memory database with the schema in place.
pub async fn memory_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    Ok(db)
}
