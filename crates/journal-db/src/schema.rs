use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};

/// Create the tables if they do not exist yet.
pub async fn setup_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let migration = match db.get_database_backend() {
        DatabaseBackend::Postgres => include_str!("schema/postgres.sql"),
        DatabaseBackend::Sqlite => include_str!("schema/sqlite.sql"),
        DatabaseBackend::MySql => {
            return Err(DbErr::Custom("mysql is not supported".to_string()));
        }
    };

    tracing::debug!(backend = ?db.get_database_backend(), "setting up schema");
    db.execute_unprepared(migration).await?;
    Ok(())
}
