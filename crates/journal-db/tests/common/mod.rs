use journal_db::schema::setup_schema;
use journal_entity::journal::journal_entry::Model as JournalEntryModel;
use sea_orm::{Database, DatabaseConnection};

pub async fn connect() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}

#[allow(dead_code)]
pub fn entry(id: &str, user_id: &str, title: &str, created_at: i64) -> JournalEntryModel {
    JournalEntryModel {
        id: id.to_owned(),
        user_id: user_id.to_owned(),
        title: title.to_owned(),
        content: format!("{title} content"),
        created_at,
    }
}
