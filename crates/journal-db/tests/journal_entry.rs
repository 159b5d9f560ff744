mod common;

use crate::common::{connect, entry};
use journal_db::journal::journal_entry::{DeleteOutcome, Mutation, Query};
use journal_db::schema::setup_schema;
use test_log::test;

#[test(tokio::test)]
async fn test_replace_inserts_new_entry() {
    let db = &connect().await;

    let written = Mutation::replace_journal_entry(db, entry("a", "alice", "first", 1)).await.unwrap();
    assert_eq!(written, 1);

    let stored = Query::get_journal_entry(db, "a").await.unwrap().unwrap();
    assert_eq!(stored, entry("a", "alice", "first", 1));
}

#[test(tokio::test)]
async fn test_replace_overwrites_same_id() {
    let db = &connect().await;

    Mutation::replace_journal_entry(db, entry("a", "alice", "first", 1)).await.unwrap();
    Mutation::replace_journal_entry(db, entry("a", "alice", "second", 5)).await.unwrap();

    let entries = Query::get_user_journal_entries(db, "alice").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "second");
    assert_eq!(entries[0].content, "second content");
    assert_eq!(entries[0].created_at, 1, "creation time survives an edit");
}

#[test(tokio::test)]
async fn test_replace_refuses_foreign_entry() {
    let db = &connect().await;

    Mutation::replace_journal_entry(db, entry("a", "alice", "mine", 1)).await.unwrap();
    let written = Mutation::replace_journal_entry(db, entry("a", "mallory", "stolen", 2)).await.unwrap();
    assert_eq!(written, 0);

    let stored = Query::get_journal_entry(db, "a").await.unwrap().unwrap();
    assert_eq!(stored.user_id, "alice");
    assert_eq!(stored.title, "mine");
}

#[test(tokio::test)]
async fn test_user_entries_are_scoped_and_ordered() {
    let db = &connect().await;

    Mutation::replace_journal_entry(db, entry("b", "alice", "older", 10)).await.unwrap();
    Mutation::replace_journal_entry(db, entry("c", "alice", "newer", 20)).await.unwrap();
    Mutation::replace_journal_entry(db, entry("a", "alice", "tie", 10)).await.unwrap();
    Mutation::replace_journal_entry(db, entry("d", "bob", "other", 30)).await.unwrap();

    let ids: Vec<String> = Query::get_user_journal_entries(db, "alice")
        .await
        .unwrap()
        .into_iter()
        .map(|model| model.id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);

    assert!(Query::get_user_journal_entries(db, "nobody").await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_delete_returns_owner() {
    let db = &connect().await;

    Mutation::replace_journal_entry(db, entry("a", "alice", "first", 1)).await.unwrap();

    let outcome = Mutation::delete_journal_entry(db, "a", None).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Removed("alice".to_owned()));
    assert!(Query::get_journal_entry(db, "a").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_delete_scoped_to_owner() {
    let db = &connect().await;

    Mutation::replace_journal_entry(db, entry("a", "alice", "first", 1)).await.unwrap();

    let outcome = Mutation::delete_journal_entry(db, "a", Some("bob")).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::OwnedByOther);
    assert!(Query::get_journal_entry(db, "a").await.unwrap().is_some());

    let outcome = Mutation::delete_journal_entry(db, "a", Some("alice")).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Removed("alice".to_owned()));
}

#[test(tokio::test)]
async fn test_delete_missing_entry() {
    let db = &connect().await;

    let outcome = Mutation::delete_journal_entry(db, "missing", Some("alice")).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Absent);
}

#[test(tokio::test)]
async fn test_setup_schema_is_repeatable() {
    let db = &connect().await;

    Mutation::replace_journal_entry(db, entry("a", "alice", "first", 1)).await.unwrap();
    setup_schema(db).await.unwrap();

    assert!(Query::get_journal_entry(db, "a").await.unwrap().is_some());
}
