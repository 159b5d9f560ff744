use journal_core::{DbGateway, Gateway, GatewayError, SessionState};
use journal_db::schema::setup_schema;
use journal_model::{JournalEntry, Session};
use sea_orm::Database;
use std::time::Duration;
use test_log::test;
use tokio::sync::mpsc;
use tokio::time::timeout;

async fn gateway() -> DbGateway {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    DbGateway::new(db)
}

async fn next<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> T {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no delivery in time")
        .expect("subscription ended")
}

#[test(tokio::test)]
async fn test_new_identifiers_are_unique() {
    let gateway = gateway().await;
    let a = gateway.new_identifier();
    let b = gateway.new_identifier();
    assert!(!a.is_empty());
    assert_ne!(a, b);
}

#[test(tokio::test)]
async fn test_save_without_id_assigns_one() {
    let gateway = gateway().await;
    let entry = JournalEntry::new("Hello", "World");

    let id = gateway.save(&entry, "alice").await.unwrap();
    assert!(!id.is_empty());

    let entries = gateway.fetch_all("alice").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
}

#[test(tokio::test)]
async fn test_save_forces_owner() {
    let gateway = gateway().await;
    let entry = JournalEntry::new("Hello", "World").with_id("x").with_owner("mallory");

    gateway.save(&entry, "alice").await.unwrap();

    let entries = gateway.fetch_all("alice").await.unwrap();
    assert_eq!(entries, vec![entry.with_owner("alice")]);
    assert_eq!(entry.user_id, "mallory", "caller's value is untouched");
    assert!(gateway.fetch_all("mallory").await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_save_twice_overwrites() {
    let gateway = gateway().await;
    let first = JournalEntry::new("Old", "Old").with_id("x");
    let second = JournalEntry::new("New", "New").with_id("x");

    gateway.save(&first, "alice").await.unwrap();
    gateway.save(&second, "alice").await.unwrap();
    gateway.save(&second, "alice").await.unwrap();

    let entries = gateway.fetch_all("alice").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "New");
    assert_eq!(entries[0].content, "New");
    assert_eq!(entries[0].created_at, first.created_at);
}

#[test(tokio::test)]
async fn test_save_refuses_foreign_id() {
    let gateway = gateway().await;
    let entry = JournalEntry::new("Mine", "Mine").with_id("x");
    gateway.save(&entry, "alice").await.unwrap();

    let error = gateway.save(&entry, "mallory").await.unwrap_err();
    assert!(matches!(error, GatewayError::PermissionDenied));

    let error = gateway.save(&entry, "").await.unwrap_err();
    assert!(matches!(error, GatewayError::PermissionDenied));
}

#[test(tokio::test)]
async fn test_delete_missing_is_ok() {
    let gateway = gateway().await;
    gateway.delete("missing").await.unwrap();
}

#[test(tokio::test)]
async fn test_scoped_delete_refuses_foreign_entry() {
    let session = SessionState::signed_in(Session {
        user_id: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
    });
    let gateway = gateway().await.scoped_to(session.clone());

    let id = gateway.save(&JournalEntry::new("t", "c"), "alice").await.unwrap();
    let error = gateway.delete(&id).await.unwrap_err();
    assert!(matches!(error, GatewayError::PermissionDenied));
    assert_eq!(gateway.fetch_all("alice").await.unwrap().len(), 1);

    let own = gateway.save(&JournalEntry::new("t", "c"), "bob").await.unwrap();
    gateway.delete(&own).await.unwrap();
    gateway.delete("missing").await.unwrap();
    assert!(gateway.fetch_all("bob").await.unwrap().is_empty());

    session.sign_out().await;
    let error = gateway.delete(&id).await.unwrap_err();
    assert!(matches!(error, GatewayError::PermissionDenied));
}

#[test(tokio::test)]
async fn test_subscription_tracks_changes() {
    let gateway = gateway().await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (error_tx, mut error_rx) = mpsc::unbounded_channel();

    let mut subscription = gateway.subscribe(
        "alice",
        move |entries| tx.send(entries).unwrap(),
        move |error| error_tx.send(error.to_string()).unwrap(),
    );
    assert!(next(&mut rx).await.is_empty());

    let first = JournalEntry::new("one", "1").with_id("a");
    let second = JournalEntry::new("two", "2").with_id("b");
    gateway.save(&first, "alice").await.unwrap();
    assert_eq!(next(&mut rx).await.len(), 1);
    gateway.save(&second, "alice").await.unwrap();

    let snapshot = next(&mut rx).await;
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.contains(&first.with_owner("alice")));
    assert!(snapshot.contains(&second.with_owner("alice")));

    gateway.save(&JournalEntry::new("other", "x"), "bob").await.unwrap();
    gateway.delete("a").await.unwrap();
    let snapshot = next(&mut rx).await;
    assert_eq!(snapshot, vec![second.with_owner("alice")]);

    subscription.close();
    gateway.delete("b").await.unwrap();
    assert!(timeout(Duration::from_millis(100), rx.recv()).await.map_or(true, |v| v.is_none()));
    assert!(error_rx.try_recv().is_err());
}
