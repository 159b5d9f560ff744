mod common;

use crate::common::connect;
use journal_db::account::{Mutation, Query};
use sea_orm::SqlErr;
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_find_account() {
    let db = &connect().await;

    let account = Mutation::create_account(db, "a@example.com".to_owned(), "hash".to_owned())
        .await
        .unwrap();

    let found = Query::find_by_email(db, "a@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, account.id);
    assert_eq!(found.password_hash, "hash");

    assert!(Query::find_by_email(db, "b@example.com").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_duplicate_email_is_rejected() {
    let db = &connect().await;

    Mutation::create_account(db, "a@example.com".to_owned(), "hash".to_owned())
        .await
        .unwrap();
    let error = Mutation::create_account(db, "a@example.com".to_owned(), "other".to_owned())
        .await
        .unwrap_err();

    assert!(matches!(error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
}
