use crate::auth::Authenticator;
use crate::auth::password::{hash_password, verify_password};
use crate::error::AuthError;
use async_trait::async_trait;
use journal_db::account::{Mutation, Query};
use journal_model::Session;
use sea_orm::{DatabaseConnection, SqlErr};

/// Email and password accounts stored next to the journal.
#[derive(Clone, Debug)]
pub struct DbAuthenticator {
    conn: DatabaseConnection,
}

impl DbAuthenticator {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl Authenticator for DbAuthenticator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let Some(account) = Query::find_by_email(&self.conn, &email).await? else {
            tracing::debug!(%email, "unknown account");
            return Err(AuthError::InvalidCredentials);
        };
        if !verify_password(password, &account.password_hash)? {
            tracing::debug!(%email, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %account.id, "signed in");
        Ok(Session {
            user_id: account.id.as_hyphenated().to_string(),
            email: account.email,
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        if Query::find_by_email(&self.conn, &email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = hash_password(password)?;
        let account = Mutation::create_account(&self.conn, email, password_hash)
            .await
            .map_err(|error| match error.sql_err() {
                // Lost a race against a concurrent sign up.
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken,
                _ => AuthError::Backend(error),
            })?;

        tracing::info!(user_id = %account.id, "account created");
        Ok(Session {
            user_id: account.id.as_hyphenated().to_string(),
            email: account.email,
        })
    }
}
