use async_trait::async_trait;
use journal_core::{AuthError, Authenticator};
use journal_model::Session;
use std::collections::HashMap;
use std::sync::Mutex;

/// Accounts kept in memory; the user id of an account is `user-<email>`.
#[derive(Debug, Default)]
pub struct StaticAuthenticator {
    accounts: Mutex<HashMap<String, String>>,
}

impl StaticAuthenticator {
    #[must_use]
    pub fn with_account(email: &str, password: &str) -> Self {
        let auth = Self::default();
        auth.lock().insert(email.to_owned(), password.to_owned());
        auth
    }

    #[must_use]
    pub fn user_id(email: &str) -> String {
        format!("user-{email}")
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.accounts.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn session(email: &str) -> Session {
        Session {
            user_id: Self::user_id(email),
            email: email.to_owned(),
        }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        match self.lock().get(email) {
            Some(stored) if stored == password => Ok(Self::session(email)),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let mut accounts = self.lock();
        if accounts.contains_key(email) {
            return Err(AuthError::EmailTaken);
        }
        accounts.insert(email.to_owned(), password.to_owned());
        Ok(Self::session(email))
    }
}
