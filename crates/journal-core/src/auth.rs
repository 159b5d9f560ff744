mod db;
mod password;

pub use db::DbAuthenticator;

use crate::error::AuthError;
use async_trait::async_trait;
use journal_model::Session;

/// Account operations of the identity provider.
///
/// Signing out and asking for the current user are handled by [`crate::SessionState`].
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Creates the account and signs it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}
