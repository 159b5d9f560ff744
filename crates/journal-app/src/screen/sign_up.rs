use crate::error::ScreenError;
use crate::route::{Route, Transition};
use crate::screen::credentials;
use journal_core::{Authenticator, SessionState};
use std::sync::Arc;

pub struct SignUpScreen<A> {
    auth: Arc<A>,
    session: SessionState,
}

impl<A: Authenticator> SignUpScreen<A> {
    pub fn new(auth: Arc<A>, session: SessionState) -> Self {
        Self { auth, session }
    }

    /// Creates the account and goes straight to the entry list.
    pub async fn submit(&self, email: &str, password: &str) -> Result<Transition, ScreenError> {
        let (email, password) = credentials(email, password)?;

        let session = self
            .auth
            .sign_up(email, password)
            .await
            .map_err(|error| ScreenError::backend("Registration failed", &error))?;
        self.session.set(session).await;

        Ok(Transition::with_notice(Route::Main, "Account created successfully"))
    }
}
