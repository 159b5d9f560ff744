use crate::error::ScreenError;
use crate::route::{Route, Transition};
use crate::screen::credentials;
use journal_core::{Authenticator, SessionState};
use std::sync::Arc;

pub struct SignInScreen<A> {
    auth: Arc<A>,
    session: SessionState,
}

impl<A: Authenticator> SignInScreen<A> {
    pub fn new(auth: Arc<A>, session: SessionState) -> Self {
        Self { auth, session }
    }

    /// Signs in and moves on to the entry list. A failed attempt leaves the screen as it was.
    pub async fn submit(&self, email: &str, password: &str) -> Result<Transition, ScreenError> {
        let (email, password) = credentials(email, password)?;

        let session = self
            .auth
            .sign_in(email, password)
            .await
            .map_err(|error| ScreenError::backend("Login failed", &error))?;
        self.session.set(session).await;

        Ok(Transition::to(Route::Main))
    }

    #[must_use]
    pub fn create_account(&self) -> Transition {
        Transition::to(Route::SignUp)
    }
}
