//! Screen controllers of the journal app.
//!
//! Screens hold no widgets. They take user input, talk to the [`journal_core::Gateway`] and the
//! [`journal_core::Authenticator`], and answer with a [`Transition`] or a [`ScreenError`] that the
//! front end turns into navigation and notifications.

pub mod error;
pub mod presenter;
pub mod route;
pub mod screen;

pub use error::ScreenError;
pub use presenter::{ListPresenter, ListState};
pub use route::{EditorArgs, Route, Transition};
pub use screen::editor::{EditorMode, EditorScreen};
pub use screen::main::{MainEvent, MainScreen};
pub use screen::sign_in::SignInScreen;
pub use screen::sign_up::SignUpScreen;

use journal_core::{Authenticator, Gateway, SessionState};
use std::sync::Arc;

/// Shared collaborators of one app instance; hands out screens wired to them.
pub struct App<A, G> {
    auth: Arc<A>,
    gateway: Arc<G>,
    session: SessionState,
}

impl<A, G> Clone for App<A, G> {
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
            gateway: self.gateway.clone(),
            session: self.session.clone(),
        }
    }
}

impl<A: Authenticator, G: Gateway> App<A, G> {
    pub fn new(auth: A, gateway: G, session: SessionState) -> Self {
        Self {
            auth: Arc::new(auth),
            gateway: Arc::new(gateway),
            session,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn sign_in(&self) -> SignInScreen<A> {
        SignInScreen::new(self.auth.clone(), self.session.clone())
    }

    pub fn sign_up(&self) -> SignUpScreen<A> {
        SignUpScreen::new(self.auth.clone(), self.session.clone())
    }

    /// Opens the entry list; fails with [`ScreenError::AuthRequired`] when nobody is signed in.
    pub async fn main(&self) -> Result<MainScreen<G>, ScreenError> {
        MainScreen::open(self.gateway.clone(), self.session.clone()).await
    }

    pub fn editor(&self, args: EditorArgs) -> EditorScreen<G> {
        EditorScreen::new(self.gateway.clone(), self.session.clone(), args)
    }
}
