use journal_model::Session;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The signed-in identity shared by all screens of one app instance.
///
/// Cloning is cheap and all clones observe the same session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionState {
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    pub async fn set(&self, session: Session) {
        tracing::debug!(user_id = %session.user_id, "session started");
        *self.inner.write().await = Some(session);
    }

    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    pub async fn current_user_id(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|session| session.user_id.clone())
    }

    pub async fn sign_out(&self) {
        if let Some(session) = self.inner.write().await.take() {
            tracing::debug!(user_id = %session.user_id, "session ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_clones_share_session() {
        let state = SessionState::default();
        let other = state.clone();
        assert_eq!(other.current_user_id().await, None);

        state
            .set(Session {
                user_id: "alice".to_owned(),
                email: "alice@example.com".to_owned(),
            })
            .await;
        assert_eq!(other.current_user_id().await.as_deref(), Some("alice"));

        other.sign_out().await;
        assert!(state.current().await.is_none());
    }
}
