use crate::error::GatewayError;
use journal_model::JournalEntry;
use std::future::Future;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

const CHANGE_FEED_CAPACITY: usize = 64;

/// Announces which owner's partition changed after a successful write.
#[derive(Clone, Debug)]
pub struct ChangeFeed {
    sender: broadcast::Sender<String>,
}

impl Default for ChangeFeed {
    fn default() -> Self {
        let (sender, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { sender }
    }
}

impl ChangeFeed {
    pub fn notify(&self, owner: &str) {
        // Sending only fails when nobody listens.
        if self.sender.send(owner.to_owned()).is_err() {
            tracing::trace!(%owner, "no live subscriptions");
        }
    }

    #[must_use]
    pub fn listen(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    /// Number of subscriptions still holding a receiver.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Handle to a live query. Delivery stops on [`Subscription::close`] or when the handle is dropped.
#[derive(Debug)]
pub struct Subscription {
    owner: String,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Spawns the delivery task on the current tokio runtime.
    ///
    /// `load` is run once right away and again after every change to `owner`'s partition; each
    /// result is handed to `on_update` in full. The first failing load goes to `on_error` and ends
    /// the subscription.
    pub fn spawn<L, F, U, E>(
        owner: String,
        mut changes: broadcast::Receiver<String>,
        load: L,
        mut on_update: U,
        on_error: E,
    ) -> Self
    where
        L: Fn(String) -> F + Send + 'static,
        F: Future<Output = Result<Vec<JournalEntry>, GatewayError>> + Send + 'static,
        U: FnMut(Vec<JournalEntry>) + Send + 'static,
        E: FnOnce(GatewayError) + Send + 'static,
    {
        let task_owner = owner.clone();
        let task = tokio::spawn(async move {
            let owner = task_owner;
            loop {
                match load(owner.clone()).await {
                    Ok(entries) => {
                        tracing::trace!(%owner, count = entries.len(), "delivering snapshot");
                        on_update(entries);
                    }
                    Err(error) => {
                        tracing::error!(error = &error as &dyn std::error::Error, %owner, "live query failed");
                        on_error(error);
                        return;
                    }
                }

                loop {
                    match changes.recv().await {
                        Ok(changed) if changed == owner => break,
                        Ok(_) => {}
                        // A full snapshot follows anyway, so missed notices do not matter.
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::debug!(%owner, skipped, "change feed lagged");
                            break;
                        }
                        Err(RecvError::Closed) => {
                            tracing::debug!(%owner, "change feed closed");
                            return;
                        }
                    }
                }
            }
        });
        tracing::debug!(%owner, "subscription opened");

        Self {
            owner,
            task: Some(task),
        }
    }

    pub fn close(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(owner = %self.owner, "subscription closed");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.task.is_none()
    }

    /// True once closed or once the delivery task has stopped by itself after an error.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.close();
    }
}
