use async_trait::async_trait;
use journal_core::{ChangeFeed, Gateway, GatewayError, Subscription};
use journal_model::JournalEntry;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Save { entry: JournalEntry, owner: String },
    Delete { entry_id: String },
    FetchAll { owner: String },
    Subscribe { owner: String },
}

#[derive(Debug, Default)]
struct Inner {
    documents: BTreeMap<String, JournalEntry>,
    calls: Vec<GatewayCall>,
    failures: VecDeque<String>,
}

/// In-memory gateway that records every call and can be told to fail.
///
/// Ids are handed out as `id-1`, `id-2`, ...
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    inner: Arc<Mutex<Inner>>,
    next_id: Arc<AtomicUsize>,
    changes: ChangeFeed,
}

impl MemoryGateway {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The next `save`, `delete` or `fetch_all` fails with `message`.
    pub fn fail_next(&self, message: &str) {
        self.lock().failures.push_back(message.to_owned());
    }

    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    #[must_use]
    pub fn saves(&self) -> Vec<JournalEntry> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Save { entry, .. } => Some(entry.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn document(&self, id: &str) -> Option<JournalEntry> {
        self.lock().documents.get(id).cloned()
    }

    /// Subscriptions that have not been released yet.
    #[must_use]
    pub fn live_subscriptions(&self) -> usize {
        self.changes.receiver_count()
    }

    /// Stores an entry as is, bypassing the call log.
    pub fn insert(&self, entry: JournalEntry) {
        let owner = entry.user_id.clone();
        self.lock().documents.insert(entry.id.clone(), entry);
        self.changes.notify(&owner);
    }

    fn record(&self, call: GatewayCall) -> Result<(), GatewayError> {
        let mut inner = self.lock();
        inner.calls.push(call);
        match inner.failures.pop_front() {
            Some(message) => Err(GatewayError::Unavailable(message)),
            None => Ok(()),
        }
    }

    fn owned_by(&self, owner: &str) -> Vec<JournalEntry> {
        let mut entries: Vec<JournalEntry> = self
            .lock()
            .documents
            .values()
            .filter(|entry| entry.user_id == owner)
            .cloned()
            .collect();
        entries.sort_by(JournalEntry::newest_first);
        entries
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    fn new_identifier(&self) -> String {
        format!("id-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn save(&self, entry: &JournalEntry, owner: &str) -> Result<String, GatewayError> {
        self.record(GatewayCall::Save {
            entry: entry.clone(),
            owner: owner.to_owned(),
        })?;
        if owner.is_empty() {
            return Err(GatewayError::PermissionDenied);
        }
        let id = if entry.has_id() {
            entry.id.clone()
        } else {
            self.new_identifier()
        };

        {
            let mut inner = self.lock();
            let created_at = match inner.documents.get(&id) {
                Some(existing) if existing.user_id != owner => return Err(GatewayError::PermissionDenied),
                Some(existing) => existing.created_at,
                None => entry.created_at,
            };
            let stored = JournalEntry {
                id: id.clone(),
                user_id: owner.to_owned(),
                created_at,
                ..entry.clone()
            };
            inner.documents.insert(id.clone(), stored);
        }

        self.changes.notify(owner);
        Ok(id)
    }

    async fn delete(&self, entry_id: &str) -> Result<(), GatewayError> {
        self.record(GatewayCall::Delete {
            entry_id: entry_id.to_owned(),
        })?;
        let removed = self.lock().documents.remove(entry_id);
        if let Some(removed) = removed {
            self.changes.notify(&removed.user_id);
        }
        Ok(())
    }

    async fn fetch_all(&self, owner: &str) -> Result<Vec<JournalEntry>, GatewayError> {
        self.record(GatewayCall::FetchAll {
            owner: owner.to_owned(),
        })?;
        Ok(self.owned_by(owner))
    }

    fn subscribe<U, E>(&self, owner: &str, on_update: U, on_error: E) -> Subscription
    where
        U: FnMut(Vec<JournalEntry>) + Send + 'static,
        E: FnOnce(GatewayError) + Send + 'static,
    {
        self.lock().calls.push(GatewayCall::Subscribe {
            owner: owner.to_owned(),
        });
        let gateway = self.clone();
        Subscription::spawn(
            owner.to_owned(),
            self.changes.listen(),
            move |owner| {
                let gateway = gateway.clone();
                async move {
                    let failure = gateway.lock().failures.pop_front();
                    match failure {
                        Some(message) => Err(GatewayError::Unavailable(message)),
                        None => Ok(gateway.owned_by(&owner)),
                    }
                }
            },
            on_update,
            on_error,
        )
    }
}
