use crate::error::ScreenError;
use crate::presenter::{ListPresenter, ListState};
use crate::route::{EditorArgs, Route, Transition};
use journal_core::{Gateway, SessionState, Subscription};
use journal_model::JournalEntry;
use std::sync::Arc;
use tokio::sync::mpsc;

enum Delivery {
    Snapshot(Vec<JournalEntry>),
    Failure(String),
}

enum RowIntent {
    Edit(JournalEntry),
    Delete(JournalEntry),
}

/// What the front end should react to after [`MainScreen::next_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainEvent {
    /// The list was replaced; redraw it.
    Refreshed(ListState),
    Navigate(Route),
    Notice(&'static str),
    Failed(ScreenError),
}

/// The signed-in user's entry list, kept current by a live subscription.
///
/// The subscription lives exactly as long as the screen: it is released by [`MainScreen::close`],
/// by signing out, or when the screen is dropped.
pub struct MainScreen<G> {
    gateway: Arc<G>,
    session: SessionState,
    presenter: ListPresenter,
    subscription: Option<Subscription>,
    deliveries: mpsc::UnboundedReceiver<Delivery>,
    intents: mpsc::UnboundedReceiver<RowIntent>,
}

impl<G: Gateway> MainScreen<G> {
    pub async fn open(gateway: Arc<G>, session: SessionState) -> Result<Self, ScreenError> {
        let Some(user_id) = session.current_user_id().await else {
            tracing::debug!("no signed in user, main screen not opened");
            return Err(ScreenError::AuthRequired);
        };

        let (intent_tx, intents) = mpsc::unbounded_channel();
        let edit_tx = intent_tx.clone();
        let presenter = ListPresenter::new(
            move |entry: &JournalEntry| {
                let _ = edit_tx.send(RowIntent::Edit(entry.clone()));
            },
            move |entry: &JournalEntry| {
                let _ = intent_tx.send(RowIntent::Delete(entry.clone()));
            },
        );

        let (delivery_tx, deliveries) = mpsc::unbounded_channel();
        let error_tx = delivery_tx.clone();
        let subscription = gateway.subscribe(
            &user_id,
            move |entries| {
                let _ = delivery_tx.send(Delivery::Snapshot(entries));
            },
            move |error| {
                let _ = error_tx.send(Delivery::Failure(error.to_string()));
            },
        );

        Ok(Self {
            gateway,
            session,
            presenter,
            subscription: Some(subscription),
            deliveries,
            intents,
        })
    }

    pub fn presenter(&self) -> &ListPresenter {
        &self.presenter
    }

    /// Queues opening the editor for the row. Returns `false` if there is no such row.
    pub fn edit_row(&mut self, index: usize) -> bool {
        self.presenter.request_edit(index)
    }

    /// Queues deleting the row. Returns `false` if there is no such row.
    pub fn delete_row(&mut self, index: usize) -> bool {
        self.presenter.request_delete(index)
    }

    #[must_use]
    pub fn add_entry(&self) -> Transition {
        Transition::to(Route::Editor(EditorArgs::create()))
    }

    pub async fn sign_out(&mut self) -> Transition {
        self.close();
        self.session.sign_out().await;
        Transition::to(Route::SignIn)
    }

    /// Releases the live subscription. Safe to call repeatedly.
    pub fn close(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.close();
        }
    }

    /// False after [`MainScreen::close`], after signing out, and once the list stopped updating.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.subscription.as_ref().is_some_and(|subscription| !subscription.is_finished())
    }

    /// Handles the next row action or list delivery.
    ///
    /// Row actions queued by [`MainScreen::edit_row`] and [`MainScreen::delete_row`] go first.
    /// Otherwise waits for the subscription; returns `None` once it has ended.
    pub async fn next_event(&mut self) -> Option<MainEvent> {
        if let Ok(intent) = self.intents.try_recv() {
            return Some(self.handle_intent(intent).await);
        }
        let delivery = self.deliveries.recv().await?;
        Some(self.apply(delivery))
    }

    async fn handle_intent(&self, intent: RowIntent) -> MainEvent {
        match intent {
            RowIntent::Edit(entry) => MainEvent::Navigate(Route::Editor(EditorArgs::edit(&entry))),
            RowIntent::Delete(entry) => match self.gateway.delete(&entry.id).await {
                Ok(()) => MainEvent::Notice("Entry deleted"),
                Err(error) => MainEvent::Failed(ScreenError::backend("Failed to delete entry", &error)),
            },
        }
    }

    fn apply(&mut self, delivery: Delivery) -> MainEvent {
        match delivery {
            Delivery::Snapshot(entries) => {
                self.presenter.set_entries(entries);
                MainEvent::Refreshed(self.presenter.state())
            }
            Delivery::Failure(message) => {
                tracing::warn!(%message, "entry list stopped updating");
                self.close();
                MainEvent::Failed(ScreenError::Backend {
                    context: "Failed to load entries",
                    message,
                })
            }
        }
    }
}
