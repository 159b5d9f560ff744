use crate::error::{EMPTY_ENTRY, ScreenError};
use crate::route::{EditorArgs, Route, Transition};
use journal_core::{Gateway, SessionState};
use journal_model::JournalEntry;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

/// Form for writing a new entry or changing an existing one.
pub struct EditorScreen<G> {
    gateway: Arc<G>,
    session: SessionState,
    mode: EditorMode,
    title: String,
    content: String,
    // Id allocated by the first submit in create mode, reused by retries.
    draft_id: Option<String>,
}

impl<G: Gateway> EditorScreen<G> {
    /// Edit mode when `args` carries a non-empty id; title and content are pre-filled then.
    pub fn new(gateway: Arc<G>, session: SessionState, args: EditorArgs) -> Self {
        let (mode, title, content) = match args.id.filter(|id| !id.is_empty()) {
            Some(id) => (
                EditorMode::Edit { id },
                args.title.unwrap_or_default(),
                args.content.unwrap_or_default(),
            ),
            None => (EditorMode::Create, String::new(), String::new()),
        };
        Self {
            gateway,
            session,
            mode,
            title,
            content,
            draft_id: None,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Saves the form and closes the editor. On any failure the editor stays open unchanged.
    pub async fn submit(&mut self) -> Result<Transition, ScreenError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ScreenError::Validation(EMPTY_ENTRY));
        }

        let Some(user_id) = self.session.current_user_id().await else {
            return Err(ScreenError::AuthRequired);
        };

        let id = match &self.mode {
            EditorMode::Edit { id } => id.clone(),
            EditorMode::Create => self
                .draft_id
                .get_or_insert_with(|| self.gateway.new_identifier())
                .clone(),
        };
        let entry = JournalEntry {
            id,
            ..JournalEntry::new(title, content)
        };

        self.gateway
            .save(&entry, &user_id)
            .await
            .map_err(|error| ScreenError::backend("Failed to save entry", &error))?;
        tracing::debug!(id = %entry.id, "entry saved from editor");

        Ok(Transition::with_notice(Route::Close, "Entry saved successfully"))
    }
}
