use journal_model::JournalEntry;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    Populated,
}

type RowCallback = Box<dyn FnMut(&JournalEntry) + Send>;

/// The rows currently shown in the entry list.
///
/// Every [`ListPresenter::set_entries`] replaces the whole list; rows are never patched.
pub struct ListPresenter {
    entries: Vec<JournalEntry>,
    on_edit_requested: RowCallback,
    on_delete_requested: RowCallback,
}

impl fmt::Debug for ListPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPresenter").field("entries", &self.entries).finish_non_exhaustive()
    }
}

impl ListPresenter {
    pub fn new<E, D>(on_edit_requested: E, on_delete_requested: D) -> Self
    where
        E: FnMut(&JournalEntry) + Send + 'static,
        D: FnMut(&JournalEntry) + Send + 'static,
    {
        Self {
            entries: Vec::new(),
            on_edit_requested: Box::new(on_edit_requested),
            on_delete_requested: Box::new(on_delete_requested),
        }
    }

    pub fn set_entries(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn row_at(&self, index: usize) -> Option<&JournalEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn rows(&self) -> &[JournalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn state(&self) -> ListState {
        if self.entries.is_empty() {
            ListState::Empty
        } else {
            ListState::Populated
        }
    }

    /// Fires the edit callback for the row. Returns `false` if there is no such row.
    pub fn request_edit(&mut self, index: usize) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        (self.on_edit_requested)(entry);
        true
    }

    /// Fires the delete callback for the row. Returns `false` if there is no such row.
    pub fn request_delete(&mut self, index: usize) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        (self.on_delete_requested)(entry);
        true
    }
}
