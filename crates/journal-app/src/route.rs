use journal_model::JournalEntry;

/// Parameters handed to the editor. All absent means a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorArgs {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl EditorArgs {
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn edit(entry: &JournalEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            title: Some(entry.title.clone()),
            content: Some(entry.content.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignIn,
    SignUp,
    Main,
    Editor(EditorArgs),
    /// Leave the current screen and return to the one below it.
    Close,
}

/// Where to go after a successful action, and what to tell the user on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub route: Route,
    pub notice: Option<&'static str>,
}

impl Transition {
    #[must_use]
    pub fn to(route: Route) -> Self {
        Self { route, notice: None }
    }

    #[must_use]
    pub fn with_notice(route: Route, notice: &'static str) -> Self {
        Self {
            route,
            notice: Some(notice),
        }
    }
}
