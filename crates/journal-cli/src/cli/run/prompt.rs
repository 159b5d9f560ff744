use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use std::borrow::Cow;

/// Prompt that names the screen the shell is on.
#[derive(Clone, Debug)]
pub struct ScreenPrompt {
    pub screen: &'static str,
}

pub static PROMPT_INDICATOR: &str = "〉";
pub static VI_INSERT_PROMPT_INDICATOR: &str = ": ";
pub static MULTILINE_INDICATOR: &str = "::: ";

impl ScreenPrompt {
    pub fn new(screen: &'static str) -> Self {
        Self { screen }
    }
}

impl Prompt for ScreenPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.screen)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs | PromptEditMode::Vi(PromptViMode::Normal) => {
                PROMPT_INDICATOR.into()
            }
            PromptEditMode::Vi(PromptViMode::Insert) => VI_INSERT_PROMPT_INDICATOR.into(),
            PromptEditMode::Custom(mode) => format!("({mode})").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({prefix}search) \"{}\": ", history_search.term))
    }
}
