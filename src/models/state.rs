use tracing::debug;

use super::post::Platform;
use super::tab::Tab;
use crate::publish::{PublishOutcome, PublishSink, Submission};

/// Everything the user can change. All panels are derived from this.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub search_term: String,
    pub is_dark_mode: bool,
    pub draft_content: String,
    pub draft_platform: Option<Platform>,
}

impl ViewState {
    /// Whether the publish action is enabled for the current draft.
    pub fn can_publish(&self) -> bool {
        self.draft_platform.is_some() && !self.draft_content.is_empty()
    }
}

/// Sole owner of the [`ViewState`]. Every setter is total and synchronous.
#[derive(Debug, Default)]
pub struct ViewStateController {
    state: ViewState,
}

impl ViewStateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from defaults with a different tab and theme.
    pub fn with_initial(tab: Tab, dark_mode: bool) -> Self {
        let mut controller = Self::new();
        controller.state.active_tab = tab;
        controller.state.is_dark_mode = dark_mode;
        controller
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        debug!(from = %self.state.active_tab, to = %tab, "switching tab");
        self.state.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.set_active_tab(self.state.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_active_tab(self.state.active_tab.prev());
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    pub fn toggle_theme(&mut self) {
        self.state.is_dark_mode = !self.state.is_dark_mode;
    }

    pub fn set_draft_content(&mut self, text: impl Into<String>) {
        self.state.draft_content = text.into();
    }

    pub fn set_draft_platform(&mut self, platform: Option<Platform>) {
        self.state.draft_platform = platform;
    }

    /// Hand a complete draft to `sink` and clear it. An incomplete draft
    /// leaves the state untouched.
    pub fn publish(&mut self, sink: &mut dyn PublishSink) -> PublishOutcome {
        let Some(submission) =
            Submission::from_draft(self.state.draft_platform, &self.state.draft_content)
        else {
            debug!("publish ignored, draft incomplete");
            return PublishOutcome::Skipped;
        };

        sink.submit(&submission);
        self.state.draft_content.clear();
        self.state.draft_platform = None;
        PublishOutcome::Published(submission)
    }
}
