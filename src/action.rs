use crate::models::tab::Tab;
use crate::publish::Submission;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Tick,

    // Navigation
    SwitchTab(Tab),
    NextTab,
    PrevTab,
    SelectNext,
    SelectPrev,
    ScrollToTop,
    ScrollToBottom,

    // Theme
    ToggleTheme,

    // Search
    FocusSearch,
    BlurSearch,
    SearchChanged(String),

    // Publish form
    FocusPublishForm,
    BlurPublishForm,
    CyclePlatform { forward: bool },
    DraftContentChanged(String),
    Publish,
    Published(Submission),

    ClearNotice,
}
