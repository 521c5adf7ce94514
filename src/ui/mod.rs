pub mod charts;
pub mod posts;
pub mod publish_form;
pub mod search;
pub mod statusbar;
pub mod tabs;
pub mod theme;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::action::Action;
use crate::models::state::ViewState;

/// Trait for **input components** (`SearchBar`, `PublishForm`) that capture
/// the keyboard while focused.
///
/// Read-only panels (charts, post list, tab bar) are rendered by stateless
/// `draw_*()` functions instead. They read the view state and never see keys.
pub trait Component {
    fn handle_key_event(&mut self, key: KeyEvent, state: &ViewState) -> Option<Action>;
    fn update(&mut self, action: &Action);
    fn draw(&self, frame: &mut Frame, area: ratatui::prelude::Rect, state: &ViewState);
}
