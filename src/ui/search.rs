use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::action::Action;
use crate::models::state::ViewState;
use crate::ui::theme::palette;
use crate::ui::Component;

const SEARCH_WIDTH: u16 = 40;

/// Header row: theme switch on the left, post search on the right.
/// The term itself lives in the view state; this only tracks focus.
#[derive(Debug, Default)]
pub struct SearchBar {
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Component for SearchBar {
    fn handle_key_event(&mut self, key: KeyEvent, state: &ViewState) -> Option<Action> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                Some(Action::SearchChanged(String::new()))
            }
            (_, KeyCode::Esc) | (_, KeyCode::Enter) => Some(Action::BlurSearch),
            (_, KeyCode::Backspace) => {
                let mut term = state.search_term.clone();
                term.pop()?;
                Some(Action::SearchChanged(term))
            }
            (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                let mut term = state.search_term.clone();
                term.push(c);
                Some(Action::SearchChanged(term))
            }
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::FocusSearch => self.focused = true,
            Action::BlurSearch => self.focused = false,
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let palette = palette(state.is_dark_mode);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(SEARCH_WIDTH)])
            .split(area);

        let toggle_label = if state.is_dark_mode {
            " Switch to Light Mode "
        } else {
            " Switch to Dark Mode "
        };
        let toggle = Paragraph::new(Line::from(vec![
            Span::styled(
                toggle_label,
                Style::default()
                    .fg(Color::White)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  t", palette.muted()),
        ]))
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Left);
        frame.render_widget(toggle, Rect { y: chunks[0].y + 1, height: 1, ..chunks[0] });

        let content = if state.search_term.is_empty() {
            Span::styled("Search posts...", palette.muted())
        } else {
            Span::styled(state.search_term.clone(), Style::default().fg(palette.fg))
        };
        let search = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(self.focused))
                .title(" / Search "),
        );
        frame.render_widget(search, chunks[1]);

        if self.focused {
            let inner_width = chunks[1].width.saturating_sub(2);
            let typed = UnicodeWidthStr::width(state.search_term.as_str()) as u16;
            frame.set_cursor_position((
                chunks[1].x + 1 + typed.min(inner_width.saturating_sub(1)),
                chunks[1].y + 1,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with(term: &str) -> ViewState {
        ViewState {
            search_term: term.to_string(),
            ..ViewState::default()
        }
    }

    #[test]
    fn test_typing_appends_to_term() {
        let mut bar = SearchBar::new();
        let action = bar.handle_key_event(key(KeyCode::Char('b')), &state_with("we"));
        assert_eq!(action, Some(Action::SearchChanged("web".to_string())));

        let shifted = KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT);
        let action = bar.handle_key_event(shifted, &state_with("#"));
        assert_eq!(action, Some(Action::SearchChanged("#B".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_term_does_nothing() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_key_event(key(KeyCode::Backspace), &state_with("")), None);
        assert_eq!(
            bar.handle_key_event(key(KeyCode::Backspace), &state_with("ab")),
            Some(Action::SearchChanged("a".to_string()))
        );
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut bar = SearchBar::new();
        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(
            bar.handle_key_event(clear, &state_with("launch")),
            Some(Action::SearchChanged(String::new()))
        );
    }

    #[test]
    fn test_focus_follows_actions() {
        let mut bar = SearchBar::new();
        assert!(!bar.is_focused());
        bar.update(&Action::FocusSearch);
        assert!(bar.is_focused());
        assert_eq!(
            bar.handle_key_event(key(KeyCode::Enter), &state_with("x")),
            Some(Action::BlurSearch)
        );
        bar.update(&Action::BlurSearch);
        assert!(!bar.is_focused());
    }
}
