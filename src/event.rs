use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::models::tab::Tab;

#[derive(Debug)]
pub enum AppEvent {
    Input(Event),
    Tick,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            loop {
                let evt = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(evt) => AppEvent::Input(evt),
                        Err(_) => continue,
                    }
                } else {
                    AppEvent::Tick
                };
                if tx.send(evt).is_err() {
                    break;
                }
            }
        });

        EventHandler { rx, _task: task }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Global key bindings, used while no input field has focus.
pub fn key_to_action(key: KeyEvent, active_tab: Tab) -> Option<Action> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Action::Quit),
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::NONE, KeyCode::Right)
        | (KeyModifiers::NONE, KeyCode::Char('l')) => Some(Action::NextTab),
        (KeyModifiers::SHIFT, KeyCode::BackTab)
        | (KeyModifiers::NONE, KeyCode::BackTab)
        | (KeyModifiers::NONE, KeyCode::Left)
        | (KeyModifiers::NONE, KeyCode::Char('h')) => Some(Action::PrevTab),
        (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='6')) => {
            let idx = c as usize - '1' as usize;
            Tab::from_index(idx).map(Action::SwitchTab)
        }
        (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
            Some(Action::SelectNext)
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
            Some(Action::SelectPrev)
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => Some(Action::ScrollToTop),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::Char('G')) => {
            Some(Action::ScrollToBottom)
        }
        (KeyModifiers::NONE, KeyCode::Char('/')) => Some(Action::FocusSearch),
        (KeyModifiers::NONE, KeyCode::Char('t')) => Some(Action::ToggleTheme),
        (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('i'))
            if active_tab == Tab::Publish =>
        {
            Some(Action::FocusPublishForm)
        }
        (KeyModifiers::NONE, KeyCode::Esc) => Some(Action::ClearNotice),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_select_tabs() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('1')), Tab::Trends),
            Some(Action::SwitchTab(Tab::Overview))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('4')), Tab::Overview),
            Some(Action::SwitchTab(Tab::Trends))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('6')), Tab::Overview),
            Some(Action::SwitchTab(Tab::Publish))
        );
        assert_eq!(key_to_action(key(KeyCode::Char('7')), Tab::Overview), None);
    }

    #[test]
    fn test_tab_cycling_keys() {
        assert_eq!(key_to_action(key(KeyCode::Tab), Tab::Overview), Some(Action::NextTab));
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), Tab::Overview),
            Some(Action::PrevTab)
        );
        assert_eq!(key_to_action(key(KeyCode::Char('h')), Tab::Posts), Some(Action::PrevTab));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('q')), Tab::Overview), Some(Action::Quit));
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Tab::Posts),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_enter_focuses_form_only_on_publish_tab() {
        assert_eq!(
            key_to_action(key(KeyCode::Enter), Tab::Publish),
            Some(Action::FocusPublishForm)
        );
        assert_eq!(key_to_action(key(KeyCode::Enter), Tab::Posts), None);
        assert_eq!(key_to_action(key(KeyCode::Char('i')), Tab::Overview), None);
    }

    #[test]
    fn test_capital_g_with_or_without_shift() {
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), Tab::Posts),
            Some(Action::ScrollToBottom)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('G')), Tab::Posts),
            Some(Action::ScrollToBottom)
        );
        assert_eq!(key_to_action(key(KeyCode::Char('g')), Tab::Posts), Some(Action::ScrollToTop));
    }

    #[test]
    fn test_search_and_theme_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('/')), Tab::Posts), Some(Action::FocusSearch));
        assert_eq!(key_to_action(key(KeyCode::Char('t')), Tab::Posts), Some(Action::ToggleTheme));
    }
}
