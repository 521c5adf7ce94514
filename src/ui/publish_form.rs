use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::action::Action;
use crate::models::post::Platform;
use crate::models::state::ViewState;
use crate::ui::theme::{palette, platform_color};
use crate::ui::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Platform,
    Content,
}

/// The publish tab's form. The platform choice is read from the view state;
/// the text buffer is kept here for cursor editing and mirrored into the
/// state on every change.
pub struct PublishForm {
    textarea: TextArea<'static>,
    field: FormField,
    focused: bool,
}

impl PublishForm {
    pub fn new() -> Self {
        PublishForm {
            textarea: Self::empty_textarea(),
            field: FormField::Platform,
            focused: false,
        }
    }

    fn empty_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("What's on your mind?");
        textarea
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    fn switch_field(&mut self) {
        self.field = match self.field {
            FormField::Platform => FormField::Content,
            FormField::Content => FormField::Platform,
        };
    }
}

impl Default for PublishForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PublishForm {
    fn handle_key_event(&mut self, key: KeyEvent, state: &ViewState) -> Option<Action> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => return Some(Action::BlurPublishForm),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Enter)
            | (KeyModifiers::ALT, KeyCode::Enter)
            | (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
                // Disabled until both fields are filled in.
                return state.can_publish().then_some(Action::Publish);
            }
            (KeyModifiers::NONE, KeyCode::Tab)
            | (KeyModifiers::SHIFT, KeyCode::BackTab)
            | (KeyModifiers::NONE, KeyCode::BackTab) => self.switch_field(),
            _ => match self.field {
                FormField::Platform => match key.code {
                    KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                        return Some(Action::CyclePlatform { forward: false });
                    }
                    KeyCode::Right
                    | KeyCode::Down
                    | KeyCode::Char(' ')
                    | KeyCode::Char('l')
                    | KeyCode::Char('j') => {
                        return Some(Action::CyclePlatform { forward: true });
                    }
                    KeyCode::Enter => self.field = FormField::Content,
                    _ => {}
                },
                FormField::Content => {
                    if self.textarea.input(key) {
                        return Some(Action::DraftContentChanged(self.text()));
                    }
                }
            },
        }
        None
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::FocusPublishForm => self.focused = true,
            Action::BlurPublishForm => self.focused = false,
            Action::Published(_) => {
                self.textarea = Self::empty_textarea();
                self.field = FormField::Platform;
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let palette = palette(state.is_dark_mode);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        // Platform selector
        let platform_focused = self.focused && self.field == FormField::Platform;
        let mut options = vec![option_span(
            "Select platform",
            state.draft_platform.is_none(),
            palette.fg,
            palette.muted,
        )];
        for platform in Platform::ALL {
            options.push(Span::raw("  "));
            options.push(option_span(
                platform.as_str(),
                state.draft_platform == Some(platform),
                platform_color(platform),
                palette.muted,
            ));
        }
        let selector = Paragraph::new(Line::from(options)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(platform_focused))
                .title(" Platform  ←/→ "),
        );
        frame.render_widget(selector, chunks[0]);

        // Content
        let content_focused = self.focused && self.field == FormField::Content;
        let mut textarea = self.textarea.clone();
        textarea.set_style(Style::default().fg(palette.fg));
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(content_focused))
                .title(" Content "),
        );
        if !content_focused {
            textarea.set_cursor_style(Style::default());
        }
        frame.render_widget(&textarea, chunks[1]);

        // Post button + hints
        let button_style = if state.can_publish() {
            Style::default()
                .fg(Color::White)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.muted().add_modifier(Modifier::DIM)
        };
        let hints = if self.focused {
            "Ctrl+S: post  Tab: switch field  Esc: done"
        } else {
            "Enter: edit"
        };
        let status = Line::from(vec![
            Span::styled(" Post ", button_style),
            Span::raw("  "),
            Span::styled(hints, palette.muted()),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[2]);
    }
}

fn option_span(label: &'static str, selected: bool, color: Color, idle: Color) -> Span<'static> {
    if selected {
        Span::styled(
            format!("[{label}]"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {label} "), Style::default().fg(idle))
    }
}
