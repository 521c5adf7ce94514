use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Mode;
use crate::models::tab::Tab;
use crate::ui::theme::Palette;

pub fn hints(mode: Mode, tab: Tab) -> &'static str {
    match mode {
        Mode::Search => "type to filter | Ctrl+U: clear | Enter/Esc: done",
        Mode::Compose => "Tab: switch field | ←/→: platform | Ctrl+S: post | Esc: done",
        Mode::Browse => match tab {
            Tab::Posts => "j/k: navigate | /: search | 1-6: tabs | t: theme | q: quit",
            Tab::Publish => "Enter: write a post | /: search | 1-6: tabs | t: theme | q: quit",
            _ => "Tab/←/→: switch tab | 1-6: tabs | /: search | t: theme | q: quit",
        },
    }
}

pub fn draw_statusbar(
    frame: &mut Frame,
    area: Rect,
    mode: Mode,
    tab: Tab,
    notice: Option<&str>,
    palette: &Palette,
) {
    match notice {
        Some(msg) => {
            let info_bar = Paragraph::new(format!(" {}", msg))
                .style(Style::default().fg(Color::White).bg(Color::Green));
            frame.render_widget(info_bar, area);
        }
        None => {
            let bar = Paragraph::new(format!(" {}", hints(mode, tab)))
                .style(Style::default().fg(palette.muted).bg(palette.card_bg));
            frame.render_widget(bar, area);
        }
    }
}
