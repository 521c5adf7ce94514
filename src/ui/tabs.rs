use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs as RatatuiTabs};

use crate::models::tab::Tab;
use crate::ui::theme::Palette;

pub fn draw_tabs(frame: &mut Frame, area: Rect, active: Tab, palette: &Palette) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("[{}] {}", i + 1, tab.label()))
        .collect();
    let tabs = RatatuiTabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.border(false)),
        )
        .select(active.index())
        .style(palette.muted())
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}
