use ratatui::style::{Color, Modifier, Style};

use crate::models::post::Platform;

/// Colors for one theme. Chart series colors are shared by both themes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub card_bg: Color,
    pub match_bg: Color,
}

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(107, 114, 128),
    accent: Color::Rgb(37, 99, 235),
    border: Color::Rgb(209, 213, 219),
    card_bg: Color::Rgb(249, 250, 251),
    match_bg: Color::Rgb(253, 230, 138),
};

pub const DARK: Palette = Palette {
    bg: Color::Rgb(17, 24, 39),
    fg: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(96, 165, 250),
    border: Color::Rgb(75, 85, 99),
    card_bg: Color::Rgb(55, 65, 81),
    match_bg: Color::Rgb(146, 64, 14),
};

/// Fill colors for grouped and proportional charts, cycled by index.
pub const SERIES: [Color; 5] = [
    Color::Rgb(0x00, 0x88, 0xFE),
    Color::Rgb(0x00, 0xC4, 0x9F),
    Color::Rgb(0xFF, 0xBB, 0x28),
    Color::Rgb(0xFF, 0x80, 0x42),
    Color::Rgb(0x88, 0x84, 0xD8),
];

pub const ENGAGEMENT: [Color; 3] = [
    Color::Rgb(0x88, 0x84, 0xD8),
    Color::Rgb(0x82, 0xCA, 0x9D),
    Color::Rgb(0xFF, 0xC6, 0x58),
];

pub fn palette(dark: bool) -> Palette {
    if dark { DARK } else { LIGHT }
}

pub fn platform_color(platform: Platform) -> Color {
    match platform {
        Platform::Twitter => Color::Rgb(0x1D, 0xA1, 0xF2),
        Platform::Facebook => Color::Rgb(0x42, 0x67, 0xB2),
        Platform::Instagram => Color::Rgb(0xE1, 0x30, 0x6C),
        Platform::LinkedIn => Color::Rgb(0x00, 0x77, 0xB5),
    }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.match_bg)
            .add_modifier(Modifier::BOLD)
    }
}
