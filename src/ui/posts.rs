use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::models::feed::FeedSelection;
use crate::models::post::Post;
use crate::ui::theme::{platform_color, Palette};
use crate::utils::text::{highlighted_line, wrapped_line_count};

pub fn post_height(post: &Post, width: u16) -> u16 {
    let text_width = width.saturating_sub(2);
    let text_lines = wrapped_line_count(&post.content, text_width);

    1 // platform line
        + text_lines // post text
        + 1 // stats line
        + 1 // spacing
}

pub fn draw_posts(
    frame: &mut Frame,
    area: Rect,
    posts: &[&Post],
    selection: &FeedSelection,
    term: &str,
    palette: &Palette,
) {
    if posts.is_empty() {
        let msg = if term.is_empty() {
            "No posts yet.".to_string()
        } else {
            format!("No posts match \"{term}\". Press / to edit the search.")
        };
        let empty = Paragraph::new(msg)
            .style(palette.muted())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let heights: Vec<u16> = posts.iter().map(|post| post_height(post, area.width)).collect();
    let first = first_visible(&heights, selection.selected_index, area.height);

    let mut y = area.y;
    for (i, (post, h)) in posts.iter().zip(&heights).enumerate().skip(first) {
        if y >= area.bottom() {
            break;
        }
        let h = (*h).min(area.bottom() - y);
        let post_area = Rect::new(area.x, y, area.width, h);
        draw_post(frame, post_area, post, i == selection.selected_index, term, palette);
        y += h;
    }
}

/// Index of the topmost post to draw so that the selected one is fully on
/// screen. Posts above it are dropped whole.
fn first_visible(heights: &[u16], selected: usize, view_height: u16) -> usize {
    let selected = selected.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < selected
        && heights[first..=selected].iter().map(|&h| h as usize).sum::<usize>()
            > view_height as usize
    {
        first += 1;
    }
    first
}

pub fn draw_post(
    frame: &mut Frame,
    area: Rect,
    post: &Post,
    selected: bool,
    term: &str,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(palette.border(selected))
        .style(Style::default().bg(palette.card_bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let x = inner.x + 1;
    let w = inner.width.saturating_sub(1);
    let bottom = inner.bottom();
    let mut y = inner.y;

    // Platform line
    let platform_line = Line::from(vec![
        Span::styled(
            post.platform.as_str(),
            Style::default()
                .fg(platform_color(post.platform))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  #{}  {} interactions", post.id, post.engagement_total()),
            palette.muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(platform_line), Rect::new(x, y, w, 1));
    y += 1;

    // Post text, with search matches highlighted
    if y >= bottom {
        return;
    }
    let text = highlighted_line(
        &post.content,
        term,
        Style::default().fg(palette.fg),
        palette.highlight(),
    );
    let wrap_lines = wrapped_line_count(&post.content, w).min(bottom - y);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }),
        Rect::new(x, y, w, wrap_lines),
    );
    y += wrap_lines;

    // Stats line
    if y < bottom {
        let stats = Line::from(vec![
            Span::styled(format!("♥ {}", post.likes), palette.muted()),
            Span::raw("  "),
            Span::styled(format!("⟳ {}", post.shares), palette.muted()),
            Span::raw("  "),
            Span::styled(format!("💬 {}", post.comments), palette.muted()),
        ]);
        frame.render_widget(Paragraph::new(stats), Rect::new(x, y, w, 1));
    }
}
