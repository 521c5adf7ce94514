//! Chart drawing for the report panels. Each function takes one dataset and
//! the field encoding picked for its tab and draws it with ratatui widgets.

use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, Gauge, GraphType, Paragraph};

use crate::models::dataset::{DemographicSlice, EngagementMetrics, FollowerCount, GrowthPoint};
use crate::models::post::Platform;
use crate::panel::ChartEncoding;
use crate::ui::theme::{platform_color, Palette, ENGAGEMENT, SERIES};
use crate::utils::text::format_count;
use crate::utils::time::month_label;

const BAR_GAP: u16 = 2;
const GROUP_GAP: u16 = 3;

pub fn draw_bar_chart(
    frame: &mut Frame,
    area: Rect,
    data: &[FollowerCount],
    _encoding: &ChartEncoding,
    palette: &Palette,
) {
    if data.is_empty() {
        draw_no_data(frame, area, palette);
        return;
    }

    let bars: Vec<Bar> = data
        .iter()
        .map(|row| {
            let color = platform_color(row.name);
            Bar::default()
                .value(row.value)
                .label(Line::from(row.name.as_str()))
                .text_value(format_count(row.value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area.width, data.len() as u16, BAR_GAP))
        .bar_gap(BAR_GAP)
        .label_style(Style::default().fg(palette.fg));
    frame.render_widget(chart, area);
}

pub fn draw_grouped_bar_chart(
    frame: &mut Frame,
    area: Rect,
    data: &[EngagementMetrics],
    encoding: &ChartEncoding,
    palette: &Palette,
) {
    if data.is_empty() {
        draw_no_data(frame, area, palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);
    draw_legend(frame, chunks[0], encoding.y_fields, &ENGAGEMENT, palette);

    let series = encoding.y_fields.len().max(1) as u16;
    let groups = data.len() as u16;
    // Every bar in every group plus the gaps between them.
    let slots = groups * series;
    let gaps = groups.saturating_sub(1) * GROUP_GAP + groups * series.saturating_sub(1);
    let width = (chunks[1].width.saturating_sub(gaps) / slots.max(1)).clamp(1, 9);

    let mut chart = BarChart::default()
        .bar_width(width)
        .bar_gap(1)
        .group_gap(GROUP_GAP)
        .label_style(Style::default().fg(palette.fg));
    for row in data {
        let values = [row.likes, row.shares, row.comments];
        let bars: Vec<Bar> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let color = ENGAGEMENT[i % ENGAGEMENT.len()];
                Bar::default()
                    .value(value)
                    .text_value(format_count(value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(row.name.as_str()))
                .bars(&bars),
        );
    }
    frame.render_widget(chart, chunks[1]);
}

pub fn draw_line_chart(
    frame: &mut Frame,
    area: Rect,
    data: &[GrowthPoint],
    encoding: &ChartEncoding,
    palette: &Palette,
) {
    if data.is_empty() {
        draw_no_data(frame, area, palette);
        return;
    }

    let series: Vec<(Platform, Vec<(f64, f64)>)> = Platform::ALL
        .iter()
        .map(|&platform| {
            let points = data
                .iter()
                .enumerate()
                .map(|(i, point)| (i as f64, point.value(platform) as f64))
                .collect();
            (platform, points)
        })
        .collect();

    let (lo, hi) = value_bounds(data);
    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(platform, points)| {
            Dataset::default()
                .name(platform.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(platform_color(*platform)))
                .data(points)
        })
        .collect();

    let x_labels: Vec<String> = data
        .iter()
        .map(|point| month_label(&point.date, point.month()))
        .collect();
    let y_labels = vec![format_count(lo), format_count((lo + hi) / 2), format_count(hi)];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(encoding.x_field)
                .style(palette.muted())
                .bounds([0.0, (data.len().saturating_sub(1)).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("followers")
                .style(palette.muted())
                .bounds([lo as f64, hi as f64])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Terminals have no pie primitive, so each slice gets a gauge row showing
/// its share of the total.
pub fn draw_proportions(
    frame: &mut Frame,
    area: Rect,
    data: &[DemographicSlice],
    _encoding: &ChartEncoding,
    palette: &Palette,
) {
    let total: u64 = data.iter().map(|slice| slice.value).sum();
    if data.is_empty() || total == 0 {
        draw_no_data(frame, area, palette);
        return;
    }

    let constraints: Vec<Constraint> = data
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, slice) in data.iter().enumerate() {
        let row = rows[i * 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(8), Constraint::Min(1)])
            .split(row);

        frame.render_widget(
            Paragraph::new(slice.name.clone()).style(Style::default().fg(palette.fg)),
            cols[0],
        );

        let color = SERIES[i % SERIES.len()];
        let ratio = share_ratio(slice.value, total);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(palette.card_bg))
            .ratio(ratio)
            .label(Span::styled(
                format!("{} {}%", slice.name, share_percent(slice.value, total)),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(gauge, cols[1]);
    }
}

/// Fraction of `total`, always within `0.0..=1.0`.
pub fn share_ratio(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (value as f64 / total as f64).clamp(0.0, 1.0)
}

/// Whole-number percentage of `total`, rounded to nearest.
pub fn share_percent(value: u64, total: u64) -> u64 {
    (share_ratio(value, total) * 100.0).round() as u64
}

fn value_bounds(data: &[GrowthPoint]) -> (u64, u64) {
    let values = data
        .iter()
        .flat_map(|point| Platform::ALL.into_iter().map(move |p| point.value(p)));
    let min = values.clone().min().unwrap_or(0);
    let max = values.max().unwrap_or(0);
    // Pad and snap to hundreds so the lines do not touch the frame.
    let lo = (min.saturating_sub(min / 10) / 100) * 100;
    let hi = ((max + max / 10) / 100 + 1) * 100;
    (lo, hi)
}

fn bar_width(total: u16, bars: u16, gap: u16) -> u16 {
    if bars == 0 {
        return 1;
    }
    let usable = total.saturating_sub(gap * bars.saturating_sub(1));
    (usable / bars).clamp(1, 16)
}

fn draw_legend(
    frame: &mut Frame,
    area: Rect,
    names: &[&str],
    colors: &[Color],
    palette: &Palette,
) {
    let mut spans = Vec::new();
    for (i, name) in names.iter().enumerate() {
        spans.push(Span::styled("■ ", Style::default().fg(colors[i % colors.len()])));
        spans.push(Span::styled(format!("{name}   "), Style::default().fg(palette.fg)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_no_data(frame: &mut Frame, area: Rect, palette: &Palette) {
    frame.render_widget(
        Paragraph::new("No data")
            .style(palette.muted())
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::Datasets;

    #[test]
    fn test_share_percent_rounds() {
        assert_eq!(share_percent(35, 100), 35);
        assert_eq!(share_percent(1, 3), 33);
        assert_eq!(share_percent(2, 3), 67);
        assert_eq!(share_percent(5, 0), 0);
    }

    #[test]
    fn test_share_ratio_clamped() {
        assert_eq!(share_ratio(0, 10), 0.0);
        assert_eq!(share_ratio(10, 10), 1.0);
        assert_eq!(share_ratio(20, 10), 1.0);
    }

    #[test]
    fn test_value_bounds_pad_growth_trend() {
        let data = Datasets::load_embedded().unwrap();
        let (lo, hi) = value_bounds(&data.growth_trend);
        assert!(lo <= 600);
        assert!(hi >= 2000);
        assert_eq!(lo % 100, 0);
        assert_eq!(hi % 100, 0);
    }

    #[test]
    fn test_bar_width_fits_area() {
        assert_eq!(bar_width(40, 4, 2), 8);
        assert_eq!(bar_width(2, 4, 2), 1);
        assert_eq!(bar_width(200, 4, 2), 16);
        assert_eq!(bar_width(10, 0, 2), 1);
    }
}
