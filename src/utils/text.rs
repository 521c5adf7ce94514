use ratatui::prelude::*;
use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

/// Count how many terminal rows `text` occupies when wrapped at `max_width` columns.
/// Uses Unicode display width so emoji and CJK characters are measured correctly.
pub fn wrapped_line_count(text: &str, max_width: u16) -> u16 {
    let max_width = max_width as usize;
    if max_width == 0 {
        return 1;
    }
    text.split('\n')
        .map(|line| {
            let w = UnicodeWidthStr::width(line);
            if w == 0 { 1 } else { ((w - 1) / max_width + 1) as u16 }
        })
        .sum()
}

/// Lowercase one char at a time. Search and highlighting both compare folded
/// text, so a post that matches always shows its match.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Char ranges of `text` that match `term`, ignoring case. Ranges never overlap.
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = fold_case(term).chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Lowercasing can expand one char into several, so keep a map back to
    // the original char index.
    let mut lower = Vec::new();
    let mut origin = Vec::new();
    for (i, c) in text.chars().enumerate() {
        for lc in c.to_lowercase() {
            lower.push(lc);
            origin.push(i);
        }
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= lower.len() {
        if lower[pos..pos + needle.len()] == needle[..] {
            let start = origin[pos];
            let end = origin[pos + needle.len() - 1] + 1;
            ranges.push((start, end));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

/// Render `text` as one line with every match of `term` in `highlight`.
pub fn highlighted_line<'a>(text: &str, term: &str, base: Style, highlight: Style) -> Line<'a> {
    let ranges = match_ranges(text, term);
    if ranges.is_empty() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, end) in ranges {
        if start > pos {
            spans.push(Span::styled(chars[pos..start].iter().collect::<String>(), base));
        }
        spans.push(Span::styled(chars[start..end].iter().collect::<String>(), highlight));
        pos = end;
    }
    if pos < chars.len() {
        spans.push(Span::styled(chars[pos..].iter().collect::<String>(), base));
    }
    Line::from(spans)
}

/// Compact count for chart labels: 950, 1.5K, 2.0M.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("abcdefghij", 10), 1);
        assert_eq!(wrapped_line_count("abcdefghijk", 10), 2);
        assert_eq!(wrapped_line_count("a\nb", 10), 2);
        assert_eq!(wrapped_line_count("anything", 0), 1);
    }

    #[test]
    fn test_match_ranges_case_insensitive() {
        let text = "Behind the scenes at our photo shoot. #BTS";
        assert_eq!(match_ranges(text, "bts"), vec![(39, 42)]);
        assert_eq!(match_ranges(text, "the"), vec![(7, 10)]);
        assert!(match_ranges(text, "").is_empty());
        assert!(match_ranges(text, "webinar").is_empty());
    }

    #[test]
    fn test_match_ranges_repeated() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(match_ranges("Our our OUR", "our"), vec![(0, 3), (4, 7), (8, 11)]);
    }

    #[test]
    fn test_match_ranges_non_ascii() {
        assert_eq!(match_ranges("Café CAFÉ", "café"), vec![(0, 4), (5, 9)]);
    }

    #[test]
    fn test_final_sigma_folds_like_any_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(match_ranges("ΟΔΟΣ", "ΟΔΟΣ"), vec![(0, 4)]);
        assert_eq!(match_ranges("οδος", "ΟΔΟΣ"), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn test_highlighted_line_splits_spans() {
        let base = Style::default();
        let hl = Style::default().fg(Color::Yellow);
        let line = highlighted_line("Join our webinar", "WEBINAR", base, hl);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "Join our ");
        assert_eq!(line.spans[1].content, "webinar");
        assert_eq!(line.spans[1].style, hl);
    }

    #[test]
    fn test_highlighted_line_without_match() {
        let line = highlighted_line("plain", "zzz", Style::default(), Style::default());
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "plain");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_000_000), "2.0M");
    }
}
