use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Characters of description shown on a calendar chip.
pub const CHIP_DESCRIPTION_CHARS: usize = 60;
/// Categories listed before collapsing the rest into `+N`.
pub const CHIP_CATEGORY_LIMIT: usize = 2;

/// Helper function to calculate centered popup position
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Moves `area` sideways by `dx` columns without leaving `bounds`.
pub fn shift_horizontally(area: Rect, dx: i32, bounds: Rect) -> Rect {
    let min_x = bounds.x as i32;
    let max_x = (bounds.x + bounds.width.saturating_sub(area.width)) as i32;
    let x = (area.x as i32 + dx).clamp(min_x, max_x.max(min_x));
    Rect { x: x as u16, ..area }
}

/// Cuts `text` after `max_chars` characters, ending with an ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out = text
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}

/// Fits `text` into `width` display columns, padding with spaces.
pub fn fit_width(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    if UnicodeWidthStr::width(text) <= width {
        out.push_str(text);
    } else {
        let mut used = 0;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
    }
    let pad = width.saturating_sub(UnicodeWidthStr::width(out.as_str()));
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Centres `text` in `width` columns.
pub fn center_width(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return fit_width(text, width);
    }
    let left = (width - text_width) / 2;
    let mut out = " ".repeat(left);
    out.push_str(text);
    fit_width(&out, width)
}

/// `wash, oil +3`
pub fn category_summary(categories: &[String]) -> String {
    let mut text = categories
        .iter()
        .take(CHIP_CATEGORY_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if categories.len() > CHIP_CATEGORY_LIMIT {
        text.push_str(&format!(" +{}", categories.len() - CHIP_CATEGORY_LIMIT));
    }
    text
}
