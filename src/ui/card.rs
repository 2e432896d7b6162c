use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use crate::app::{App, CardButton, Hit};
use crate::calendar::{format_long_date, parse_entry_date};
use crate::models::{JournalEntry, format_rating};
use crate::navigator::{self, Selection};
use crate::ui::components::{centered_rect, shift_horizontally};
use crate::ui::theme::ThemeTokens;

const PREVIOUS_LABEL: &str = "‹ previous";
const NEXT_LABEL: &str = "next ›";
const FOOTER_HINT: &str = "   o: image   Esc: close   drag to swipe   ";

pub fn render_card(f: &mut Frame, app: &mut App, tokens: &ThemeTokens) {
    app.card_buttons.clear();
    let Some(selection) = app.navigator.selection() else {
        app.card_area = None;
        return;
    };
    let Some(entry) = app.entry(selection.id).cloned() else {
        app.card_area = None;
        return;
    };

    let base = centered_rect(60, 70, f.area());
    let area = shift_horizontally(base, app.card_offset_columns(), f.area());
    app.card_area = Some(area);

    let dragging = app.navigator.gesture().is_dragging();
    let border_color = if dragging {
        tokens.ui_accent
    } else {
        tokens.ui_border
    };
    let block = Block::default()
        .title(format!(" Entry {} of {} ", selection.index + 1, app.entries.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .horizontal_margin(1)
        .split(inner);

    let body = card_body(&entry, chunks[0].width as usize, tokens);
    f.render_widget(Paragraph::new(body), chunks[0]);

    let footer = card_footer(app, selection, tokens);
    f.render_widget(Paragraph::new(footer), chunks[1]);
    app.card_buttons = footer_buttons(chunks[1]);
}

/// Click targets for the footer labels, clipped to the footer row.
fn footer_buttons(footer: Rect) -> Vec<Hit<CardButton>> {
    let previous_width = PREVIOUS_LABEL.width() as u16;
    let next_x = footer
        .x
        .saturating_add(previous_width)
        .saturating_add(FOOTER_HINT.width() as u16);
    [
        (footer.x, previous_width, CardButton::Previous),
        (next_x, NEXT_LABEL.width() as u16, CardButton::Next),
    ]
    .into_iter()
    .map(|(x, width, target)| Hit {
        area: Rect::new(x, footer.y, width, 1).intersection(footer),
        target,
    })
    .filter(|hit| !hit.area.is_empty())
    .collect()
}

fn card_body(entry: &JournalEntry, width: usize, tokens: &ThemeTokens) -> Vec<Line<'static>> {
    let title = match parse_entry_date(&entry.date) {
        Ok(key) => format_long_date(key.year, key.month, key.day),
        Err(_) => entry.date.clone(),
    };
    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(tokens.ui_accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Rating ", Style::default().fg(tokens.ui_muted)),
            Span::styled(
                format!("★ {}", format_rating(entry.rating)),
                Style::default()
                    .fg(tokens.rating(entry.rating_band()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if !entry.categories.is_empty() {
        let mut spans = Vec::new();
        for category in &entry.categories {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{category}]"),
                Style::default().fg(tokens.content_category),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    let wrap_width = width.max(1);
    for paragraph in entry.description.lines() {
        if paragraph.trim().is_empty() {
            lines.push(Line::default());
            continue;
        }
        for wrapped in textwrap::wrap(paragraph, wrap_width) {
            lines.push(Line::from(wrapped.into_owned()));
        }
    }

    if !entry.img_url.trim().is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Image ", Style::default().fg(tokens.ui_muted)),
            Span::styled(
                entry.img_url.clone(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines
}

fn card_footer(app: &App, selection: Selection, tokens: &ThemeTokens) -> Line<'static> {
    let enabled = Style::default().fg(tokens.ui_accent);
    let disabled = Style::default().fg(tokens.ui_muted).add_modifier(Modifier::DIM);
    let muted = Style::default().fg(tokens.ui_muted);

    let previous_style = if navigator::can_previous(selection) {
        enabled
    } else {
        disabled
    };
    let next_style = if navigator::can_next(&app.entries, selection) {
        enabled
    } else {
        disabled
    };

    Line::from(vec![
        Span::styled(PREVIOUS_LABEL, previous_style),
        Span::styled(FOOTER_HINT, muted),
        Span::styled(NEXT_LABEL, next_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_buttons_sit_under_their_labels() {
        let buttons = footer_buttons(Rect::new(5, 30, 80, 1));
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].target, CardButton::Previous);
        assert_eq!(buttons[0].area, Rect::new(5, 30, 10, 1));
        assert_eq!(buttons[1].target, CardButton::Next);
        assert_eq!(buttons[1].area, Rect::new(5 + 10 + 43, 30, 6, 1));
    }

    #[test]
    fn narrow_footer_drops_hidden_buttons() {
        let buttons = footer_buttons(Rect::new(0, 0, 20, 1));
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].area, Rect::new(0, 0, 10, 1));

        let buttons = footer_buttons(Rect::new(0, 0, 4, 1));
        assert_eq!(buttons[0].area, Rect::new(0, 0, 4, 1));
    }
}
