use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::calendar::format_short_date;
use crate::models::InputMode;

pub mod calendar;
pub mod card;
pub mod color_parser;
pub mod components;
pub mod theme;

use components::centered_rect;

pub fn ui(f: &mut Frame, app: &mut App) {
    let tokens = theme::ThemeTokens::from_theme(&app.config.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // The calendar first: it updates the indicator shown in the header.
    calendar::render_calendar(f, chunks[1], app, &tokens);
    render_header(f, chunks[0], app, &tokens);
    render_status_bar(f, chunks[2], app, &tokens);

    if app.navigator.is_open() {
        card::render_card(f, app, &tokens);
    } else {
        app.card_area = None;
        app.card_buttons.clear();
    }

    if app.show_help_popup {
        render_help_popup(f, app, &tokens);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App, tokens: &theme::ThemeTokens) {
    let month = app.current_month();
    let lines = vec![
        Line::from(Span::styled(
            month.label(),
            Style::default()
                .fg(tokens.ui_accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.config.data.title.clone(),
            Style::default().fg(tokens.ui_muted),
        )),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(tokens.ui_border)),
    );
    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, tokens: &theme::ThemeTokens) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let mode_label = match app.input_mode() {
        InputMode::Calendar => "CAL",
        InputMode::Card => "CARD",
    };
    let day = app.selected_day;
    let count = app.selected_day_entries().len();
    let day_label = match count {
        0 => format_short_date(day.year, day.month, day.day),
        n => format!(
            "{} ({}/{n})",
            format_short_date(day.year, day.month, day.day),
            app.chip_cursor.min(n - 1) + 1
        ),
    };

    let left = Line::from(vec![
        Span::styled(
            format!(" {mode_label} "),
            Style::default()
                .fg(tokens.ui_accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(day_label, Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let message = app
        .toast_message
        .as_deref()
        .filter(|toast| !toast.is_empty())
        .map(|toast| (toast.to_string(), tokens.ui_toast))
        .unwrap_or_else(|| ("? help".to_string(), tokens.ui_muted));

    let min_left_width = 10u16;
    let right_width = (UnicodeWidthStr::width(message.0.as_str()) as u16 + 1)
        .min(area.width.saturating_sub(min_left_width));

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);
    f.render_widget(Paragraph::new(left), status_chunks[0]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.0,
            Style::default().fg(message.1).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right),
        status_chunks[1],
    );
}

fn help_rows(app: &App) -> Vec<(&'static str, Vec<(String, &'static str)>)> {
    fn keys(bindings: &[String]) -> String {
        bindings.join(" / ")
    }
    let kb = &app.config.keybindings;
    vec![
        (
            "Calendar",
            vec![
                (keys(&kb.calendar.left), "previous day"),
                (keys(&kb.calendar.right), "next day"),
                (keys(&kb.calendar.up), "previous week"),
                (keys(&kb.calendar.down), "next week"),
                (keys(&kb.calendar.page_up), "page up"),
                (keys(&kb.calendar.page_down), "page down"),
                (keys(&kb.calendar.prev_month), "previous month"),
                (keys(&kb.calendar.next_month), "next month"),
                (keys(&kb.calendar.open), "open entry"),
                (keys(&kb.calendar.next_chip), "next entry on day"),
                (keys(&kb.calendar.prev_chip), "previous entry on day"),
            ],
        ),
        (
            "Card",
            vec![
                (keys(&kb.card.next), "next entry"),
                (keys(&kb.card.previous), "previous entry"),
                (keys(&kb.card.open_image), "open image"),
                (keys(&kb.card.close), "close"),
                ("drag".to_string(), "swipe left / right"),
            ],
        ),
        (
            "Global",
            vec![
                (keys(&kb.global.today), "jump to today"),
                (keys(&kb.global.reload), "reload journal"),
                (keys(&kb.global.help), "toggle help"),
                (keys(&kb.global.quit), "quit"),
            ],
        ),
    ]
}

fn render_help_popup(f: &mut Frame, app: &App, tokens: &theme::ThemeTokens) {
    let area = centered_rect(60, 80, f.area());
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tokens.ui_border));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let key_width = help_rows(app)
        .iter()
        .flat_map(|(_, rows)| rows.iter().map(|(k, _)| UnicodeWidthStr::width(k.as_str())))
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines = Vec::new();
    for (title, rows) in help_rows(app) {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(tokens.ui_accent)
                .add_modifier(Modifier::BOLD),
        )));
        for (keys, label) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<key_width$}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(label, Style::default().fg(tokens.ui_muted)),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc / ?: close",
        Style::default().fg(tokens.ui_muted),
    )));
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day_key;
    use crate::config::{CalendarSettings, Config};
    use crate::models::{EntryId, JournalEntry};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        let entries = vec![
            JournalEntry {
                id: EntryId(0),
                date: "05/03/2024".to_string(),
                img_url: "https://example.com/a.jpg".to_string(),
                rating: 4.5,
                categories: vec!["wash".to_string(), "oil".to_string(), "trim".to_string()],
                description: "Deep condition and a light trim".to_string(),
            },
            JournalEntry {
                id: EntryId(1),
                date: "15/03/2024".to_string(),
                img_url: String::new(),
                rating: 3.0,
                categories: Vec::new(),
                description: "Second".to_string(),
            },
        ];
        App::with_entries(
            Config::default(),
            CalendarSettings::default(),
            entries,
            day_key(2024, 2, 15),
        )
    }

    #[test]
    fn renders_header_and_month_grid() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("March 2024"));
        assert!(text.contains(&app.config.data.title));
        assert!(text.contains("Sun"));
        assert!(text.contains("★4.5"));
        assert!(text.contains("Mar 15, 2024"));
        assert_eq!(app.viewport_height, 36);
        assert!(!app.chip_hits.is_empty());
        assert!(app.chip_hits.iter().any(|h| h.target == EntryId(0)));
    }

    #[test]
    fn renders_card_with_long_date() {
        let mut app = app();
        app.open_entry(EntryId(0));
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Tuesday, March 5th, 2024"));
        assert!(text.contains("Entry 1 of 2"));
        assert!(text.contains("[wash] [oil] [trim]"));
        assert!(app.card_area.is_some());
    }

    #[test]
    fn clicking_rendered_footer_steps_the_card() {
        let mut app = app();
        app.open_entry(EntryId(0));
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");

        let next = app
            .card_buttons
            .iter()
            .find(|h| h.target == crate::app::CardButton::Next)
            .map(|h| h.area)
            .expect("next button");
        app.pointer_pressed(next.x, next.y);
        app.pointer_released(next.x, next.y);
        assert_eq!(app.navigator.selection().map(|s| s.id), Some(EntryId(1)));

        app.close_card();
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
        assert!(app.card_buttons.is_empty());
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app();
        app.open_entry(EntryId(1));
        app.show_help_popup = true;
        let mut terminal = Terminal::new(TestBackend::new(6, 4)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
    }
}
