use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Hit};
use crate::calendar::{CalendarDayKey, format_weekday_label};
use crate::grid::{GridCell, MonthGrid};
use crate::models::{EntryId, format_rating};
use crate::ui::components::{
    CHIP_DESCRIPTION_CHARS, category_summary, center_width, fit_width, truncate_chars,
};
use crate::ui::theme::ThemeTokens;
use crate::viewport::MonthBlock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowTarget {
    Day(CalendarDayKey),
    Chip(EntryId),
}

struct BlockRow {
    line: Line<'static>,
    targets: Vec<(usize, RowTarget)>,
}

impl BlockRow {
    fn plain(line: Line<'static>) -> Self {
        Self {
            line,
            targets: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChipRow {
    Main { id: EntryId, slot: usize },
    Categories { id: EntryId, slot: usize },
    More(usize),
}

/// Draws every month block intersecting the scroll viewport and records the
/// clickable regions for the next pointer event.
pub fn render_calendar(f: &mut Frame, area: Rect, app: &mut App, tokens: &ThemeTokens) {
    app.set_viewport_height(area.height as usize);

    let mut chip_hits = Vec::new();
    let mut day_hits = Vec::new();
    let col_width = area.width / 7;
    if col_width == 0 || area.height == 0 {
        app.chip_hits = chip_hits;
        app.day_hits = day_hits;
        return;
    }

    let view_top = app.scroll_top;
    let view_bottom = view_top + area.height as usize;
    let visible: Vec<MonthBlock> = app
        .blocks
        .iter()
        .filter(|b| b.bottom() > view_top && b.top < view_bottom)
        .copied()
        .collect();

    for block in visible {
        let rows = block_rows(app, block, col_width as usize, tokens);
        for (r, row) in rows.into_iter().enumerate() {
            let doc_row = block.top + r;
            if doc_row < view_top || doc_row >= view_bottom {
                continue;
            }
            let y = area.y + (doc_row - view_top) as u16;
            f.render_widget(Paragraph::new(row.line), Rect::new(area.x, y, area.width, 1));

            for (col, target) in row.targets {
                let rect = Rect::new(area.x + col as u16 * col_width, y, col_width, 1);
                match target {
                    RowTarget::Chip(id) => chip_hits.push(Hit {
                        area: rect,
                        target: id,
                    }),
                    RowTarget::Day(key) => day_hits.push(Hit {
                        area: rect,
                        target: key,
                    }),
                }
            }
        }
    }

    app.chip_hits = chip_hits;
    app.day_hits = day_hits;
}

fn block_rows(app: &App, block: MonthBlock, width: usize, tokens: &ThemeTokens) -> Vec<BlockRow> {
    let grid = MonthGrid::build(block.month, &app.index);
    let cell_height = app.settings.cell_height;
    let mut rows = Vec::with_capacity(block.height);

    let mut title = vec![Span::styled(
        format!(" {}", grid.month.label()),
        Style::default()
            .fg(tokens.ui_accent)
            .add_modifier(Modifier::BOLD),
    )];
    let count = app.index.count_in_month(grid.month);
    if count > 0 {
        title.push(Span::styled(
            format!("  {count} entr{}", if count == 1 { "y" } else { "ies" }),
            Style::default().fg(tokens.ui_muted),
        ));
    }
    rows.push(BlockRow::plain(Line::from(title)));

    let header: Vec<Span> = (0..7)
        .map(|c| {
            Span::styled(
                center_width(format_weekday_label(c), width),
                Style::default().fg(tokens.ui_muted),
            )
        })
        .collect();
    rows.push(BlockRow::plain(Line::from(header)));

    let mut cells: Vec<GridCell> = grid.cells().collect();
    cells.resize(grid.week_count() * 7, GridCell::Blank);

    for week in cells.chunks(7) {
        let chip_rows: Vec<Vec<ChipRow>> = week
            .iter()
            .map(|cell| match cell {
                GridCell::Day { entries, .. } => layout_chips(entries, cell_height.saturating_sub(1)),
                GridCell::Blank => Vec::new(),
            })
            .collect();

        for line in 0..cell_height {
            let mut spans = Vec::with_capacity(7);
            let mut targets = Vec::new();
            for (col, cell) in week.iter().enumerate() {
                let GridCell::Day { key, .. } = *cell else {
                    spans.push(Span::raw(" ".repeat(width)));
                    continue;
                };
                targets.push((col, RowTarget::Day(key)));
                let mut base = Style::default();
                if key == app.selected_day {
                    base = base.bg(tokens.ui_selection_bg);
                }

                if line == 0 {
                    spans.extend(day_number_spans(app, key, width, base, tokens));
                    continue;
                }
                match chip_rows[col].get(line - 1) {
                    Some(row) => {
                        if let ChipRow::Main { id, .. } | ChipRow::Categories { id, .. } = *row {
                            targets.push((col, RowTarget::Chip(id)));
                        }
                        spans.extend(chip_spans(app, key, *row, width, base, tokens));
                    }
                    None => spans.push(Span::styled(" ".repeat(width), base)),
                }
            }
            rows.push(BlockRow {
                line: Line::from(spans),
                targets,
            });
        }
    }

    rows.push(BlockRow::plain(Line::default()));
    rows
}

/// Splits a cell's chip rows between entries. Every entry gets a main row
/// first; spare rows show categories; overflow collapses into `+N more`.
fn layout_chips(entries: &[EntryId], rows: usize) -> Vec<ChipRow> {
    if rows == 0 || entries.is_empty() {
        return Vec::new();
    }
    if entries.len() > rows {
        let shown = rows - 1;
        let mut out: Vec<ChipRow> = entries[..shown]
            .iter()
            .enumerate()
            .map(|(slot, id)| ChipRow::Main { id: *id, slot })
            .collect();
        out.push(ChipRow::More(entries.len() - shown));
        return out;
    }

    let mut spare = rows - entries.len();
    let mut out = Vec::with_capacity(rows);
    for (slot, id) in entries.iter().enumerate() {
        out.push(ChipRow::Main { id: *id, slot });
        if spare > 0 {
            out.push(ChipRow::Categories { id: *id, slot });
            spare -= 1;
        }
    }
    out
}

fn day_number_spans(
    app: &App,
    key: CalendarDayKey,
    width: usize,
    base: Style,
    tokens: &ThemeTokens,
) -> Vec<Span<'static>> {
    let mut style = base;
    if key == app.today {
        style = style.fg(tokens.ui_today).add_modifier(Modifier::BOLD);
    }
    let label = if key == app.today {
        format!(" {}•", key.day)
    } else {
        format!(" {}", key.day)
    };
    vec![Span::styled(fit_width(&label, width), style)]
}

fn chip_spans(
    app: &App,
    key: CalendarDayKey,
    row: ChipRow,
    width: usize,
    base: Style,
    tokens: &ThemeTokens,
) -> Vec<Span<'static>> {
    let focused = |slot: usize| key == app.selected_day && slot == app.chip_cursor;

    match row {
        ChipRow::More(hidden) => vec![Span::styled(
            fit_width(&format!(" +{hidden} more"), width),
            base.fg(tokens.ui_muted),
        )],
        ChipRow::Categories { id, slot } => {
            let text = app
                .entry(id)
                .map(|e| category_summary(&e.categories))
                .unwrap_or_default();
            let mut style = base.fg(tokens.content_category);
            if focused(slot) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            vec![Span::styled(fit_width(&format!("  {text}"), width), style)]
        }
        ChipRow::Main { id, slot } => {
            let Some(entry) = app.entry(id) else {
                return vec![Span::styled(" ".repeat(width), base)];
            };
            let mut rating_style = base
                .fg(tokens.rating(entry.rating_band()))
                .add_modifier(Modifier::BOLD);
            let mut text_style = base.fg(tokens.content_chip);
            if focused(slot) {
                rating_style = rating_style.add_modifier(Modifier::REVERSED);
                text_style = text_style.add_modifier(Modifier::REVERSED);
            }

            let rating = format!(" ★{} ", format_rating(entry.rating));
            let rating_width = UnicodeWidthStr::width(rating.as_str());
            if rating_width >= width {
                return vec![Span::styled(fit_width(&rating, width), rating_style)];
            }
            let description = truncate_chars(entry.description.trim(), CHIP_DESCRIPTION_CHARS);
            vec![
                Span::styled(rating, rating_style),
                Span::styled(fit_width(&description, width - rating_width), text_style),
            ]
        }
    }
}
