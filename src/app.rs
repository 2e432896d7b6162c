use crate::calendar::{CalendarDayKey, YearMonth, day_key, format_short_date, parse_entry_date};
use crate::config::{CalendarSettings, Config};
use crate::entry_index::EntryIndex;
use crate::error::ConfigError;
use crate::grid::MonthGrid;
use crate::models::{EntryId, InputMode, JournalEntry};
use crate::month_window::{Extension, MonthWindow};
use crate::navigator::{Navigator, Step, SwipeOutcome};
use crate::storage::{self, Loaded};
use crate::viewport::{
    self, MONTH_HEADER_ROWS, MonthBlock, ScrollSnapshot, Viewport, ViewportTracker,
};
use chrono::{DateTime, Duration, Local};
use ratatui::layout::{Position, Rect};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

/// Screen area of something clickable, refreshed on every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit<T> {
    pub area: Rect,
    pub target: T,
}

/// Clickable step buttons in the card footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardButton {
    Previous,
    Next,
}

pub struct App {
    pub config: Config,
    pub settings: CalendarSettings,
    pub entries: Vec<JournalEntry>,
    pub index: EntryIndex,
    pub window: MonthWindow,
    pub blocks: Vec<MonthBlock>,
    pub tracker: ViewportTracker,
    pub navigator: Navigator,

    /// First visible row of the scroll document.
    pub scroll_top: usize,
    /// Rows available to the calendar (set during render).
    pub viewport_height: usize,

    pub today: CalendarDayKey,
    pub selected_day: CalendarDayKey,
    /// Which chip of the selected day Enter opens.
    pub chip_cursor: usize,

    // Hit regions recorded by the last render.
    pub chip_hits: Vec<Hit<EntryId>>,
    pub day_hits: Vec<Hit<CalendarDayKey>>,
    pub card_area: Option<Rect>,
    pub card_buttons: Vec<Hit<CardButton>>,
    pub pointer_down: Option<Position>,

    pub show_help_popup: bool,
    pub should_quit: bool,
    pub toast_message: Option<String>,
    pub toast_expiry: Option<DateTime<Local>>,
}

impl App {
    pub fn new(config: Config) -> Result<App, ConfigError> {
        let settings = config.settings()?;
        let mut app = App::with_entries(config, settings, Vec::new(), CalendarDayKey::today());
        app.load_journal();
        Ok(app)
    }

    pub fn with_entries(
        config: Config,
        settings: CalendarSettings,
        entries: Vec<JournalEntry>,
        today: CalendarDayKey,
    ) -> App {
        let index = EntryIndex::build(&entries);
        let window = initial_window(&settings, today.year_month());
        let blocks = viewport::layout_blocks(&window, settings.cell_height);

        let mut app = App {
            config,
            settings,
            entries,
            index,
            window,
            blocks,
            tracker: ViewportTracker::new(today.year_month()),
            navigator: Navigator::new(settings.swipe_threshold),
            scroll_top: 0,
            viewport_height: 0,
            today,
            selected_day: today,
            chip_cursor: 0,
            chip_hits: Vec::new(),
            day_hits: Vec::new(),
            card_area: None,
            card_buttons: Vec::new(),
            pointer_down: None,
            show_help_popup: false,
            should_quit: false,
            toast_message: None,
            toast_expiry: None,
        };
        app.scroll_top = app.block_top(today.year_month()).unwrap_or(0);
        app
    }

    pub fn input_mode(&self) -> InputMode {
        if self.navigator.is_open() {
            InputMode::Card
        } else {
            InputMode::Calendar
        }
    }

    /// Reads the journal file and rebuilds the index. Failures leave the
    /// calendar empty and are reported as a toast.
    pub fn load_journal(&mut self) {
        let path = self.config.data.journal_path.clone();
        match storage::load_entries(&path) {
            Ok(Loaded::Entries(entries)) => self.entries = entries,
            Ok(Loaded::Missing) => {
                self.entries = Vec::new();
                self.toast(format!("No journal at {}", path.display()));
            }
            Err(err) => {
                tracing::error!(%err, "failed to load journal");
                self.entries = Vec::new();
                self.toast(format!("Failed to load journal: {err}"));
            }
        }
        self.index = EntryIndex::build(&self.entries);
        self.report_skipped();
    }

    fn report_skipped(&mut self) {
        let skipped = self.index.skipped().len();
        if skipped > 0 {
            self.toast(format!(
                "{skipped} entr{} skipped: unreadable date (see log)",
                if skipped == 1 { "y" } else { "ies" }
            ));
        }
    }

    /// Reloads the journal and returns to today with no card open.
    pub fn reset(&mut self) {
        self.navigator.close();
        self.show_help_popup = false;
        self.load_journal();
        self.window = initial_window(&self.settings, self.today.year_month());
        self.relayout();
        self.tracker.reset(self.today.year_month());
        self.select_day(self.today);
        self.scroll_top = self.block_top(self.today.year_month()).unwrap_or(0);
        self.on_scroll();
        if self.toast_message.is_none() {
            if self.index.is_empty() {
                self.toast("Reloaded: journal is empty");
            } else {
                self.toast(format!("Reloaded {} entries", self.index.len()));
            }
        }
    }

    pub fn toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expiry = Some(Local::now() + Duration::seconds(2));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn entry(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries
            .get(id.0)
            .filter(|entry| entry.id == id)
            .or_else(|| self.entries.iter().find(|entry| entry.id == id))
    }

    pub fn current_month(&self) -> YearMonth {
        self.tracker.current()
    }

    fn relayout(&mut self) {
        self.blocks = viewport::layout_blocks(&self.window, self.settings.cell_height);
    }

    fn document_height(&self) -> usize {
        viewport::document_height(&self.blocks)
    }

    fn max_scroll(&self) -> usize {
        self.document_height().saturating_sub(self.viewport_height)
    }

    fn block_top(&self, month: YearMonth) -> Option<usize> {
        self.window
            .position(month)
            .and_then(|i| self.blocks.get(i))
            .map(|block| block.top)
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        if self.viewport_height != height {
            self.viewport_height = height;
            self.on_scroll();
        }
    }

    /// Handles one scroll notification: refresh the header month, then grow
    /// the window at whichever edge is near. Prepending shifts the scroll
    /// offset by the inserted height so the visible rows stay put.
    pub fn on_scroll(&mut self) {
        self.scroll_top = self.scroll_top.min(self.max_scroll());
        let view = Viewport {
            top: self.scroll_top,
            height: self.viewport_height,
        };
        self.tracker.observe(&self.blocks, view);

        if self.viewport_height == 0 {
            return;
        }

        let snapshot = ScrollSnapshot {
            scroll_top: self.scroll_top,
            client_height: self.viewport_height,
            scroll_height: self.document_height(),
        };
        let triggers =
            viewport::edge_triggers(snapshot, self.settings.extension_threshold_multiplier);

        if triggers.backward {
            let ext = self.grow_backward();
            log_extension("backward", ext, self.window.len());
        }
        if triggers.forward {
            let ext = self.grow_forward();
            log_extension("forward", ext, self.window.len());
        }

        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_top = self.scroll_top.saturating_add_signed(delta).min(self.max_scroll());
        self.on_scroll();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_by(-(WHEEL_ROWS as isize));
    }

    pub fn scroll_down(&mut self) {
        self.scroll_by(WHEEL_ROWS as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_height.max(1) as isize));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_height.max(1) as isize);
    }

    /// Prepends a batch and shifts the scroll offset by the inserted rows.
    fn grow_backward(&mut self) -> Extension {
        let ext = self.window.extend_backward(self.settings.extension_batch);
        self.relayout();
        let inserted: usize = self.blocks[..ext.added.min(self.blocks.len())]
            .iter()
            .map(|b| b.height)
            .sum();
        self.scroll_top += inserted;
        ext
    }

    /// Appends a batch; rows evicted from the front come off the offset.
    fn grow_forward(&mut self) -> Extension {
        let ext = self.window.extend_forward(self.settings.extension_batch);
        let removed: usize = self.blocks[..ext.evicted.min(self.blocks.len())]
            .iter()
            .map(|b| b.height)
            .sum();
        self.scroll_top = self.scroll_top.saturating_sub(removed);
        self.relayout();
        ext
    }

    /// Grows the window until it holds `month`.
    fn ensure_month(&mut self, month: YearMonth) {
        if self.window.contains(month) {
            return;
        }
        while month < self.window.first() {
            self.grow_backward();
        }
        while month > self.window.last() {
            self.grow_forward();
        }
    }

    /// Document row of a day cell's first line.
    fn day_row(&self, key: CalendarDayKey) -> Option<usize> {
        let month = key.year_month();
        let top = self.block_top(month)?;
        let (week, _) = MonthGrid::build(month, &self.index).cell_position(key.day);
        Some(top + MONTH_HEADER_ROWS + week * self.settings.cell_height)
    }

    fn reveal_day(&mut self, key: CalendarDayKey) {
        self.ensure_month(key.year_month());
        let Some(row) = self.day_row(key) else {
            return;
        };
        let cell = self.settings.cell_height;
        if row < self.scroll_top + MONTH_HEADER_ROWS {
            self.scroll_top = row.saturating_sub(MONTH_HEADER_ROWS);
        } else if self.viewport_height > 0 && row + cell > self.scroll_top + self.viewport_height {
            self.scroll_top = (row + cell).saturating_sub(self.viewport_height);
        }
        self.on_scroll();
    }

    pub fn select_day(&mut self, key: CalendarDayKey) {
        if self.selected_day != key {
            self.chip_cursor = 0;
        }
        self.selected_day = key;
    }

    pub fn move_day(&mut self, delta_days: i64) {
        let key = self.selected_day.offset_days(delta_days);
        self.select_day(key);
        self.reveal_day(key);
    }

    /// Same day number in another month, clamped to that month's length.
    pub fn move_month(&mut self, delta: i32) {
        let month = self.selected_day.year_month().shift(delta);
        let day = self.selected_day.day.min(month.days());
        let key = day_key(month.year, month.month, day);
        self.select_day(key);
        self.ensure_month(month);
        if let Some(top) = self.block_top(month) {
            self.scroll_top = top;
        }
        self.on_scroll();
    }

    pub fn go_today(&mut self) {
        let today = self.today;
        self.select_day(today);
        self.ensure_month(today.year_month());
        if let Some(top) = self.block_top(today.year_month()) {
            self.scroll_top = top;
        }
        self.on_scroll();
    }

    pub fn selected_day_entries(&self) -> &[EntryId] {
        self.index.lookup_key(self.selected_day)
    }

    pub fn cycle_chip(&mut self, forward: bool) {
        let count = self.selected_day_entries().len();
        if count == 0 {
            return;
        }
        self.chip_cursor = if forward {
            (self.chip_cursor + 1) % count
        } else {
            (self.chip_cursor + count - 1) % count
        };
    }

    pub fn open_selected(&mut self) {
        let ids = self.selected_day_entries();
        let Some(id) = ids.get(self.chip_cursor.min(ids.len().saturating_sub(1))).copied() else {
            let key = self.selected_day;
            self.toast(format!(
                "No entries on {}",
                format_short_date(key.year, key.month, key.day)
            ));
            return;
        };
        self.open_entry(id);
    }

    pub fn open_entry(&mut self, id: EntryId) {
        if let Err(err) = self.navigator.open(&self.entries, id) {
            self.toast(err.to_string());
        }
    }

    /// Closes the card and leaves the calendar on the last viewed entry.
    pub fn close_card(&mut self) {
        if let Some(selection) = self.navigator.selection() {
            self.follow_entry(selection.id);
        }
        self.navigator.close();
        self.card_buttons.clear();
    }

    fn follow_entry(&mut self, id: EntryId) {
        let Some(key) = self.entry(id).and_then(|e| parse_entry_date(&e.date).ok()) else {
            return;
        };
        self.select_day(key);
        if let Some(pos) = self.index.lookup_key(key).iter().position(|e| *e == id) {
            self.chip_cursor = pos;
        }
        self.reveal_day(key);
    }

    pub fn card_next(&mut self) {
        let step = self.navigator.step_next(&self.entries);
        self.after_step(step);
    }

    pub fn card_previous(&mut self) {
        let step = self.navigator.step_previous(&self.entries);
        self.after_step(step);
    }

    fn after_step(&mut self, step: Option<Step>) {
        if let Some(Step::AtBoundary(selection)) = step {
            tracing::debug!(index = selection.index, "navigation at boundary");
        }
    }

    fn drag_units(&self, column: u16) -> f64 {
        column as f64 * self.settings.cell_width_px
    }

    /// Visual card offset in terminal columns while dragging.
    pub fn card_offset_columns(&self) -> i32 {
        (self.navigator.gesture().offset() / self.settings.cell_width_px).round() as i32
    }

    pub fn pointer_pressed(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        if self.navigator.is_open() {
            match self.card_area {
                Some(area) if area.contains(pos) => {
                    let button = self
                        .card_buttons
                        .iter()
                        .find(|h| h.area.contains(pos))
                        .map(|h| h.target);
                    match button {
                        Some(CardButton::Previous) => return self.card_previous(),
                        Some(CardButton::Next) => return self.card_next(),
                        None => {}
                    }
                    let x = self.drag_units(column);
                    self.navigator.gesture_mut().press(x);
                }
                _ => self.close_card(),
            }
            return;
        }
        self.pointer_down = Some(pos);
    }

    pub fn pointer_dragged(&mut self, column: u16, _row: u16) {
        if self.navigator.gesture().is_dragging() {
            let x = self.drag_units(column);
            self.navigator.gesture_mut().drag_to(x);
        }
    }

    pub fn pointer_released(&mut self, column: u16, row: u16) {
        if self.navigator.gesture().is_dragging() {
            let x = self.drag_units(column);
            self.navigator.gesture_mut().drag_to(x);
            let (outcome, step) = self.navigator.release_drag(&self.entries);
            if outcome != SwipeOutcome::Reset {
                self.after_step(step);
            }
            return;
        }

        let Some(down) = self.pointer_down.take() else {
            return;
        };
        let up = Position::new(column, row);
        if let Some(hit) = self.chip_hits.iter().find(|h| h.area.contains(up)).copied() {
            if hit.area.contains(down) {
                self.open_entry(hit.target);
            }
            return;
        }
        if let Some(hit) = self.day_hits.iter().find(|h| h.area.contains(up)).copied()
            && hit.area.contains(down)
        {
            self.select_day(hit.target);
        }
    }
}

fn initial_window(settings: &CalendarSettings, center: YearMonth) -> MonthWindow {
    MonthWindow::initialize(center, settings.months_before, settings.months_after)
        .with_max_months(settings.max_months)
}

fn log_extension(direction: &str, ext: Extension, len: usize) {
    tracing::debug!(
        direction,
        added = ext.added,
        evicted = ext.evicted,
        window = len,
        "extended month window"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::GesturePhase;

    fn entry(id: usize, date: &str) -> JournalEntry {
        JournalEntry {
            id: EntryId(id),
            date: date.to_string(),
            img_url: format!("https://example.com/{id}.jpg"),
            rating: 4.0,
            categories: vec!["wash".to_string()],
            description: format!("entry {id}"),
        }
    }

    fn app_with(entries: Vec<JournalEntry>) -> App {
        App::with_entries(
            Config::default(),
            CalendarSettings::default(),
            entries,
            day_key(2024, 2, 15),
        )
    }

    fn top_month(app: &App) -> YearMonth {
        app.blocks
            .iter()
            .find(|b| b.bottom() > app.scroll_top)
            .map(|b| b.month)
            .expect("a block at the top")
    }

    #[test]
    fn starts_on_todays_month() {
        let mut app = app_with(Vec::new());
        app.set_viewport_height(30);
        assert_eq!(app.window.len(), 25);
        assert_eq!(app.current_month(), YearMonth { year: 2024, month: 2 });
        assert_eq!(app.input_mode(), InputMode::Calendar);
    }

    #[test]
    fn scrolling_to_top_prepends_and_keeps_anchor() {
        let mut app = app_with(Vec::new());
        app.set_viewport_height(30);
        let first_before = app.window.first();

        app.scroll_top = 0;
        let anchor = top_month(&app);
        app.on_scroll();

        assert_eq!(app.window.first(), first_before.shift(-6));
        assert_eq!(top_month(&app), anchor);
        assert!(app.scroll_top > 0);
    }

    #[test]
    fn scrolling_to_bottom_appends() {
        let mut app = app_with(Vec::new());
        app.set_viewport_height(30);
        let last_before = app.window.last();
        let len_before = app.window.len();

        app.scroll_by(isize::MAX);

        assert_eq!(app.window.last(), last_before.shift(6));
        assert_eq!(app.window.len(), len_before + 6);
    }

    #[test]
    fn capped_window_reanchors_after_eviction() {
        let mut settings = CalendarSettings::default();
        settings.max_months = Some(30);
        let mut app = App::with_entries(Config::default(), settings, Vec::new(), day_key(2024, 2, 15));
        app.set_viewport_height(30);

        for _ in 0..20 {
            app.scroll_by(isize::MAX);
        }
        assert!(app.window.len() <= 30);
        let last_block = app.blocks.last().expect("blocks");
        assert!(app.scroll_top + app.viewport_height <= last_block.bottom());
    }

    /// Month at the top of the viewport and how far into it the view starts.
    fn anchor(app: &App) -> (YearMonth, usize) {
        app.blocks
            .iter()
            .find(|b| b.bottom() > app.scroll_top)
            .map(|b| (b.month, app.scroll_top - b.top))
            .expect("a block at the top")
    }

    fn settings_with(before: usize, after: usize, max_months: Option<usize>) -> CalendarSettings {
        CalendarSettings {
            months_before: before,
            months_after: after,
            max_months,
            ..CalendarSettings::default()
        }
    }

    #[test]
    fn capped_window_keeps_top_month_when_growing_backward() {
        let settings = settings_with(6, 6, Some(13));
        let mut app = App::with_entries(Config::default(), settings, Vec::new(), day_key(2024, 2, 15));
        app.set_viewport_height(30);
        assert_eq!(app.window.len(), 13);

        app.scroll_top = app.blocks[1].top + 2;
        let before = anchor(&app);
        let first_before = app.window.first();
        let last_before = app.window.last();
        app.on_scroll();

        assert_eq!(app.window.len(), 13);
        assert_eq!(app.window.first(), first_before.shift(-6));
        assert_eq!(app.window.last(), last_before.shift(-6));
        assert_eq!(anchor(&app), before);
    }

    #[test]
    fn short_document_grows_both_edges_in_one_scroll() {
        let settings = settings_with(0, 0, None);
        let mut app = App::with_entries(Config::default(), settings, Vec::new(), day_key(2024, 2, 15));
        assert_eq!(app.window.len(), 1);
        assert!(app.blocks[0].height < 30);

        app.set_viewport_height(30);

        let march = YearMonth { year: 2024, month: 2 };
        assert_eq!(app.window.len(), 13);
        assert_eq!(app.window.first(), march.shift(-6));
        assert_eq!(app.window.last(), march.shift(6));
        assert_eq!(anchor(&app), (march, 0));
    }

    #[test]
    fn moving_across_window_edge_extends() {
        let mut app = app_with(Vec::new());
        app.set_viewport_height(30);
        for _ in 0..20 {
            app.move_month(-1);
        }
        assert_eq!(app.selected_day, day_key(2022, 6, 15));
        assert!(app.window.contains(YearMonth { year: 2022, month: 6 }));
        assert_eq!(app.current_month(), YearMonth { year: 2022, month: 6 });
    }

    #[test]
    fn move_month_clamps_day() {
        let mut app = app_with(Vec::new());
        app.set_viewport_height(30);
        app.select_day(day_key(2024, 0, 31));
        app.move_month(1);
        assert_eq!(app.selected_day, day_key(2024, 1, 29));
    }

    #[test]
    fn opens_selected_day_and_steps_through_journal() {
        let mut app = app_with(vec![
            entry(0, "14/03/2024"),
            entry(1, "15/03/2024"),
            entry(2, "15/03/2024"),
        ]);
        app.set_viewport_height(30);

        app.cycle_chip(true);
        app.open_selected();
        assert_eq!(app.input_mode(), InputMode::Card);
        assert_eq!(app.navigator.selection().map(|s| s.id), Some(EntryId(2)));

        app.card_next();
        assert_eq!(app.navigator.selection().map(|s| s.index), Some(2));

        app.card_previous();
        app.card_previous();
        app.card_previous();
        assert_eq!(app.navigator.selection().map(|s| s.index), Some(0));

        app.close_card();
        assert_eq!(app.input_mode(), InputMode::Calendar);
        assert_eq!(app.selected_day, day_key(2024, 2, 14));
    }

    #[test]
    fn empty_day_shows_toast() {
        let mut app = app_with(Vec::new());
        app.open_selected();
        assert_eq!(app.input_mode(), InputMode::Calendar);
        assert_eq!(app.toast_message.as_deref(), Some("No entries on Mar 15, 2024"));
    }

    #[test]
    fn short_mouse_drag_snaps_back() {
        let mut app = app_with(vec![entry(0, "15/03/2024"), entry(1, "16/03/2024")]);
        app.open_entry(EntryId(0));
        app.card_area = Some(Rect::new(10, 5, 40, 20));

        app.pointer_pressed(30, 10);
        app.pointer_dragged(25, 10);
        assert_eq!(app.card_offset_columns(), -5);
        app.pointer_released(25, 10);

        assert_eq!(app.navigator.gesture().phase(), GesturePhase::Idle);
        assert_eq!(app.card_offset_columns(), 0);
        assert_eq!(app.navigator.selection().map(|s| s.index), Some(0));
    }

    #[test]
    fn long_left_drag_goes_to_next_entry() {
        let mut app = app_with(vec![entry(0, "15/03/2024"), entry(1, "16/03/2024")]);
        app.open_entry(EntryId(0));
        app.card_area = Some(Rect::new(0, 0, 60, 20));

        app.pointer_pressed(40, 10);
        app.pointer_dragged(20, 10);
        app.pointer_released(20, 10);

        assert_eq!(app.navigator.selection().map(|s| s.index), Some(1));
    }

    #[test]
    fn footer_buttons_step_without_dragging() {
        let mut app = app_with(vec![entry(0, "15/03/2024"), entry(1, "16/03/2024")]);
        app.open_entry(EntryId(0));
        app.card_area = Some(Rect::new(0, 0, 60, 20));
        app.card_buttons = vec![
            Hit {
                area: Rect::new(2, 18, 10, 1),
                target: CardButton::Previous,
            },
            Hit {
                area: Rect::new(52, 18, 6, 1),
                target: CardButton::Next,
            },
        ];

        app.pointer_pressed(54, 18);
        assert!(!app.navigator.gesture().is_dragging());
        app.pointer_released(54, 18);
        assert_eq!(app.navigator.selection().map(|s| s.index), Some(1));

        app.pointer_pressed(54, 18);
        assert_eq!(app.navigator.selection().map(|s| s.index), Some(1));

        app.pointer_pressed(4, 18);
        assert_eq!(app.navigator.selection().map(|s| s.index), Some(0));
        assert!(app.navigator.is_open());
    }

    #[test]
    fn click_outside_card_closes_it() {
        let mut app = app_with(vec![entry(0, "15/03/2024")]);
        app.open_entry(EntryId(0));
        app.card_area = Some(Rect::new(10, 5, 20, 10));
        app.pointer_pressed(1, 1);
        assert!(!app.navigator.is_open());
    }

    #[test]
    fn clicking_a_chip_opens_its_entry() {
        let mut app = app_with(vec![entry(0, "15/03/2024"), entry(1, "02/03/2024")]);
        app.chip_hits = vec![Hit {
            area: Rect::new(0, 0, 10, 1),
            target: EntryId(1),
        }];
        app.pointer_pressed(3, 0);
        app.pointer_released(4, 0);
        assert_eq!(app.navigator.selection().map(|s| s.id), Some(EntryId(1)));
    }

    #[test]
    fn skipped_entries_are_reported() {
        let mut app = app_with(vec![entry(0, "31/04/2024"), entry(1, "01/04/2024")]);
        assert_eq!(app.index.skipped().len(), 1);
        app.report_skipped();
        assert_eq!(
            app.toast_message.as_deref(),
            Some("1 entry skipped: unreadable date (see log)")
        );
    }

    #[test]
    fn opening_unknown_entry_keeps_card_closed() {
        let mut app = app_with(vec![entry(0, "15/03/2024")]);
        app.open_entry(EntryId(7));
        assert!(!app.navigator.is_open());
        assert!(app.toast_message.is_some());
    }
}
