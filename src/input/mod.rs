pub(crate) mod calendar;
pub(crate) mod card;

use crate::{actions, app::App, config::key_match, models::InputMode};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Mouse(mouse_event) => {
            let (column, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::ScrollUp if app.input_mode() == InputMode::Calendar => {
                    app.scroll_up()
                }
                MouseEventKind::ScrollDown if app.input_mode() == InputMode::Calendar => {
                    app.scroll_down()
                }
                MouseEventKind::Down(MouseButton::Left) => app.pointer_pressed(column, row),
                MouseEventKind::Drag(MouseButton::Left) => app.pointer_dragged(column, row),
                MouseEventKind::Up(MouseButton::Left) => app.pointer_released(column, row),
                _ => {}
            }
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if handle_help_popup(app, key) {
                return;
            }
            match app.input_mode() {
                InputMode::Calendar => calendar::handle_calendar_mode(app, key),
                InputMode::Card => card::handle_card_mode(app, key),
            }
        }
        _ => {}
    }
}

fn handle_help_popup(app: &mut App, key: KeyEvent) -> bool {
    if !app.show_help_popup {
        return false;
    }
    if key.code == KeyCode::Esc || key_match(&key, &app.config.keybindings.global.help) {
        actions::toggle_help(app);
    } else if key_match(&key, &app.config.keybindings.global.quit) {
        app.quit();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day_key;
    use crate::config::{CalendarSettings, Config};
    use crate::models::{EntryId, JournalEntry};
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn app() -> App {
        let entries = (0..3)
            .map(|i| JournalEntry {
                id: EntryId(i),
                date: format!("{:02}/03/2024", 14 + i),
                img_url: String::new(),
                rating: 3.0,
                categories: Vec::new(),
                description: String::new(),
            })
            .collect();
        let mut app = App::with_entries(
            Config::default(),
            CalendarSettings::default(),
            entries,
            day_key(2024, 2, 15),
        );
        app.set_viewport_height(30);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16) {
        handle_event(
            app,
            Event::Mouse(MouseEvent {
                kind,
                column,
                row: 3,
                modifiers: KeyModifiers::NONE,
            }),
        );
    }

    #[test]
    fn keys_route_by_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selected_day, day_key(2024, 2, 16));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Card);

        // In the card, `h` steps to the previous entry instead of moving the day.
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.navigator.selection().map(|s| s.id), Some(EntryId(1)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode(), InputMode::Calendar);
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help_popup);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selected_day, day_key(2024, 2, 15));
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help_popup);
    }

    #[test]
    fn mouse_swipe_on_card() {
        let mut app = app();
        app.open_entry(EntryId(1));
        app.card_area = Some(ratatui::layout::Rect::new(0, 0, 80, 20));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 30);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 30);

        assert_eq!(app.navigator.selection().map(|s| s.id), Some(EntryId(0)));
    }

    #[test]
    fn wheel_scrolls_calendar() {
        let mut app = app();
        let before = app.scroll_top;
        mouse(&mut app, MouseEventKind::ScrollDown, 0);
        assert_eq!(app.scroll_top, before + 3);
    }
}
