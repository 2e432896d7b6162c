use crate::{actions, app::App, config::key_match};
use crossterm::event::KeyEvent;

pub fn handle_calendar_mode(app: &mut App, key: KeyEvent) {
    let global = &app.config.keybindings.global;
    let bindings = &app.config.keybindings.calendar;

    if key_match(&key, &global.quit) {
        app.quit();
    } else if key_match(&key, &global.help) {
        actions::toggle_help(app);
    } else if key_match(&key, &global.today) {
        app.go_today();
    } else if key_match(&key, &global.reload) {
        actions::reload_journal(app);
    } else if key_match(&key, &bindings.left) {
        app.move_day(-1);
    } else if key_match(&key, &bindings.right) {
        app.move_day(1);
    } else if key_match(&key, &bindings.up) {
        app.move_day(-7);
    } else if key_match(&key, &bindings.down) {
        app.move_day(7);
    } else if key_match(&key, &bindings.page_up) {
        app.page_up();
    } else if key_match(&key, &bindings.page_down) {
        app.page_down();
    } else if key_match(&key, &bindings.prev_month) {
        app.move_month(-1);
    } else if key_match(&key, &bindings.next_month) {
        app.move_month(1);
    } else if key_match(&key, &bindings.open) {
        app.open_selected();
    } else if key_match(&key, &bindings.next_chip) {
        app.cycle_chip(true);
    } else if key_match(&key, &bindings.prev_chip) {
        app.cycle_chip(false);
    }
}
