use crate::{actions, app::App, config::key_match};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_card_mode(app: &mut App, key: KeyEvent) {
    let bindings = &app.config.keybindings.card;

    // ctrl+q still quits from inside the card; plain `q` closes it.
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
    } else if key_match(&key, &bindings.close) {
        app.close_card();
    } else if key_match(&key, &bindings.next) {
        app.card_next();
    } else if key_match(&key, &bindings.previous) {
        app.card_previous();
    } else if key_match(&key, &bindings.open_image) {
        actions::open_selected_image(app);
    } else if key_match(&key, &app.config.keybindings.global.help) {
        actions::toggle_help(app);
    }
}
