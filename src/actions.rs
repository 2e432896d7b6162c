use crate::app::App;

/// Hands the open entry's image URL to the system opener.
pub fn open_selected_image(app: &mut App) {
    let Some(url) = app
        .navigator
        .selection()
        .and_then(|selection| app.entry(selection.id))
        .map(|entry| entry.img_url.clone())
    else {
        return;
    };
    if url.trim().is_empty() {
        app.toast("Entry has no image.");
        return;
    }
    if let Err(e) = open::that(&url) {
        tracing::warn!(%url, error = %e, "failed to open image");
        app.toast(format!("Failed to open image: {e}"));
    }
}

pub fn reload_journal(app: &mut App) {
    app.toast_message = None;
    app.reset();
}

pub fn toggle_help(app: &mut App) {
    app.show_help_popup = !app.show_help_popup;
}
