use crate::{app::App, calendar::CalendarDayKey};
use chrono::Local;

pub fn tick(app: &mut App) {
    handle_day_rollover(app, CalendarDayKey::today());

    if let Some(expiry) = app.toast_expiry
        && Local::now() >= expiry
    {
        app.toast_expiry = None;
        app.toast_message = None;
    }
}

/// Moves the today marker at midnight. A selection that was sitting on the
/// old today follows it.
fn handle_day_rollover(app: &mut App, today: CalendarDayKey) {
    if today == app.today {
        return;
    }
    tracing::info!(from = %app.today, to = %today, "day changed");
    let followed = app.selected_day == app.today;
    app.today = today;
    if followed {
        app.select_day(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day_key;
    use crate::config::{CalendarSettings, Config};
    use chrono::Duration;

    fn app() -> App {
        App::with_entries(
            Config::default(),
            CalendarSettings::default(),
            Vec::new(),
            day_key(2024, 11, 31),
        )
    }

    #[test]
    fn rollover_moves_today_and_selection() {
        let mut app = app();
        handle_day_rollover(&mut app, day_key(2025, 0, 1));
        assert_eq!(app.today, day_key(2025, 0, 1));
        assert_eq!(app.selected_day, day_key(2025, 0, 1));
    }

    #[test]
    fn rollover_keeps_a_deliberate_selection() {
        let mut app = app();
        app.select_day(day_key(2024, 11, 3));
        handle_day_rollover(&mut app, day_key(2025, 0, 1));
        assert_eq!(app.selected_day, day_key(2024, 11, 3));
    }

    #[test]
    fn expired_toast_is_cleared() {
        let mut app = app();
        app.toast("hello");
        app.toast_expiry = Some(Local::now() - Duration::seconds(1));
        tick(&mut app);
        assert!(app.toast_message.is_none());
    }
}
