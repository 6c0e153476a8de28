use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// File written by the in-app export key.
pub const EXPORT_FILE: &str = "dashboard_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Any key closes the help overlay
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('r') => {
            app.reload_data();
        }
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('e') => {
            let path = PathBuf::from(EXPORT_FILE);
            match app.export_state(&path) {
                Ok(()) => app.set_status_message(format!("Exported to {}", path.display())),
                Err(e) => app.set_status_message(format!("Export failed: {}", e)),
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Palette;
    use crate::source::{ChannelSource, DeviceSnapshot};
    use crate::ui::Theme;
    use crossterm::event::KeyModifiers;
    use tokio::sync::watch;

    fn app() -> (watch::Sender<DeviceSnapshot>, App) {
        let (tx, source) = ChannelSource::create("test");
        (tx, App::with_theme(Box::new(source), Palette::default(), Theme::dark()))
    }

    fn press(app: &mut App, c: char) {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_key() {
        let (_tx, mut app) = app();
        press(&mut app, 'q');
        assert!(!app.running);
    }

    #[test]
    fn test_any_key_closes_help() {
        let (_tx, mut app) = app();
        press(&mut app, '?');
        assert!(app.show_help);

        // 'q' only closes the overlay
        press(&mut app, 'q');
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_reload_key() {
        let (_tx, mut app) = app();
        press(&mut app, 'r');
        assert!(app.state.is_some());
    }

    #[test]
    fn test_export_without_data_reports_failure() {
        let (_tx, mut app) = app();
        press(&mut app, 'e');
        assert!(app.status_message().unwrap().starts_with("Export failed"));
    }
}
