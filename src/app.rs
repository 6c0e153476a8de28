//! Application state for the dashboard TUI.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::data::{DashboardState, Palette};
use crate::export;
use crate::source::DataSource;
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    source: Box<dyn DataSource>,
    /// Series derived from the latest snapshot.
    pub state: Option<DashboardState>,
    pub load_error: Option<String>,
    pub palette: Palette,

    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App, picking a theme that suits the terminal background.
    pub fn new(source: Box<dyn DataSource>, palette: Palette) -> Self {
        Self::with_theme(source, palette, Theme::auto_detect())
    }

    pub fn with_theme(source: Box<dyn DataSource>, palette: Palette, theme: Theme) -> Self {
        info!(source = source.description(), "dashboard started");
        Self {
            running: true,
            show_help: false,
            source,
            state: None,
            load_error: None,
            palette,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Show a message in the status bar for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Returns the status message if it hasn't expired yet.
    pub fn status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, at)) if at.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// Poll the data source and apply any new snapshot.
    ///
    /// Returns true if the dashboard state changed.
    pub fn reload_data(&mut self) -> bool {
        match self.source.poll() {
            Some(snapshot) => {
                let next = DashboardState::apply(self.state.as_ref(), snapshot, &self.palette);
                self.state = Some(next);
                self.load_error = None;
                true
            }
            None => {
                self.load_error = self.source.error().map(str::to_string);
                if let Some(ref err) = self.load_error {
                    debug!(error = %err, "source reported an error");
                }
                false
            }
        }
    }

    /// Write the current series to `path` as JSON.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref state) = self.state else {
            anyhow::bail!("No data to export");
        };
        export::write_export(state, path)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ChannelSource, DeviceRecord, DeviceSnapshot, FileSource, SystemInfo};

    fn test_app() -> (tokio::sync::watch::Sender<DeviceSnapshot>, App) {
        let (tx, source) = ChannelSource::create("test");
        let app = App::with_theme(Box::new(source), Palette::default(), Theme::dark());
        (tx, app)
    }

    fn device(status: i64) -> DeviceRecord {
        DeviceRecord {
            status: Some(status),
            system: SystemInfo {
                esp_fw_revision: Some("1.2".to_string()),
                ti_fw_revision: None,
            },
        }
    }

    #[test]
    fn test_reload_applies_snapshots() {
        let (tx, mut app) = test_app();
        assert!(app.state.is_none());

        // Initial empty snapshot
        assert!(app.reload_data());
        assert_eq!(app.state.as_ref().map(|s| s.device_count), Some(0));

        assert!(!app.reload_data());

        let mut snap = DeviceSnapshot::new();
        snap.insert("a".into(), device(1));
        snap.insert("b".into(), device(99));
        tx.send(snap).unwrap();

        assert!(app.reload_data());
        let state = app.state.as_ref().unwrap();
        assert_eq!(state.updates, 2);
        assert_eq!(state.connectivity.connected, 1);
        assert_eq!(state.connectivity.disconnected, 1);
    }

    #[test]
    fn test_reload_surfaces_source_errors() {
        let source = FileSource::new("/nonexistent/devices.json");
        let mut app = App::with_theme(Box::new(source), Palette::default(), Theme::dark());

        assert!(!app.reload_data());
        assert!(app.load_error.as_deref().unwrap().contains("Read error"));
        assert!(app.state.is_none());
    }

    #[test]
    fn test_export_without_data_fails() {
        let (_tx, app) = test_app();
        let dir = tempfile::tempdir().unwrap();
        assert!(app.export_state(&dir.path().join("out.json")).is_err());
    }

    #[test]
    fn test_export_writes_file() {
        let (_tx, mut app) = test_app();
        app.reload_data();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        app.export_state(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_status_message() {
        let (_tx, mut app) = test_app();
        assert!(app.status_message().is_none());
        app.set_status_message("Exported".to_string());
        assert_eq!(app.status_message(), Some("Exported"));
    }

    #[test]
    fn test_help_and_quit() {
        let (_tx, mut app) = test_app();
        app.toggle_help();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);
        app.quit();
        assert!(!app.running);
    }
}
