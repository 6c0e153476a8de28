//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`connectivity`]: "Connection Status" bar chart
//! - [`firmware`]: ESP32 / MSP430 firmware distribution panels
//! - [`common`]: header, status bar, help overlay
//! - [`theme`]: light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Connection Status (connectivity)     │
//! ├──────────────────┬───────────────────┤
//! │ ESP32 Firmware   │ MSP430 Firmware   │
//! ├──────────────────┴───────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//! ```

pub mod common;
pub mod connectivity;
pub mod firmware;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::Processor;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

const CONNECTIVITY_HEIGHT: u16 = 12;

/// Render the whole dashboard into the frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let [header, chart, firmware, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(CONNECTIVITY_HEIGHT),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    let [esp, msp] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(firmware);

    common::render_header(frame, app, header);
    connectivity::render(frame, app, chart);
    firmware::render(frame, app, esp, Processor::Esp);
    firmware::render(frame, app, msp, Processor::Msp);
    common::render_status_bar(frame, app, status);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Palette;
    use crate::source::{ChannelSource, DeviceRecord, DeviceSnapshot, SystemInfo};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        screen_text(&terminal)
    }

    fn loaded_app() -> App {
        let (tx, source) = ChannelSource::create("test");
        let mut app = App::with_theme(Box::new(source), Palette::default(), Theme::dark());

        let mut snap = DeviceSnapshot::new();
        snap.insert(
            "a".into(),
            DeviceRecord {
                status: Some(1),
                system: SystemInfo {
                    esp_fw_revision: Some("1.2".into()),
                    ti_fw_revision: Some("4.0".into()),
                },
            },
        );
        snap.insert(
            "b".into(),
            DeviceRecord {
                status: Some(99),
                system: SystemInfo::default(),
            },
        );
        tx.send(snap).unwrap();
        app.reload_data();
        app
    }

    #[test]
    fn test_render_dashboard() {
        let text = draw(&loaded_app(), 100, 30);

        assert!(text.contains("Demo AWACS Admin"));
        assert!(text.contains("Connection Status"));
        assert!(text.contains("ESP32 Firmware"));
        assert!(text.contains("MSP430 Firmware"));
        assert!(text.contains("v1.2"));
        assert!(text.contains("v4.0"));
        assert!(text.contains("Unknown"));
    }

    #[test]
    fn test_render_before_data() {
        let (_tx, source) = ChannelSource::create("test");
        let app = App::with_theme(Box::new(source), Palette::default(), Theme::dark());

        let text = draw(&app, 100, 30);
        assert!(text.contains("Waiting for data"));
    }

    #[test]
    fn test_render_too_small() {
        let text = draw(&loaded_app(), 40, 10);
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut app = loaded_app();
        app.toggle_help();

        let text = draw(&app, 100, 30);
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
