//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for titles and status messages.
    pub highlight: Color,
    /// Bar color for connected devices.
    pub connected: Color,
    /// Bar color for disconnected devices.
    pub disconnected: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for panel titles.
    pub header: Style,
    /// Style for the "Unknown" firmware legend entry.
    pub muted: Style,
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            connected: Color::Green,
            disconnected: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            muted: Style::default().add_modifier(Modifier::DIM),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            connected: Color::Green,
            disconnected: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a palette color name ("red", "gray", "#ff8800", ...) to a
    /// terminal color. Unrecognized names fall back to the default color.
    pub fn palette_color(&self, name: &str) -> Color {
        Color::from_str(name).unwrap_or(Color::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_color_names() {
        let theme = Theme::dark();
        assert_eq!(theme.palette_color("red"), Color::Red);
        assert_eq!(theme.palette_color("cyan"), Color::Cyan);
        assert_eq!(theme.palette_color("#ff8800"), Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(theme.palette_color("not-a-color"), Color::Reset);
    }
}
