//! Header bar, status bar and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub const TITLE: &str = "Demo AWACS Admin";

/// Render the header bar with fleet totals.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Span::styled(format!(" {} ", TITLE), Style::default().add_modifier(Modifier::BOLD));

    let Some(ref state) = app.state else {
        let line = Line::from(vec![title, Span::raw("| Waiting for data...")]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let connectivity = state.connectivity;
    let indicator_color = if connectivity.disconnected > 0 {
        app.theme.disconnected
    } else {
        app.theme.connected
    };

    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(indicator_color)),
        title,
        Span::raw("│ "),
        Span::styled(
            state.device_count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" devices │ "),
        Span::styled(
            connectivity.connected.to_string(),
            Style::default().fg(app.theme.connected),
        ),
        Span::raw(" up "),
        if connectivity.disconnected > 0 {
            Span::styled(
                connectivity.disconnected.to_string(),
                Style::default().fg(app.theme.disconnected).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" down │ "),
        Span::raw(format!("update #{}", state.updates)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the source, time since the last snapshot and the key bindings, or
/// a pending status message / source error.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = match (&app.state, &app.load_error) {
        (_, Some(err)) => format!(" {} | Error: {} | r:retry q:quit", app.source_description(), err),
        (Some(state), None) => format!(
            " {} | Updated {:.1}s ago | r:reload e:export ?:help q:quit",
            app.source_description(),
            state.last_updated.elapsed().as_secs_f64(),
        ),
        (None, None) => format!(" {} | Loading... | q:quit", app.source_description()),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay as a centered modal.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  r         Reload data"),
        Line::from("  e         Export to JSON"),
        Line::from("  ?         Toggle this help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let width = 36u16.min(area.width.saturating_sub(4));
    let height = 10u16.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(Paragraph::new(help_text).block(block), help_area);
}
