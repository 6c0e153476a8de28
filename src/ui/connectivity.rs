//! "Connection Status" bar chart.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

const BAR_WIDTH: u16 = 14;
const BAR_GAP: u16 = 4;

/// Render connected/disconnected counts as two vertical bars.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Line::styled(" Connection Status ", app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(ref state) = app.state else {
        frame.render_widget(Paragraph::new(" Waiting for data...").block(block), area);
        return;
    };

    let colors = [app.theme.connected, app.theme.disconnected];
    let bars: Vec<Bar> = state
        .connectivity
        .buckets()
        .into_iter()
        .zip(colors)
        .map(|((label, count), color)| {
            Bar::default()
                .value(count)
                .label(Line::from(label))
                .text_value(count.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(color).add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        // Keep empty fleets from scaling to a zero-height axis
        .max(state.connectivity.total().max(1));

    frame.render_widget(chart, area);
}
