//! Firmware distribution panels.
//!
//! Terminals can't draw a pie, so each distribution is a proportional
//! strip (one colored run per version) above a legend with absolute
//! counts and shares.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::versions::UNKNOWN_LABEL;
use crate::data::{Processor, VersionHistogramEntry};

const STRIP_CHAR: &str = "█";
const LEGEND_LABEL_WIDTH: usize = 14;

/// Render one processor's firmware distribution.
pub fn render(frame: &mut Frame, app: &App, area: Rect, processor: Processor) {
    let block = Block::default()
        .title(Line::styled(format!(" {} ", processor.title()), app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(ref state) = app.state else {
        frame.render_widget(Paragraph::new(" Waiting for data...").block(block), area);
        return;
    };

    let entries = state.versions(processor);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if entries.is_empty() {
        frame.render_widget(Paragraph::new(" No devices").style(app.theme.muted), inner);
        return;
    }

    let [strip_area, _, legend_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(strip_line(app, entries, strip_area.width)), strip_area);
    frame.render_widget(Paragraph::new(legend_lines(app, entries)), legend_area);
}

fn strip_line<'a>(app: &App, entries: &'a [VersionHistogramEntry], width: u16) -> Line<'a> {
    let counts: Vec<u64> = entries.iter().map(|e| e.count).collect();
    let spans: Vec<Span> = entries
        .iter()
        .zip(share_widths(&counts, width))
        .filter(|(_, w)| *w > 0)
        .map(|(entry, w)| {
            Span::styled(
                STRIP_CHAR.repeat(usize::from(w)),
                Style::default().fg(app.theme.palette_color(&entry.color)),
            )
        })
        .collect();
    Line::from(spans)
}

fn legend_lines<'a>(app: &App, entries: &'a [VersionHistogramEntry]) -> Vec<Line<'a>> {
    let total: u64 = entries.iter().map(|e| e.count).sum();

    entries
        .iter()
        .map(|entry| {
            let label_style = if entry.label == UNKNOWN_LABEL {
                app.theme.muted
            } else {
                Style::default()
            };
            let share = if total > 0 {
                entry.count as f64 * 100.0 / total as f64
            } else {
                0.0
            };

            Line::from(vec![
                Span::styled(
                    " ■ ",
                    Style::default().fg(app.theme.palette_color(&entry.color)),
                ),
                Span::styled(
                    format!("{:<width$}", entry.label, width = LEGEND_LABEL_WIDTH),
                    label_style,
                ),
                Span::styled(
                    format!("{:>6}", entry.count),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {:>5.1}%", share)),
            ])
        })
        .collect()
}

/// Split `width` cells between buckets in proportion to their counts.
///
/// Uses cumulative rounding so the widths always add up to exactly `width`
/// (when any count is non-zero).
pub fn share_widths(counts: &[u64], width: u16) -> Vec<u16> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let width = u64::from(width);
    let mut cumulative = 0u64;
    let mut previous_edge = 0u64;

    counts
        .iter()
        .map(|&count| {
            cumulative += count;
            let edge = (cumulative * width + total / 2) / total;
            let cells = edge - previous_edge;
            previous_edge = edge;
            u16::try_from(cells).unwrap_or(u16::MAX)
        })
        .collect()
}
