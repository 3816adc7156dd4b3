use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row, Table, TableState};

use super::theme::{COLOR_MUTED, usage_style};
use super::{panel_block, panel_block_focused};
use crate::app::{App, Focus};
use crate::utils::fit_text;

const NAME_WIDTH: usize = 18;

const COLUMNS: [Constraint; 4] = [
    Constraint::Length(7),
    Constraint::Length(NAME_WIDTH as u16),
    Constraint::Length(7),
    Constraint::Min(19),
];

/// Flagged processes. The CPU cell is always drawn flagged, whatever the
/// value: the upstream dashboard renders threat CPU unconditionally hot
/// and that behavior is kept.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut title = format!("Threats ({})", app.threats.len());
    if app.is_stale(app.threats_fetched_at) {
        title.push_str(" (stale)");
    }

    let focused = app.focus == Focus::Threats && !app.search_active;
    let block = if focused {
        panel_block_focused(&title)
    } else {
        panel_block(&title)
    };

    let inner = block.inner(area);
    let max_rows = inner.height.saturating_sub(1) as usize;
    app.ensure_threat_visible(max_rows);

    let start = app.threat_scroll.min(app.threats.len());
    let end = (start + max_rows).min(app.threats.len());
    let table_rows = app.threats[start..end]
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.pid.to_string()),
                Cell::from(fit_text(&record.name, NAME_WIDTH)),
                Cell::from(format!("{:>5.1}", record.cpu)).style(usage_style(true)),
                Cell::from(record.timestamp.clone()),
            ])
        })
        .collect::<Vec<_>>();

    let header_style = Style::default()
        .fg(COLOR_MUTED)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("PID").style(header_style),
        Cell::from("NAME").style(header_style),
        Cell::from("CPU%").style(header_style),
        Cell::from("FLAGGED").style(header_style),
    ]);

    let table = Table::new(table_rows, COLUMNS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(40, 48, 58))
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    if let Some(selected) = app.threat_state.selected()
        && selected >= start
        && selected < end
    {
        state.select(Some(selected - start));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
