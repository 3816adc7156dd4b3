use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row, Table, TableState};

use super::theme::{COLOR_ACCENT, COLOR_MUTED, is_high_cpu, is_high_memory, usage_style};
use super::{panel_block, panel_block_focused};
use crate::app::{App, Focus};
use crate::data::{SortDir, SortKey};

const COLUMNS: [Constraint; 5] = [
    Constraint::Length(7),
    Constraint::Min(12),
    Constraint::Length(7),
    Constraint::Length(7),
    Constraint::Length(10),
];

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let visible_count = app.visible_processes().len();
    let total = app.processes.len();
    let mut title = if visible_count == total {
        format!("Processes ({total})")
    } else {
        format!("Processes ({visible_count}/{total})")
    };
    if app.is_stale(app.processes_fetched_at) {
        title.push_str(" (stale)");
    }

    let focused = app.focus == Focus::Processes && !app.search_active;
    let block = if focused {
        panel_block_focused(&title)
    } else {
        panel_block(&title)
    };

    let inner = block.inner(area);
    // Header row eats one line of the drawable body.
    let max_rows = inner.height.saturating_sub(1) as usize;
    app.ensure_visible(max_rows);

    let start = app.scroll.min(visible_count);
    let end = (start + max_rows).min(visible_count);
    let records = app.visible_processes();
    let table_rows = records[start..end]
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.pid.to_string()),
                Cell::from(record.name.clone()),
                Cell::from(format!("{:>5.1}", record.cpu))
                    .style(usage_style(is_high_cpu(record.cpu))),
                Cell::from(format!("{:>5.1}", record.memory))
                    .style(usage_style(is_high_memory(record.memory))),
                Cell::from(record.status.clone()),
            ])
        })
        .collect::<Vec<_>>();

    let header = Row::new(vec![
        header_cell(app, SortKey::Pid, "PID"),
        header_cell(app, SortKey::Name, "NAME"),
        header_cell(app, SortKey::Cpu, "CPU%"),
        header_cell(app, SortKey::Memory, "MEM%"),
        header_cell(app, SortKey::Status, "STAT"),
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
    if let Some(selected) = app.table_state.selected()
        && selected >= start
        && selected < end
    {
        state.select(Some(selected - start));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn header_cell(app: &App, key: SortKey, label: &str) -> Cell<'static> {
    let active = app.sort_key == key;
    let indicator = if active {
        match app.sort_dir {
            SortDir::Asc => "^",
            SortDir::Desc => "v",
        }
    } else {
        " "
    };

    let style = if active {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(COLOR_MUTED)
            .add_modifier(Modifier::BOLD)
    };

    Cell::from(format!("{label}{indicator}")).style(style)
}
