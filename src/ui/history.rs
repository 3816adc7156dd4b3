use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row, Table};

use super::panel_block;
use super::theme::{COLOR_MUTED, usage_style};
use crate::app::App;
use crate::data::HistoryRecord;
use crate::utils::fit_text;

const NAME_WIDTH: usize = 18;

const COLUMNS: [Constraint; 3] = [
    Constraint::Length(NAME_WIDTH as u16),
    Constraint::Length(7),
    Constraint::Min(19),
];

/// Termination/flag history, most recent first. The agent sends entries
/// oldest-first; display reverses without touching the stored snapshot.
/// CPU cells are always flagged, same as the threats table.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut title = format!("History ({})", app.history.len());
    if app.is_stale(app.history_fetched_at) {
        title.push_str(" (stale)");
    }
    let block = panel_block(&title);

    let inner = block.inner(area);
    let max_rows = inner.height.saturating_sub(1) as usize;

    let table_rows = display_order(&app.history)
        .into_iter()
        .take(max_rows)
        .map(|record| {
            Row::new(vec![
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
        Cell::from("NAME").style(header_style),
        Cell::from("CPU%").style(header_style),
        Cell::from("TIME").style(header_style),
    ]);

    let table = Table::new(table_rows, COLUMNS)
        .header(header)
        .block(block)
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn display_order(records: &[HistoryRecord]) -> Vec<&HistoryRecord> {
    records.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> HistoryRecord {
        HistoryRecord {
            name: name.to_string(),
            cpu: 60.0,
            timestamp: "t".to_string(),
        }
    }

    #[test]
    fn display_order_is_reverse_of_fetch_order() {
        let records = vec![record("oldest"), record("middle"), record("newest")];
        let ordered = display_order(&records);

        assert_eq!(ordered[0].name, "newest");
        assert_eq!(ordered[2].name, "oldest");
        // Source order is untouched.
        assert_eq!(records[0].name, "oldest");
    }

    #[test]
    fn reversing_twice_reproduces_fetch_order() {
        let records = vec![record("a"), record("b"), record("c")];
        let twice: Vec<&HistoryRecord> = display_order(&records).into_iter().rev().collect();
        let names: Vec<&str> = twice.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
