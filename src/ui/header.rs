use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::panel_block;
use super::theme::{COLOR_ACCENT, COLOR_MUTED, is_high_stat, usage_style};
use crate::app::App;
use crate::utils::format_percent;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default()
        .fg(COLOR_MUTED)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);

    let first_line = vec![
        Span::styled("sentop", title_style),
        Span::raw("  "),
        Span::styled("remote process monitor", Style::default().fg(COLOR_MUTED)),
        Span::raw("  "),
        Span::styled("agent ", label_style),
        Span::styled(app.base_url(), Style::default().fg(COLOR_ACCENT)),
        Span::raw("  "),
        Span::styled("sort ", label_style),
        Span::styled(
            format!("{} {}", app.sort_key.label(), app.sort_dir.label()),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::raw("  "),
        Span::styled("focus ", label_style),
        Span::styled(app.focus.label(), Style::default().fg(COLOR_ACCENT)),
    ];

    // Counters restyle from the current reading alone each frame; a high
    // flag from the previous snapshot never carries over.
    let second_line = match app.stats.as_ref() {
        Some(stats) => {
            let mut spans = vec![
                Span::styled("CPU", label_style),
                Span::styled(
                    format!(" {}  ", format_percent(stats.cpu_percent)),
                    usage_style(is_high_stat(stats.cpu_percent)),
                ),
                Span::styled("Mem", label_style),
                Span::styled(
                    format!(" {}  ", format_percent(stats.memory_percent)),
                    usage_style(is_high_stat(stats.memory_percent)),
                ),
                Span::styled("Procs", label_style),
                Span::styled(format!(" {}", stats.running_processes), value_style),
            ];
            if let Some(boot_time) = stats.boot_time.as_deref() {
                spans.push(Span::styled("  Boot", label_style));
                spans.push(Span::styled(format!(" {boot_time}"), value_style));
            }
            spans
        }
        None => vec![Span::styled("waiting for agent...", label_style)],
    };

    let mut title = String::from("System");
    if app.is_stale(app.stats_fetched_at) {
        title.push_str(" (stale)");
    }

    let lines = vec![Line::from(first_line), Line::from(second_line)];
    let paragraph = Paragraph::new(lines).block(panel_block(&title));
    frame.render_widget(paragraph, area);
}
