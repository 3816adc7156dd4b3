use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::theme::{COLOR_ACCENT, COLOR_HOT, COLOR_MUTED};
use super::widgets::centered_rect;
use crate::app::App;
use crate::utils::fit_text;

/// Modal yes/no gate in front of the terminate request. Names the target
/// by name and PID; declining closes the dialog with no request sent.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(confirm) = app.confirm.as_ref() else {
        return;
    };

    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let title_style = Style::default().fg(COLOR_HOT).add_modifier(Modifier::BOLD);
    let label_style = Style::default()
        .fg(COLOR_MUTED)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);

    let lines = vec![
        Line::from(Span::styled("Terminate process?", title_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("PID ", label_style),
            Span::styled(confirm.pid.to_string(), value_style),
            Span::raw("  "),
            Span::styled("CPU ", label_style),
            Span::styled(format!("{:>5.1}%", confirm.cpu), value_style),
        ]),
        Line::from(vec![
            Span::styled("Name ", label_style),
            Span::styled(fit_text(&confirm.name, 40), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" terminate  ", label_style),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" cancel", label_style),
        ]),
    ];

    let block = Block::default()
        .title("Confirm")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_HOT))
        .title_style(title_style);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
