mod confirm;
mod footer;
mod header;
mod history;
mod processes;
mod search;
pub mod theme;
mod threats;
mod widgets;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use theme::COLOR_BORDER;

pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    if size.width < 80 || size.height < 24 {
        let msg = Paragraph::new("Terminal too small. Resize to at least 80x24.")
            .block(panel_block("sentop"))
            .alignment(Alignment::Center);
        frame.render_widget(msg, size);
        return;
    }

    let header_height = 4;
    let footer_height = 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(8),
            Constraint::Length(footer_height),
        ])
        .split(size);

    header::render(frame, chunks[0], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(main[0]);
    search::render(frame, left[0], app);
    processes::render(frame, left[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main[1]);
    threats::render(frame, right[0], app);
    history::render(frame, right[1], app);

    footer::render(frame, chunks[2], app);
    confirm::render(frame, app);
}

pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title_style(
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
}

pub fn panel_block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme::COLOR_ACCENT))
        .title_style(
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
}
