use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::theme::COLOR_MUTED;
use super::{panel_block, panel_block_focused};
use crate::app::App;
use crate::utils::{fit_text, text_width};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = if app.search_active {
        panel_block_focused("Search")
    } else {
        panel_block("Search")
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let value_style = if app.search_active || !app.search_query.is_empty() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_MUTED)
    };

    let value = if app.search_active {
        format!("{}|", app.search_query)
    } else if app.search_query.is_empty() {
        "press / to filter by name or pid".to_string()
    } else {
        app.search_query.clone()
    };

    let prefix = "filter: ";
    let max_width = inner.width as usize;
    let prefix_width = text_width(prefix);
    let value = if prefix_width < max_width {
        fit_text(&value, max_width - prefix_width)
    } else {
        String::new()
    };

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(COLOR_MUTED)),
        Span::styled(value, value_style),
    ]);
    frame.render_widget(Paragraph::new(vec![line]), inner);
}
