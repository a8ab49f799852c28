//! Tab bar and footer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::render_split_line;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM};
use crate::app::{App, Tab};

/// `1 Schedule  2 Speakers  3 Videos`, event name on the right.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for tab in Tab::ALL {
        let is_active = tab == app.active_tab();
        let style = if is_active {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("{} ", tab.index() + 1), Style::default().fg(COLOR_BORDER)));
        spans.push(Span::styled(tab.title(), style));
        spans.push(Span::raw("   "));
    }

    render_split_line(frame, area, spans, &app.config.event_name);
}

/// Key hints for the current screen, or the status message if one is set.
pub fn footer_text(app: &App) -> &str {
    if let Some(status) = &app.status {
        return status;
    }
    if app.search_bar.is_focused() {
        return "enter done  esc clear";
    }
    if app.navigator.current().is_some() {
        return "esc back  ↑↓ move  pgup/pgdn scroll  enter open  s share  q quit";
    }
    match app.active_tab() {
        Tab::Schedule => "/ search  ←→ day  ↑↓ move  enter open  q quit",
        Tab::Speakers => "/ search  ↑↓ move  enter open  q quit",
        Tab::Videos => "↑↓ move  enter play  o sort  q quit",
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(Span::styled(footer_text(app).to_string(), Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
