//! Speakers tab.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{
    render_load_placeholder, render_message, render_search_line, scroll_offset, selection_prefix,
    split_top, title_style, truncate,
};
use super::theme::COLOR_DIM;
use crate::app::App;
use crate::models::Speaker;

const LINES_PER_ROW: usize = 3;

pub fn render_speakers(frame: &mut Frame, area: Rect, app: &App) {
    if render_load_placeholder(frame, area, app, "Loading speakers...") {
        return;
    }
    let Some(view) = app.speakers_view() else {
        return;
    };

    let (search_area, rest) = split_top(area, 2);
    render_search_line(frame, search_area, &app.search_bar, &view.count_label());

    if view.is_empty() {
        render_message(frame, rest, &["No speakers found"]);
        return;
    }

    let visible = (rest.height as usize) / LINES_PER_ROW;
    let offset = scroll_offset(app.speakers_cursor, visible);
    for (slot, (i, speaker)) in view.speakers.iter().enumerate().skip(offset).take(visible).enumerate() {
        let y = rest.y + (slot * LINES_PER_ROW) as u16;
        render_row(frame, Rect::new(rest.x, y, rest.width, 2), speaker, i == app.speakers_cursor);
    }
}

/// Line 1: > Full Name
/// Line 2:   Tagline
fn render_row(frame: &mut Frame, area: Rect, speaker: &Speaker, is_selected: bool) {
    let content_width = (area.width as usize).saturating_sub(2);

    let name_line = Line::from(vec![
        selection_prefix(is_selected),
        Span::styled(truncate(&speaker.full_name, content_width), title_style(is_selected)),
    ]);
    frame.render_widget(Paragraph::new(name_line), Rect::new(area.x, area.y, area.width, 1));

    if let Some(tag_line) = speaker.tag_line() {
        let tag_line = Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate(tag_line, content_width), Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(tag_line), Rect::new(area.x, area.y + 1, area.width, 1));
    }
}
