//! Schedule tab: search, day selector and session cards.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{
    render_load_placeholder, render_message, render_search_line, scroll_offset, selection_prefix,
    split_top, title_style, truncate,
};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SPEAKER};
use crate::app::App;
use crate::view_model::{DayTab, ScheduleRow};

/// Lines per card (title + speakers + spacing)
const LINES_PER_ROW: usize = 3;

pub fn render_schedule(frame: &mut Frame, area: Rect, app: &App) {
    if render_load_placeholder(frame, area, app, "Loading sessions...") {
        return;
    }
    let (Some(view), Some(data)) = (app.schedule_view(), app.load_state.data()) else {
        return;
    };

    let (search_area, rest) = split_top(area, 2);
    render_search_line(frame, search_area, &app.search_bar, &view.count_label());

    let rest = if view.show_day_selector() {
        let (days_area, rest) = split_top(rest, 2);
        render_day_selector(frame, days_area, &view.days, view.selected_day);
        rest
    } else {
        rest
    };

    if view.is_empty() {
        render_message(frame, rest, &["No sessions found", "Try adjusting your search"]);
        return;
    }

    let visible = (rest.height as usize) / LINES_PER_ROW;
    let offset = scroll_offset(app.schedule_cursor, visible);
    for (slot, (i, row)) in view.rows.iter().enumerate().skip(offset).take(visible).enumerate() {
        let y = rest.y + (slot * LINES_PER_ROW) as u16;
        let room = data.room_name(row.session);
        render_row(frame, Rect::new(rest.x, y, rest.width, 2), row, room, i == app.schedule_cursor);
    }
}

fn render_day_selector(frame: &mut Frame, area: Rect, days: &[DayTab], selected: usize) {
    let mut spans = Vec::new();
    for (i, day) in days.iter().enumerate() {
        if i == selected {
            spans.push(Span::styled(
                format!("[{}]", day.label),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {} ", day.label), Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(area.x, area.y, area.width, 1));
}

/// Line 1: > 09:00 AM  Title
/// Line 2:   ● Speaker, Speaker · Room
fn render_row(frame: &mut Frame, area: Rect, row: &ScheduleRow, room: &str, is_selected: bool) {
    let content_width = (area.width as usize).saturating_sub(2);
    let time = format!("{}  ", row.start_label);
    let title = truncate(&row.session.title, content_width.saturating_sub(time.width()));

    let title_line = Line::from(vec![
        selection_prefix(is_selected),
        Span::styled(time, Style::default().fg(COLOR_DIM)),
        Span::styled(title, title_style(is_selected)),
    ]);
    frame.render_widget(Paragraph::new(title_line), Rect::new(area.x, area.y, area.width, 1));

    let mut detail = String::new();
    if row.has_avatar {
        detail.push_str("● ");
    }
    detail.push_str(&row.speaker_names);
    if !room.is_empty() {
        if !row.speaker_names.is_empty() {
            detail.push_str(" · ");
        }
        detail.push_str(room);
    }

    let detail_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(truncate(&detail, content_width), Style::default().fg(COLOR_SPEAKER)),
    ]);
    frame.render_widget(Paragraph::new(detail_line), Rect::new(area.x, area.y + 1, area.width, 1));
}
