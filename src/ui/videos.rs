//! Videos tab.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{
    render_split_line, scroll_offset, selection_prefix, split_top, title_style, truncate,
};
use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::models::Video;

const LINES_PER_ROW: usize = 3;

pub fn render_videos(frame: &mut Frame, area: Rect, app: &App) {
    let (header_area, rest) = split_top(area, 2);
    render_split_line(
        frame,
        Rect::new(header_area.x, header_area.y, header_area.width, 1),
        vec![Span::styled("Featured Videos", Style::default().fg(COLOR_HEADER))],
        &format!("sort: {}", app.video_sort.label()),
    );

    let videos = app.videos();
    let visible = (rest.height as usize) / LINES_PER_ROW;
    let offset = scroll_offset(app.video_cursor, visible);
    for (slot, (i, video)) in videos.iter().enumerate().skip(offset).take(visible).enumerate() {
        let y = rest.y + (slot * LINES_PER_ROW) as u16;
        let is_playing = app.active_video == Some(video.id);
        render_row(frame, Rect::new(rest.x, y, rest.width, 2), video, i == app.video_cursor, is_playing);
    }
}

/// Line 1: > ▶ Title                     32:15
/// Line 2:   Speaker · playing
fn render_row(frame: &mut Frame, area: Rect, video: &Video, is_selected: bool, is_playing: bool) {
    let content_width = (area.width as usize).saturating_sub(2);
    let marker = if is_playing { "▶ " } else { "" };
    let title_max = content_width.saturating_sub(video.duration.width() + marker.width() + 2);
    let title = truncate(video.title, title_max);

    let padding = content_width.saturating_sub(marker.width() + title.width() + video.duration.width());
    let title_line = Line::from(vec![
        selection_prefix(is_selected),
        Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
        Span::styled(title, title_style(is_selected)),
        Span::raw(" ".repeat(padding)),
        Span::styled(video.duration, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(title_line), Rect::new(area.x, area.y, area.width, 1));

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(video.speaker, Style::default().fg(COLOR_DIM)),
    ];
    if is_playing {
        spans.push(Span::styled(" · playing", Style::default().fg(COLOR_ACTIVE)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(area.x, area.y + 1, area.width, 1));
}
