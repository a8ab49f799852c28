//! Session detail screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{
    render_failed, render_message, selection_prefix, title_style, DetailLayout, LOAD_FAILED,
};
use super::theme::{COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::view_model::{DetailState, SessionDetail};

pub fn render_session_detail(frame: &mut Frame, area: Rect, app: &App, id: &str) {
    match app.session_detail(id) {
        DetailState::Loading => render_message(frame, area, &["Loading..."]),
        DetailState::Unavailable => {
            let detail = app
                .load_state
                .error()
                .map_or_else(|| LOAD_FAILED.to_string(), |e| e.user_message());
            render_failed(frame, area, &detail);
        }
        DetailState::NotFound => render_message(frame, area, &["Session not found"]),
        DetailState::Found(detail) => {
            let (lines, items) = detail_lines(&detail, app.navigator.cursor());
            let layout = DetailLayout::measure(&lines, &items, area);
            let scroll = app.navigator.scroll().min(layout.max_scroll());
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                area,
            );
        }
    }
}

pub(super) fn measure(app: &App, id: &str, area: Rect) -> Option<DetailLayout> {
    match app.session_detail(id) {
        DetailState::Found(detail) => {
            let (lines, items) = detail_lines(&detail, app.navigator.cursor());
            Some(DetailLayout::measure(&lines, &items, area))
        }
        _ => None,
    }
}

fn detail_lines<'a>(detail: &SessionDetail<'a>, cursor: usize) -> (Vec<Line<'a>>, Vec<usize>) {
    let dim = Style::default().fg(COLOR_DIM);

    let mut meta = format!("{} · {} min", detail.start_label, detail.duration_minutes);
    if !detail.room_name.is_empty() {
        meta.push_str(" · ");
        meta.push_str(detail.room_name);
    }

    let mut lines = vec![
        Line::from(Span::styled(
            detail.session.title.as_str(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(meta, dim)),
        Line::default(),
    ];

    let mut items = Vec::with_capacity(detail.speakers.len());
    if !detail.speakers.is_empty() {
        lines.push(Line::from(Span::styled("Speakers", dim)));
        for (i, speaker) in detail.speakers.iter().enumerate() {
            items.push(lines.len());
            let mut spans = vec![
                selection_prefix(i == cursor),
                Span::styled(speaker.full_name.as_str(), title_style(i == cursor)),
            ];
            if let Some(tag_line) = speaker.tag_line() {
                spans.push(Span::styled(format!(" · {}", tag_line), dim));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    lines.extend(detail.description.lines().map(|l| Line::from(l.to_string())));
    (lines, items)
}
