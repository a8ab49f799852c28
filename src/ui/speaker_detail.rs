//! Speaker detail screen.

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
use super::theme::{COLOR_DIM, COLOR_HEADER, COLOR_SPEAKER};
use crate::app::App;
use crate::view_model::{DetailState, SpeakerDetail};

pub fn render_speaker_detail(frame: &mut Frame, area: Rect, app: &App, id: &str) {
    match app.speaker_detail(id) {
        DetailState::Loading => render_message(frame, area, &["Loading..."]),
        DetailState::Unavailable => {
            let detail = app
                .load_state
                .error()
                .map_or_else(|| LOAD_FAILED.to_string(), |e| e.user_message());
            render_failed(frame, area, &detail);
        }
        DetailState::NotFound => render_message(frame, area, &["Speaker not found"]),
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
    match app.speaker_detail(id) {
        DetailState::Found(detail) => {
            let (lines, items) = detail_lines(&detail, app.navigator.cursor());
            Some(DetailLayout::measure(&lines, &items, area))
        }
        _ => None,
    }
}

/// Selectable rows are the sessions followed by the links, matching
/// [`App::detail_links`].
fn detail_lines<'a>(detail: &SpeakerDetail<'a>, cursor: usize) -> (Vec<Line<'a>>, Vec<usize>) {
    let dim = Style::default().fg(COLOR_DIM);
    let speaker = detail.speaker;

    let mut lines = vec![Line::from(Span::styled(
        speaker.full_name.as_str(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ))];
    if let Some(tag_line) = speaker.tag_line() {
        lines.push(Line::from(Span::styled(tag_line, Style::default().fg(COLOR_SPEAKER))));
    }
    lines.push(Line::default());

    if let Some(bio) = speaker.bio() {
        lines.extend(bio.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Sessions", dim)));
    if detail.sessions.is_empty() {
        lines.push(Line::from(Span::styled("  No sessions", dim)));
    }
    let mut items = Vec::new();
    for (i, row) in detail.sessions.iter().enumerate() {
        items.push(lines.len());
        lines.push(Line::from(vec![
            selection_prefix(i == cursor),
            Span::styled(row.session.title.as_str(), title_style(i == cursor)),
            Span::styled(format!("  {}", row.start_label), dim),
        ]));
    }

    let links: Vec<_> = speaker.links.iter().filter(|l| !l.url.is_empty()).collect();
    if !links.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Links", dim)));
        for (j, link) in links.into_iter().enumerate() {
            let selected = detail.sessions.len() + j == cursor;
            items.push(lines.len());
            lines.push(Line::from(vec![
                selection_prefix(selected),
                Span::styled(link.title.as_str(), title_style(selected)),
                Span::styled(format!("  {}", link.url), dim),
            ]));
        }
    }

    (lines, items)
}
