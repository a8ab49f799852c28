//! Helper functions for UI rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::App;
use crate::search::SearchBar;
use crate::store::LoadState;

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOAD_FAILED: &str = "Could not load the conference schedule";

/// Content width as a fraction of the screen width
const CONTENT_WIDTH_PERCENT: f32 = 0.915;

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = if max_width > 3 { max_width - 3 } else { max_width };

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if max_width > 3 {
        out.push_str("...");
    }
    out
}

/// Horizontally centered content area.
pub fn centered_area(area: Rect) -> Rect {
    let width = (area.width as f32 * CONTENT_WIDTH_PERCENT).round() as u16;
    let left = (area.width - width) / 2;
    Rect::new(area.x + left, area.y, width, area.height)
}

/// Split `height` rows off the top of `area`.
pub fn split_top(area: Rect, height: u16) -> (Rect, Rect) {
    let height = height.min(area.height);
    (
        Rect::new(area.x, area.y, area.width, height),
        Rect::new(area.x, area.y + height, area.width, area.height - height),
    )
}

/// First visible index so that `cursor` stays on screen.
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 || cursor < visible {
        0
    } else {
        cursor + 1 - visible
    }
}

/// Rows `line` occupies once wrapped to `width` columns.
///
/// Estimated from display width; an empty line still takes one row.
pub fn wrapped_height(line: &Line, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows = line.width().div_ceil(width).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Wrapped row geometry of a scrollable detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLayout {
    /// Row on which each selectable item starts
    pub item_rows: Vec<u16>,
    pub content_rows: u16,
    pub viewport_rows: u16,
}

impl DetailLayout {
    /// Measure `lines` in `area`. `items` are the line indices of the
    /// selectable rows.
    pub fn measure(lines: &[Line], items: &[usize], area: Rect) -> Self {
        let mut starts = Vec::with_capacity(lines.len());
        let mut row: u16 = 0;
        for line in lines {
            starts.push(row);
            row = row.saturating_add(wrapped_height(line, area.width));
        }

        Self {
            item_rows: items.iter().filter_map(|&i| starts.get(i).copied()).collect(),
            content_rows: row,
            viewport_rows: area.height,
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    /// Rows moved by one page step.
    pub fn page_rows(&self) -> u16 {
        self.viewport_rows.saturating_sub(1).max(1)
    }

    /// Adjust `scroll` as little as possible so item `index` is visible.
    pub fn reveal(&self, scroll: u16, index: usize) -> u16 {
        let scroll = scroll.min(self.max_scroll());
        let Some(&row) = self.item_rows.get(index) else {
            return scroll;
        };
        if row < scroll {
            row
        } else if self.viewport_rows > 0 && row >= scroll.saturating_add(self.viewport_rows) {
            (row + 1 - self.viewport_rows).min(self.max_scroll())
        } else {
            scroll
        }
    }
}

/// Selection prefix and its style.
pub fn selection_prefix(is_selected: bool) -> Span<'static> {
    if is_selected {
        Span::styled("> ", Style::default().fg(COLOR_ACCENT))
    } else {
        Span::raw("  ")
    }
}

pub fn title_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER)
    }
}

/// Render `left` and right-align `right` on one row.
pub fn render_split_line(frame: &mut Frame, area: Rect, left: Vec<Span>, right: &str) {
    let right_width = right.width() as u16;
    frame.render_widget(Paragraph::new(Line::from(left)), area);
    if right_width > 0 && right_width < area.width {
        frame.render_widget(
            Paragraph::new(Span::styled(right.to_string(), Style::default().fg(COLOR_DIM))),
            Rect::new(area.x + area.width - right_width, area.y, right_width, 1),
        );
    }
}

/// "search: " followed by the query or the placeholder.
pub fn render_search_line(frame: &mut Frame, area: Rect, bar: &SearchBar, count: &str) {
    let mut spans = vec![Span::styled("search: ", Style::default().fg(COLOR_DIM))];

    if bar.text().is_empty() && !bar.is_focused() {
        spans.push(Span::styled(bar.placeholder(), Style::default().fg(COLOR_DIM)));
    } else {
        spans.push(Span::styled(bar.text().to_string(), Style::default().fg(COLOR_ACCENT)));
    }
    if bar.is_focused() {
        spans.push(Span::styled(
            "_",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    render_split_line(frame, area, spans, count);
}

/// Dim lines stacked from the top of `area`.
pub fn render_message(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let lines: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(COLOR_DIM))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the loading or failed state. Returns `false` when data is ready.
pub fn render_load_placeholder(frame: &mut Frame, area: Rect, app: &App, loading: &str) -> bool {
    match &app.load_state {
        LoadState::Ready(_) => false,
        LoadState::Loading => {
            let frame_symbol = SPINNER_FRAMES[(app.tick_count as usize) % SPINNER_FRAMES.len()];
            let text = format!("{} {}", frame_symbol, loading);
            render_message(frame, area, &[text.as_str()]);
            true
        }
        LoadState::Failed(err) => {
            render_failed(frame, area, &err.user_message());
            true
        }
    }
}

pub fn render_failed(frame: &mut Frame, area: Rect, detail: &str) {
    let lines = vec![
        Line::from(Span::styled(LOAD_FAILED, Style::default().fg(COLOR_ERROR))),
        Line::from(Span::styled(detail.to_string(), Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
