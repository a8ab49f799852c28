//! UI rendering.
//!
//! Every frame is drawn from [`App`] alone:
//!
//! ```text
//! 1 Schedule   2 Speakers   3 Videos            React Conf 2025
//!
//! <active screen>
//!
//! <status / key hints>
//! ```

mod helpers;
mod schedule;
mod session_detail;
mod speaker_detail;
mod speakers;
mod tab_bar;
pub mod theme;
mod videos;

pub use helpers::{truncate, DetailLayout, LOAD_FAILED};
pub use tab_bar::footer_text;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, Route, Tab};

/// Tab bar, screen body and footer areas.
fn screen_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Tabs
        Constraint::Length(1), // Spacing
        Constraint::Min(3),    // Screen
        Constraint::Length(1), // Footer
    ])
    .split(area);

    (
        helpers::centered_area(chunks[0]),
        helpers::centered_area(chunks[2]),
        helpers::centered_area(chunks[3]),
    )
}

pub fn render(frame: &mut Frame, app: &App) {
    let (tabs, body, footer) = screen_areas(frame.area());

    tab_bar::render_tab_bar(frame, tabs, app);

    match app.navigator.current() {
        Some(Route::Session(id)) => session_detail::render_session_detail(frame, body, app, id),
        Some(Route::Speaker(id)) => speaker_detail::render_speaker_detail(frame, body, app, id),
        None => match app.active_tab() {
            Tab::Schedule => schedule::render_schedule(frame, body, app),
            Tab::Speakers => speakers::render_speakers(frame, body, app),
            Tab::Videos => videos::render_videos(frame, body, app),
        },
    }

    tab_bar::render_footer(frame, footer, app);
}

/// Geometry of the current detail screen at the app's terminal size.
///
/// `None` on list screens and for details that did not resolve.
pub fn detail_layout(app: &App) -> Option<DetailLayout> {
    let (_, body, _) = screen_areas(Rect::new(0, 0, app.terminal_width, app.terminal_height));
    match app.navigator.current()? {
        Route::Session(id) => session_detail::measure(app, id, body),
        Route::Speaker(id) => speaker_detail::measure(app, id, body),
    }
}
