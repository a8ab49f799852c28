//! Session detail screen.

use chrono::TimeZone;

use super::format::format_start_label;
use super::{resolve_detail, DetailState};
use crate::models::{non_empty, ConferenceData, Session, Speaker};
use crate::store::LoadState;

/// Submission question whose answer stands in for a missing description.
pub const DESCRIPTION_QUESTION_ID: i64 = 99885;

pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, PartialEq)]
pub struct SessionDetail<'a> {
    pub session: &'a Session,
    /// Resolvable speakers in listed order
    pub speakers: Vec<&'a Speaker>,
    /// Empty when the room does not resolve
    pub room_name: &'a str,
    pub duration_minutes: i64,
    pub description: &'a str,
    pub start_label: String,
    pub share_message: String,
}

/// Description, else the answer to [`DESCRIPTION_QUESTION_ID`], else
/// [`NO_DESCRIPTION`]. Empty strings count as missing.
pub fn resolve_description(session: &Session) -> &str {
    non_empty(session.description.as_deref())
        .or_else(|| non_empty(session.answer(DESCRIPTION_QUESTION_ID)))
        .unwrap_or(NO_DESCRIPTION)
}

/// Whole minutes between start and end, rounding halves up.
pub fn duration_minutes<Tz: TimeZone>(session: &Session, tz: &Tz) -> i64 {
    let millis = session.starts_at.millis_until(&session.ends_at, tz);
    (millis as f64 / 60_000.0 + 0.5).floor() as i64
}

pub fn session_share_message(session: &Session, event_name: &str) -> String {
    format!("Check out \"{}\" at {}", session.title, event_name)
}

/// Resolve the session detail route `id`.
pub fn session_detail<'a, Tz: TimeZone>(
    state: &'a LoadState,
    id: &str,
    event_name: &str,
    tz: &Tz,
) -> DetailState<SessionDetail<'a>> {
    resolve_detail(state, |data| build(data, id, event_name, tz))
}

fn build<'a, Tz: TimeZone>(
    data: &'a ConferenceData,
    id: &str,
    event_name: &str,
    tz: &Tz,
) -> Option<SessionDetail<'a>> {
    let session = data.session(id)?;
    Some(SessionDetail {
        session,
        speakers: data.speakers_of(session).collect(),
        room_name: data.room_name(session),
        duration_minutes: duration_minutes(session, tz),
        description: resolve_description(session),
        start_label: format_start_label(&session.starts_at, tz),
        share_message: session_share_message(session, event_name),
    })
}
