//! Schedule screen: day tabs, per-day session list, search.

use std::collections::BTreeSet;

use chrono::{NaiveDate, TimeZone};

use super::filter::SearchQuery;
use super::format::{format_day_label, format_time_label};
use crate::models::{ConferenceData, Session};

/// One entry of the day selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTab {
    pub date: NaiveDate,
    pub label: String,
}

/// A session card in the schedule list.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow<'a> {
    pub session: &'a Session,
    /// Resolvable speaker names joined with `", "`
    pub speaker_names: String,
    /// Whether the first listed speaker has a profile picture
    pub has_avatar: bool,
    pub start_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleView<'a> {
    pub days: Vec<DayTab>,
    /// Index into `days` actually applied
    pub selected_day: usize,
    /// Sessions after day and query filtering, in source order
    pub rows: Vec<ScheduleRow<'a>>,
}

impl ScheduleView<'_> {
    /// The day selector is pointless with a single day.
    pub fn show_day_selector(&self) -> bool {
        self.days.len() > 1
    }

    pub fn count_label(&self) -> String {
        format!("{} sessions", self.rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Distinct calendar days (in `tz`) on which sessions start, ascending.
pub fn conference_days<Tz: TimeZone>(sessions: &[Session], tz: &Tz) -> Vec<NaiveDate> {
    sessions
        .iter()
        .map(|s| s.starts_at.local_date(tz))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whether `session` matches the query on title, any resolvable speaker
/// name, or its own description.
pub fn session_matches(session: &Session, data: &ConferenceData, query: &SearchQuery) -> bool {
    query.is_empty()
        || query.matches(&session.title)
        || data
            .speakers_of(session)
            .any(|speaker| query.matches(&speaker.full_name))
        || query.matches_opt(session.description.as_deref())
}

/// Build the schedule screen.
///
/// An out-of-range `selected_day` falls back to the first day. With no
/// sessions there are no days and the list is empty.
pub fn build_schedule<'a, Tz: TimeZone>(
    data: &'a ConferenceData,
    raw_query: &str,
    selected_day: usize,
    tz: &Tz,
) -> ScheduleView<'a> {
    let dates = conference_days(&data.sessions, tz);
    let selected_day = if selected_day < dates.len() { selected_day } else { 0 };
    let day = dates.get(selected_day).copied();
    let query = SearchQuery::new(raw_query);

    let rows = data
        .sessions
        .iter()
        .filter(|s| day.map_or(true, |d| s.starts_at.local_date(tz) == d))
        .filter(|s| session_matches(s, data, &query))
        .map(|session| schedule_row(session, data, tz))
        .collect();

    let days = dates
        .into_iter()
        .map(|date| DayTab {
            date,
            label: format_day_label(date),
        })
        .collect();

    ScheduleView {
        days,
        selected_day,
        rows,
    }
}

fn schedule_row<'a, Tz: TimeZone>(
    session: &'a Session,
    data: &'a ConferenceData,
    tz: &Tz,
) -> ScheduleRow<'a> {
    let speaker_names = data
        .speakers_of(session)
        .map(|s| s.full_name.as_str())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let has_avatar = session
        .speakers
        .first()
        .and_then(|id| data.speaker(id))
        .and_then(|s| s.profile_picture())
        .is_some();

    ScheduleRow {
        session,
        speaker_names,
        has_avatar,
        start_label: format_time_label(&session.starts_at, tz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn data() -> ConferenceData {
        serde_json::from_str(
            r#"{
            "sessions": [
                {"id": "a", "title": "Day Two Talk", "startsAt": "2025-10-08T10:00:00", "endsAt": "2025-10-08T10:30:00", "speakers": ["p1"]},
                {"id": "b", "title": "Opening", "description": "Welcome everyone", "startsAt": "2025-10-07T09:00:00", "endsAt": "2025-10-07T09:30:00", "speakers": ["p2", "ghost"]},
                {"id": "c", "title": "Lunch", "startsAt": "2025-10-07T12:00:00", "endsAt": "2025-10-07T13:00:00"}
            ],
            "speakers": [
                {"id": "p1", "fullName": "Ada Lovelace", "profilePicture": "https://img/ada.png"},
                {"id": "p2", "fullName": "Grace Hopper"}
            ]
        }"#,
        )
        .unwrap()
    }

    fn ids(view: &ScheduleView) -> Vec<String> {
        view.rows.iter().map(|r| r.session.id.clone()).collect()
    }

    #[test]
    fn test_days_sorted_and_deduplicated() {
        let data = data();
        let days = conference_days(&data.sessions, &Utc);
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2025, 10, 7).unwrap(),
                NaiveDate::from_ymd_opt(2025, 10, 8).unwrap()
            ]
        );
    }

    #[test]
    fn test_days_empty_without_sessions() {
        let data = ConferenceData::default();
        assert!(conference_days(&data.sessions, &Utc).is_empty());
        let view = build_schedule(&data, "", 0, &Utc);
        assert!(view.is_empty());
        assert!(!view.show_day_selector());
        assert_eq!(view.count_label(), "0 sessions");
    }

    #[test]
    fn test_select_day_keeps_source_order() {
        let data = data();
        let view = build_schedule(&data, "", 0, &Utc);
        assert_eq!(ids(&view), vec!["b", "c"]);
        assert_eq!(view.days[0].label, "Tue, Oct 7");
        assert!(view.show_day_selector());

        let view = build_schedule(&data, "", 1, &Utc);
        assert_eq!(ids(&view), vec!["a"]);
    }

    #[test]
    fn test_out_of_range_day_falls_back_to_first() {
        let data = data();
        let view = build_schedule(&data, "", 9, &Utc);
        assert_eq!(view.selected_day, 0);
        assert_eq!(ids(&view), vec!["b", "c"]);
    }

    #[test]
    fn test_query_matches_title_speaker_and_description() {
        let data = data();
        assert_eq!(ids(&build_schedule(&data, "LUNCH", 0, &Utc)), vec!["c"]);
        assert_eq!(ids(&build_schedule(&data, "hopper", 0, &Utc)), vec!["b"]);
        assert_eq!(ids(&build_schedule(&data, "welcome", 0, &Utc)), vec!["b"]);
        assert!(build_schedule(&data, "ghost", 0, &Utc).is_empty());
    }

    #[test]
    fn test_query_applies_within_selected_day() {
        let data = data();
        assert!(build_schedule(&data, "ada", 0, &Utc).is_empty());
        assert_eq!(ids(&build_schedule(&data, "ada", 1, &Utc)), vec!["a"]);
    }

    #[test]
    fn test_row_details() {
        let data = data();
        let view = build_schedule(&data, "", 0, &Utc);
        assert_eq!(view.rows[0].speaker_names, "Grace Hopper");
        assert!(!view.rows[0].has_avatar);
        assert_eq!(view.rows[0].start_label, "09:00 AM");
        assert_eq!(view.rows[1].speaker_names, "");

        let view = build_schedule(&data, "", 1, &Utc);
        assert!(view.rows[0].has_avatar);
    }

    #[test]
    fn test_zoned_sessions_bucket_by_viewer_day() {
        let data: ConferenceData = serde_json::from_str(
            r#"{"sessions": [
                {"id": "late", "title": "Late", "startsAt": "2025-10-07T23:30:00Z", "endsAt": "2025-10-08T00:30:00Z"},
                {"id": "early", "title": "Early", "startsAt": "2025-10-08T08:00:00Z", "endsAt": "2025-10-08T09:00:00Z"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(conference_days(&data.sessions, &Utc).len(), 2);

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let days = conference_days(&data.sessions, &tokyo);
        assert_eq!(days, vec![NaiveDate::from_ymd_opt(2025, 10, 8).unwrap()]);
        assert_eq!(ids(&build_schedule(&data, "", 0, &tokyo)), vec!["late", "early"]);
    }

    #[test]
    fn test_idempotent() {
        let data = data();
        assert_eq!(
            build_schedule(&data, "o", 0, &Utc),
            build_schedule(&data, "o", 0, &Utc)
        );
    }
}
