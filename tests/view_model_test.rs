//! Derived view properties over the sample conference.

mod common;

use chrono::{NaiveDate, Utc};
use confdeck::store::LoadState;
use confdeck::view_model::{
    build_schedule, conference_days, filter_speakers, session_detail, speaker_detail, DetailState,
    NO_DESCRIPTION,
};

const EVENT: &str = "React Conf 2025";

#[test]
fn test_days_are_distinct_and_ascending() {
    let data = common::sample_data();
    let days = conference_days(&data.sessions, &Utc);
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2025, 10, 7).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 8).unwrap(),
        ]
    );
}

#[test]
fn test_every_row_starts_on_selected_day() {
    let data = common::sample_data();
    for (index, day) in conference_days(&data.sessions, &Utc).iter().enumerate() {
        let view = build_schedule(&data, "", index, &Utc);
        assert!(!view.is_empty());
        assert!(view
            .rows
            .iter()
            .all(|row| row.session.starts_at.local_date(&Utc) == *day));
    }
}

#[test]
fn test_query_results_are_subset_of_unfiltered_day() {
    let data = common::sample_data();
    let all: Vec<_> = build_schedule(&data, "", 0, &Utc)
        .rows
        .iter()
        .map(|r| r.session.id.clone())
        .collect();

    for query in ["e", "KEYNOTE", "hopper", "optimizer", "zzz"] {
        let filtered = build_schedule(&data, query, 0, &Utc);
        assert!(filtered.rows.iter().all(|r| all.contains(&r.session.id)), "query {query}");
    }
}

#[test]
fn test_query_is_case_insensitive_and_covers_fields() {
    let data = common::sample_data();
    let ids = |q: &str| -> Vec<String> {
        build_schedule(&data, q, 0, &Utc)
            .rows
            .iter()
            .map(|r| r.session.id.clone())
            .collect()
    };

    // Title
    assert_eq!(ids("compiler INTERNALS"), vec!["102"]);
    // Speaker name
    assert_eq!(ids("babbage"), vec!["101"]);
    // Description
    assert_eq!(ids("opening keynote"), vec!["101"]);
    // The question-answer fallback is not searched
    assert!(ids("optimizer").is_empty());
}

#[test]
fn test_single_day_hides_selector() {
    let data: confdeck::models::ConferenceData = serde_json::from_str(
        r#"{"sessions": [{"id": "1", "title": "Only", "startsAt": "2025-10-07T09:00:00", "endsAt": "2025-10-07T10:00:00"}]}"#,
    )
    .unwrap();
    let view = build_schedule(&data, "", 0, &Utc);
    assert!(!view.show_day_selector());
    assert_eq!(view.rows.len(), 1);
}

#[test]
fn test_speaker_directory_filters_name_tagline_and_bio() {
    let data = common::sample_data();
    let names = |q: &str| -> Vec<&str> {
        filter_speakers(&data.speakers, q)
            .speakers
            .iter()
            .map(|s| s.full_name.as_str())
            .collect()
    };

    assert_eq!(names("").len(), 4);
    assert_eq!(names("ENGINE"), vec!["Charles Babbage"]);
    assert_eq!(names("compiler"), vec!["Grace Hopper"]);
    assert_eq!(names("turing"), vec!["Alan Turing"]);
    assert!(names("nobody").is_empty());
    assert_eq!(filter_speakers(&data.speakers, "a").count_label(), "4 speakers");
}

#[test]
fn test_session_detail_resolution() {
    let state = common::ready_state();

    let keynote = session_detail(&state, "101", EVENT, &Utc);
    let keynote = keynote.found().unwrap();
    assert_eq!(keynote.duration_minutes, 90);
    assert_eq!(keynote.room_name, "Main Hall");
    assert_eq!(keynote.speakers.len(), 2);

    let compiler = session_detail(&state, "102", EVENT, &Utc);
    assert_eq!(
        compiler.found().unwrap().description,
        "How the optimizer actually works."
    );

    let lunch = session_detail(&state, "103", EVENT, &Utc);
    let lunch = lunch.found().unwrap();
    assert_eq!(lunch.description, NO_DESCRIPTION);
    assert_eq!(lunch.room_name, "");
    assert!(lunch.speakers.is_empty());

    // Unresolvable speaker ids are dropped
    let state_machines = session_detail(&state, "201", EVENT, &Utc);
    assert_eq!(state_machines.found().unwrap().speakers.len(), 1);
}

#[test]
fn test_speaker_detail_resolution() {
    let state = common::ready_state();

    let ada = speaker_detail(&state, "a1", EVENT, &Utc);
    let ada = ada.found().unwrap();
    let ids: Vec<_> = ada.sessions.iter().map(|r| r.session.id.as_str()).collect();
    assert_eq!(ids, vec!["101", "201"]);
    assert_eq!(ada.share_message, "Check out Ada Lovelace at React Conf 2025");

    let turing = speaker_detail(&state, "a4", EVENT, &Utc);
    assert!(turing.found().unwrap().sessions.is_empty());

    assert_eq!(speaker_detail(&state, "nope", EVENT, &Utc), DetailState::NotFound);
    assert_eq!(
        speaker_detail(&LoadState::Loading, "a1", EVENT, &Utc),
        DetailState::Loading
    );
}
