//! Common fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//!
//! let data = common::sample_data();
//! let (app, share, launcher) = common::ready_app();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use confdeck::adapters::mock::{RecordingLauncher, RecordingShare};
use confdeck::app::{App, AppMessage};
use confdeck::config::AppConfig;
use confdeck::models::ConferenceData;
use confdeck::store::LoadState;

/// Two conference days, three rooms, four speakers (one unreferenced).
///
/// Timestamps are floating, so day grouping does not depend on the
/// machine's time zone.
pub const SAMPLE_JSON: &str = r#"{
    "sessions": [
        {
            "id": "101",
            "title": "Keynote: The Future of Rendering",
            "description": "Opening keynote for day one.",
            "startsAt": "2025-10-07T09:00:00",
            "endsAt": "2025-10-07T10:30:00",
            "roomId": 1,
            "speakers": ["a1", "a2"],
            "status": "Accepted"
        },
        {
            "id": 102,
            "title": "Compiler Internals",
            "description": null,
            "startsAt": "2025-10-07T11:00:00",
            "endsAt": "2025-10-07T11:45:00",
            "roomId": 2,
            "speakers": ["a3"],
            "questionAnswers": [{"questionId": 99885, "answerValue": "How the optimizer actually works."}]
        },
        {
            "id": "103",
            "title": "Lunch",
            "description": "",
            "startsAt": "2025-10-07T12:00:00",
            "endsAt": "2025-10-07T13:00:00",
            "roomId": 99,
            "speakers": []
        },
        {
            "id": "201",
            "title": "State Machines in Practice",
            "startsAt": "2025-10-08T09:30:00",
            "endsAt": "2025-10-08T10:00:00",
            "roomId": 3,
            "speakers": ["a1", "ghost"]
        }
    ],
    "speakers": [
        {"id": "a1", "fullName": "Ada Lovelace", "tagLine": "Analyst", "bio": "Wrote the first program.", "profilePicture": "https://img.example/ada.png",
         "links": [{"title": "Blog", "url": "https://ada.example", "linkType": "Blog"}]},
        {"id": "a2", "fullName": "Charles Babbage", "tagLine": "Engine designer"},
        {"id": "a3", "fullName": "Grace Hopper", "bio": "Built the first compiler."},
        {"id": "a4", "fullName": "Alan Turing"}
    ],
    "rooms": [
        {"id": 1, "name": "Main Hall"},
        {"id": 2, "name": "Room B"},
        {"id": 3, "name": "Workshop"}
    ]
}"#;

pub fn sample_data() -> ConferenceData {
    serde_json::from_str(SAMPLE_JSON).expect("sample fixture parses")
}

pub fn ready_state() -> LoadState {
    LoadState::Ready(Arc::new(sample_data()))
}

/// App with recording surfaces and the sample data already delivered.
pub fn ready_app() -> (App, RecordingShare, RecordingLauncher) {
    let share = RecordingShare::new();
    let launcher = RecordingLauncher::new();
    let mut app = App::with_surfaces(
        AppConfig::default(),
        Box::new(share.clone()),
        Box::new(launcher.clone()),
    );
    app.handle_message(AppMessage::LoadStateChanged(ready_state()));
    (app, share, launcher)
}

/// App that has not received any data yet.
pub fn loading_app() -> App {
    App::with_surfaces(
        AppConfig::default(),
        Box::new(RecordingShare::new()),
        Box::new(RecordingLauncher::new()),
    )
}
