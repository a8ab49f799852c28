//! Speaker detail screen.

use chrono::TimeZone;

use super::format::format_start_label;
use super::{resolve_detail, DetailState};
use crate::models::{ConferenceData, Session, Speaker};
use crate::store::LoadState;

#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerSessionRow<'a> {
    pub session: &'a Session,
    pub start_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerDetail<'a> {
    pub speaker: &'a Speaker,
    /// Sessions listing this speaker, in source order
    pub sessions: Vec<SpeakerSessionRow<'a>>,
    pub share_message: String,
}

pub fn speaker_share_message(speaker: &Speaker, event_name: &str) -> String {
    format!("Check out {} at {}", speaker.full_name, event_name)
}

/// Sessions whose speaker list contains `speaker_id`.
pub fn sessions_for_speaker<'a>(
    data: &'a ConferenceData,
    speaker_id: &'a str,
) -> impl Iterator<Item = &'a Session> + 'a {
    data.sessions.iter().filter(move |s| s.has_speaker(speaker_id))
}

/// Resolve the speaker detail route `id`.
pub fn speaker_detail<'a, Tz: TimeZone>(
    state: &'a LoadState,
    id: &str,
    event_name: &str,
    tz: &Tz,
) -> DetailState<SpeakerDetail<'a>> {
    resolve_detail(state, |data| {
        let speaker = data.speaker(id)?;
        let sessions = sessions_for_speaker(data, &speaker.id)
            .map(|session| SpeakerSessionRow {
                session,
                start_label: format_start_label(&session.starts_at, tz),
            })
            .collect();
        Some(SpeakerDetail {
            speaker,
            sessions,
            share_message: speaker_share_message(speaker, event_name),
        })
    })
}
