//! Pure projections from the conference snapshot to screen data.
//!
//! Every function here takes the inputs it depends on (snapshot, query
//! text, selection, viewer time zone) and returns a fresh value; calling it
//! twice with the same inputs yields equal results. Nothing is cached.

mod filter;
mod format;
pub mod schedule;
pub mod session_detail;
pub mod speaker_detail;
pub mod speakers;

pub use filter::SearchQuery;
pub use format::{format_day_label, format_start_label, format_time_label};
pub use schedule::{build_schedule, conference_days, DayTab, ScheduleRow, ScheduleView};
pub use session_detail::{
    duration_minutes, resolve_description, session_detail, SessionDetail,
    DESCRIPTION_QUESTION_ID, NO_DESCRIPTION,
};
pub use speaker_detail::{speaker_detail, SpeakerDetail, SpeakerSessionRow};
pub use speakers::{filter_speakers, SpeakersView};

use crate::models::ConferenceData;
use crate::store::LoadState;

/// Outcome of resolving a detail route against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    /// Snapshot not fetched yet
    Loading,
    /// Fetch failed, so nothing can be resolved
    Unavailable,
    /// Snapshot present but the id is unknown
    NotFound,
    Found(T),
}

impl<T> DetailState<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            DetailState::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Run `resolve` against the snapshot held by `state`.
pub(crate) fn resolve_detail<'a, T>(
    state: &'a LoadState,
    resolve: impl FnOnce(&'a ConferenceData) -> Option<T>,
) -> DetailState<T> {
    match state {
        LoadState::Loading => DetailState::Loading,
        LoadState::Failed(_) => DetailState::Unavailable,
        LoadState::Ready(data) => match resolve(data) {
            Some(value) => DetailState::Found(value),
            None => DetailState::NotFound,
        },
    }
}
