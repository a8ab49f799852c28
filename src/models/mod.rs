//! Conference data model.
//!
//! These types mirror the JSON document served by the schedule endpoint
//! (top-level `sessions`, `speakers` and `rooms` arrays). Deserialization is
//! the validation boundary: nullable strings and arrays are default-filled
//! here so view code never has to guess, while unparseable timestamps reject
//! the whole document.

mod session;
mod speaker;
mod timestamp;
pub mod video;

pub use session::{QuestionAnswer, Room, Session};
pub use speaker::{Speaker, SpeakerLink};
pub use timestamp::Timestamp;
pub use video::{sorted_videos, Video, VideoSort, FEATURED_VIDEOS};

use serde::{Deserialize, Deserializer, Serialize};

/// The fetched conference snapshot.
///
/// Created once per app session and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConferenceData {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub sessions: Vec<Session>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub speakers: Vec<Speaker>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub rooms: Vec<Room>,
}

impl ConferenceData {
    /// Look up a session by id.
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Look up a speaker by id.
    pub fn speaker(&self, id: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.id == id)
    }

    /// Look up a room by id.
    pub fn room(&self, id: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Resolve the speakers of a session in listed order, dropping ids that
    /// do not match any speaker.
    pub fn speakers_of<'a>(&'a self, session: &'a Session) -> impl Iterator<Item = &'a Speaker> + 'a {
        session.speakers.iter().filter_map(move |id| self.speaker(id))
    }

    /// Name of the session's room, or `""` when it does not resolve.
    pub fn room_name(&self, session: &Session) -> &str {
        session
            .room_id
            .and_then(|id| self.room(id))
            .map(|room| room.name.as_str())
            .unwrap_or("")
    }
}

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer id")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Same as [`deserialize_nullable_string`] for arrays.
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Treat `Some("")` the same as `None`.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
