use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string, deserialize_nullable_vec, Timestamp};

/// A scheduled talk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub starts_at: Timestamp,
    /// Assumed to be at or after `starts_at`; not checked.
    pub ends_at: Timestamp,
    #[serde(default)]
    pub room_id: Option<i64>,
    /// Speaker ids in display order
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub speakers: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub question_answers: Vec<QuestionAnswer>,
}

impl Session {
    /// Answer recorded for a submission question, if any.
    pub fn answer(&self, question_id: i64) -> Option<&str> {
        self.question_answers
            .iter()
            .find(|qa| qa.question_id == question_id)
            .and_then(|qa| qa.answer_value.as_deref())
    }

    pub fn has_speaker(&self, speaker_id: &str) -> bool {
        self.speakers.iter().any(|id| id == speaker_id)
    }
}

/// Free-form answer to a call-for-papers question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub question_id: i64,
    #[serde(default)]
    pub answer_value: Option<String>,
}

/// A venue location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}
