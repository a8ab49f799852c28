use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string, deserialize_nullable_vec, non_empty};

/// A person presenting one or more sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub full_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub links: Vec<SpeakerLink>,
}

impl Speaker {
    pub fn bio(&self) -> Option<&str> {
        non_empty(self.bio.as_deref())
    }

    pub fn tag_line(&self) -> Option<&str> {
        non_empty(self.tag_line.as_deref())
    }

    pub fn profile_picture(&self) -> Option<&str> {
        non_empty(self.profile_picture.as_deref())
    }
}

/// A speaker's external link (blog, social profile, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerLink {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub link_type: String,
}
