//! Speaker directory.

use super::filter::SearchQuery;
use crate::models::Speaker;

#[derive(Debug, Clone, PartialEq)]
pub struct SpeakersView<'a> {
    pub speakers: Vec<&'a Speaker>,
}

impl SpeakersView<'_> {
    pub fn count_label(&self) -> String {
        format!("{} speakers", self.speakers.len())
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }
}

pub fn speaker_matches(speaker: &Speaker, query: &SearchQuery) -> bool {
    query.is_empty()
        || query.matches(&speaker.full_name)
        || query.matches_opt(speaker.tag_line.as_deref())
        || query.matches_opt(speaker.bio.as_deref())
}

/// Speakers matching the query on name, tagline or bio, in source order.
pub fn filter_speakers<'a>(speakers: &'a [Speaker], raw_query: &str) -> SpeakersView<'a> {
    let query = SearchQuery::new(raw_query);
    SpeakersView {
        speakers: speakers
            .iter()
            .filter(|s| speaker_matches(s, &query))
            .collect(),
    }
}
