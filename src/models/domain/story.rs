use serde::{Deserialize, Serialize};

use crate::models::domain::RawResult;

/// Most results that contribute to one story.
pub const MAX_STORY_SOURCES: usize = 4;

/// A raw result tagged with its position in the provider's ordering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupedResult<'a> {
    pub index: usize,
    pub result: &'a RawResult,
}

/// Non-empty, ordered cluster of results sharing a keyword theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultGroup<'a> {
    members: Vec<GroupedResult<'a>>,
    is_leftover: bool,
}

impl<'a> ResultGroup<'a> {
    /// Returns `None` for an empty member list.
    pub fn themed(members: Vec<GroupedResult<'a>>) -> Option<Self> {
        (!members.is_empty()).then_some(ResultGroup {
            members,
            is_leftover: false,
        })
    }

    pub fn single(index: usize, result: &'a RawResult) -> Self {
        ResultGroup {
            members: vec![GroupedResult { index, result }],
            is_leftover: true,
        }
    }

    pub fn members(&self) -> &[GroupedResult<'a>] {
        &self.members
    }

    pub fn is_leftover(&self) -> bool {
        self.is_leftover
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn lead(&self) -> &'a RawResult {
        self.members[0].result
    }

    /// Results that feed the story, capped at [`MAX_STORY_SOURCES`].
    pub fn contributors(&self) -> impl Iterator<Item = &'a RawResult> + '_ {
        self.members
            .iter()
            .take(MAX_STORY_SOURCES)
            .map(|member| member.result)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub title: String,
    pub url: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// Text the generative provider writes for a story.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoryCopy {
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub analysis: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub headline: String,
    pub summary: String,
    pub analysis: Option<String>,
    pub sources: Vec<SourceRef>,
    pub thumbnail: String,
    pub category: String,
    pub time: String,
    /// Set when `time` is filler rather than derived from a publish date.
    pub time_estimated: bool,
    pub featured: bool,
}
