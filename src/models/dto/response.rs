use serde::Serialize;

use crate::models::domain::{Personality, Section, SourceRef, Story};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSourceDto {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub published_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerMetadata {
    pub search_time: f64,
    pub result_count: usize,
    pub model: String,
    pub timestamp: String,
    pub personality: Personality,
    /// 1-based source numbers the answer actually cites.
    pub cited_sources: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnswerResponse {
    pub query: String,
    pub answer: String,
    pub sources: Vec<AnswerSourceDto>,
    pub follow_up_questions: Vec<String>,
    pub metadata: AnswerMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: usize,
    pub headline: String,
    pub summary: String,
    pub ai_analysis: Option<String>,
    pub sources: Vec<SourceRef>,
    pub thumbnail: String,
    pub category: String,
    pub time: String,
    pub time_estimated: bool,
    pub source_count: usize,
    pub featured: bool,
}

impl ArticleDto {
    pub fn from_story(id: usize, story: Story) -> Self {
        ArticleDto {
            id,
            source_count: story.sources.len(),
            headline: story.headline,
            summary: story.summary,
            ai_analysis: story.analysis,
            sources: story.sources,
            thumbnail: story.thumbnail,
            category: story.category,
            time: story.time,
            time_estimated: story.time_estimated,
            featured: story.featured,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMetadata {
    pub search_time: f64,
    pub result_count: usize,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsFeedResponse {
    pub section: Section,
    pub articles: Vec<ArticleDto>,
    pub metadata: FeedMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceStatus {
    pub tavily: bool,
    pub gemini: bool,
}

impl ServiceStatus {
    pub fn all_healthy(&self) -> bool {
        self.tavily && self.gemini
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServiceStatus,
    pub timestamp: String,
}
