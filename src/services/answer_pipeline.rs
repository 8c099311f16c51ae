use std::{collections::BTreeSet, sync::Arc};

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::prompts::{ANSWER_INSTRUCTIONS, DEFAULT_FOLLOW_UP_QUESTIONS, FOLLOW_UP_INSTRUCTIONS},
    errors::{AppError, AppResult},
    models::{
        domain::{Personality, RawResult},
        dto::{
            request::{SearchParams, QUERY_REQUIRED},
            response::{AnswerMetadata, AnswerSourceDto, SearchAnswerResponse},
        },
    },
    services::{model_service::GenerativeProvider, normalizer, search_service::SearchProvider},
};

pub const DEFAULT_MAX_RESULTS: u32 = 6;
pub const FOLLOW_UP_COUNT: usize = 4;
const SNIPPET_CHARS: usize = 200;
const NO_PREVIEW: &str = "No preview available";

static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("CITATION is a valid regex pattern"));

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\d+[.)]|[-*•])\s*").expect("LIST_MARKER is a valid regex pattern")
});

pub fn build_answer_prompt(query: &str, results: &[RawResult], personality: Personality) -> String {
    let sources = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "[{}] {}\nURL: {}\nContent: {}\n",
                i + 1,
                result.title,
                result.url,
                result.content.as_deref().unwrap_or("No content available")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\nQUERY: \"{}\"\n\nSEARCH RESULTS:\n{}\n{}",
        personality.system_prompt(),
        query,
        sources,
        ANSWER_INSTRUCTIONS
    )
}

pub fn build_follow_up_prompt(query: &str, answer: &str) -> String {
    format!(
        "Query: \"{}\"\n\nAnswer given:\n{}\n\n{}",
        query, answer, FOLLOW_UP_INSTRUCTIONS
    )
}

/// Up to four questions from a newline-delimited reply, padded from the
/// defaults when the provider returns fewer.
pub fn parse_follow_ups(text: &str) -> Vec<String> {
    let mut questions: Vec<String> = text
        .lines()
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .take(FOLLOW_UP_COUNT)
        .collect();

    for default in DEFAULT_FOLLOW_UP_QUESTIONS {
        if questions.len() >= FOLLOW_UP_COUNT {
            break;
        }
        if !questions.iter().any(|q| q == default) {
            questions.push(default.to_string());
        }
    }
    questions
}

/// Distinct `[n]` citations that point at one of `source_count` sources.
pub fn cited_sources(answer: &str, source_count: usize) -> Vec<usize> {
    CITATION
        .captures_iter(answer)
        .filter_map(|caps| caps[1].parse::<usize>().ok())
        .filter(|n| (1..=source_count).contains(n))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn answer_source(result: &RawResult) -> AnswerSourceDto {
    AnswerSourceDto {
        title: result.title.clone(),
        url: result.url.clone(),
        snippet: result
            .content
            .as_deref()
            .map(|c| normalizer::snippet(c, SNIPPET_CHARS))
            .unwrap_or_else(|| NO_PREVIEW.to_string()),
        published_date: result.published_date.clone(),
    }
}

/// Search, answer with citations, then suggest follow-ups.
pub struct AnswerPipeline {
    search: Arc<dyn SearchProvider>,
    generator: Arc<dyn GenerativeProvider>,
}

impl AnswerPipeline {
    pub fn new(search: Arc<dyn SearchProvider>, generator: Arc<dyn GenerativeProvider>) -> Self {
        Self { search, generator }
    }

    pub async fn answer(
        &self,
        query: &str,
        params: &SearchParams,
        personality: Personality,
    ) -> AppResult<SearchAnswerResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::InvalidInput(QUERY_REQUIRED.to_string()));
        }
        log::info!("Processing search request: {:?} ({})", query, personality.as_str());

        let search = self.search.search(query, params).await?;

        let prompt = build_answer_prompt(query, &search.results, personality);
        let answer = self.generator.generate(&prompt).await?.trim().to_string();

        let follow_up_questions = self.follow_ups(query, &answer).await;

        Ok(SearchAnswerResponse {
            query: query.to_string(),
            sources: search.results.iter().map(answer_source).collect(),
            follow_up_questions,
            metadata: AnswerMetadata {
                search_time: search.response_time,
                result_count: search.results.len(),
                model: self.generator.model_name(),
                timestamp: Utc::now().to_rfc3339(),
                personality,
                cited_sources: cited_sources(&answer, search.results.len()),
            },
            answer,
        })
    }

    async fn follow_ups(&self, query: &str, answer: &str) -> Vec<String> {
        match self.generator.generate(&build_follow_up_prompt(query, answer)).await {
            Ok(text) => parse_follow_ups(&text),
            Err(err) => {
                log::error!("Follow-up generation error: {}", err.detail());
                DEFAULT_FOLLOW_UP_QUESTIONS.iter().map(|q| q.to_string()).collect()
            }
        }
    }
}
