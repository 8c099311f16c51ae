use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const QUERY_REQUIRED: &str = "Query is required and must be a non-empty string";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    #[default]
    Advanced,
}

/// Caller-tunable search options; every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[validate(range(min = 1, max = 20))]
    pub max_results: Option<u32>,

    pub depth: Option<SearchDepth>,

    #[serde(default)]
    pub include_domains: Vec<String>,

    #[serde(default)]
    pub exclude_domains: Vec<String>,
}

/// Options with defaults applied, as handed to the search provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub max_results: u32,
    pub depth: SearchDepth,
    pub include_domains: Vec<String>,
    pub exclude_domains: Vec<String>,
}

impl SearchOptions {
    pub fn resolve(&self, default_max_results: u32) -> SearchParams {
        SearchParams {
            max_results: self.max_results.unwrap_or(default_max_results),
            depth: self.depth.unwrap_or_default(),
            include_domains: self.include_domains.clone(),
            exclude_domains: self.exclude_domains.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchRequestDto {
    /// Kept untyped so a non-string query gets the same 400 as a missing one.
    #[serde(default)]
    pub query: Option<serde_json::Value>,

    #[serde(default)]
    #[validate(nested)]
    pub options: SearchOptions,

    #[serde(default)]
    pub personality: Option<String>,
}

impl SearchRequestDto {
    pub fn trimmed_query(&self) -> AppResult<String> {
        self.query
            .as_ref()
            .and_then(|q| q.as_str())
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput(QUERY_REQUIRED.to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewsRequestDto {
    #[serde(default)]
    #[validate(nested)]
    pub options: SearchOptions,
}
