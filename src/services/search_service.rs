use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::SearchResponse,
        dto::request::{SearchDepth, SearchParams},
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> String;
    async fn search(&self, query: &str, params: &SearchParams) -> AppResult<SearchResponse>;
}

#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: SearchDepth,
    include_answer: bool,
    include_raw_content: bool,
    max_results: u32,
    include_domains: &'a [String],
    exclude_domains: &'a [String],
}

pub struct TavilyClient {
    http: Client,
    api_key: SecretString,
    base_url: String,
}

impl TavilyClient {
    pub fn new(api_key: SecretString, base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    fn name(&self) -> String {
        "tavily".to_string()
    }

    async fn search(&self, query: &str, params: &SearchParams) -> AppResult<SearchResponse> {
        log::info!("Searching Tavily for: {:?}", query);

        let body = TavilySearchRequest {
            api_key: self.api_key.expose_secret(),
            query,
            search_depth: params.depth,
            include_answer: true,
            include_raw_content: false,
            max_results: params.max_results,
            include_domains: &params.include_domains,
            exclude_domains: &params.exclude_domains,
        };

        let response = self
            .http
            .post(format!("{}/search", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            log::error!("Tavily search error: {} {}", status, message);
            return Err(classify_status(status, &message));
        }

        let mut results: SearchResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Tavily response: {}", e);
            AppError::ProviderFailure(format!("Tavily search failed: {}", e))
        })?;
        if results.query.is_none() {
            results.query = Some(query.to_string());
        }

        log::info!("Tavily returned {} results", results.results.len());
        Ok(results)
    }
}

fn classify_status(status: StatusCode, message: &str) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::InvalidCredential("Invalid Tavily API key".to_string()),
        StatusCode::TOO_MANY_REQUESTS => {
            AppError::RateLimited(format!("Tavily rate limit exceeded: {}", message))
        }
        _ => AppError::ProviderFailure(format!("Tavily search failed: {} {}", status, message)),
    }
}

fn classify_transport_error(err: reqwest::Error) -> AppError {
    log::error!("Tavily search error: {}", err);
    if err.is_timeout() {
        AppError::ProviderTimeout("Tavily search timeout".to_string())
    } else if err.is_connect() {
        AppError::ProviderUnavailable(format!("Tavily: {}", err))
    } else {
        AppError::ProviderFailure(format!("Tavily search failed: {}", err))
    }
}
