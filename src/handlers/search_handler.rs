use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::suggestions::SEARCH_SUGGESTIONS,
    errors::{AppError, AppResult},
    models::{
        domain::{Personality, Section},
        dto::{
            request::{NewsRequestDto, SearchRequestDto},
            response::{ArticleDto, FeedMetadata, HealthResponse, NewsFeedResponse, SuggestionsResponse},
        },
    },
    services::{answer_pipeline::DEFAULT_MAX_RESULTS, normalizer::Labeler},
};

/// Results fetched per feed; more than the feed shows so they can be grouped.
const NEWS_MAX_RESULTS: u32 = 15;

#[post("/api/search")]
async fn search(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SearchRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let query = request.trimmed_query()?;
    request.validate()?;

    let pipeline = state.answer_pipeline()?;
    let personality = Personality::from_name(request.personality.as_deref());
    let params = request.options.resolve(DEFAULT_MAX_RESULTS);

    let response = pipeline.answer(&query, &params, personality).await?;
    log::info!("Search completed successfully for: {:?}", query);
    Ok(HttpResponse::Ok().json(response))
}

/// An absent or blank body means default options; anything else must be a
/// valid request.
fn parse_news_body(body: &[u8]) -> AppResult<NewsRequestDto> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewsRequestDto::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidInput(format!("Invalid request body: {}", e)))
}

#[post("/api/search/news/{section}")]
async fn news_feed(
    state: web::Data<Arc<AppState>>,
    section: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let section: Section = section.parse()?;
    let request = parse_news_body(&body)?;
    request.validate()?;

    let (search_provider, pipeline) = state.news_pipeline()?;
    log::info!("Fetching news for section: {}", section);

    let params = request.options.resolve(NEWS_MAX_RESULTS);
    let results = search_provider
        .search(section.news_query(), &params)
        .await?;

    let mut labeler = Labeler::new(Utc::now());
    let stories = pipeline
        .build_stories(&results.results, section.as_str(), &mut labeler)
        .await;

    let articles: Vec<ArticleDto> = stories
        .into_iter()
        .enumerate()
        .map(|(id, story)| ArticleDto::from_story(id, story))
        .collect();
    log::info!("News feed generated for {}: {} articles", section, articles.len());

    Ok(HttpResponse::Ok().json(NewsFeedResponse {
        section,
        articles,
        metadata: FeedMetadata {
            search_time: results.response_time,
            result_count: results.results.len(),
            timestamp: labeler.now().to_rfc3339(),
        },
    }))
}

#[get("/api/search/suggestions")]
async fn suggestions() -> HttpResponse {
    HttpResponse::Ok().json(SuggestionsResponse {
        suggestions: SEARCH_SUGGESTIONS.to_vec(),
    })
}

#[get("/api/search/health")]
async fn search_health(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let services = state.service_status();
    let response = HealthResponse {
        status: "OK",
        services,
        timestamp: Utc::now().to_rfc3339(),
    };

    if services.all_healthy() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
