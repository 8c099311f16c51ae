use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use research_feed_server::{
    app_state::AppState,
    config::{Config, Environment},
    errors::{AppError, AppResult},
    handlers::configure,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    models::{
        domain::{RawResult, SearchResponse},
        dto::request::{SearchDepth, SearchParams},
    },
    services::{model_service::GenerativeProvider, search_service::SearchProvider},
};

/// Search provider that serves a fixed result list and records every call.
struct RecordingSearch {
    results: Vec<RawResult>,
    calls: Mutex<Vec<(String, SearchParams)>>,
}

impl RecordingSearch {
    fn new(results: Vec<RawResult>) -> Self {
        Self {
            results,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, SearchParams)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for RecordingSearch {
    fn name(&self) -> String {
        "recording".to_string()
    }

    async fn search(&self, query: &str, params: &SearchParams) -> AppResult<SearchResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), params.clone()));
        Ok(SearchResponse {
            answer: None,
            results: self
                .results
                .iter()
                .take(params.max_results as usize)
                .cloned()
                .collect(),
            query: Some(query.to_string()),
            response_time: 1.25,
        })
    }
}

/// Generative provider that answers story prompts with JSON and anything
/// else with plain prose.
struct ScriptedGenerator {
    story_reply: String,
    answer_reply: String,
}

#[async_trait]
impl GenerativeProvider for ScriptedGenerator {
    fn model_name(&self) -> String {
        "scripted".to_string()
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        if prompt.contains("\"headline\"") {
            Ok(self.story_reply.clone())
        } else {
            Ok(self.answer_reply.clone())
        }
    }
}

struct FailingGenerator(AppError);

#[async_trait]
impl GenerativeProvider for FailingGenerator {
    fn model_name(&self) -> String {
        "failing".to_string()
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Err(self.0.clone())
    }
}

fn config() -> Config {
    Config {
        tavily_api_key: None,
        gemini_api_key: None,
        tavily_base_url: "http://localhost:0".to_string(),
        gemini_base_url: "http://localhost:0".to_string(),
        gemini_model: "scripted".to_string(),
        search_timeout_secs: 1,
        generation_timeout_secs: 1,
        synthesis_concurrency: 3,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        environment: Environment::Development,
        cors_allowed_origin: None,
    }
}

fn article(title: &str, content: &str) -> RawResult {
    let slug = title.to_lowercase().replace(' ', "-");
    RawResult::new(title, &format!("https://news.example.org/{}", slug)).with_content(content)
}

/// Three kubernetes stories at 0, 4 and 8 among unrelated wildlife pieces.
fn dev_results() -> Vec<RawResult> {
    (0..10)
        .map(|i| {
            if i % 4 == 0 {
                article(&format!("Kubernetes release {i}"), "Cluster scheduler changes")
                    .with_image_url(&format!("https://img.example.org/k8s-{i}.png"))
            } else {
                article(&format!("Pelican census {i}"), &format!("Birds nest by lakes {i}"))
            }
        })
        .collect()
}

fn scripted(story_reply: &str, answer_reply: &str) -> Arc<dyn GenerativeProvider> {
    Arc::new(ScriptedGenerator {
        story_reply: story_reply.to_string(),
        answer_reply: answer_reply.to_string(),
    })
}

macro_rules! app {
    ($search:expr, $generator:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(AppState::with_providers(
                    config(),
                    $search,
                    $generator,
                ))))
                .wrap(RequestIdMiddleware)
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_dev_feed_groups_related_results() {
    let search = Arc::new(RecordingSearch::new(dev_results()));
    let app = app!(
        Some(search.clone() as Arc<dyn SearchProvider>),
        Some(scripted(
            "```json\n{\"headline\": \"Kubernetes ships\", \"summary\": \"New scheduler.\", \"analysis\": \"Ops teams benefit.\"}\n```",
            "unused"
        ))
    );

    let req = test::TestRequest::post()
        .uri("/api/search/news/dev")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

    let body: Value = test::read_body_json(resp).await;
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 6);

    let lead = &articles[0];
    assert_eq!(lead["featured"], true);
    assert_eq!(lead["headline"], "Kubernetes ships");
    assert_eq!(lead["aiAnalysis"], "Ops teams benefit.");
    assert_eq!(lead["sourceCount"], 3);
    assert_eq!(lead["thumbnail"], "https://img.example.org/k8s-0.png");
    assert_eq!(lead["sources"][0]["domain"], "news.example.org");
    assert_eq!(lead["timeEstimated"], true);
    assert!(lead["time"].as_str().unwrap().ends_with("ago"));

    for (i, a) in articles.iter().enumerate() {
        assert_eq!(a["id"], i);
        assert_eq!(a["featured"], i == 0);
    }

    let calls = search.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.max_results, 15);
    assert_eq!(calls[0].1.depth, SearchDepth::Advanced);
}

#[actix_web::test]
async fn test_prose_reply_yields_fallback_stories() {
    let app = app!(
        Some(Arc::new(RecordingSearch::new(dev_results())) as Arc<dyn SearchProvider>),
        Some(scripted("I could not produce JSON for this.", "unused"))
    );

    let req = test::TestRequest::post()
        .uri("/api/search/news/dev")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let articles = body["articles"].as_array().unwrap();

    assert_eq!(articles.len(), 6);
    assert_eq!(articles[0]["headline"], "Kubernetes release 0");
    assert_eq!(articles[0]["summary"], "Cluster scheduler changes...");
    assert_eq!(articles[0]["sourceCount"], 3);
    assert_eq!(articles[1]["headline"], "Pelican census 1");
}

#[actix_web::test]
async fn test_news_options_override_defaults() {
    let search = Arc::new(RecordingSearch::new(dev_results()));
    let app = app!(
        Some(search.clone() as Arc<dyn SearchProvider>),
        Some(scripted("{}", "unused"))
    );

    let req = test::TestRequest::post()
        .uri("/api/search/news/startup")
        .set_json(json!({ "options": { "maxResults": 2, "depth": "basic" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let calls = search.calls();
    assert_eq!(calls[0].1.max_results, 2);
    assert_eq!(calls[0].1.depth, SearchDepth::Basic);
}

#[actix_web::test]
async fn test_search_answer_round_trip() {
    let search = Arc::new(RecordingSearch::new(dev_results()));
    let app = app!(
        Some(search.clone() as Arc<dyn SearchProvider>),
        Some(scripted("unused", "Kubernetes moved fast [1] and [3]."))
    );

    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(json!({
            "query": "kubernetes news",
            "options": { "maxResults": 4, "includeDomains": ["news.example.org"] },
            "personality": "newsmap"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sources"].as_array().unwrap().len(), 4);
    assert_eq!(body["metadata"]["citedSources"], json!([1, 3]));
    assert_eq!(body["metadata"]["personality"], "newsmap");
    assert_eq!(body["metadata"]["searchTime"], 1.25);
    assert_eq!(body["followUpQuestions"].as_array().unwrap().len(), 4);

    let calls = search.calls();
    assert_eq!(calls[0].0, "kubernetes news");
    assert_eq!(calls[0].1.include_domains, vec!["news.example.org".to_string()]);
}

#[actix_web::test]
async fn test_non_string_query_is_rejected() {
    let app = app!(None, None);

    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(json!({ "query": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Query is required and must be a non-empty string");
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[actix_web::test]
async fn test_provider_errors_map_to_status_codes() {
    let cases = [
        (
            AppError::InvalidCredential("Invalid Gemini API key".into()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            AppError::RateLimited("quota".into()),
            StatusCode::TOO_MANY_REQUESTS,
        ),
        (
            AppError::ProviderTimeout("Gemini generation timeout".into()),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
    ];

    for (error, status) in cases {
        let app = app!(
            Some(Arc::new(RecordingSearch::new(dev_results())) as Arc<dyn SearchProvider>),
            Some(Arc::new(FailingGenerator(error)) as Arc<dyn GenerativeProvider>)
        );

        let req = test::TestRequest::post()
            .uri("/api/search")
            .set_json(json!({ "query": "rust" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status);
    }
}

#[actix_web::test]
async fn test_failing_generator_still_serves_feed() {
    let app = app!(
        Some(Arc::new(RecordingSearch::new(dev_results())) as Arc<dyn SearchProvider>),
        Some(Arc::new(FailingGenerator(AppError::ProviderFailure("down".into())))
            as Arc<dyn GenerativeProvider>)
    );

    let req = test::TestRequest::post()
        .uri("/api/search/news/dev")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["articles"].as_array().unwrap().len(), 6);
}

#[actix_web::test]
async fn test_health_reports_partial_configuration() {
    let app = app!(
        Some(Arc::new(RecordingSearch::new(vec![])) as Arc<dyn SearchProvider>),
        None
    );

    let req = test::TestRequest::get().uri("/api/search/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["services"]["tavily"], true);
    assert_eq!(body["services"]["gemini"], false);
}

#[actix_web::test]
async fn test_news_rejects_mistyped_options() {
    let search = Arc::new(RecordingSearch::new(dev_results()));
    let app = app!(
        Some(search.clone() as Arc<dyn SearchProvider>),
        Some(scripted("{}", "unused"))
    );

    let req = test::TestRequest::post()
        .uri("/api/search/news/dev")
        .set_json(json!({ "options": { "maxResults": "3" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(search.calls().is_empty());
}
