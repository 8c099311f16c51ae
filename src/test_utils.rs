#[cfg(test)]
pub mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::{models::domain::RawResult, services::normalizer::Labeler};

    /// Fixed clock for recency assertions: 2024-10-20 12:00 UTC.
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 20, 12, 0, 0).unwrap()
    }

    pub fn labeler() -> Labeler {
        Labeler::seeded(fixed_now(), 17)
    }

    /// Result hosted on example.com with the given title and content.
    pub fn result(title: &str, content: &str) -> RawResult {
        let slug = title.to_lowercase().replace(' ', "-");
        RawResult::new(title, &format!("https://www.example.com/{}", slug)).with_content(content)
    }

    /// Ten dev results: three about kubernetes (indices 0, 4, 8), seven
    /// unrelated and distinct.
    pub fn dev_feed() -> Vec<RawResult> {
        (0..10)
            .map(|i| {
                if i % 4 == 0 {
                    result(
                        &format!("Kubernetes release {i}"),
                        "Cluster scheduler improvements",
                    )
                } else {
                    result(
                        &format!("Pelican census {i}"),
                        &format!("Birds nest near lakes, count {i}"),
                    )
                }
            })
            .collect()
    }
}

#[cfg(test)]
pub mod stubs {
    use async_trait::async_trait;

    use crate::{
        errors::AppResult,
        models::{
            domain::{RawResult, SearchResponse},
            dto::request::SearchParams,
        },
        services::{model_service::GenerativeProvider, search_service::SearchProvider},
    };

    pub struct StubSearch {
        results: Vec<RawResult>,
    }

    impl StubSearch {
        pub fn new(results: Vec<RawResult>) -> Self {
            Self { results }
        }
    }

    #[async_trait]
    impl SearchProvider for StubSearch {
        fn name(&self) -> String {
            "stub".to_string()
        }

        async fn search(&self, query: &str, params: &SearchParams) -> AppResult<SearchResponse> {
            Ok(SearchResponse {
                answer: None,
                results: self
                    .results
                    .iter()
                    .take(params.max_results as usize)
                    .cloned()
                    .collect(),
                query: Some(query.to_string()),
                response_time: 0.5,
            })
        }
    }

    /// Replies with the same text to every prompt.
    pub struct StubGenerator {
        reply: String,
    }

    impl StubGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait]
    impl GenerativeProvider for StubGenerator {
        fn model_name(&self) -> String {
            "stub-model".to_string()
        }

        async fn generate(&self, _prompt: &str) -> AppResult<String> {
            Ok(self.reply.clone())
        }
    }

    pub struct PanickingGenerator;

    #[async_trait]
    impl GenerativeProvider for PanickingGenerator {
        fn model_name(&self) -> String {
            "panicking".to_string()
        }

        async fn generate(&self, _prompt: &str) -> AppResult<String> {
            panic!("generator bug")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_result() {
        let r = result("Kubernetes release 0", "body");
        assert_eq!(r.url, "https://www.example.com/kubernetes-release-0");
        assert_eq!(r.content.as_deref(), Some("body"));
    }

    #[test]
    fn test_fixtures_dev_feed() {
        let feed = dev_feed();
        assert_eq!(feed.len(), 10);
        assert_eq!(
            feed.iter()
                .filter(|r| r.title.starts_with("Kubernetes"))
                .count(),
            3
        );
    }
}
