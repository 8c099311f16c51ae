use serde::{Deserialize, Deserializer, Serialize};

/// One hit as returned by the search provider. Identity is its position in
/// the provider's ordering.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RawResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RawResult {
    pub fn new(title: &str, url: &str) -> Self {
        RawResult {
            title: title.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn with_published_date(mut self, published_date: &str) -> Self {
        self.published_date = Some(published_date.to_string());
        self
    }

    pub fn with_image_url(mut self, image_url: &str) -> Self {
        self.image_url = Some(image_url.to_string());
        self
    }

    /// Image supplied by the provider, if it is non-empty.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Normalised search provider response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<RawResult>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub response_time: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The provider has reported `response_time` both as a number and as a
/// numeric string.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_defaults_for_missing_fields() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.response_time, 0.0);
        assert!(response.answer.is_none());
    }

    #[test]
    fn test_response_time_as_string() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"response_time": "1.25", "results": []}"#).unwrap();
        assert_eq!(response.response_time, 1.25);
    }

    #[test]
    fn test_raw_result_from_provider_json() {
        let json = r#"{
            "title": "Rust 2024 edition",
            "url": "https://blog.rust-lang.org/x",
            "content": "The edition ships",
            "score": 0.91,
            "published_date": "2024-10-01T00:00:00Z"
        }"#;
        let result: RawResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.title, "Rust 2024 edition");
        assert_eq!(result.published_date.as_deref(), Some("2024-10-01T00:00:00Z"));
        assert!(result.image().is_none());
    }

    #[test]
    fn test_null_title_does_not_reject_response() {
        let json = r#"{"results": [
            {"title": null, "url": "https://a.com"},
            {"title": "Kept", "url": null}
        ]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].title, "");
        assert_eq!(response.results[0].url, "https://a.com");
        assert_eq!(response.results[1].title, "Kept");
        assert_eq!(response.results[1].url, "");
    }

    #[test]
    fn test_blank_image_is_ignored() {
        let result = RawResult::new("t", "https://a.com").with_image_url("  ");
        assert!(result.image().is_none());
    }
}
