use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret as _, SecretString};
use serde_json::{json, Value};

use crate::errors::{AppError, AppResult};

/// Single-turn text generation. Output is free text with no schema
/// guarantee; callers parse it defensively.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    fn model_name(&self) -> String;
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

pub struct GeminiClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: SecretString, base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(base_url.trim_end_matches('/'));

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    fn model_name(&self) -> String {
        self.model.clone()
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let chat = self.client.chat();
        let call = chat.create_byot(request);
        let response: Value = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| AppError::ProviderTimeout("Gemini generation timeout".to_string()))?
            .map_err(|e| {
                log::error!("Gemini generation error: {}", e);
                classify_generation_error(&e.to_string())
            })?;

        let text = first_choice_text(&response).ok_or_else(|| {
            AppError::ProviderFailure("Gemini generation failed: empty response".to_string())
        })?;

        log::info!("Gemini generated {} character response", text.len());
        Ok(text)
    }
}

fn first_choice_text(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// The provider only signals failure kinds through its message text.
fn classify_generation_error(message: &str) -> AppError {
    if message.contains("API_KEY_INVALID") || message.contains("API key not valid") {
        AppError::InvalidCredential("Invalid Gemini API key".to_string())
    } else if message.contains("RATE_LIMIT_EXCEEDED")
        || message.contains("RESOURCE_EXHAUSTED")
        || message.contains("429")
        || message.to_lowercase().contains("rate limit")
    {
        AppError::RateLimited(format!("Gemini rate limit exceeded: {}", message))
    } else if message.contains("error sending request") || message.contains("connection") {
        AppError::ProviderUnavailable(format!("Gemini: {}", message))
    } else {
        AppError::ProviderFailure(format!("Gemini generation failed: {}", message))
    }
}
