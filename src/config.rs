use std::{env, str::FromStr};

use secrecy::SecretString;

pub const DEFAULT_TAVILY_BASE_URL: &str = "https://api.tavily.com";
pub const DEFAULT_GEMINI_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Deployment mode, controls how much error detail leaves the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Other,
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "production" | "prod" => Environment::Production,
            _ => Environment::Other,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub tavily_api_key: Option<SecretString>,
    pub gemini_api_key: Option<SecretString>,
    pub tavily_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub search_timeout_secs: u64,
    pub generation_timeout_secs: u64,
    pub synthesis_concurrency: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub environment: Environment,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            tavily_api_key: secret_var("TAVILY_API_KEY"),
            gemini_api_key: secret_var("GEMINI_API_KEY"),
            tavily_base_url: env::var("TAVILY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TAVILY_BASE_URL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            search_timeout_secs: parsed_var("SEARCH_TIMEOUT_SECS").unwrap_or(30),
            generation_timeout_secs: parsed_var("GENERATION_TIMEOUT_SECS").unwrap_or(60),
            synthesis_concurrency: parsed_var::<usize>("SYNTHESIS_CONCURRENCY")
                .unwrap_or(4)
                .max(1),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parsed_var("WEB_SERVER_PORT")
                .or_else(|| parsed_var("PORT"))
                .unwrap_or(3001),
            environment: env::var("APP_ENV")
                .ok()
                .and_then(|e| e.parse().ok())
                .unwrap_or(Environment::Development),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|o| !o.trim().is_empty()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            tavily_api_key: None,
            gemini_api_key: None,
            tavily_base_url: DEFAULT_TAVILY_BASE_URL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            search_timeout_secs: 30,
            generation_timeout_secs: 60,
            synthesis_concurrency: 2,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            environment: Environment::Development,
            cors_allowed_origin: None,
        }
    }
}

fn secret_var(key: &str) -> Option<SecretString> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(SecretString::from)
}

fn parsed_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
