use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::dto::response::ServiceStatus,
    services::{
        answer_pipeline::AnswerPipeline,
        model_service::{GeminiClient, GenerativeProvider},
        search_service::{SearchProvider, TavilyClient},
        story_pipeline::StoryPipeline,
    },
};

/// Provider clients are built once and shared; an absent client means the
/// matching API key was not configured.
#[derive(Clone)]
pub struct AppState {
    pub search_provider: Option<Arc<dyn SearchProvider>>,
    pub generative_provider: Option<Arc<dyn GenerativeProvider>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let search_provider = config.tavily_api_key.clone().and_then(|key| {
            match TavilyClient::new(key, &config.tavily_base_url, config.search_timeout_secs) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn SearchProvider>),
                Err(e) => {
                    log::error!("Search provider initialization failed: {}", e);
                    None
                }
            }
        });
        if search_provider.is_none() {
            log::warn!("TAVILY_API_KEY is not set; search routes will return 503");
        }

        let generative_provider = config.gemini_api_key.clone().map(|key| {
            Arc::new(GeminiClient::new(
                key,
                &config.gemini_base_url,
                &config.gemini_model,
                config.generation_timeout_secs,
            )) as Arc<dyn GenerativeProvider>
        });
        if generative_provider.is_none() {
            log::warn!("GEMINI_API_KEY is not set; search routes will return 503");
        }

        Self::with_providers(config, search_provider, generative_provider)
    }

    pub fn with_providers(
        config: Config,
        search_provider: Option<Arc<dyn SearchProvider>>,
        generative_provider: Option<Arc<dyn GenerativeProvider>>,
    ) -> Self {
        Self {
            search_provider,
            generative_provider,
            config: Arc::new(config),
        }
    }

    pub fn service_status(&self) -> ServiceStatus {
        ServiceStatus {
            tavily: self.search_provider.is_some(),
            gemini: self.generative_provider.is_some(),
        }
    }

    fn providers(&self) -> AppResult<(Arc<dyn SearchProvider>, Arc<dyn GenerativeProvider>)> {
        match (&self.search_provider, &self.generative_provider) {
            (Some(search), Some(generator)) => Ok((search.clone(), generator.clone())),
            _ => Err(AppError::Unconfigured),
        }
    }

    pub fn answer_pipeline(&self) -> AppResult<AnswerPipeline> {
        let (search, generator) = self.providers()?;
        Ok(AnswerPipeline::new(search, generator))
    }

    /// Search provider and story pipeline for a news feed request.
    pub fn news_pipeline(&self) -> AppResult<(Arc<dyn SearchProvider>, StoryPipeline)> {
        let (search, generator) = self.providers()?;
        Ok((
            search,
            StoryPipeline::new(generator, self.config.synthesis_concurrency),
        ))
    }
}
