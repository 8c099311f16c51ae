use actix_web::web;

use crate::errors::AppError;

pub mod search_handler;

pub use search_handler::{health_check, news_feed, search, search_health, suggestions};

/// Malformed JSON bodies answer with the same error shape as every other 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::InvalidInput(format!("Invalid request body: {}", err)).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(search)
        .service(news_feed)
        .service(suggestions)
        .service(search_health)
        .service(health_check);
}
