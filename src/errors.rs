use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::Utc;
use once_cell::sync::OnceCell;
use serde::Serialize;
use thiserror::Error;

use crate::config::Environment;

static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Installs the deployment mode used when rendering error bodies. Only the
/// first call has an effect.
pub fn init_environment(environment: Environment) {
    let _ = ENVIRONMENT.set(environment);
}

fn environment() -> Environment {
    ENVIRONMENT.get().copied().unwrap_or(Environment::Development)
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Search services are not properly configured. Please check API keys.")]
    Unconfigured,

    #[error("{0}")]
    InvalidCredential(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited(String),

    #[error("External service unavailable")]
    ProviderUnavailable(String),

    #[error("{0}")]
    ProviderTimeout(String),

    #[error("Malformed provider output: {0}")]
    MalformedProviderOutput(String),

    #[error("{0}")]
    ProviderFailure(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Unconfigured => "UNCONFIGURED",
            AppError::InvalidCredential(_) => "INVALID_CREDENTIAL",
            AppError::RateLimited(_) => "RATE_LIMITED",
            AppError::ProviderUnavailable(_) => "PROVIDER_UNAVAILABLE",
            AppError::ProviderTimeout(_) => "PROVIDER_TIMEOUT",
            AppError::MalformedProviderOutput(_) => "MALFORMED_PROVIDER_OUTPUT",
            AppError::ProviderFailure(_) => "PROVIDER_FAILURE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Full detail for server-side logs; may contain provider messages.
    pub fn detail(&self) -> String {
        match self {
            AppError::RateLimited(detail) | AppError::ProviderUnavailable(detail) => {
                format!("{}: {}", self, detail)
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unconfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidCredential(_) => StatusCode::UNAUTHORIZED,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ProviderTimeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MalformedProviderOutput(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ProviderFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{} request failure: {}", status.as_u16(), self.detail());
        }

        HttpResponse::build(status).json(render_error(self, environment()))
    }
}

fn render_error(err: &AppError, environment: Environment) -> ErrorResponse {
    let status = err.status_code();
    let error = if environment == Environment::Production && status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal Server Error".to_string()
    } else {
        err.to_string()
    };

    ErrorResponse {
        error,
        code: err.error_code(),
        timestamp: Utc::now().to_rfc3339(),
        detail: (environment == Environment::Development).then(|| err.detail()),
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedProviderOutput(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
