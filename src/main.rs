use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

use research_feed_server::{
    app_state::AppState,
    config::Config,
    errors, handlers,
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    errors::init_environment(config.environment);

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origin = config.cors_allowed_origin.clone();

    let state = web::Data::new(Arc::new(AppState::new(config)));
    let status = state.service_status();
    log::info!(
        "Search services: tavily={}, gemini={}",
        status.tavily,
        status.gemini
    );
    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(cors(allowed_origin.as_deref()))
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
