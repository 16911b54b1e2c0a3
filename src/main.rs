//! Compliance Compass server entrypoint.

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use compliance_compass::adapters::http::{app_router, AssessmentAppState};
use compliance_compass::adapters::questionnaire::FileQuestionnaireLoader;
use compliance_compass::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let provider = Arc::new(FileQuestionnaireLoader::new(
        config.questionnaires.directory.clone(),
    ));
    let app = app_router(AssessmentAppState::new(provider)).layer(cors_layer(&config.server));

    let address = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(
        %address,
        questionnaires = %config.questionnaires.directory.display(),
        "compliance assessment API listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_new(&server.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
