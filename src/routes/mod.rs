use axum::{Router, extract::DefaultBodyLimit, http::HeaderValue, routing::get};
use tower::{ServiceBuilder, limit::ConcurrencyLimitLayer};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{config::AppConfig, error::AppError, state::AppState};

pub mod ai;
pub mod auth;
pub mod billing;
pub mod doc;
pub mod email;
pub mod health;
pub mod ocr;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/auth", auth::router())
        .nest("/billing", billing::router())
        .nest("/email", email::router())
        .nest("/ai", ai::router())
        .nest("/ocr", ocr::router())
}

pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    // Wildcards are not allowed together with credentials, so methods and
    // headers are mirrored from the preflight instead.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// The full application minus the tracing and request-id layers added by the binary.
pub fn create_app(state: AppState, config: &AppConfig) -> anyhow::Result<Router> {
    let routes = Router::new()
        .route("/", get(health::root))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .with_state(state);

    // Wraps the router once so every route shares one semaphore.
    let limited = ServiceBuilder::new()
        .layer(ConcurrencyLimitLayer::new(config.concurrency_limit))
        .service(routes);

    let app = Router::new()
        .fallback_service(limited)
        .layer(cors_layer(&config.cors_origins)?);

    Ok(app)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
