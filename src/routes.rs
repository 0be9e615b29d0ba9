// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{delete, get},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{mocks, records, sectionals, stats},
    state::AppState,
};

/// Builds the CORS layer from the configured origins, skipping any that are
/// not valid header values.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

/// Assembles the main application router.
///
/// * Record intake and tables (mocks, sectionals, combined records).
/// * Dashboard statistics and chart series.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    let record_routes = Router::new()
        .route("/mocks", get(mocks::list_mocks).post(mocks::create_mock))
        .route(
            "/sectionals",
            get(sectionals::list_sectionals).post(sectionals::create_sectional),
        )
        .route("/records", get(records::list_records))
        .route("/records/{id}", delete(records::delete_record));

    let stats_routes = Router::new()
        .route("/stats", get(stats::get_dashboard))
        .route("/charts/total", get(stats::total_chart))
        .route("/charts/sections/{section}", get(stats::section_chart))
        .route("/percentiles", get(stats::percentile_table))
        .route("/health", get(stats::health));

    Router::new()
        .nest("/api", record_routes.merge(stats_routes))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
