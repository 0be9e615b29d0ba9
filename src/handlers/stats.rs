// src/handlers/stats.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    engine,
    error::AppError,
    models::section::Section,
    store::RecordStore,
};

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Averages, trends, predicted percentile and the summary cards.
/// Recomputed from the stored records on every call.
pub async fn get_dashboard(State(store): State<RecordStore>) -> Result<impl IntoResponse, AppError> {
    let records = store.snapshot().await?;
    Ok(Json(engine::dashboard(&records.mocks, &records.sectionals)))
}

pub async fn total_chart(State(store): State<RecordStore>) -> Result<impl IntoResponse, AppError> {
    let mocks = store.mocks().await?;
    Ok(Json(engine::total_series(&mocks)))
}

pub async fn section_chart(
    State(store): State<RecordStore>,
    Path(section): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let section: Section = section.parse().map_err(AppError::BadRequest)?;
    let records = store.snapshot().await?;
    Ok(Json(engine::section_series(section, &records.mocks, &records.sectionals)))
}

/// The reference table used for the predicted percentile.
pub async fn percentile_table() -> impl IntoResponse {
    Json(engine::PERCENTILE_TABLE)
}
