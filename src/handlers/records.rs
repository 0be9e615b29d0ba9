// src/handlers/records.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{error::AppError, models::record::Record, store::RecordStore};

/// Every stored record, full mocks first, each collection in insertion order.
pub async fn list_records(State(store): State<RecordStore>) -> Result<impl IntoResponse, AppError> {
    let records = store.snapshot().await?.into_combined();
    Ok(Json(records))
}

/// Deletes a full mock or sectional by id.
pub async fn delete_record(
    State(store): State<RecordStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let removed = store
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Record '{}' not found", id)))?;

    match &removed {
        Record::Mock(m) => tracing::info!("Mock test removed: {} ({})", m.name, m.id),
        Record::Sectional(s) => {
            tracing::info!("Sectional test removed: {} [{}] ({})", s.name, s.section, s.id)
        }
    }

    Ok(Json(json!({
        "message": format!("{} has been removed from your tracker.", removed.name()),
        "deleted": removed,
    })))
}
