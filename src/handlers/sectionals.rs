// src/handlers/sectionals.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        sectional_test::CreateSectionalRequest,
        table::{SectionalSortField, TableParams, sort_sectionals},
    },
    store::RecordStore,
};

/// Records a completed sectional test. The score ceiling depends on the section.
pub async fn create_sectional(
    State(store): State<RecordStore>,
    Json(payload): Json<CreateSectionalRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let today = chrono::Local::now().date_naive();
    let record = payload.into_record(uuid::Uuid::new_v4().to_string(), today);

    store.add_sectional(record.clone()).await?;
    tracing::info!(
        "Sectional test added: {} [{}] ({})",
        record.name,
        record.section,
        record.id
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "record": record,
            "message": format!("{} has been successfully added to your tracker.", record.name),
        })),
    ))
}

pub async fn list_sectionals(
    State(store): State<RecordStore>,
    Query(params): Query<TableParams<SectionalSortField>>,
) -> Result<impl IntoResponse, AppError> {
    let mut sectionals = store.sectionals().await?;
    sort_sectionals(&mut sectionals, params);
    Ok(Json(sectionals))
}
