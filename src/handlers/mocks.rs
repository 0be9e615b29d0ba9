// src/handlers/mocks.rs

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
        mock_test::CreateMockRequest,
        table::{MockSortField, TableParams, sort_mocks},
    },
    store::RecordStore,
};

/// Records a completed full mock.
///
/// * Validates every score against its section ceiling and every percentile
///   against [0, 100].
/// * Assigns a fresh id; the date defaults to today.
/// * Returns 201 Created with the stored record.
pub async fn create_mock(
    State(store): State<RecordStore>,
    Json(payload): Json<CreateMockRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let today = chrono::Local::now().date_naive();
    let record = payload.into_record(uuid::Uuid::new_v4().to_string(), today);

    store.add_mock(record.clone()).await?;
    tracing::info!("Mock test added: {} ({})", record.name, record.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "record": record,
            "message": format!("{} has been successfully added to your tracker.", record.name),
        })),
    ))
}

/// Lists full mocks as a table, newest first unless `sort`/`direction` say otherwise.
pub async fn list_mocks(
    State(store): State<RecordStore>,
    Query(params): Query<TableParams<MockSortField>>,
) -> Result<impl IntoResponse, AppError> {
    let mut mocks = store.mocks().await?;
    sort_mocks(&mut mocks, params);
    Ok(Json(mocks))
}
