use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::batch::{Entity as BatchEntity, Model as BatchModel};

/// GET /api/batches
///
/// Public listing of all batches.
pub async fn list_batches(State(state): State<AppState>) -> impl IntoResponse {
    match BatchEntity::find().all(state.db()).await {
        Ok(batches) => (
            StatusCode::OK,
            Json(ApiResponse::success(batches, "Batches retrieved")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to list batches: {err}"
            ))),
        )
            .into_response(),
    }
}

/// GET /api/batches/{batch_id}
pub async fn get_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> impl IntoResponse {
    match BatchModel::find_by_id(state.db(), batch_id).await {
        Ok(Some(batch)) => (
            StatusCode::OK,
            Json(ApiResponse::success(batch, "Batch retrieved")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Batch not found")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to fetch batch: {err}"
            ))),
        )
            .into_response(),
    }
}
