use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelTrait, Set};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::batches::common::UpdateBatchRequest;
use crate::state::AppState;
use db::models::batch::{ActiveModel as BatchActiveModel, Model as BatchModel};

/// PUT /api/batches/{batch_id}
///
/// Partial update of a batch; only the provided fields are overwritten.
/// Admin only. Existence is checked before the role, so an unknown id
/// answers 404 even for non-admin callers.
pub async fn update_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateBatchRequest>,
) -> impl IntoResponse {
    let existing = match BatchModel::find_by_id(state.db(), batch_id).await {
        Ok(Some(batch)) => batch,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Batch not found")),
            )
                .into_response();
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!(
                    "Failed to fetch batch: {err}"
                ))),
            )
                .into_response();
        }
    };

    if !claims.admin {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("Only admin may update batches")),
        )
            .into_response();
    }

    let mut am: BatchActiveModel = existing.into();
    if let Some(name) = req.name {
        am.name = Set(name);
    }
    if let Some(description) = req.description {
        am.description = Set(Some(description));
    }
    if let Some(coordinator_id) = req.coordinator_id {
        am.coordinator_id = Set(Some(coordinator_id));
    }
    if let Some(start_date) = req.start_date {
        am.start_date = Set(Some(start_date));
    }
    if let Some(end_date) = req.end_date {
        am.end_date = Set(Some(end_date));
    }
    if let Some(is_active) = req.is_active {
        am.is_active = Set(is_active);
    }

    match am.update(state.db()).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Batch updated successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to update batch: {err}"
            ))),
        )
            .into_response(),
    }
}
