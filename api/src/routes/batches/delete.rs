use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::batch::Model as BatchModel;

/// DELETE /api/batches/{batch_id}
///
/// Removes the batch outright (dependent rows cascade). Admin only.
pub async fn delete_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    match BatchModel::find_by_id(state.db(), batch_id).await {
        Ok(Some(_)) => {}
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
    }

    if !claims.admin {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("Only admin may delete batches")),
        )
            .into_response();
    }

    match BatchModel::delete(state.db(), batch_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to delete batch: {err}"
            ))),
        )
            .into_response(),
    }
}
