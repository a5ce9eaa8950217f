use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::batches::common::CreateBatchRequest;
use crate::state::AppState;
use db::models::batch::Model as BatchModel;

/// POST /api/batches
///
/// Create a new batch. Only accessible by admin users.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Winter 2026",
///   "description": "Evening cohort",
///   "coordinator_id": 3,
///   "start_date": "2026-07-01T00:00:00Z",
///   "end_date": "2026-12-15T00:00:00Z"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the created batch
/// - `400 Bad Request` (validation failure)
/// - `403 Forbidden` (missing admin role)
pub async fn create_batch(
    State(state): State<AppState>,
    Json(req): Json<CreateBatchRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(format!(
                "Invalid input: {}",
                common::format_validation_errors(&errors)
            ))),
        )
            .into_response();
    }

    match BatchModel::create(
        state.db(),
        &req.name,
        req.description,
        req.coordinator_id,
        req.start_date,
        req.end_date,
    )
    .await
    {
        Ok(batch) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(batch, "Batch created successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to create batch: {err}"
            ))),
        )
            .into_response(),
    }
}
