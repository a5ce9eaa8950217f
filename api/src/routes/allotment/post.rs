use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::allotment::common::AllotmentRequest;
use crate::state::AppState;
use db::models::batch::Model as BatchModel;
use db::models::batch_teacher::Model as BatchTeacherModel;
use db::models::teacher::Model as TeacherModel;

/// POST /api/allotment
///
/// Assign a teacher to a batch. Admin only.
///
/// ### Request Body
/// ```json
/// {
///   "batch_id": 1,
///   "teacher_id": 2
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the created allotment row
/// - `403 Forbidden` (missing admin role)
/// - `404 Not Found` (unknown batch or teacher)
/// - `409 Conflict` (teacher already allotted to this batch)
pub async fn allot_teacher_to_batch(
    State(state): State<AppState>,
    Json(req): Json<AllotmentRequest>,
) -> impl IntoResponse {
    let db = state.db();

    match BatchModel::find_by_id(db, req.batch_id).await {
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

    match TeacherModel::find_by_id(db, req.teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Teacher not found")),
            )
                .into_response();
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!(
                    "Failed to fetch teacher: {err}"
                ))),
            )
                .into_response();
        }
    }

    match BatchTeacherModel::exists(db, req.batch_id, req.teacher_id).await {
        Ok(true) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<Empty>::error(
                    "Teacher already allotted to this batch",
                )),
            )
                .into_response();
        }
        Ok(false) => {}
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!(
                    "Failed to check allotment: {err}"
                ))),
            )
                .into_response();
        }
    }

    match BatchTeacherModel::allot(db, req.batch_id, req.teacher_id).await {
        Ok(allotment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                allotment,
                "Teacher allotted to batch successfully",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to create allotment: {err}"
            ))),
        )
            .into_response(),
    }
}
