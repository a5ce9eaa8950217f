use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::timetable::common::CreateSlotRequest;
use crate::state::AppState;
use db::models::batch::Model as BatchModel;
use db::models::subject::Model as SubjectModel;
use db::models::teacher::Model as TeacherModel;
use db::models::timetable_slot::Model as SlotModel;

/// POST /api/timetable/teachers/{teacher_id}
///
/// Schedule a slot for a teacher. The only admission check is that the
/// class is free at (day, start_time); the teacher may be double-booked
/// across classes.
///
/// ### Responses
/// - `200 OK` with the created slot
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found` (unknown teacher, class or subject)
/// - `409 Conflict` (class already has a slot at this day and start time)
pub async fn create_slot(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
    Json(req): Json<CreateSlotRequest>,
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

    let db = state.db();

    match TeacherModel::find_by_id(db, teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Teacher not found")),
            )
                .into_response();
        }
        Err(err) => {
            return internal_error(err).into_response();
        }
    }

    match BatchModel::find_by_id(db, req.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Class not found")),
            )
                .into_response();
        }
        Err(err) => {
            return internal_error(err).into_response();
        }
    }

    match SubjectModel::find_by_id(db, req.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Subject not found")),
            )
                .into_response();
        }
        Err(err) => {
            return internal_error(err).into_response();
        }
    }

    match SlotModel::conflict_exists(db, req.class_id, &req.day, &req.start_time).await {
        Ok(true) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<Empty>::error(
                    "Slot already exists for this class at this time",
                )),
            )
                .into_response();
        }
        Ok(false) => {}
        Err(err) => {
            return internal_error(err).into_response();
        }
    }

    match SlotModel::create(
        db,
        teacher_id,
        req.class_id,
        req.subject_id,
        &req.day,
        &req.start_time,
        &req.end_time,
    )
    .await
    {
        Ok(slot) => (
            StatusCode::OK,
            Json(ApiResponse::success(slot, "Slot created successfully")),
        )
            .into_response(),
        Err(err) => internal_error(err).into_response(),
    }
}

fn internal_error(err: sea_orm::DbErr) -> (StatusCode, Json<ApiResponse<Empty>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(format!("Database error: {err}"))),
    )
}
