use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::timetable::common::DayFilter;
use crate::state::AppState;
use db::models::student::Model as StudentModel;
use db::models::teacher::Model as TeacherModel;
use db::models::timetable_slot::Model as SlotModel;

/// GET /api/timetable/teachers/me
///
/// Slots taught by the calling user's teacher profile, optionally filtered
/// with `?day=Monday`, ordered by (day, start_time).
pub async fn my_teacher_slots(
    State(state): State<AppState>,
    Query(filter): Query<DayFilter>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = state.db();

    let teacher = match TeacherModel::find_by_user(db, claims.sub).await {
        Ok(Some(teacher)) => teacher,
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
                Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
            )
                .into_response();
        }
    };

    match SlotModel::for_teacher(db, teacher.id, filter.day.as_deref()).await {
        Ok(slots) => (
            StatusCode::OK,
            Json(ApiResponse::success(slots, "Slots retrieved")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
        )
            .into_response(),
    }
}

/// GET /api/timetable/classes/me
///
/// Slots of the calling student's class. 404 without a student profile,
/// 400 when the student has no assigned class.
pub async fn my_class_slots(
    State(state): State<AppState>,
    Query(filter): Query<DayFilter>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = state.db();

    let student = match StudentModel::find_by_user(db, claims.sub).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Student not found")),
            )
                .into_response();
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
            )
                .into_response();
        }
    };

    let Some(class_id) = student.class_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error("Student has no class")),
        )
            .into_response();
    };

    match SlotModel::for_class(db, class_id, filter.day.as_deref()).await {
        Ok(slots) => (
            StatusCode::OK,
            Json(ApiResponse::success(slots, "Slots retrieved")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
        )
            .into_response(),
    }
}

/// GET /api/timetable/{slot_id}
pub async fn get_slot(State(state): State<AppState>, Path(slot_id): Path<i64>) -> impl IntoResponse {
    match SlotModel::find_by_id(state.db(), slot_id).await {
        Ok(Some(slot)) => (
            StatusCode::OK,
            Json(ApiResponse::success(slot, "Slot retrieved")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Slot not found")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
        )
            .into_response(),
    }
}
