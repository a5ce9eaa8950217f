use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::timetable::common::slot_mutation_allowed;
use crate::state::AppState;
use db::models::timetable_slot::Model as SlotModel;

/// DELETE /api/timetable/{slot_id}
///
/// Allowed for an admin or the slot teacher's linked user.
pub async fn delete_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = state.db();

    let existing = match SlotModel::find_by_id(db, slot_id).await {
        Ok(Some(slot)) => slot,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Slot not found")),
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

    match slot_mutation_allowed(db, &existing, &claims).await {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<Empty>::error("Not allowed")),
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
    }

    match SlotModel::delete(db, slot_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Slot deleted")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to delete slot: {err}"
            ))),
        )
            .into_response(),
    }
}
