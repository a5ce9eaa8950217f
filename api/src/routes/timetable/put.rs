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
use crate::routes::timetable::common::{UpdateSlotRequest, slot_mutation_allowed};
use crate::state::AppState;
use db::models::timetable_slot::{ActiveModel as SlotActiveModel, Model as SlotModel};

/// PUT /api/timetable/{slot_id}
///
/// Partial update of a slot; only the provided fields are overwritten.
/// Allowed for an admin or the slot teacher's linked user.
pub async fn update_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateSlotRequest>,
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

    // The merged (class, day, start_time) key must stay free; a slot keeping
    // its own key is not a conflict with itself.
    let new_class = req.class_id.unwrap_or(existing.class_id);
    let new_day = req.day.as_deref().unwrap_or(&existing.day).to_owned();
    let new_start = req
        .start_time
        .as_deref()
        .unwrap_or(&existing.start_time)
        .to_owned();
    let key_changed = new_class != existing.class_id
        || new_day != existing.day
        || new_start != existing.start_time;
    if key_changed {
        match SlotModel::conflict_exists(db, new_class, &new_day, &new_start).await {
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
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
                )
                    .into_response();
            }
        }
    }

    let mut am: SlotActiveModel = existing.into();
    if let Some(class_id) = req.class_id {
        am.class_id = Set(class_id);
    }
    if let Some(subject_id) = req.subject_id {
        am.subject_id = Set(subject_id);
    }
    if let Some(day) = req.day {
        am.day = Set(day);
    }
    if let Some(start_time) = req.start_time {
        am.start_time = Set(start_time);
    }
    if let Some(end_time) = req.end_time {
        am.end_time = Set(end_time);
    }

    match am.update(db).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Slot updated successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to update slot: {err}"
            ))),
        )
            .into_response(),
    }
}
