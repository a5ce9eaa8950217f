use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::notification::Model as NotificationModel;

/// DELETE /api/notifications/{notification_id} (admin only, via guard)
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<i64>,
) -> impl IntoResponse {
    let db = state.db();

    match NotificationModel::find_by_id(db, notification_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Notification not found")),
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

    match NotificationModel::delete(db, notification_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to delete notification: {err}"
            ))),
        )
            .into_response(),
    }
}
