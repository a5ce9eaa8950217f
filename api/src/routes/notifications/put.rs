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
use crate::state::AppState;
use db::models::notification::{ActiveModel as NotificationActiveModel, Model as NotificationModel};

/// PUT /api/notifications/{notification_id}/read
///
/// Marks a notification as read. Idempotent; only the recipient or an admin
/// may flip the flag.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = state.db();

    let notification = match NotificationModel::find_by_id(db, notification_id).await {
        Ok(Some(notification)) => notification,
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
    };

    if !(claims.admin || notification.recipient_id == claims.sub) {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("Not authorized")),
        )
            .into_response();
    }

    let mut am: NotificationActiveModel = notification.into();
    am.is_read = Set(true);

    match am.update(db).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Notification marked as read")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to update notification: {err}"
            ))),
        )
            .into_response(),
    }
}
