use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::notifications::common::SendNotificationRequest;
use crate::state::AppState;
use db::models::batch::Model as BatchModel;
use db::models::notification::{DEFAULT_CHANNEL, Model as NotificationModel};
use db::models::user::Model as UserModel;

/// POST /api/notifications
///
/// Sends a notification either directly to one user (`recipient_id`) or to
/// every active enrollment of a batch (`batch_id`). When both are given the
/// direct recipient takes precedence.
///
/// ### Responses
/// - `201 Created` with the created notification rows
/// - `400 Bad Request` (validation failure, or neither target given)
/// - `403 Forbidden` (coordinator targeting a batch they do not coordinate)
/// - `404 Not Found` (unknown recipient or batch)
pub async fn send_notification(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<SendNotificationRequest>,
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
    let channel = req.channel.as_deref().unwrap_or(DEFAULT_CHANNEL);

    if let Some(recipient_id) = req.recipient_id {
        match UserModel::find_by_id(db, recipient_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(ApiResponse::<Empty>::error("Recipient user not found")),
                )
                    .into_response();
            }
            Err(err) => {
                return internal_error(err).into_response();
            }
        }

        return match NotificationModel::create(db, recipient_id, &req.title, &req.message, channel)
            .await
        {
            Ok(notification) => (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    vec![notification],
                    "Notification sent",
                )),
            )
                .into_response(),
            Err(err) => internal_error(err).into_response(),
        };
    }

    let Some(batch_id) = req.batch_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(
                "recipient_id or batch_id is required",
            )),
        )
            .into_response();
    };

    let batch = match BatchModel::find_by_id(db, batch_id).await {
        Ok(Some(batch)) => batch,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Batch not found")),
            )
                .into_response();
        }
        Err(err) => {
            return internal_error(err).into_response();
        }
    };

    // Coordinators may only fan out to the batch they coordinate; admins
    // and teachers are unrestricted.
    let caller = match UserModel::find_by_id(db, claims.sub).await {
        Ok(Some(caller)) => caller,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<Empty>::error("Authentication required")),
            )
                .into_response();
        }
        Err(err) => {
            return internal_error(err).into_response();
        }
    };

    if caller.is_coordinator()
        && !caller.is_admin()
        && batch.coordinator_id.is_some_and(|id| id != caller.id)
    {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error(
                "Coordinator can send only to their own batch",
            )),
        )
            .into_response();
    }

    match NotificationModel::fan_out(db, batch_id, &req.title, &req.message, channel).await {
        Ok(notifications) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(notifications, "Notification sent")),
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
