use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::notifications::common::LimitQuery;
use crate::state::AppState;
use db::models::notification::Model as NotificationModel;

/// GET /api/notifications/me
///
/// The caller's notifications, newest first, capped at `?limit=` (100 by
/// default).
pub async fn my_notifications(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    match NotificationModel::for_recipient(state.db(), claims.sub, query.limit_or_default()).await {
        Ok(notifications) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                notifications,
                "Notifications retrieved",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
        )
            .into_response(),
    }
}
