use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::comment::Model as CommentModel;

/// DELETE /api/contents/comments/{comment_id}
///
/// Author-or-admin.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = state.db();

    let comment = match CommentModel::find_by_id(db, comment_id).await {
        Ok(Some(comment)) => comment,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Comment not found")),
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

    if !(claims.admin || comment.author_id == claims.sub) {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error(
                "Not authorized to delete this comment",
            )),
        )
            .into_response();
    }

    match CommentModel::delete(db, comment_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to delete comment: {err}"
            ))),
        )
            .into_response(),
    }
}
