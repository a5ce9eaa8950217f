use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::contents::common::ContentListQuery;
use crate::state::AppState;
use db::models::comment::Model as CommentModel;
use db::models::content::Model as ContentModel;
use db::models::enrollment::Model as EnrollmentModel;

/// GET /api/contents
///
/// Newest first, optionally filtered with `?batch_id=` and
/// `?only_public=true`.
pub async fn list_contents(
    State(state): State<AppState>,
    Query(query): Query<ContentListQuery>,
) -> impl IntoResponse {
    match ContentModel::list(state.db(), query.batch_id, query.only_public.unwrap_or(false)).await {
        Ok(contents) => (
            StatusCode::OK,
            Json(ApiResponse::success(contents, "Contents retrieved")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {err}"))),
        )
            .into_response(),
    }
}

/// GET /api/contents/{content_id}
///
/// Open content is visible to anyone. Batch-scoped content requires an
/// authenticated caller who is enrolled in the batch, uploaded the content,
/// or is an admin.
pub async fn get_content(
    State(state): State<AppState>,
    Path(content_id): Path<i64>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    let db = state.db();

    let content = match ContentModel::find_by_id(db, content_id).await {
        Ok(Some(content)) => content,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Content not found")),
            )
                .into_response();
        }
        Err(err) => {
            return internal_error(err).into_response();
        }
    };

    if let Some(batch_id) = content.batch_id {
        let Some(AuthUser(claims)) = user else {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<Empty>::error(
                    "Authentication required to view this content",
                )),
            )
                .into_response();
        };

        if !(claims.admin || content.uploader_id == claims.sub) {
            match EnrollmentModel::is_enrolled(db, claims.sub, batch_id).await {
                Ok(true) => {}
                Ok(false) => {
                    return (
                        StatusCode::FORBIDDEN,
                        Json(ApiResponse::<Empty>::error("Not enrolled in this batch")),
                    )
                        .into_response();
                }
                Err(err) => {
                    return internal_error(err).into_response();
                }
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(content, "Content retrieved")),
    )
        .into_response()
}

/// GET /api/contents/{content_id}/comments
///
/// Public comments, oldest first.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(content_id): Path<i64>,
) -> impl IntoResponse {
    let db = state.db();

    match ContentModel::find_by_id(db, content_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Content not found")),
            )
                .into_response();
        }
        Err(err) => {
            return internal_error(err).into_response();
        }
    }

    match CommentModel::public_for_content(db, content_id).await {
        Ok(comments) => (
            StatusCode::OK,
            Json(ApiResponse::success(comments, "Comments retrieved")),
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
