use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::contents::common::{CreateCommentRequest, UploadContentRequest};
use crate::state::AppState;
use db::models::batch::Model as BatchModel;
use db::models::comment::Model as CommentModel;
use db::models::content::{ContentType, Model as ContentModel};
use db::models::enrollment::Model as EnrollmentModel;

/// POST /api/contents
///
/// Uploads a content record (the file itself lives at `storage_url`).
/// Teacher-or-admin via the route guard.
pub async fn upload_content(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UploadContentRequest>,
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

    if let Some(batch_id) = req.batch_id {
        match BatchModel::find_by_id(db, batch_id).await {
            Ok(Some(_)) => {}
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
        }
    }

    match ContentModel::create(
        db,
        &req.title,
        req.description.as_deref().unwrap_or(""),
        &req.storage_url,
        req.content_type.unwrap_or(ContentType::Video),
        claims.sub,
        req.batch_id,
    )
    .await
    {
        Ok(content) => (
            StatusCode::OK,
            Json(ApiResponse::success(content, "Content uploaded successfully")),
        )
            .into_response(),
        Err(err) => internal_error(err).into_response(),
    }
}

/// POST /api/contents/{content_id}/comments
///
/// Commenting on batch-scoped content requires an active enrollment in that
/// batch (admins are exempt); open content accepts any authenticated user.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(content_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateCommentRequest>,
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
        if !claims.admin {
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

    match CommentModel::create(db, content_id, claims.sub, &req.text).await {
        Ok(comment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(comment, "Comment added")),
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
