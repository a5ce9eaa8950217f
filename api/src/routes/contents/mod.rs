use crate::auth::guards::{allow_authenticated, require_teacher_or_admin};
use crate::state::AppState;
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post},
};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

use self::delete::delete_comment;
use get::{get_content, list_comments, list_contents};
use post::{create_comment, upload_content};

pub fn content_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(upload_content)
                .route_layer(from_fn_with_state(app_state.clone(), require_teacher_or_admin)),
        )
        .route("/", get(list_contents))
        .route("/{content_id}", get(get_content))
        .route("/{content_id}/comments", get(list_comments))
        .route(
            "/{content_id}/comments",
            post(create_comment).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/comments/{comment_id}",
            delete(delete_comment).route_layer(from_fn(allow_authenticated)),
        )
}
