use crate::auth::guards::allow_admin;
use crate::state::AppState;
use axum::{Router, middleware::from_fn, routing::post};

pub mod common;
pub mod post;

use self::post::allot_teacher_to_batch;

pub fn allotment_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        post(allot_teacher_to_batch).route_layer(from_fn(allow_admin)),
    )
}
