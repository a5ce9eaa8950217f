use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::state::AppState;
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use self::delete::delete_batch;
use get::{get_batch, list_batches};
use post::create_batch;
use put::update_batch;

pub fn batch_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_batch).route_layer(from_fn(allow_admin)))
        .route("/", get(list_batches))
        .route("/{batch_id}", get(get_batch))
        // Update/delete check existence before the role, so the guard only
        // enforces authentication here.
        .route(
            "/{batch_id}",
            put(update_batch).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{batch_id}",
            delete(delete_batch).route_layer(from_fn(allow_authenticated)),
        )
}
