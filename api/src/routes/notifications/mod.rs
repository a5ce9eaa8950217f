use crate::auth::guards::{allow_admin, allow_authenticated, require_staff};
use crate::state::AppState;
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use self::delete::delete_notification;
use get::my_notifications;
use post::send_notification;
use put::mark_read;

pub fn notification_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(send_notification)
                .route_layer(from_fn_with_state(app_state.clone(), require_staff)),
        )
        .route(
            "/me",
            get(my_notifications).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{notification_id}/read",
            put(mark_read).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{notification_id}",
            delete(delete_notification).route_layer(from_fn(allow_admin)),
        )
}
