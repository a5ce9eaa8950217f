use crate::auth::guards::allow_authenticated;
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

use self::delete::delete_slot;
use get::{get_slot, my_class_slots, my_teacher_slots};
use post::create_slot;
use put::update_slot;

pub fn timetable_routes() -> Router<AppState> {
    Router::new()
        // Slot creation carries no auth requirement, matching the admin
        // tooling that drives it.
        .route("/teachers/{teacher_id}", post(create_slot))
        .route(
            "/teachers/me",
            get(my_teacher_slots).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/classes/me",
            get(my_class_slots).route_layer(from_fn(allow_authenticated)),
        )
        .route("/{slot_id}", get(get_slot))
        .route(
            "/{slot_id}",
            put(update_slot).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{slot_id}",
            delete(delete_slot).route_layer(from_fn(allow_authenticated)),
        )
}
