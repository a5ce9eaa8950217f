//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by resource, each protected via the access control
//! middleware it needs:
//! - `/health` → Health check endpoint (public)
//! - `/batches` → Batch CRUD (reads public, mutations admin)
//! - `/allotment` → Teacher-to-batch allotment (admin)
//! - `/timetable` → Slot CRUD and per-caller listings
//! - `/contents` → Content upload, listing and comments
//! - `/notifications` → Direct and batch fan-out notifications

use crate::routes::{
    allotment::allotment_routes, batches::batch_routes, contents::content_routes,
    health::health_routes, notifications::notification_routes, timetable::timetable_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod allotment;
pub mod batches;
pub mod contents;
pub mod health;
pub mod notifications;
pub mod timetable;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/batches", batch_routes())
        .nest("/allotment", allotment_routes())
        .nest("/timetable", timetable_routes())
        .nest("/contents", content_routes(app_state.clone()))
        .nest("/notifications", notification_routes(app_state.clone()))
        .with_state(app_state)
}
