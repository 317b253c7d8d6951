//! Route definitions for the `/admin/notifications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin/notifications`.
///
/// ```text
/// POST   /        -> create_notification
/// GET    /events  -> list_events
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(admin::create_notification))
        .route("/events", get(admin::list_events))
}
