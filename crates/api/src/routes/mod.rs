pub mod admin;
pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notifications                       list (?unread_only, limit, offset)
/// /notifications/read-all              mark all read (POST)
/// /notifications/unread-count          unread count (GET)
/// /notifications/{id}/read             mark read (POST)
/// /notifications/settings              get/update settings (GET, PUT)
///
/// /admin/notifications                 author a notification (POST)
/// /admin/notifications/events          event catalog (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Notifications and preference settings.
        .nest("/notifications", notification::router())
        // Admin authoring surface.
        .nest("/admin/notifications", admin::router())
}
