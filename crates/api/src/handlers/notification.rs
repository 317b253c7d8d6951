//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use courier_core::error::CoreError;
use courier_core::form::{self, PreferenceForm};
use courier_core::settings::NotificationSettings;
use courier_core::types::DbId;
use courier_db::repositories::{NotificationRepo, SettingsRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 50;

/// Payload for `GET /notifications/settings`.
#[derive(Debug, Serialize)]
pub struct SettingsView {
    /// The assembled preference form grid for this user.
    pub form: PreferenceForm,
    /// The stored settings structure the form was built from.
    pub settings: NotificationSettings,
}

// ---------------------------------------------------------------------------
// Notification CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications
///
/// List the authenticated user's notifications with optional filtering.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);
    let unread_only = params.unread_only.unwrap_or(false);

    let notifications =
        NotificationRepo::list_for_user(&state.pool, auth.user_id, unread_only, limit, offset)
            .await?;

    Ok(Json(serde_json::json!({ "data": notifications })))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a single notification as read. Returns 204 No Content on success,
/// or 404 if the notification does not belong to the authenticated user.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NotificationRepo::mark_read(&state.pool, notification_id, auth.user_id).await?;

    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id: notification_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/read-all
///
/// Mark all of the authenticated user's notifications as read.
/// Returns the number of notifications that were marked.
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = NotificationRepo::mark_all_read(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "marked_read": count }
    })))
}

/// GET /api/v1/notifications/unread-count
///
/// Return the number of unread notifications for the authenticated user.
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = NotificationRepo::unread_count(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "count": count }
    })))
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications/settings
///
/// Return the preference form grid for the authenticated user (channel
/// master toggles plus one row per available event) alongside the stored
/// settings structure it was built from.
pub async fn get_settings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SettingsView>>> {
    let saved = SettingsRepo::load_for_user(&state.pool, auth.user_id).await?;
    let form = PreferenceForm::build(
        &state.catalog,
        state.availability.as_ref(),
        auth.user_id,
        &saved,
    );

    Ok(Json(DataResponse {
        data: SettingsView {
            form,
            settings: saved,
        },
    }))
}

/// PUT /api/v1/notifications/settings
///
/// Accept a flat map of submitted toggle fields (`{"web": true,
/// "email_new_follower": false, ...}`), fold it into the nested settings
/// structure and persist it. Fields absent from the submission default to
/// enabled.
pub async fn update_settings(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(submission): Json<BTreeMap<String, bool>>,
) -> AppResult<Json<DataResponse<NotificationSettings>>> {
    let settings = form::extract_settings(&state.catalog, &submission);
    SettingsRepo::upsert(&state.pool, auth.user_id, &settings).await?;

    Ok(Json(DataResponse { data: settings }))
}
