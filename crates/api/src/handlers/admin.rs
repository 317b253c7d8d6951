//! Handlers for the `/admin/notifications` resource.
//!
//! Admin routing is enforced by the fronting gateway; these handlers trust
//! that only operators reach them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use courier_core::draft::NotificationDraft;
use courier_core::template;
use courier_db::repositories::NotificationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/admin/notifications/events
///
/// The configured event catalog: channels, per-event templates, derived
/// labels, and the placeholder names each template references (i.e. the
/// context fields a draft for that event must supply).
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let events: Vec<serde_json::Value> = state
        .catalog
        .events
        .iter()
        .map(|def| {
            serde_json::json!({
                "key": def.key,
                "template": def.template,
                "label": template::short_label(&def.template),
                "channels": def.channels,
                "placeholders": template::placeholder_names(&def.template),
            })
        })
        .collect();

    Ok(Json(serde_json::json!({
        "data": {
            "channels": state.catalog.channels,
            "events": events,
        }
    })))
}

/// POST /api/v1/admin/notifications
///
/// Author a notification. Flat constraints run first, then the conditional
/// rules: each context reference is required exactly when the selected
/// event's template mentions the matching placeholder. Returns the stored
/// row with HTTP 201, or a field-error response.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(input): Json<NotificationDraft>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    input.validate()?;

    let errors = input.validate_against(&state.catalog);
    if !errors.is_empty() {
        return Err(AppError::FieldErrors(errors));
    }

    let notification = NotificationRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": notification })),
    ))
}
