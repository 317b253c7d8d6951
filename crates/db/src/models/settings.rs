//! Per-user notification settings model.

use courier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_notification_settings` table.
///
/// `settings` holds the nested
/// `{channels: {channel: bool}, events: {channel: {event: bool}}}`
/// structure as JSONB; it deserializes into
/// [`courier_core::settings::NotificationSettings`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserNotificationSettings {
    pub id: DbId,
    pub user_id: DbId,
    pub settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
