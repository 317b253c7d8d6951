//! Repository for the `user_notification_settings` table.

use courier_core::settings::NotificationSettings;
use courier_core::types::DbId;
use sqlx::PgPool;

use crate::models::settings::UserNotificationSettings;

/// Column list for `user_notification_settings` queries.
const SETTINGS_COLUMNS: &str = "id, user_id, settings, created_at, updated_at";

/// Provides read/write operations for per-user notification settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Get the stored settings row for a user, if one exists.
    pub async fn get_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserNotificationSettings>, sqlx::Error> {
        let query =
            format!("SELECT {SETTINGS_COLUMNS} FROM user_notification_settings WHERE user_id = $1");
        sqlx::query_as::<_, UserNotificationSettings>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Load a user's settings, falling back to the all-enabled default when
    /// no row exists or the stored payload does not deserialize.
    pub async fn load_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<NotificationSettings, sqlx::Error> {
        let row = Self::get_for_user(pool, user_id).await?;
        Ok(row
            .and_then(|r| match serde_json::from_value(r.settings) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::warn!(user_id, error = %e, "Stored settings payload is malformed, using defaults");
                    None
                }
            })
            .unwrap_or_default())
    }

    /// Insert or replace a user's settings payload.
    ///
    /// Uses `INSERT ... ON CONFLICT (user_id) DO UPDATE` to upsert in a
    /// single round-trip.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        settings: &NotificationSettings,
    ) -> Result<UserNotificationSettings, sqlx::Error> {
        let payload = serde_json::to_value(settings)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let query = format!(
            "INSERT INTO user_notification_settings (user_id, settings) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE SET \
                settings = EXCLUDED.settings, \
                updated_at = NOW() \
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, UserNotificationSettings>(&query)
            .bind(user_id)
            .bind(payload)
            .fetch_one(pool)
            .await
    }
}
