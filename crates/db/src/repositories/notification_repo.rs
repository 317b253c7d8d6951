//! Repository for the `notifications` table.

use courier_core::draft::NotificationDraft;
use courier_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const NOTIFICATION_COLUMNS: &str = "id, recipient_id, event, actor_id, object_id, target_id, \
    details, is_read, read_at, created_at";

/// Provides CRUD operations for notification records.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a validated admin-authored draft, returning the stored row.
    ///
    /// The event key is lowercased on insert so it matches the keys used by
    /// the settings structure.
    pub async fn create(pool: &PgPool, draft: &NotificationDraft) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications \
                (recipient_id, event, actor_id, object_id, target_id, details) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(draft.recipient_id)
            .bind(draft.event.to_lowercase())
            .bind(draft.actor_id)
            .bind(draft.object_id)
            .bind(draft.target_id)
            .bind(&draft.details)
            .fetch_one(pool)
            .await
    }

    /// List a user's notifications, newest first, with optional unread
    /// filtering.
    pub async fn list_for_user(
        pool: &PgPool,
        recipient_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications \
             WHERE recipient_id = $1 AND ($2 = false OR is_read = false) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_id)
            .bind(unread_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a single notification as read. Returns `false` when the row
    /// does not exist or belongs to another user.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        recipient_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true, read_at = NOW() \
             WHERE id = $1 AND recipient_id = $2 AND is_read = false",
        )
        .bind(notification_id)
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all of a user's notifications as read, returning the count.
    pub async fn mark_all_read(pool: &PgPool, recipient_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true, read_at = NOW() \
             WHERE recipient_id = $1 AND is_read = false",
        )
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count a user's unread notifications.
    pub async fn unread_count(pool: &PgPool, recipient_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND is_read = false",
        )
        .bind(recipient_id)
        .fetch_one(pool)
        .await
    }
}
