//! Notification entity model.

use courier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// `event` is a catalog key; `actor_id`, `object_id` and `target_id` are
/// only populated when the event's template references the matching
/// placeholder.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub recipient_id: DbId,
    pub event: String,
    pub actor_id: Option<DbId>,
    pub object_id: Option<DbId>,
    pub target_id: Option<DbId>,
    pub details: Option<String>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
