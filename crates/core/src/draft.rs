//! Admin-authored notification drafts and conditional validation.
//!
//! A draft carries an event key plus optional context references. Which of
//! those references are required depends entirely on the selected event's
//! display template: a field is mandatory exactly when the template
//! mentions the matching placeholder.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::EventCatalog;
use crate::template;
use crate::types::DbId;

/// Error message for a context field the selected event's template requires.
const REQUIRED_FOR_EVENT: &str = "This field is required for the selected event.";

/// A field-scoped validation error surfaced back to the submitting admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// An admin-authored notification before persistence.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NotificationDraft {
    /// Event key from the catalog.
    #[validate(length(min = 1, message = "Event is required."))]
    pub event: String,
    /// Receiving user.
    pub recipient_id: DbId,
    /// User who triggered the event; required when the template mentions
    /// `%(actor)s` or `%(actor)r`.
    #[serde(default)]
    pub actor_id: Option<DbId>,
    /// Primary object reference; required when the template mentions
    /// `%(object)s` or `%(object)r`.
    #[serde(default)]
    pub object_id: Option<DbId>,
    /// Secondary target reference; required when the template mentions
    /// `%(target)s` or `%(target)r`.
    #[serde(default)]
    pub target_id: Option<DbId>,
    /// Optional free-text detail shown with the notification.
    #[serde(default)]
    #[validate(length(max = 1000, message = "Details must be at most 1000 characters."))]
    pub details: Option<String>,
}

impl NotificationDraft {
    /// Conditional validation against the selected event's template.
    ///
    /// Returns an empty `Vec` if the draft is valid. An event key missing
    /// from the catalog is itself a field error on `event`; no context
    /// checks run in that case because there is no template to consult.
    pub fn validate_against(&self, catalog: &EventCatalog) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let Some(display) = catalog.template(&self.event) else {
            errors.push(FieldError::new("event", "Unknown event type."));
            return errors;
        };

        let context = [
            ("object_id", self.object_id, "object"),
            ("target_id", self.target_id, "target"),
            ("actor_id", self.actor_id, "actor"),
        ];
        for (field, value, placeholder) in context {
            if value.is_none() && template::mentions(display, placeholder) {
                errors.push(FieldError::new(field, REQUIRED_FOR_EVENT));
            }
        }

        errors
    }
}
