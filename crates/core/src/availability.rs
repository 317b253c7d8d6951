//! Per-user channel/event availability filtering.
//!
//! Availability decides whether a combination is *offered* at all, which is
//! distinct from whether the user has *enabled* it: combinations that are
//! not available never appear on the preference form, and their settings
//! default to enabled on extraction.

use std::sync::Arc;

use crate::catalog::EventCatalog;
use crate::types::DbId;

/// Decides which channel/event combinations may be shown to a user.
pub trait AvailabilityFilter {
    /// Whether the channel (and optionally a specific event on it) may be
    /// offered to the user. `event = None` asks about the channel master
    /// toggle.
    fn is_available(&self, user_id: DbId, channel: &str, event: Option<&str>) -> bool;
}

/// Availability answered from the catalog's per-event channel restrictions.
///
/// Ignores the user: restrictions apply to everyone. Deployments with
/// per-user gating (plan tiers, feature flags) substitute their own filter.
pub struct CatalogAvailability {
    catalog: Arc<EventCatalog>,
}

impl CatalogAvailability {
    pub fn new(catalog: Arc<EventCatalog>) -> Self {
        Self { catalog }
    }
}

impl AvailabilityFilter for CatalogAvailability {
    fn is_available(&self, _user_id: DbId, channel: &str, event: Option<&str>) -> bool {
        if !self.catalog.has_channel(channel) {
            return false;
        }
        match event {
            None => true,
            Some(key) => self
                .catalog
                .get(key)
                .is_some_and(|def| def.offered_on(channel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventDef;

    fn filter() -> CatalogAvailability {
        let catalog = EventCatalog {
            channels: vec!["web".to_string(), "email".to_string()],
            events: vec![
                EventDef {
                    key: "new_follower".to_string(),
                    template: "%(actor)s started following you".to_string(),
                    channels: None,
                },
                EventDef {
                    key: "digest_ready".to_string(),
                    template: "Your weekly digest is ready".to_string(),
                    channels: Some(vec!["email".to_string()]),
                },
            ],
        };
        CatalogAvailability::new(Arc::new(catalog))
    }

    #[test]
    fn configured_channels_are_available() {
        let filter = filter();
        assert!(filter.is_available(1, "web", None));
        assert!(filter.is_available(1, "email", None));
        assert!(!filter.is_available(1, "sms", None));
    }

    #[test]
    fn unrestricted_event_is_available_everywhere() {
        let filter = filter();
        assert!(filter.is_available(1, "web", Some("new_follower")));
        assert!(filter.is_available(1, "email", Some("new_follower")));
    }

    #[test]
    fn restricted_event_is_limited_to_its_channels() {
        let filter = filter();
        assert!(filter.is_available(1, "email", Some("digest_ready")));
        assert!(!filter.is_available(1, "web", Some("digest_ready")));
    }

    #[test]
    fn unknown_event_is_never_available() {
        let filter = filter();
        assert!(!filter.is_available(1, "web", Some("missing")));
    }
}
