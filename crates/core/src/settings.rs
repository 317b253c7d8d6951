//! The nested per-user notification settings structure.
//!
//! This is the shape produced by preference form submission and persisted
//! as a JSONB payload:
//!
//! ```json
//! {
//!   "channels": {"web": true, "email": false, "push": true},
//!   "events": {"web": {"new_follower": false}, "email": {}, "push": {}}
//! }
//! ```
//!
//! Every lookup defaults to enabled: a user who never saved settings, or a
//! combination that was never offered to them, receives notifications.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-user notification preference flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Master toggle per channel.
    #[serde(default)]
    pub channels: BTreeMap<String, bool>,
    /// Per-event toggles, keyed by channel then lowercased event key.
    #[serde(default)]
    pub events: BTreeMap<String, BTreeMap<String, bool>>,
}

impl NotificationSettings {
    /// The master flag for a channel; absent means enabled.
    pub fn channel_enabled(&self, channel: &str) -> bool {
        self.channels.get(channel).copied().unwrap_or(true)
    }

    /// The per-event flag for a (channel, event) pair; absent means enabled.
    pub fn event_enabled(&self, channel: &str, event: &str) -> bool {
        self.events
            .get(channel)
            .and_then(|per_event| per_event.get(&event.to_lowercase()))
            .copied()
            .unwrap_or(true)
    }

    /// Resolve whether a notification is enabled.
    ///
    /// The channel master flag gates everything unless `bypass_channel` is
    /// set (the preference form uses the bypass to show each stored flag
    /// as-is). With an event, the per-event flag decides; without one, the
    /// channel master flag does.
    pub fn is_enabled(&self, channel: &str, event: Option<&str>, bypass_channel: bool) -> bool {
        if !bypass_channel && !self.channel_enabled(channel) {
            return false;
        }
        match event {
            Some(event) => self.event_enabled(channel, event),
            None => self.channel_enabled(channel),
        }
    }
}
