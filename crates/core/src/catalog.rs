//! Configured event catalog: the channel list and event definitions.
//!
//! The catalog is deployment configuration, not data owned by this service.
//! It is loaded once at startup from a JSON document and shared immutably:
//!
//! ```json
//! {
//!   "channels": ["web", "email", "push"],
//!   "events": [
//!     {"key": "new_follower", "template": "%(actor)s started following you"},
//!     {"key": "digest_ready", "template": "Your weekly digest is ready", "channels": ["email"]}
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::channels;
use crate::error::CoreError;
use crate::template;

/// A single configured notification event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    /// Stable identifier key, e.g. `"new_follower"`.
    pub key: String,
    /// Localized display template; may contain `%(object)s`-style placeholders.
    pub template: String,
    /// Channels this event may be offered on. `None` means all configured
    /// channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
}

impl EventDef {
    /// Whether this event may be offered on the given channel.
    pub fn offered_on(&self, channel: &str) -> bool {
        match &self.channels {
            Some(restricted) => restricted.iter().any(|c| c == channel),
            None => true,
        }
    }
}

/// The full configured catalog of channels and events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCatalog {
    /// Delivery channels, in display order.
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,
    /// Configured events, in display order.
    #[serde(default)]
    pub events: Vec<EventDef>,
}

fn default_channels() -> Vec<String> {
    channels::DEFAULT_CHANNELS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            events: Vec::new(),
        }
    }
}

impl EventCatalog {
    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Invalid event catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!(
                "Cannot read event catalog at {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// Check structural invariants: a non-empty channel list, unique event
    /// keys, and channel restrictions that only name configured channels.
    fn validate(&self) -> Result<(), CoreError> {
        if self.channels.is_empty() {
            return Err(CoreError::Config(
                "Event catalog must configure at least one channel".to_string(),
            ));
        }

        for (index, def) in self.events.iter().enumerate() {
            if def.key.is_empty() {
                return Err(CoreError::Config(format!(
                    "Event at index {index} has an empty key"
                )));
            }
            if self.events[..index]
                .iter()
                .any(|other| other.key.eq_ignore_ascii_case(&def.key))
            {
                return Err(CoreError::Config(format!(
                    "Duplicate event key '{}'",
                    def.key
                )));
            }
            if let Some(restricted) = &def.channels {
                for channel in restricted {
                    if !self.channels.iter().any(|c| c == channel) {
                        return Err(CoreError::Config(format!(
                            "Event '{}' is restricted to unknown channel '{channel}'",
                            def.key
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Look up an event definition by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&EventDef> {
        self.events.iter().find(|e| e.key.eq_ignore_ascii_case(key))
    }

    /// The display template for an event key, if configured.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.get(key).map(|e| e.template.as_str())
    }

    /// Whether the channel key is part of the configured list.
    pub fn has_channel(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c == channel)
    }

    /// `(key, short label)` pairs for every configured event, in catalog
    /// order, with placeholders stripped from the labels.
    pub fn labels(&self) -> Vec<(String, String)> {
        self.events
            .iter()
            .map(|e| (e.key.clone(), template::short_label(&e.template)))
            .collect()
    }
}
