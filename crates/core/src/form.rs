//! Preference form synthesis, layout, and submission extraction.
//!
//! The preference form is a channel × event grid of boolean toggles: a
//! header row of per-channel master toggles and one row per event holding a
//! toggle for each channel the event is available on. Field names are
//! deterministic so a submission can be folded back into a
//! [`NotificationSettings`] without any per-request state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::availability::AvailabilityFilter;
use crate::catalog::EventCatalog;
use crate::channels;
use crate::settings::NotificationSettings;
use crate::template;
use crate::types::DbId;

/// A single boolean toggle in the preference form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleField {
    /// Submission name: the channel key for master toggles,
    /// `{channel}_{event key}` for per-event toggles.
    pub name: String,
    /// Display label for the toggle (the channel label).
    pub label: String,
    /// Current value from the user's stored settings.
    pub initial: bool,
}

/// One event row in the rendered grid.
#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
    /// Lowercased event key.
    pub event: String,
    /// Short label derived from the event template.
    pub label: String,
    /// One toggle per available channel, in channel order.
    pub fields: Vec<ToggleField>,
}

/// The assembled preference form grid.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceForm {
    /// Header row: channel master toggles, in channel order.
    pub channel_fields: Vec<ToggleField>,
    /// One row per event with at least one available channel.
    pub rows: Vec<EventRow>,
}

/// Submission field name for a (channel, event) toggle.
pub fn field_name(channel: &str, event_key: &str) -> String {
    format!("{channel}_{}", event_key.to_lowercase())
}

impl PreferenceForm {
    /// Synthesize the form for one user.
    ///
    /// Channels and events the availability filter rejects produce no
    /// fields; an event with no available channel produces no row. Initial
    /// values come from the stored settings with the channel master flag
    /// bypassed, so each toggle shows its own stored flag.
    pub fn build(
        catalog: &EventCatalog,
        filter: &dyn AvailabilityFilter,
        user_id: DbId,
        saved: &NotificationSettings,
    ) -> Self {
        let channel_fields = catalog
            .channels
            .iter()
            .filter(|channel| filter.is_available(user_id, channel, None))
            .map(|channel| ToggleField {
                name: channel.clone(),
                label: channels::display_label(channel),
                initial: saved.is_enabled(channel, None, true),
            })
            .collect();

        let mut rows = Vec::new();
        for def in &catalog.events {
            let fields: Vec<ToggleField> = catalog
                .channels
                .iter()
                .filter(|channel| filter.is_available(user_id, channel, Some(&def.key)))
                .map(|channel| ToggleField {
                    name: field_name(channel, &def.key),
                    label: channels::display_label(channel),
                    initial: saved.is_enabled(channel, Some(&def.key), true),
                })
                .collect();

            if !fields.is_empty() {
                rows.push(EventRow {
                    event: def.key.to_lowercase(),
                    label: template::short_label(&def.template),
                    fields,
                });
            }
        }

        Self {
            channel_fields,
            rows,
        }
    }
}

/// Fold a submitted toggle map back into the nested settings structure.
///
/// Every configured channel and (channel, event) pair gets an entry; fields
/// absent from the submission — including combinations that were never
/// offered — default to enabled.
pub fn extract_settings(
    catalog: &EventCatalog,
    submission: &BTreeMap<String, bool>,
) -> NotificationSettings {
    let mut settings = NotificationSettings::default();

    for channel in &catalog.channels {
        settings.channels.insert(
            channel.clone(),
            submission.get(channel).copied().unwrap_or(true),
        );

        let per_event = settings.events.entry(channel.clone()).or_default();
        for def in &catalog.events {
            per_event.insert(
                def.key.to_lowercase(),
                submission
                    .get(&field_name(channel, &def.key))
                    .copied()
                    .unwrap_or(true),
            );
        }
    }

    settings
}
