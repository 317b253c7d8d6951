//! Well-known notification channel name constants.
//!
//! These must match the channel keys used in the event catalog, the stored
//! settings structure, and the preference form field names.

/// In-browser notification shown in the notification bell UI.
pub const CHANNEL_WEB: &str = "web";

/// Email notification delivered via SMTP.
pub const CHANNEL_EMAIL: &str = "email";

/// Mobile/desktop push notification.
pub const CHANNEL_PUSH: &str = "push";

/// Channels offered when the event catalog does not configure its own list.
pub const DEFAULT_CHANNELS: &[&str] = &[CHANNEL_WEB, CHANNEL_EMAIL, CHANNEL_PUSH];

/// Human-readable toggle label for a channel key.
///
/// Unknown channels fall back to the key with its first letter uppercased.
pub fn display_label(channel: &str) -> String {
    match channel {
        CHANNEL_WEB => "Web".to_string(),
        CHANNEL_EMAIL => "E-mail".to_string(),
        CHANNEL_PUSH => "Push".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}
