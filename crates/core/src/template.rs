//! Event template placeholder parsing and label derivation.
//!
//! Event display templates use `%(name)s` / `%(name)r` substitution slots,
//! optionally wrapped in quotes, e.g. `'%(actor)s commented on "%(object)s"'`.
//! The preference form shows each event as a short label with the slots
//! stripped out; the admin form uses the slots to decide which context
//! fields are required.

use std::sync::OnceLock;

use regex::Regex;

/// Matches one placeholder, including surrounding double quotes if present.
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""?%\((\w+)\)[sr]"?"#).expect("placeholder regex is valid"))
}

/// Derive a short human-readable label from an event display template.
///
/// Removes all placeholders, collapses leftover quote pairs, trims leading
/// and trailing spaces, colons and periods, and collapses internal
/// whitespace runs to single spaces. Malformed templates degrade to
/// whatever text remains after stripping. The result is stable under
/// re-normalization.
///
/// # Examples
///
/// ```
/// use courier_core::template::short_label;
///
/// assert_eq!(short_label("%(actor)s liked %(object)s"), "liked");
/// assert_eq!(short_label("New comment on \"%(object)s\":"), "New comment on");
/// assert_eq!(short_label("New feature released"), "New feature released");
/// ```
pub fn short_label(template: &str) -> String {
    let stripped = placeholder_re().replace_all(template, "");
    let cleaned = stripped.replace("''", "").replace("\"\"", "");
    let trimmed = cleaned.trim_matches([' ', ':', '.']);
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the template references the named placeholder in either the
/// `%(name)s` or `%(name)r` form.
pub fn mentions(template: &str, name: &str) -> bool {
    template.contains(&format!("%({name})s")) || template.contains(&format!("%({name})r"))
}

/// All placeholder names referenced by the template, in order of first
/// appearance, without duplicates.
pub fn placeholder_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in placeholder_re().captures_iter(template) {
        let name = &captures[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
