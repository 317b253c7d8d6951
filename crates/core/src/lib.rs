//! Domain logic for the Courier notification settings service.
//!
//! Pure, database-free building blocks:
//!
//! - [`catalog`] — configured channel list and event definitions.
//! - [`template`] — placeholder parsing and event label derivation.
//! - [`settings`] — the nested per-user preference structure.
//! - [`availability`] — which channel/event combinations may be offered.
//! - [`form`] — preference form synthesis, layout, and submission extraction.
//! - [`draft`] — admin-authored notification drafts with conditional
//!   validation.

pub mod availability;
pub mod catalog;
pub mod channels;
pub mod draft;
pub mod error;
pub mod form;
pub mod settings;
pub mod template;
pub mod types;
