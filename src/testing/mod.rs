//! Headless testing helpers: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to press combos against a
//! [`ShortcutDispatcher`](crate::dispatch::ShortcutDispatcher) without a real
//! keyboard. Use [`matches_to_string`] and related helpers to capture fuzzy
//! results and cheatsheets as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::{key_event_for, Pilot};
pub use snapshot::{cheatsheet_to_string, matches_to_string, segments_to_string};
