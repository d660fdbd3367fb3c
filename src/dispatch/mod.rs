//! Context-scoped shortcut dispatch.
//!
//! Surfaces register [`ShortcutDefinition`]s with a [`ShortcutDispatcher`]
//! and flip [`ContextTag`]s as they open and close. Each key event runs at
//! most one handler: the highest-priority match among the shortcuts whose
//! contexts are active.

pub mod cheatsheet;
pub mod conflict;
pub mod context;
pub mod dispatcher;
pub mod shortcut;

pub use cheatsheet::{CheatsheetGroup, ShortcutSummary};
pub use conflict::Conflict;
pub use context::{ContextSet, ContextTag};
pub use dispatcher::ShortcutDispatcher;
pub use shortcut::{Priority, ShortcutDefinition, ShortcutHandle, ShortcutHandler, ShortcutId};
