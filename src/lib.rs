//! # keyscope
//!
//! A headless keyboard interaction engine for interactive applications.
//!
//! keyscope owns the keyboard-facing half of a UI: it parses shortcut combos,
//! routes key events to the right handler based on which surfaces are open,
//! moves a cursor through lists, tracks multi-item selection with clipboard
//! actions, and ranks items against a fuzzy query. Rendering stays with the
//! host; the engine only consumes [`event::KeyEvent`]s and reports what happened.
//!
//! ## Core Systems
//!
//! - **[`combo`]**: Combo tokenizer, parser, platform-aware matcher, display labels
//! - **[`dispatch`]**: Context-scoped shortcut registry with priorities and conflict reports
//! - **[`navigation`]**: Cursor navigator with loop/clamp movement and scroll-into-view
//! - **[`selection`]**: Click-modifier selection, clipboard buffer, selection keymap, focus
//! - **[`fuzzy`]**: Subsequence scoring, ranked search, highlight segments
//! - **[`event`]**: Key and pointer events, crossterm conversion, next-tick queue
//! - **[`platform`]**: Apple vs. other detection and the `mod` modifier
//! - **[`config`]**: Deserializable engine configuration
//! - **[`testing`]**: Pilot and snapshot helpers
//! - **[`geometry`]**: Offset, Size, Region primitives

// Foundation
pub mod geometry;
pub mod platform;

// Input
pub mod combo;
pub mod event;

// Engines
pub mod dispatch;
pub mod fuzzy;
pub mod navigation;
pub mod selection;

// Configuration
pub mod config;

// Test support
pub mod testing;

pub use combo::{format_combo, ComboError, ParsedCombo};
pub use config::{ConfigError, EngineConfig};
pub use dispatch::{
    ContextTag, Priority, ShortcutDefinition, ShortcutDispatcher, ShortcutHandle, ShortcutId,
};
pub use event::{KeyEvent, Modifiers, PointerEvent};
pub use fuzzy::{fuzzy_match, fuzzy_search, FuzzyMatch, FuzzyOptions};
pub use navigation::{CursorNavigator, NavigatorOptions};
pub use platform::Platform;
pub use selection::{SelectionCallbacks, SelectionManager};
