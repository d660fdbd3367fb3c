//! Navigation kinds and the key → command strategy behind them.
//!
//! Only list navigation is concrete. Tree, table and grid collections are
//! navigated as a flat list along one axis; they resolve to [`ListStrategy`]
//! tagged with their kind, and report [`NavigationKind::is_narrowed`].

use std::fmt;

use serde::Deserialize;

use crate::combo::ParsedCombo;
use crate::event::KeyEvent;
use crate::platform::Platform;

// ---------------------------------------------------------------------------
// Kinds, orientation, commands
// ---------------------------------------------------------------------------

/// The shape of the collection being navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    #[default]
    List,
    Tree,
    Table,
    Grid,
}

impl NavigationKind {
    /// The strategy that handles this kind.
    pub fn strategy(self) -> Box<dyn NavigationStrategy> {
        Box::new(ListStrategy::for_kind(self))
    }

    /// Whether this kind currently falls back to flat list semantics.
    pub fn is_narrowed(self) -> bool {
        self != NavigationKind::List
    }
}

/// Which arrow keys move the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Up/Down.
    #[default]
    Vertical,
    /// Left/Right.
    Horizontal,
}

/// What a navigation key asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    /// Enter or Space: select the item under the cursor.
    Activate,
    /// Escape.
    Close,
}

// ---------------------------------------------------------------------------
// Step function
// ---------------------------------------------------------------------------

/// Bring an absolute `index` into `0..len`.
///
/// With `wrap`, indices wrap modulo `len`; otherwise they clamp to the ends.
/// Returns `None` only for an empty collection.
pub fn clamp_index(index: isize, len: usize, wrap: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len_i = isize::try_from(len).unwrap_or(isize::MAX);
    let next = if wrap {
        index.rem_euclid(len_i)
    } else {
        index.clamp(0, len_i - 1)
    };
    usize::try_from(next).ok()
}

/// Move `current` by `delta` through [`clamp_index`].
///
/// A missing cursor counts as sitting just before the first item.
pub fn step_index(current: Option<usize>, delta: isize, len: usize, wrap: bool) -> Option<usize> {
    let from = match current {
        Some(c) => isize::try_from(c.min(len.saturating_sub(1))).unwrap_or(isize::MAX),
        None => -1,
    };
    clamp_index(from.saturating_add(delta), len, wrap)
}

// ---------------------------------------------------------------------------
// NavigationStrategy
// ---------------------------------------------------------------------------

/// Maps key events to navigation commands for one kind of collection.
pub trait NavigationStrategy: fmt::Debug {
    fn kind(&self) -> NavigationKind;

    /// The command `event` asks for, if any.
    fn command_for(
        &self,
        event: &KeyEvent,
        orientation: Orientation,
        platform: Platform,
    ) -> Option<NavCommand>;

    /// Resolve a relative move. Defaults to [`step_index`].
    fn step(&self, current: Option<usize>, delta: isize, len: usize, wrap: bool) -> Option<usize> {
        step_index(current, delta, len, wrap)
    }

    /// Resolve an absolute move. Defaults to [`clamp_index`].
    fn jump(&self, index: isize, len: usize, wrap: bool) -> Option<usize> {
        clamp_index(index, len, wrap)
    }
}

/// Flat, single-axis navigation.
#[derive(Debug, Clone)]
pub struct ListStrategy {
    kind: NavigationKind,
    bindings: Vec<(ParsedCombo, NavCommand, Option<Orientation>)>,
}

impl ListStrategy {
    pub fn new() -> Self {
        Self::for_kind(NavigationKind::List)
    }

    /// List semantics reported under another kind.
    pub fn for_kind(kind: NavigationKind) -> Self {
        let bind = |combo: &str, command, orientation| (ParsedCombo::parse(combo), command, orientation);
        let bindings = vec![
            bind("down", NavCommand::Next, Some(Orientation::Vertical)),
            bind("up", NavCommand::Previous, Some(Orientation::Vertical)),
            bind("right", NavCommand::Next, Some(Orientation::Horizontal)),
            bind("left", NavCommand::Previous, Some(Orientation::Horizontal)),
            bind("home", NavCommand::First, None),
            bind("end", NavCommand::Last, None),
            bind("enter", NavCommand::Activate, None),
            bind("space", NavCommand::Activate, None),
            bind("escape", NavCommand::Close, None),
        ];
        Self { kind, bindings }
    }
}

impl Default for ListStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStrategy for ListStrategy {
    fn kind(&self) -> NavigationKind {
        self.kind
    }

    fn command_for(
        &self,
        event: &KeyEvent,
        orientation: Orientation,
        platform: Platform,
    ) -> Option<NavCommand> {
        self.bindings
            .iter()
            .filter(|(_, _, axis)| axis.map_or(true, |axis| axis == orientation))
            .find(|(combo, _, _)| combo.matches(event, platform))
            .map(|(_, command, _)| *command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;

    fn key(k: &str) -> KeyEvent {
        KeyEvent::new(k, Modifiers::NONE)
    }

    // ── clamp_index / step_index ─────────────────────────────────────

    #[test]
    fn clamp_absolute_index() {
        assert_eq!(clamp_index(5, 3, false), Some(2));
        assert_eq!(clamp_index(-4, 3, false), Some(0));
        assert_eq!(clamp_index(5, 3, true), Some(2));
        assert_eq!(clamp_index(4, 3, true), Some(1));
        assert_eq!(clamp_index(-1, 3, true), Some(2));
        assert_eq!(clamp_index(0, 0, true), None);
    }

    #[test]
    fn step_clamps_without_wrap() {
        assert_eq!(step_index(Some(0), -1, 3, false), Some(0));
        assert_eq!(step_index(Some(2), 1, 3, false), Some(2));
        assert_eq!(step_index(Some(1), 1, 3, false), Some(2));
    }

    #[test]
    fn step_wraps_with_loop() {
        assert_eq!(step_index(Some(2), 1, 3, true), Some(0));
        assert_eq!(step_index(Some(0), -1, 3, true), Some(2));
        assert_eq!(step_index(Some(0), -7, 3, true), Some(2));
    }

    #[test]
    fn step_on_empty_is_none() {
        assert_eq!(step_index(Some(0), 1, 0, true), None);
        assert_eq!(step_index(None, 1, 0, false), None);
    }

    #[test]
    fn step_from_no_cursor() {
        assert_eq!(step_index(None, 1, 3, false), Some(0));
        assert_eq!(step_index(None, -1, 3, true), Some(1));
    }

    // ── ListStrategy ─────────────────────────────────────────────────

    #[test]
    fn vertical_keys() {
        let s = ListStrategy::new();
        let v = Orientation::Vertical;
        assert_eq!(s.command_for(&key("ArrowDown"), v, Platform::Other), Some(NavCommand::Next));
        assert_eq!(s.command_for(&key("ArrowUp"), v, Platform::Other), Some(NavCommand::Previous));
        assert_eq!(s.command_for(&key("ArrowRight"), v, Platform::Other), None);
    }

    #[test]
    fn horizontal_keys() {
        let s = ListStrategy::new();
        let h = Orientation::Horizontal;
        assert_eq!(s.command_for(&key("ArrowRight"), h, Platform::Other), Some(NavCommand::Next));
        assert_eq!(s.command_for(&key("ArrowLeft"), h, Platform::Other), Some(NavCommand::Previous));
        assert_eq!(s.command_for(&key("ArrowDown"), h, Platform::Other), None);
    }

    #[test]
    fn shared_keys() {
        let s = ListStrategy::new();
        let v = Orientation::Vertical;
        assert_eq!(s.command_for(&key("Home"), v, Platform::Apple), Some(NavCommand::First));
        assert_eq!(s.command_for(&key("End"), v, Platform::Apple), Some(NavCommand::Last));
        assert_eq!(s.command_for(&key("Enter"), v, Platform::Apple), Some(NavCommand::Activate));
        assert_eq!(s.command_for(&key(" "), v, Platform::Apple), Some(NavCommand::Activate));
        assert_eq!(s.command_for(&key("Escape"), v, Platform::Apple), Some(NavCommand::Close));
    }

    #[test]
    fn modified_arrows_are_not_navigation() {
        let s = ListStrategy::new();
        let ev = KeyEvent::new("ArrowDown", Modifiers::SHIFT);
        assert_eq!(s.command_for(&ev, Orientation::Vertical, Platform::Other), None);
    }

    #[test]
    fn narrowed_kinds_use_list_strategy() {
        assert!(!NavigationKind::List.is_narrowed());
        for kind in [NavigationKind::Tree, NavigationKind::Table, NavigationKind::Grid] {
            assert!(kind.is_narrowed());
            let strategy = kind.strategy();
            assert_eq!(strategy.kind(), kind);
            assert_eq!(
                strategy.command_for(&key("ArrowDown"), Orientation::Vertical, Platform::Other),
                Some(NavCommand::Next)
            );
        }
    }
}
