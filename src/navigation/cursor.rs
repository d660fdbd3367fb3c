//! CursorNavigator: a keyboard cursor over an ordered collection.
//!
//! The navigator owns the items and a cursor index. Every move, relative or
//! absolute, goes through the strategy's clamp function (wrap or clamp), and
//! the cursor is re-clamped whenever the collection is replaced:
//! - empty collection → no cursor;
//! - shrunk below the cursor → last index;
//! - grown from empty → first index.

use serde::Deserialize;
use tracing::debug;

use crate::event::KeyEvent;
use crate::geometry::{Offset, Region};
use crate::platform::Platform;

use super::scroll::{ScrollState, StickyInsets};
use super::strategy::{NavCommand, NavigationKind, NavigationStrategy, Orientation};

fn as_isize(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

// ---------------------------------------------------------------------------
// NavigatorOptions
// ---------------------------------------------------------------------------

/// Behavior knobs for a [`CursorNavigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigatorOptions {
    pub kind: NavigationKind,
    pub orientation: Orientation,
    /// Wrap from the last item to the first and back.
    #[serde(rename = "loop")]
    pub wrap: bool,
    /// Let [`CursorNavigator::reveal_cursor`] scroll.
    pub auto_scroll: bool,
    /// When off, keys, clicks and moves are all ignored.
    pub enabled: bool,
    /// Starting cursor position, clamped like any other move.
    pub initial_index: usize,
}

impl NavigatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: NavigationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_loop(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            kind: NavigationKind::List,
            orientation: Orientation::Vertical,
            wrap: false,
            auto_scroll: true,
            enabled: true,
            initial_index: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// ItemBindings
// ---------------------------------------------------------------------------

/// Per-item attributes a renderer applies to each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBindings {
    pub index: usize,
    /// `0` for the cursor item, `-1` for the rest (roving tab index).
    pub tab_index: i32,
    pub is_cursor: bool,
}

// ---------------------------------------------------------------------------
// CursorNavigator
// ---------------------------------------------------------------------------

type SelectCallback<T> = Box<dyn FnMut(&T, usize)>;
type CloseCallback = Box<dyn FnMut()>;

/// A keyboard cursor over `items`.
pub struct CursorNavigator<T> {
    items: Vec<T>,
    cursor: Option<usize>,
    options: NavigatorOptions,
    strategy: Box<dyn NavigationStrategy>,
    platform: Platform,
    on_select: Option<SelectCallback<T>>,
    on_close: Option<CloseCallback>,
}

impl<T> CursorNavigator<T> {
    /// Create a navigator with the cursor on `initial_index` (clamped), or
    /// no cursor for an empty collection.
    pub fn new(items: Vec<T>, options: NavigatorOptions) -> Self {
        if options.kind.is_narrowed() {
            debug!(kind = ?options.kind, "navigation kind uses flat list semantics");
        }
        let strategy = options.kind.strategy();
        let cursor = strategy.jump(as_isize(options.initial_index), items.len(), options.wrap);
        Self {
            items,
            cursor,
            strategy,
            options,
            platform: Platform::current(),
            on_select: None,
            on_close: None,
        }
    }

    /// Override the platform used for key matching (builder).
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Called with the cursor item when it is activated (builder).
    pub fn on_select(mut self, callback: impl FnMut(&T, usize) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Called when Escape is pressed (builder).
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    // -- Queries ------------------------------------------------------------

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor index, `None` when the collection is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The item under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|i| self.items.get(i))
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn kind(&self) -> NavigationKind {
        self.strategy.kind()
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    /// Turn all navigation on or off, e.g. while a result list is empty.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    fn can_move(&self) -> bool {
        self.options.enabled && !self.items.is_empty()
    }

    // -- Movement -----------------------------------------------------------

    fn step(&mut self, delta: isize) -> Option<usize> {
        if self.can_move() {
            self.cursor = self
                .strategy
                .step(self.cursor, delta, self.items.len(), self.options.wrap);
        }
        self.cursor
    }

    fn jump(&mut self, index: isize) -> Option<usize> {
        if self.can_move() {
            self.cursor = self
                .strategy
                .jump(index, self.items.len(), self.options.wrap);
        }
        self.cursor
    }

    pub fn move_next(&mut self) -> Option<usize> {
        self.step(1)
    }

    pub fn move_previous(&mut self) -> Option<usize> {
        self.step(-1)
    }

    pub fn move_first(&mut self) -> Option<usize> {
        self.jump(0)
    }

    pub fn move_last(&mut self) -> Option<usize> {
        self.jump(as_isize(self.items.len()) - 1)
    }

    /// Jump to `index`, clamped to the last item (or wrapped modulo the
    /// length when looping). Returns the resulting cursor.
    pub fn move_to(&mut self, index: usize) -> Option<usize> {
        self.jump(as_isize(index))
    }

    /// Invoke `on_select` with the cursor item. Returns `false` when there is
    /// no cursor item or navigation is disabled.
    pub fn select_current(&mut self) -> bool {
        if !self.options.enabled {
            return false;
        }
        let Some(index) = self.cursor else {
            return false;
        };
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if let Some(callback) = self.on_select.as_mut() {
            callback(item, index);
        }
        true
    }

    /// Replace the collection and re-clamp the cursor.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let len = self.items.len();
        self.cursor = match (self.cursor, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    // -- Input --------------------------------------------------------------

    /// Handle a navigation key. Returns `true` (and prevents the default
    /// action) when the key was consumed.
    ///
    /// Escape works from text fields; every other key is ignored there. A
    /// disabled navigator consumes nothing.
    pub fn handle_key(&mut self, event: &mut KeyEvent) -> bool {
        if !self.options.enabled {
            return false;
        }
        let Some(command) =
            self.strategy
                .command_for(event, self.options.orientation, self.platform)
        else {
            return false;
        };

        if command == NavCommand::Close {
            let Some(on_close) = self.on_close.as_mut() else {
                return false;
            };
            event.prevent_default();
            on_close();
            return true;
        }

        if event.is_editable_target() || self.items.is_empty() {
            return false;
        }

        event.prevent_default();
        match command {
            NavCommand::Next => {
                self.move_next();
            }
            NavCommand::Previous => {
                self.move_previous();
            }
            NavCommand::First => {
                self.move_first();
            }
            NavCommand::Last => {
                self.move_last();
            }
            NavCommand::Activate => {
                self.select_current();
            }
            NavCommand::Close => {}
        }
        true
    }

    /// Move the cursor to a clicked item and activate it. The index is
    /// clamped like [`move_to`](Self::move_to).
    pub fn handle_click(&mut self, index: usize) -> bool {
        self.move_to(index).is_some() && self.select_current()
    }

    /// Attributes for the item at `index`.
    pub fn item_bindings(&self, index: usize) -> ItemBindings {
        let is_cursor = self.cursor == Some(index);
        ItemBindings {
            index,
            tab_index: if is_cursor { 0 } else { -1 },
            is_cursor,
        }
    }

    // -- Scrolling ----------------------------------------------------------

    /// Scroll `scroll` so the cursor item is visible, for collections whose
    /// items all have the same `item_extent` along the orientation axis.
    ///
    /// Items start after the sticky inset on that axis. Does nothing when
    /// `auto_scroll` is off or there is no cursor. Returns the applied delta.
    pub fn reveal_cursor(
        &self,
        scroll: &mut ScrollState,
        item_extent: i32,
        insets: StickyInsets,
    ) -> Offset {
        let Some(index) = self.cursor else {
            return Offset::ZERO;
        };
        if !self.options.auto_scroll {
            return Offset::ZERO;
        }

        let leading = index as i32 * item_extent;
        let target = match self.options.orientation {
            Orientation::Vertical => Region::new(
                scroll.offset.x + insets.left,
                insets.top + leading,
                0,
                item_extent,
            ),
            Orientation::Horizontal => Region::new(
                insets.left + leading,
                scroll.offset.y + insets.top,
                item_extent,
                0,
            ),
        };
        scroll.reveal(target, insets)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CursorNavigator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorNavigator")
            .field("items", &self.items)
            .field("cursor", &self.cursor)
            .field("options", &self.options)
            .field("platform", &self.platform)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::event::Modifiers;
    use crate::geometry::Size;

    fn nav(items: &[&'static str], wrap: bool) -> CursorNavigator<&'static str> {
        CursorNavigator::new(items.to_vec(), NavigatorOptions::new().with_loop(wrap))
            .with_platform(Platform::Other)
    }

    fn key(k: &str) -> KeyEvent {
        KeyEvent::new(k, Modifiers::NONE)
    }

    // ── Movement ─────────────────────────────────────────────────────

    #[test]
    fn starts_on_first_item() {
        assert_eq!(nav(&["a", "b"], false).cursor(), Some(0));
        assert_eq!(nav(&[], false).cursor(), None);
    }

    #[test]
    fn clamped_movement() {
        let mut n = nav(&["a", "b", "c"], false);
        assert_eq!(n.move_previous(), Some(0));
        assert_eq!(n.move_next(), Some(1));
        assert_eq!(n.move_next(), Some(2));
        assert_eq!(n.move_next(), Some(2));
        assert_eq!(n.current(), Some(&"c"));
    }

    #[test]
    fn looped_movement() {
        let mut n = nav(&["a", "b", "c"], true);
        assert_eq!(n.move_previous(), Some(2));
        assert_eq!(n.move_next(), Some(0));
    }

    #[test]
    fn first_last_and_move_to() {
        let mut n = nav(&["a", "b", "c"], false);
        assert_eq!(n.move_last(), Some(2));
        assert_eq!(n.move_first(), Some(0));
        assert_eq!(n.move_to(1), Some(1));
        assert_eq!(n.move_to(3), Some(2));
        assert_eq!(n.move_to(5), Some(2));
    }

    #[test]
    fn move_to_wraps_when_looping() {
        let mut n = nav(&["a", "b", "c"], true);
        assert_eq!(n.move_to(5), Some(2));
        assert_eq!(n.move_to(4), Some(1));
        assert_eq!(n.move_to(3), Some(0));
    }

    #[test]
    fn move_to_on_empty_is_noop() {
        let mut n = nav(&[], false);
        assert_eq!(n.move_to(2), None);
    }

    #[test]
    fn initial_index_is_clamped() {
        let opts = NavigatorOptions::new().with_initial_index(1);
        assert_eq!(CursorNavigator::new(vec!["a", "b", "c"], opts).cursor(), Some(1));

        let opts = NavigatorOptions::new().with_initial_index(7);
        assert_eq!(CursorNavigator::new(vec!["a", "b", "c"], opts).cursor(), Some(2));

        let opts = NavigatorOptions::new().with_initial_index(7).with_loop(true);
        assert_eq!(CursorNavigator::new(vec!["a", "b", "c"], opts).cursor(), Some(1));

        let opts = NavigatorOptions::new().with_initial_index(3);
        assert_eq!(CursorNavigator::<&str>::new(vec![], opts).cursor(), None);
    }

    #[test]
    fn disabled_navigator_ignores_everything() {
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let mut n = CursorNavigator::new(
            vec!["a", "b", "c"],
            NavigatorOptions::new().with_enabled(false),
        )
        .with_platform(Platform::Other)
        .on_select(move |_, _| *sink.borrow_mut() += 1)
        .on_close(|| {});

        assert_eq!(n.move_next(), Some(0));
        assert_eq!(n.move_last(), Some(0));
        assert_eq!(n.move_to(2), Some(0));
        assert!(!n.select_current());
        assert!(!n.handle_click(1));

        let mut esc = key("Escape");
        assert!(!n.handle_key(&mut esc));
        assert!(!esc.default_prevented());
        assert!(!n.handle_key(&mut key("ArrowDown")));
        assert_eq!(*seen.borrow(), 0);

        n.set_enabled(true);
        assert!(n.is_enabled());
        assert_eq!(n.move_next(), Some(1));
    }

    #[test]
    fn movement_on_empty_is_noop() {
        let mut n = nav(&[], true);
        assert_eq!(n.move_next(), None);
        assert_eq!(n.move_last(), None);
        assert!(!n.select_current());
    }

    // ── set_items ────────────────────────────────────────────────────

    #[test]
    fn set_items_reclamps() {
        let mut n = nav(&["a", "b", "c", "d"], false);
        n.move_to(3);
        n.set_items(vec!["a", "b"]);
        assert_eq!(n.cursor(), Some(1));

        n.set_items(vec![]);
        assert_eq!(n.cursor(), None);

        n.set_items(vec!["x"]);
        assert_eq!(n.cursor(), Some(0));
    }

    // ── Selection callback ───────────────────────────────────────────

    #[test]
    fn enter_and_space_select_current() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut n = nav(&["a", "b"], false)
            .on_select(move |item: &&str, i| sink.borrow_mut().push((item.to_string(), i)));

        let mut down = key("ArrowDown");
        assert!(n.handle_key(&mut down));
        assert!(down.default_prevented());

        assert!(n.handle_key(&mut key("Enter")));
        assert!(n.handle_key(&mut key(" ")));
        assert_eq!(
            *seen.borrow(),
            vec![("b".to_string(), 1), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn click_moves_and_selects() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut n = nav(&["a", "b", "c"], false).on_select(move |_, i| *sink.borrow_mut() = Some(i));
        assert!(n.handle_click(1));
        assert_eq!(*seen.borrow(), Some(1));
        assert!(n.handle_click(9));
        assert_eq!(*seen.borrow(), Some(2));
        assert_eq!(n.cursor(), Some(2));
    }

    // ── Keys ─────────────────────────────────────────────────────────

    #[test]
    fn home_end_keys() {
        let mut n = nav(&["a", "b", "c"], false);
        n.handle_key(&mut key("End"));
        assert_eq!(n.cursor(), Some(2));
        n.handle_key(&mut key("Home"));
        assert_eq!(n.cursor(), Some(0));
    }

    #[test]
    fn horizontal_orientation_uses_left_right() {
        let mut n = CursorNavigator::new(
            vec![1, 2, 3],
            NavigatorOptions::new().with_orientation(Orientation::Horizontal),
        )
        .with_platform(Platform::Other);
        assert!(!n.handle_key(&mut key("ArrowDown")));
        assert!(n.handle_key(&mut key("ArrowRight")));
        assert_eq!(n.cursor(), Some(1));
    }

    #[test]
    fn editable_target_ignores_navigation_but_not_escape() {
        let closed = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&closed);
        let mut n = nav(&["a", "b"], false).on_close(move || *flag.borrow_mut() = true);

        assert!(!n.handle_key(&mut key("ArrowDown").in_editable()));
        assert_eq!(n.cursor(), Some(0));

        let mut esc = key("Escape").in_editable();
        assert!(n.handle_key(&mut esc));
        assert!(esc.default_prevented());
        assert!(*closed.borrow());
    }

    #[test]
    fn escape_without_on_close_is_not_consumed() {
        let mut n = nav(&["a"], false);
        let mut esc = key("Escape");
        assert!(!n.handle_key(&mut esc));
        assert!(!esc.default_prevented());
    }

    #[test]
    fn item_bindings_roving_tab_index() {
        let mut n = nav(&["a", "b"], false);
        n.move_next();
        assert_eq!(
            n.item_bindings(1),
            ItemBindings { index: 1, tab_index: 0, is_cursor: true }
        );
        assert_eq!(n.item_bindings(0).tab_index, -1);
    }

    // ── Scrolling ────────────────────────────────────────────────────

    #[test]
    fn reveal_cursor_below_viewport() {
        let mut n = nav(&["a"; 50], false);
        n.move_to(10);
        let mut scroll = ScrollState::new(Size::new(100, 1000), Size::new(100, 100));
        // row 10 spans 200..220; viewport shows 0..100
        let delta = n.reveal_cursor(&mut scroll, 20, StickyInsets::NONE);
        assert_eq!(delta, Offset::new(0, 120));
    }

    #[test]
    fn reveal_cursor_respects_sticky_header() {
        let mut n = nav(&["a"; 50], false);
        let mut scroll = ScrollState::new(Size::new(100, 1100), Size::new(100, 100));
        scroll.scroll_to(0, 300);
        n.move_to(5);
        // row 5 spans 130..150 below a 30-unit header; visible rows start at 330
        let delta = n.reveal_cursor(&mut scroll, 20, StickyInsets::new(30, 0));
        assert_eq!(delta, Offset::new(0, -200));
    }

    #[test]
    fn reveal_cursor_disabled() {
        let mut n = CursorNavigator::new(
            vec!["a"; 50],
            NavigatorOptions::new().with_auto_scroll(false),
        );
        n.move_to(40);
        let mut scroll = ScrollState::new(Size::new(100, 1000), Size::new(100, 100));
        assert_eq!(n.reveal_cursor(&mut scroll, 20, StickyInsets::NONE), Offset::ZERO);
    }
}
