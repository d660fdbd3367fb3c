//! SelectionManager: multi-item selection over an ordered collection.
//!
//! Selection is an insertion-ordered set of ids plus an optional anchor for
//! range selection. Every selected id belongs to a current item; ids that do
//! not are ignored on input and pruned when the collection is replaced.
//!
//! Focus moves caused by keyboard navigation are queued and only run on
//! [`SelectionManager::tick`], after the host has re-rendered with the new
//! selection.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::event::{KeyEvent, Modifiers, PointerEvent, TickQueue};
use crate::platform::Platform;

use super::bindings::{ContainerBindings, SelectionItemBindings};
use super::clipboard::ClipboardBuffer;
use super::focus::{FocusRegistry, Focusable};
use super::keymap::{SelectionAction, SelectionKeymap};

// ---------------------------------------------------------------------------
// SelectionCallbacks
// ---------------------------------------------------------------------------

type ItemsCallback<T> = Box<dyn FnMut(&[T])>;
type ItemCallback<T> = Box<dyn FnMut(&T)>;

/// Optional hooks fired by a [`SelectionManager`]. Item slices are always in
/// collection order.
pub struct SelectionCallbacks<T> {
    on_copy: Option<ItemsCallback<T>>,
    on_cut: Option<ItemsCallback<T>>,
    on_paste: Option<ItemsCallback<T>>,
    on_delete: Option<ItemsCallback<T>>,
    on_selection_change: Option<ItemsCallback<T>>,
    on_navigate: Option<ItemCallback<T>>,
}

impl<T> SelectionCallbacks<T> {
    pub fn new() -> Self {
        Self {
            on_copy: None,
            on_cut: None,
            on_paste: None,
            on_delete: None,
            on_selection_change: None,
            on_navigate: None,
        }
    }

    pub fn on_copy(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.on_copy = Some(Box::new(f));
        self
    }

    pub fn on_cut(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.on_cut = Some(Box::new(f));
        self
    }

    /// Receives the clipboard contents.
    pub fn on_paste(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.on_paste = Some(Box::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.on_delete = Some(Box::new(f));
        self
    }

    /// Fires whenever the set of selected ids changes.
    pub fn on_selection_change(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(f));
        self
    }

    /// Receives the item keyboard navigation landed on.
    pub fn on_navigate(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_navigate = Some(Box::new(f));
        self
    }
}

impl<T> Default for SelectionCallbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn fire<T>(callback: &mut Option<ItemsCallback<T>>, items: &[T]) {
    if let Some(f) = callback.as_mut() {
        f(items);
    }
}

// ---------------------------------------------------------------------------
// SelectionManager
// ---------------------------------------------------------------------------

type IdFn<T, Id> = Box<dyn Fn(&T) -> Id>;

/// Selection state for one collection.
pub struct SelectionManager<T, Id> {
    items: Vec<T>,
    get_id: IdFn<T, Id>,
    selected: IndexSet<Id>,
    anchor: Option<Id>,
    multi_select: bool,
    keyboard_navigation: bool,
    platform: Platform,
    keymap: SelectionKeymap,
    clipboard: ClipboardBuffer<T>,
    focus: FocusRegistry<Id>,
    pending_focus: TickQueue<Id>,
    callbacks: SelectionCallbacks<T>,
}

impl<T, Id> SelectionManager<T, Id>
where
    T: Clone,
    Id: Clone + Eq + Hash + fmt::Debug,
{
    /// Create a multi-select manager with keyboard navigation enabled and
    /// nothing selected.
    pub fn new(items: Vec<T>, get_id: impl Fn(&T) -> Id + 'static) -> Self {
        Self {
            items,
            get_id: Box::new(get_id),
            selected: IndexSet::new(),
            anchor: None,
            multi_select: true,
            keyboard_navigation: true,
            platform: Platform::current(),
            keymap: SelectionKeymap::default(),
            clipboard: ClipboardBuffer::new(),
            focus: FocusRegistry::new(),
            pending_focus: TickQueue::new(),
            callbacks: SelectionCallbacks::new(),
        }
    }

    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    pub fn with_keyboard_navigation(mut self, enabled: bool) -> Self {
        self.keyboard_navigation = enabled;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_keymap(mut self, keymap: SelectionKeymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn with_callbacks(mut self, callbacks: SelectionCallbacks<T>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Start with `ids` selected (builder). Unknown ids are dropped. Does not
    /// fire `on_selection_change`.
    pub fn with_initial_selected(mut self, ids: impl IntoIterator<Item = Id>) -> Self {
        let known: IndexSet<Id> = ids.into_iter().filter(|id| self.index_of(id).is_some()).collect();
        self.selected = known;
        self
    }

    // -- Queries ------------------------------------------------------------

    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn index_of(&self, id: &Id) -> Option<usize> {
        self.items.iter().position(|item| (self.get_id)(item) == *id)
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in selection order (most recent last).
    pub fn selected_ids(&self) -> impl Iterator<Item = &Id> {
        self.selected.iter()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected items in collection order.
    pub fn selected_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.selected.contains(&(self.get_id)(item)))
            .collect()
    }

    fn selected_snapshot(&self) -> Vec<T> {
        self.selected_items().into_iter().cloned().collect()
    }

    /// Range-selection anchor.
    pub fn anchor(&self) -> Option<&Id> {
        self.anchor.as_ref()
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn clipboard(&self) -> &[T] {
        self.clipboard.contents()
    }

    pub fn keymap(&self) -> &SelectionKeymap {
        &self.keymap
    }

    // -- State changes ------------------------------------------------------

    /// Install a new selection, firing `on_selection_change` if the set of ids
    /// differs.
    fn commit(&mut self, next: IndexSet<Id>) {
        let changed = next != self.selected;
        self.selected = next;
        if changed {
            debug!(count = self.selected.len(), "selection changed");
            let snapshot = self.selected_snapshot();
            fire(&mut self.callbacks.on_selection_change, &snapshot);
        }
    }

    /// Select exactly `id` and make it the anchor.
    pub fn select_single(&mut self, id: &Id) {
        if self.index_of(id).is_none() {
            return;
        }
        let mut next = IndexSet::new();
        next.insert(id.clone());
        self.anchor = Some(id.clone());
        self.commit(next);
    }

    /// Flip `id`'s membership and make it the anchor. Single-select managers
    /// treat this as [`select_single`](Self::select_single).
    pub fn toggle(&mut self, id: &Id) {
        if !self.multi_select {
            return self.select_single(id);
        }
        if self.index_of(id).is_none() {
            return;
        }
        let mut next = self.selected.clone();
        if !next.shift_remove(id) {
            next.insert(id.clone());
        }
        self.anchor = Some(id.clone());
        self.commit(next);
    }

    /// Add every id between the anchor and `id` (inclusive, collection order)
    /// to the selection. The anchor does not move. Without a usable anchor
    /// this is a plain [`select_single`](Self::select_single).
    pub fn select_range(&mut self, id: &Id) {
        let Some(target) = self.index_of(id) else {
            return;
        };
        let anchor_index = self
            .anchor
            .as_ref()
            .and_then(|anchor| self.index_of(anchor));
        let Some(from) = anchor_index.filter(|_| self.multi_select) else {
            return self.select_single(id);
        };

        let (start, end) = (from.min(target), from.max(target));
        let mut next = self.selected.clone();
        for item in &self.items[start..=end] {
            next.insert((self.get_id)(item));
        }
        self.commit(next);
    }

    /// Select every item. No-op for single-select managers.
    pub fn select_all(&mut self) {
        if !self.multi_select {
            return;
        }
        let next: IndexSet<Id> = self.items.iter().map(|item| (self.get_id)(item)).collect();
        self.anchor = next.last().cloned();
        self.commit(next);
    }

    /// Deselect everything and drop the anchor.
    pub fn clear(&mut self) {
        self.anchor = None;
        self.commit(IndexSet::new());
    }

    /// Replace the collection, pruning selection and anchor to ids that still
    /// exist.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let present: IndexSet<Id> = self.items.iter().map(|item| (self.get_id)(item)).collect();
        if self.anchor.as_ref().is_some_and(|a| !present.contains(a)) {
            self.anchor = None;
        }
        let next: IndexSet<Id> = self
            .selected
            .iter()
            .filter(|id| present.contains(*id))
            .cloned()
            .collect();
        self.commit(next);
    }

    // -- Clipboard ----------------------------------------------------------

    /// Copy the selection into the clipboard. No-op when nothing is selected.
    pub fn copy(&mut self) -> bool {
        let snapshot = self.selected_snapshot();
        if snapshot.is_empty() {
            return false;
        }
        self.clipboard.store(snapshot.clone());
        fire(&mut self.callbacks.on_copy, &snapshot);
        true
    }

    /// Like [`copy`](Self::copy) but fires `on_cut`. The items stay in the
    /// collection; removing them is up to the host.
    pub fn cut(&mut self) -> bool {
        let snapshot = self.selected_snapshot();
        if snapshot.is_empty() {
            return false;
        }
        self.clipboard.store(snapshot.clone());
        fire(&mut self.callbacks.on_cut, &snapshot);
        true
    }

    /// Hand the clipboard contents to `on_paste`. No-op when the clipboard is
    /// empty. The clipboard is not cleared.
    pub fn paste(&mut self) -> bool {
        if self.clipboard.is_empty() {
            return false;
        }
        fire(&mut self.callbacks.on_paste, self.clipboard.contents());
        true
    }

    /// Hand the selection to `on_delete`, then clear it.
    pub fn delete_selected(&mut self) -> bool {
        let snapshot = self.selected_snapshot();
        if snapshot.is_empty() {
            return false;
        }
        fire(&mut self.callbacks.on_delete, &snapshot);
        self.clear();
        true
    }

    // -- Input --------------------------------------------------------------

    /// Resolve a click on `id` using the held modifiers.
    ///
    /// - mod: toggle;
    /// - shift: extend from the anchor;
    /// - none: select only `id`.
    ///
    /// Modifiers are ignored by single-select managers.
    pub fn handle_click(&mut self, id: &Id, pointer: PointerEvent) {
        let modifiers = pointer.modifiers;
        if !self.multi_select {
            self.select_single(id);
        } else if self.platform.mod_pressed(modifiers) {
            self.toggle(id);
        } else if modifiers.contains(Modifiers::SHIFT) {
            self.select_range(id);
        } else {
            self.select_single(id);
        }
    }

    /// Handle a key on the collection container. Returns `true` (and
    /// prevents the default action) when the key was consumed.
    ///
    /// Events from text fields are left alone.
    pub fn handle_key(&mut self, event: &mut KeyEvent) -> bool {
        if event.is_editable_target() {
            return false;
        }
        let Some(action) = self.keymap.action_for(event, self.platform) else {
            return false;
        };
        if action.is_navigation() && (!self.keyboard_navigation || self.items.is_empty()) {
            return false;
        }

        trace!(?action, "selection key");
        event.prevent_default();
        match action {
            SelectionAction::SelectAll => self.select_all(),
            SelectionAction::Copy => {
                self.copy();
            }
            SelectionAction::Cut => {
                self.cut();
            }
            SelectionAction::Paste => {
                self.paste();
            }
            SelectionAction::Delete => {
                self.delete_selected();
            }
            SelectionAction::Clear => self.clear(),
            SelectionAction::Next
            | SelectionAction::Previous
            | SelectionAction::First
            | SelectionAction::Last => self.navigate(action),
        }
        true
    }

    /// Move the single-item selection one step (or to an end). The current
    /// position is the most recently selected id; with none, the move lands
    /// on the first item.
    fn navigate(&mut self, action: SelectionAction) {
        let len = self.items.len();
        let Some(last) = len.checked_sub(1) else {
            return;
        };
        let current = self.selected.last().and_then(|id| self.index_of(id));
        let next = match (action, current) {
            (SelectionAction::First, _) => 0,
            (SelectionAction::Last, _) => last,
            (SelectionAction::Next, Some(i)) => (i + 1).min(last),
            (SelectionAction::Previous, Some(i)) => i.saturating_sub(1),
            (_, None) => 0,
            (_, Some(i)) => i,
        };
        if current == Some(next) {
            return;
        }

        let item = self.items[next].clone();
        let id = (self.get_id)(&item);
        self.select_single(&id);
        if let Some(on_navigate) = self.callbacks.on_navigate.as_mut() {
            on_navigate(&item);
        }
        self.pending_focus.push(id);
    }

    // -- Focus --------------------------------------------------------------

    pub fn register_focusable(&mut self, id: Id, target: impl Focusable + 'static) {
        self.focus.register(id, target);
    }

    pub fn unregister_focusable(&mut self, id: &Id) -> bool {
        self.focus.unregister(id)
    }

    /// Focus the element registered for `id`, if any.
    pub fn focus_item(&self, id: &Id) -> bool {
        self.focus.focus(id)
    }

    /// Whether focus moves are waiting for [`tick`](Self::tick).
    pub fn has_pending_focus(&self) -> bool {
        !self.pending_focus.is_empty()
    }

    /// Run focus moves queued by keyboard navigation. Call once the host has
    /// applied the new selection. Returns how many targets were focused.
    pub fn tick(&mut self) -> usize {
        self.pending_focus
            .drain()
            .iter()
            .filter(|id| self.focus.focus(id))
            .count()
    }

    // -- Bindings -----------------------------------------------------------

    pub fn item_bindings(&self, id: &Id) -> SelectionItemBindings {
        SelectionItemBindings::new(self.is_selected(id))
    }

    pub fn container_bindings(&self) -> ContainerBindings {
        ContainerBindings::new(self.multi_select)
    }
}

impl<T, Id: fmt::Debug> fmt::Debug for SelectionManager<T, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionManager")
            .field("items", &self.items.len())
            .field("selected", &self.selected)
            .field("anchor", &self.anchor)
            .field("multi_select", &self.multi_select)
            .field("keyboard_navigation", &self.keyboard_navigation)
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

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: char,
    }

    fn rows(ids: &str) -> Vec<Row> {
        ids.chars().map(|id| Row { id }).collect()
    }

    fn manager(ids: &str) -> SelectionManager<Row, char> {
        SelectionManager::new(rows(ids), |r: &Row| r.id).with_platform(Platform::Other)
    }

    fn ids(m: &SelectionManager<Row, char>) -> Vec<char> {
        m.selected_items().iter().map(|r| r.id).collect()
    }

    fn key(k: &str, mods: Modifiers) -> KeyEvent {
        KeyEvent::new(k, mods)
    }

    type Log = Rc<RefCell<Vec<String>>>;

    fn log_callbacks(log: &Log) -> SelectionCallbacks<Row> {
        let render = |rows: &[Row]| rows.iter().map(|r| r.id).collect::<String>();
        let (a, b, c, d, e, f) = (
            Rc::clone(log),
            Rc::clone(log),
            Rc::clone(log),
            Rc::clone(log),
            Rc::clone(log),
            Rc::clone(log),
        );
        SelectionCallbacks::new()
            .on_copy(move |r| a.borrow_mut().push(format!("copy:{}", render(r))))
            .on_cut(move |r| b.borrow_mut().push(format!("cut:{}", render(r))))
            .on_paste(move |r| c.borrow_mut().push(format!("paste:{}", render(r))))
            .on_delete(move |r| d.borrow_mut().push(format!("delete:{}", render(r))))
            .on_selection_change(move |r| e.borrow_mut().push(format!("change:{}", render(r))))
            .on_navigate(move |r| f.borrow_mut().push(format!("navigate:{}", r.id)))
    }

    // ── Clicks ───────────────────────────────────────────────────────

    #[test]
    fn plain_click_replaces() {
        let mut m = manager("ABCDE");
        m.handle_click(&'B', PointerEvent::plain());
        m.handle_click(&'D', PointerEvent::plain());
        assert_eq!(ids(&m), vec!['D']);
        assert_eq!(m.anchor(), Some(&'D'));
    }

    #[test]
    fn mod_click_toggles() {
        let mut m = manager("ABCDE");
        let ctrl = PointerEvent::new(Modifiers::CTRL);
        m.handle_click(&'A', ctrl);
        m.handle_click(&'C', ctrl);
        assert_eq!(ids(&m), vec!['A', 'C']);
        m.handle_click(&'A', ctrl);
        assert_eq!(ids(&m), vec!['C']);
        assert_eq!(m.anchor(), Some(&'A'));
    }

    #[test]
    fn mod_is_meta_on_apple() {
        let mut m = manager("ABC").with_platform(Platform::Apple);
        m.handle_click(&'A', PointerEvent::plain());
        m.handle_click(&'B', PointerEvent::new(Modifiers::META));
        assert_eq!(ids(&m), vec!['A', 'B']);
    }

    #[test]
    fn shift_click_unions_range_and_keeps_anchor() {
        let mut m = manager("ABCDEFG");
        m.handle_click(&'F', PointerEvent::plain());
        m.handle_click(&'B', PointerEvent::new(Modifiers::CTRL));
        m.handle_click(&'D', PointerEvent::new(Modifiers::SHIFT));
        assert_eq!(ids(&m), vec!['B', 'C', 'D', 'F']);
        assert_eq!(m.anchor(), Some(&'B'));
    }

    #[test]
    fn shift_click_without_anchor_is_plain() {
        let mut m = manager("ABC");
        m.handle_click(&'C', PointerEvent::new(Modifiers::SHIFT));
        assert_eq!(ids(&m), vec!['C']);
        assert_eq!(m.anchor(), Some(&'C'));
    }

    #[test]
    fn single_select_ignores_modifiers() {
        let mut m = manager("ABC").with_multi_select(false);
        m.handle_click(&'A', PointerEvent::plain());
        m.handle_click(&'B', PointerEvent::new(Modifiers::CTRL));
        m.handle_click(&'C', PointerEvent::new(Modifiers::SHIFT));
        assert_eq!(ids(&m), vec!['C']);
        m.select_all();
        assert_eq!(ids(&m), vec!['C']);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut m = manager("AB");
        m.handle_click(&'Z', PointerEvent::plain());
        m.toggle(&'Z');
        m.select_range(&'Z');
        assert!(ids(&m).is_empty());
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    #[test]
    fn select_all_copy_paste_delete() {
        let log: Log = Rc::default();
        let mut m = manager("ABC").with_callbacks(log_callbacks(&log));

        let mut ev = key("a", Modifiers::CTRL);
        assert!(m.handle_key(&mut ev));
        assert!(ev.default_prevented());
        assert_eq!(m.anchor(), Some(&'C'));

        m.handle_key(&mut key("c", Modifiers::CTRL));
        m.handle_key(&mut key("v", Modifiers::CTRL));
        m.handle_key(&mut key("v", Modifiers::CTRL));
        m.handle_key(&mut key("Delete", Modifiers::NONE));

        assert_eq!(
            *log.borrow(),
            vec![
                "change:ABC",
                "copy:ABC",
                "paste:ABC",
                "paste:ABC",
                "delete:ABC",
                "change:",
            ]
        );
        assert_eq!(m.clipboard().len(), 3);
        assert_eq!(m.selected_count(), 0);
    }

    #[test]
    fn copy_cut_with_empty_selection_are_noops() {
        let log: Log = Rc::default();
        let mut m = manager("AB").with_callbacks(log_callbacks(&log));
        assert!(!m.copy());
        assert!(!m.cut());
        assert!(!m.paste());
        assert!(!m.delete_selected());

        let mut ev = key("c", Modifiers::CTRL);
        assert!(m.handle_key(&mut ev));
        assert!(ev.default_prevented());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn cut_fills_clipboard() {
        let log: Log = Rc::default();
        let mut m = manager("ABC").with_callbacks(log_callbacks(&log));
        m.select_single(&'B');
        m.handle_key(&mut key("x", Modifiers::CTRL));
        assert_eq!(m.clipboard(), &[Row { id: 'B' }]);
        assert_eq!(log.borrow().last().map(String::as_str), Some("cut:B"));
    }

    #[test]
    fn escape_clears_without_delete() {
        let log: Log = Rc::default();
        let mut m = manager("AB").with_callbacks(log_callbacks(&log));
        m.select_all();
        m.handle_key(&mut key("Escape", Modifiers::NONE));
        assert_eq!(*log.borrow(), vec!["change:AB", "change:"]);
        assert!(m.anchor().is_none());
    }

    #[test]
    fn arrow_navigation_and_deferred_focus() {
        let log: Log = Rc::default();
        let focused: Rc<RefCell<Vec<char>>> = Rc::default();
        let mut m = manager("ABC").with_callbacks(log_callbacks(&log));
        for id in ['A', 'B', 'C'] {
            let sink = Rc::clone(&focused);
            m.register_focusable(id, move || sink.borrow_mut().push(id));
        }

        m.select_single(&'A');
        log.borrow_mut().clear();

        assert!(m.handle_key(&mut key("ArrowDown", Modifiers::NONE)));
        assert_eq!(ids(&m), vec!['B']);
        assert!(focused.borrow().is_empty());
        assert!(m.has_pending_focus());

        assert_eq!(m.tick(), 1);
        assert_eq!(*focused.borrow(), vec!['B']);
        assert_eq!(*log.borrow(), vec!["change:B", "navigate:B"]);
    }

    #[test]
    fn navigation_clamps_at_ends() {
        let log: Log = Rc::default();
        let mut m = manager("AB").with_callbacks(log_callbacks(&log));
        m.select_single(&'B');
        log.borrow_mut().clear();

        let mut ev = key("ArrowRight", Modifiers::NONE);
        assert!(m.handle_key(&mut ev));
        assert!(ev.default_prevented());
        assert!(log.borrow().is_empty());
        assert!(!m.has_pending_focus());

        m.handle_key(&mut key("Home", Modifiers::NONE));
        assert_eq!(ids(&m), vec!['A']);
        m.handle_key(&mut key("End", Modifiers::NONE));
        assert_eq!(ids(&m), vec!['B']);
    }

    #[test]
    fn navigation_from_empty_selection_lands_on_first() {
        let mut m = manager("ABC");
        m.handle_key(&mut key("ArrowUp", Modifiers::NONE));
        assert_eq!(ids(&m), vec!['A']);
    }

    #[test]
    fn current_is_most_recently_selected() {
        let mut m = manager("ABCDE");
        m.toggle(&'D');
        m.toggle(&'B');
        m.handle_key(&mut key("ArrowDown", Modifiers::NONE));
        assert_eq!(ids(&m), vec!['C']);
    }

    #[test]
    fn keyboard_navigation_can_be_disabled() {
        let mut m = manager("AB").with_keyboard_navigation(false);
        let mut ev = key("ArrowDown", Modifiers::NONE);
        assert!(!m.handle_key(&mut ev));
        assert!(!ev.default_prevented());
        assert!(m.selected_count() == 0);
    }

    #[test]
    fn editable_targets_are_ignored() {
        let mut m = manager("AB");
        assert!(!m.handle_key(&mut key("a", Modifiers::CTRL).in_editable()));
        assert_eq!(m.selected_count(), 0);
    }

    // ── Collection changes ───────────────────────────────────────────

    #[test]
    fn set_items_prunes_selection_and_anchor() {
        let log: Log = Rc::default();
        let mut m = manager("ABC").with_callbacks(log_callbacks(&log));
        m.select_all();
        m.set_items(rows("AB"));
        assert_eq!(ids(&m), vec!['A', 'B']);
        assert!(m.anchor().is_none());
        assert_eq!(log.borrow().last().map(String::as_str), Some("change:AB"));
    }

    #[test]
    fn selection_change_fires_only_on_change() {
        let log: Log = Rc::default();
        let mut m = manager("AB").with_callbacks(log_callbacks(&log));
        m.select_single(&'A');
        m.select_single(&'A');
        m.clear();
        m.clear();
        assert_eq!(*log.borrow(), vec!["change:A", "change:"]);
    }

    #[test]
    fn initial_selection_drops_unknown_ids() {
        let m = manager("ABC").with_initial_selected(['B', 'Z']);
        assert_eq!(ids(&m), vec!['B']);
    }

    // ── Bindings / focus ─────────────────────────────────────────────

    #[test]
    fn bindings_reflect_selection() {
        let mut m = manager("AB");
        m.select_single(&'A');
        assert_eq!(m.item_bindings(&'A').tab_index, 0);
        assert!(!m.item_bindings(&'B').aria_selected);
        assert!(m.container_bindings().aria_multiselectable);
    }

    #[test]
    fn focus_item_without_target_is_noop() {
        let mut m = manager("AB");
        assert!(!m.focus_item(&'A'));
        m.register_focusable('A', || {});
        assert!(m.focus_item(&'A'));
        assert!(m.unregister_focusable(&'A'));
        assert!(!m.focus_item(&'A'));
    }
}
