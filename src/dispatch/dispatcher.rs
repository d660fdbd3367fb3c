//! ShortcutDispatcher: context-scoped, priority-ranked shortcut dispatch.
//!
//! The dispatcher is a cheap, cloneable handle over single-threaded shared
//! state. Every surface that needs to register shortcuts or flip contexts
//! holds a clone; there is no global instance.
//!
//! Resolution for a key event:
//! 1. skip disabled entries, and entries not allowed in editable targets when
//!    focus is in a text field;
//! 2. keep entries with no contexts, or with at least one active context;
//! 3. keep entries whose combo matches the event exactly;
//! 4. the highest priority wins, ties go to the most recent registration.
//!
//! Exactly one handler runs per event, and no internal borrow is held while
//! it does, so handlers may freely register, unregister or change contexts.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::SlotMap;
use tracing::{debug, trace, warn};

use crate::combo::ParsedCombo;
use crate::config::EngineConfig;
use crate::event::KeyEvent;
use crate::platform::Platform;

use super::context::{ContextSet, ContextTag};
use super::shortcut::{ShortcutDefinition, ShortcutHandle, ShortcutHandler, ShortcutId};

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

pub(crate) struct Entry {
    pub(crate) def: ShortcutDefinition,
    pub(crate) parsed: ParsedCombo,
    /// Registration order, for tie-breaking.
    pub(crate) seq: u64,
    /// Sorted, deduplicated contexts; the conflict grouping key.
    pub(crate) context_key: Vec<ContextTag>,
}

impl Entry {
    fn new(def: ShortcutDefinition, seq: u64) -> Self {
        let parsed = ParsedCombo::parse(&def.combo);
        let mut context_key = def.contexts.clone();
        context_key.sort();
        context_key.dedup();
        Self {
            def,
            parsed,
            seq,
            context_key,
        }
    }

    /// Whether `other` would compete with this entry for the same events.
    pub(crate) fn conflicts_with(&self, other: &Entry) -> bool {
        self.parsed == other.parsed
            && self.context_key == other.context_key
            && self.def.priority == other.def.priority
    }

    fn is_in_scope(&self, contexts: &ContextSet) -> bool {
        self.def.contexts.is_empty() || contexts.contains_any(&self.def.contexts)
    }
}

pub(crate) struct DispatcherState {
    pub(crate) contexts: ContextSet,
    pub(crate) entries: SlotMap<ShortcutId, Entry>,
    pub(crate) platform: Platform,
    next_seq: u64,
}

impl DispatcherState {
    fn new(platform: Platform, contexts: ContextSet) -> Self {
        Self {
            contexts,
            entries: SlotMap::with_key(),
            platform,
            next_seq: 0,
        }
    }

    /// Remove an entry. The removed definition (and its handler) is dropped
    /// only after the borrow is released, since a handler may own a
    /// [`ShortcutHandle`] whose drop re-enters the dispatcher.
    pub(crate) fn remove(state: &RefCell<DispatcherState>, id: ShortcutId) -> bool {
        let removed = state.borrow_mut().entries.remove(id);
        match removed {
            Some(entry) => {
                debug!(combo = %entry.def.combo, "shortcut unregistered");
                drop(entry);
                true
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// ShortcutDispatcher
// ---------------------------------------------------------------------------

/// Registry of shortcuts plus the set of active contexts.
#[derive(Clone)]
pub struct ShortcutDispatcher {
    pub(crate) state: Rc<RefCell<DispatcherState>>,
}

impl ShortcutDispatcher {
    /// Create a dispatcher for the host platform with `GLOBAL` active.
    pub fn new() -> Self {
        Self::with_platform(Platform::current())
    }

    /// Create a dispatcher for an explicit platform with `GLOBAL` active.
    pub fn with_platform(platform: Platform) -> Self {
        Self::with_initial_contexts(platform, [ContextTag::GLOBAL])
    }

    /// Create a dispatcher with an explicit initial context set.
    pub fn with_initial_contexts(
        platform: Platform,
        contexts: impl IntoIterator<Item = ContextTag>,
    ) -> Self {
        let contexts: ContextSet = contexts.into_iter().collect();
        Self {
            state: Rc::new(RefCell::new(DispatcherState::new(platform, contexts))),
        }
    }

    /// Create a dispatcher using the platform from `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_platform(config.resolved_platform())
    }

    pub fn platform(&self) -> Platform {
        self.state.borrow().platform
    }

    // -- Contexts -----------------------------------------------------------

    /// Activate a context. Idempotent.
    pub fn enable_context(&self, tag: ContextTag) {
        let label = tag.to_string();
        if self.state.borrow_mut().contexts.enable(tag) {
            debug!(context = %label, "context enabled");
        }
    }

    /// Deactivate a context. Idempotent.
    pub fn disable_context(&self, tag: &ContextTag) {
        if self.state.borrow_mut().contexts.disable(tag) {
            debug!(context = %tag, "context disabled");
        }
    }

    /// Flip a context. Returns whether it is now active.
    pub fn toggle_context(&self, tag: ContextTag) -> bool {
        let label = tag.to_string();
        let active = self.state.borrow_mut().contexts.toggle(tag);
        debug!(context = %label, active, "context toggled");
        active
    }

    pub fn is_context_active(&self, tag: &ContextTag) -> bool {
        self.state.borrow().contexts.contains(tag)
    }

    pub fn is_any_context_active(&self, tags: &[ContextTag]) -> bool {
        self.state.borrow().contexts.contains_any(tags)
    }

    /// Snapshot of the active contexts, in name order.
    pub fn active_contexts(&self) -> Vec<ContextTag> {
        self.state.borrow().contexts.iter().cloned().collect()
    }

    // -- Registration -------------------------------------------------------

    /// Register a shortcut. Keep the returned handle alive for as long as the
    /// shortcut should stay registered.
    pub fn register(&self, def: ShortcutDefinition) -> ShortcutHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let seq = state.next_seq;
            state.next_seq += 1;
            let entry = Entry::new(def, seq);

            if entry.def.enabled {
                let clash = state
                    .entries
                    .values()
                    .find(|existing| existing.def.enabled && existing.conflicts_with(&entry));
                if let Some(existing) = clash {
                    warn!(
                        combo = %entry.parsed,
                        priority = %entry.def.priority,
                        existing = existing.def.description.as_deref().unwrap_or(&existing.def.combo),
                        new = entry.def.description.as_deref().unwrap_or(&entry.def.combo),
                        "shortcut conflict: same combo, contexts and priority"
                    );
                }
            }

            debug!(
                combo = %entry.def.combo,
                priority = %entry.def.priority,
                contexts = entry.def.contexts.len(),
                "shortcut registered"
            );
            state.entries.insert(entry)
        };
        ShortcutHandle::new(id, Rc::downgrade(&self.state))
    }

    /// Unregister by id. Returns `true` if the shortcut was registered.
    ///
    /// Prefer [`ShortcutHandle::unregister`]; this is for detached shortcuts.
    pub fn unregister(&self, id: ShortcutId) -> bool {
        DispatcherState::remove(&self.state, id)
    }

    /// Enable or disable a registered shortcut. Returns `false` for unknown ids.
    pub fn set_enabled(&self, id: ShortcutId, enabled: bool) -> bool {
        match self.state.borrow_mut().entries.get_mut(id) {
            Some(entry) => {
                entry.def.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn is_registered(&self, id: ShortcutId) -> bool {
        self.state.borrow().entries.contains_key(id)
    }

    /// Number of registered shortcuts, enabled or not.
    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().entries.is_empty()
    }

    // -- Dispatch -----------------------------------------------------------

    fn winner(&self, event: &KeyEvent) -> Option<(ShortcutId, ShortcutHandler, bool)> {
        let state = self.state.borrow();
        let editable = event.is_editable_target();

        state
            .entries
            .iter()
            .filter(|(_, e)| e.def.enabled)
            .filter(|(_, e)| !editable || e.def.allow_in_editable)
            .filter(|(_, e)| e.is_in_scope(&state.contexts))
            .filter(|(_, e)| e.parsed.matches(event, state.platform))
            .max_by_key(|(_, e)| (e.def.priority, e.seq))
            .map(|(id, e)| (id, Rc::clone(&e.def.handler), e.def.prevent_default))
    }

    /// Which shortcut would handle `event`, without running it.
    pub fn resolve(&self, event: &KeyEvent) -> Option<ShortcutId> {
        self.winner(event).map(|(id, _, _)| id)
    }

    /// Run the winning shortcut for `event`, if any. Returns its id.
    pub fn dispatch(&self, event: &mut KeyEvent) -> Option<ShortcutId> {
        let Some((id, handler, prevent_default)) = self.winner(event) else {
            trace!(key = %event.key, "no shortcut matched");
            return None;
        };

        trace!(key = %event.key, ?id, "shortcut matched");
        if prevent_default {
            event.prevent_default();
        }
        handler(event);
        Some(id)
    }
}

impl Default for ShortcutDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShortcutDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ShortcutDispatcher")
            .field("platform", &state.platform)
            .field("contexts", &state.contexts)
            .field("shortcuts", &state.entries.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
