//! Shortcut definitions, priorities and registration handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use slotmap::new_key_type;

use crate::event::KeyEvent;

use super::context::ContextTag;
use super::dispatcher::DispatcherState;

new_key_type! {
    /// Identifies a registered shortcut. Copy, lightweight (u64).
    pub struct ShortcutId;
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Dispatch priority. Higher wins when several shortcuts match one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Priority(pub i32);

impl Priority {
    pub const GLOBAL: Priority = Priority(0);
    pub const COMPONENT: Priority = Priority(30);
    pub const PANEL: Priority = Priority(50);
    pub const MODAL: Priority = Priority(100);
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ShortcutDefinition
// ---------------------------------------------------------------------------

/// Shortcut callback.
pub type ShortcutHandler = Rc<dyn Fn(&KeyEvent)>;

/// A shortcut to register with a [`ShortcutDispatcher`](super::ShortcutDispatcher).
#[derive(Clone)]
pub struct ShortcutDefinition {
    pub combo: String,
    pub handler: ShortcutHandler,
    /// Empty means "always active".
    pub contexts: Vec<ContextTag>,
    pub priority: Priority,
    pub enabled: bool,
    pub description: Option<String>,
    /// Mark the event as handled when this shortcut wins. Default `true`.
    pub prevent_default: bool,
    /// Fire even when focus is in a text field. Default `false`.
    pub allow_in_editable: bool,
}

impl ShortcutDefinition {
    /// Create a global, enabled, priority-0 shortcut.
    pub fn new(combo: impl Into<String>, handler: impl Fn(&KeyEvent) + 'static) -> Self {
        Self {
            combo: combo.into(),
            handler: Rc::new(handler),
            contexts: Vec::new(),
            priority: Priority::GLOBAL,
            enabled: true,
            description: None,
            prevent_default: true,
            allow_in_editable: false,
        }
    }

    /// Scope to a single context (builder). May be called repeatedly.
    pub fn with_context(mut self, tag: ContextTag) -> Self {
        if !self.contexts.contains(&tag) {
            self.contexts.push(tag);
        }
        self
    }

    /// Scope to a set of contexts (builder).
    pub fn with_contexts(mut self, tags: impl IntoIterator<Item = ContextTag>) -> Self {
        for tag in tags {
            self = self.with_context(tag);
        }
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_prevent_default(mut self, prevent: bool) -> Self {
        self.prevent_default = prevent;
        self
    }

    pub fn with_allow_in_editable(mut self, allow: bool) -> Self {
        self.allow_in_editable = allow;
        self
    }
}

impl fmt::Debug for ShortcutDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutDefinition")
            .field("combo", &self.combo)
            .field("handler", &"<fn>")
            .field("contexts", &self.contexts)
            .field("priority", &self.priority)
            .field("enabled", &self.enabled)
            .field("description", &self.description)
            .field("prevent_default", &self.prevent_default)
            .field("allow_in_editable", &self.allow_in_editable)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ShortcutHandle
// ---------------------------------------------------------------------------

/// Registration handle. Dropping it unregisters the shortcut.
///
/// Holds only a weak reference, so an outstanding handle never keeps a
/// dispatcher alive.
#[must_use = "dropping a ShortcutHandle unregisters the shortcut; call .detach() to keep it"]
pub struct ShortcutHandle {
    id: ShortcutId,
    state: Weak<RefCell<DispatcherState>>,
    active: bool,
}

impl ShortcutHandle {
    pub(crate) fn new(id: ShortcutId, state: Weak<RefCell<DispatcherState>>) -> Self {
        Self {
            id,
            state,
            active: true,
        }
    }

    pub fn id(&self) -> ShortcutId {
        self.id
    }

    /// Unregister now. Returns `true` if the shortcut was still registered.
    pub fn unregister(mut self) -> bool {
        self.release()
    }

    /// Keep the shortcut registered for the dispatcher's lifetime.
    pub fn detach(mut self) -> ShortcutId {
        self.active = false;
        self.id
    }

    fn release(&mut self) -> bool {
        if !std::mem::take(&mut self.active) {
            return false;
        }
        match self.state.upgrade() {
            Some(state) => DispatcherState::remove(&state, self.id),
            None => false,
        }
    }
}

impl Drop for ShortcutHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ShortcutHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutHandle")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
