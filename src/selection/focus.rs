//! Focus coordination between selection state and rendered items.
//!
//! The host registers one [`Focusable`] per item id (a DOM element, a
//! terminal widget, a test double) and the selection manager asks the
//! registry to move focus after keyboard navigation.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Something that can take input focus.
pub trait Focusable {
    fn focus(&self);
}

impl<F: Fn()> Focusable for F {
    fn focus(&self) {
        self()
    }
}

/// Focus targets keyed by item id.
pub struct FocusRegistry<Id> {
    targets: HashMap<Id, Box<dyn Focusable>>,
}

impl<Id: Eq + Hash> FocusRegistry<Id> {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// Register (or replace) the focus target for `id`.
    pub fn register(&mut self, id: Id, target: impl Focusable + 'static) {
        self.targets.insert(id, Box::new(target));
    }

    /// Returns `true` if a target was registered.
    pub fn unregister(&mut self, id: &Id) -> bool {
        self.targets.remove(id).is_some()
    }

    /// Focus the target for `id`. Returns `false` when none is registered.
    pub fn focus(&self, id: &Id) -> bool {
        match self.targets.get(id) {
            Some(target) => {
                target.focus();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.targets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<Id: Eq + Hash> Default for FocusRegistry<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: fmt::Debug> fmt::Debug for FocusRegistry<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.targets.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn focus_registered_target() {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let mut registry = FocusRegistry::new();
        registry.register("a", move || h.set(h.get() + 1));

        assert!(registry.focus(&"a"));
        assert_eq!(hits.get(), 1);
        assert!(!registry.focus(&"b"));
    }

    #[test]
    fn unregister_removes_target() {
        let mut registry = FocusRegistry::new();
        registry.register(1, || {});
        assert!(registry.contains(&1));
        assert!(registry.unregister(&1));
        assert!(!registry.unregister(&1));
        assert!(registry.is_empty());
        assert!(!registry.focus(&1));
    }
}
