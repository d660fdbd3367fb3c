//! Remappable key bindings for selection actions.

use serde::Deserialize;

use crate::combo::{ComboError, ParsedCombo};
use crate::event::KeyEvent;
use crate::platform::Platform;

/// A keyboard action on a selectable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionAction {
    SelectAll,
    Copy,
    Cut,
    Paste,
    /// Delete the selection, then clear it.
    Delete,
    /// Clear the selection without deleting.
    Clear,
    Next,
    Previous,
    First,
    Last,
}

impl SelectionAction {
    /// Whether this action moves the selection rather than acting on it.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            SelectionAction::Next
                | SelectionAction::Previous
                | SelectionAction::First
                | SelectionAction::Last
        )
    }
}

/// Combo → action table. Checked in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionKeymap {
    bindings: Vec<(ParsedCombo, SelectionAction)>,
}

impl SelectionKeymap {
    /// A keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a binding, keeping any existing ones for `action`.
    pub fn bind(&mut self, action: SelectionAction, combo: &str) -> Result<(), ComboError> {
        let parsed = ParsedCombo::try_parse(combo)?;
        self.bindings.push((parsed, action));
        Ok(())
    }

    /// Replace every binding for `action` with `combo`.
    pub fn rebind(&mut self, action: SelectionAction, combo: &str) -> Result<(), ComboError> {
        let parsed = ParsedCombo::try_parse(combo)?;
        self.bindings.retain(|(_, a)| *a != action);
        self.bindings.push((parsed, action));
        Ok(())
    }

    /// The action bound to `event`, if any.
    pub fn action_for(&self, event: &KeyEvent, platform: Platform) -> Option<SelectionAction> {
        self.bindings
            .iter()
            .find(|(combo, _)| combo.matches(event, platform))
            .map(|(_, action)| *action)
    }

    /// Canonical combos bound to `action`.
    pub fn combos_for(&self, action: SelectionAction) -> Vec<String> {
        self.bindings
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(combo, _)| combo.to_string())
            .collect()
    }
}

impl Default for SelectionKeymap {
    fn default() -> Self {
        let defaults = [
            ("mod+a", SelectionAction::SelectAll),
            ("mod+c", SelectionAction::Copy),
            ("mod+x", SelectionAction::Cut),
            ("mod+v", SelectionAction::Paste),
            ("delete", SelectionAction::Delete),
            ("backspace", SelectionAction::Delete),
            ("escape", SelectionAction::Clear),
            ("down", SelectionAction::Next),
            ("right", SelectionAction::Next),
            ("up", SelectionAction::Previous),
            ("left", SelectionAction::Previous),
            ("home", SelectionAction::First),
            ("end", SelectionAction::Last),
        ];
        Self {
            bindings: defaults
                .into_iter()
                .map(|(combo, action)| (ParsedCombo::parse(combo), action))
                .collect(),
        }
    }
}
