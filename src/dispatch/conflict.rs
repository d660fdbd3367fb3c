//! Conflict detection: shortcuts that compete for the same events.

use indexmap::IndexMap;

use crate::combo::ParsedCombo;

use super::context::ContextTag;
use super::dispatcher::{Entry, ShortcutDispatcher};
use super::shortcut::{Priority, ShortcutId};

/// Two or more shortcuts with the same combo, contexts and priority.
///
/// Only the most recently registered of them can ever fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Canonical combo, e.g. `cmd+shift+p`.
    pub combo: String,
    pub contexts: Vec<ContextTag>,
    pub priority: Priority,
    /// In registration order; the last one wins.
    pub shortcuts: Vec<ShortcutId>,
    /// Description of each shortcut, or its combo when it has none.
    pub descriptions: Vec<String>,
}

type GroupKey = (ParsedCombo, Vec<ContextTag>, Priority);

impl ShortcutDispatcher {
    /// All conflict groups, ordered by first registration.
    ///
    /// Disabled shortcuts are included: enabling one later would make the
    /// conflict live.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let state = self.state.borrow();

        let mut ordered: Vec<(ShortcutId, &Entry)> = state.entries.iter().collect();
        ordered.sort_by_key(|(_, e)| e.seq);

        let mut groups: IndexMap<GroupKey, Vec<(ShortcutId, &Entry)>> = IndexMap::new();
        for (id, entry) in ordered {
            if !entry.parsed.is_matchable() {
                continue;
            }
            let key = (
                entry.parsed.clone(),
                entry.context_key.clone(),
                entry.def.priority,
            );
            groups.entry(key).or_default().push((id, entry));
        }

        groups
            .into_iter()
            .filter(|(_, members)| members.len() > 1)
            .map(|((combo, contexts, priority), members)| Conflict {
                combo: combo.to_string(),
                contexts,
                priority,
                shortcuts: members.iter().map(|(id, _)| *id).collect(),
                descriptions: members
                    .iter()
                    .map(|(_, e)| e.def.description.clone().unwrap_or_else(|| e.def.combo.clone()))
                    .collect(),
            })
            .collect()
    }

    /// Whether any conflict exists.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts().is_empty()
    }
}
