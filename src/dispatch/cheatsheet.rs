//! Introspection for help overlays and debug panels.

use crate::combo::format::format_combo;

use super::context::ContextTag;
use super::dispatcher::ShortcutDispatcher;
use super::shortcut::{Priority, ShortcutId};

// ---------------------------------------------------------------------------
// ShortcutSummary
// ---------------------------------------------------------------------------

/// A registered shortcut without its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutSummary {
    pub id: ShortcutId,
    /// The combo as registered.
    pub combo: String,
    /// Platform display label, e.g. `⌘K` or `Ctrl+K`.
    pub label: String,
    pub description: Option<String>,
    pub contexts: Vec<ContextTag>,
    pub priority: Priority,
    pub enabled: bool,
}

impl ShortcutSummary {
    fn matches_query(&self, needle: &str) -> bool {
        self.combo.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || self
                .contexts
                .iter()
                .any(|c| c.as_str().to_lowercase().contains(needle))
    }
}

/// Shortcuts sharing one priority band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatsheetGroup {
    pub priority: Priority,
    pub shortcuts: Vec<ShortcutSummary>,
}

impl ShortcutDispatcher {
    /// Every registered shortcut, in registration order.
    pub fn shortcuts(&self) -> Vec<ShortcutSummary> {
        let state = self.state.borrow();
        let mut entries: Vec<_> = state.entries.iter().collect();
        entries.sort_by_key(|(_, e)| e.seq);

        entries
            .into_iter()
            .map(|(id, e)| ShortcutSummary {
                id,
                combo: e.def.combo.clone(),
                label: format_combo(&e.def.combo, state.platform),
                description: e.def.description.clone(),
                contexts: e.def.contexts.clone(),
                priority: e.def.priority,
                enabled: e.def.enabled,
            })
            .collect()
    }

    /// Shortcuts whose combo, description or any context contains `query`
    /// (case-insensitive). A blank query returns everything.
    pub fn search_shortcuts(&self, query: &str) -> Vec<ShortcutSummary> {
        let needle = query.trim().to_lowercase();
        let all = self.shortcuts();
        if needle.is_empty() {
            return all;
        }
        all.into_iter().filter(|s| s.matches_query(&needle)).collect()
    }

    /// Enabled shortcuts grouped by priority, highest band first.
    pub fn cheatsheet(&self) -> Vec<CheatsheetGroup> {
        let mut groups: Vec<CheatsheetGroup> = Vec::new();
        for summary in self.shortcuts().into_iter().filter(|s| s.enabled) {
            match groups.iter_mut().find(|g| g.priority == summary.priority) {
                Some(group) => group.shortcuts.push(summary),
                None => groups.push(CheatsheetGroup {
                    priority: summary.priority,
                    shortcuts: vec![summary],
                }),
            }
        }
        groups.sort_by(|a, b| b.priority.cmp(&a.priority));
        groups
    }
}
