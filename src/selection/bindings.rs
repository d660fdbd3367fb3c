//! Accessibility attributes for selectable collections.

/// Attributes for one selectable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionItemBindings {
    /// Always `"option"`.
    pub role: &'static str,
    pub aria_selected: bool,
    /// `0` for selected items, `-1` otherwise.
    pub tab_index: i32,
}

impl SelectionItemBindings {
    pub fn new(selected: bool) -> Self {
        Self {
            role: "option",
            aria_selected: selected,
            tab_index: if selected { 0 } else { -1 },
        }
    }
}

/// Attributes for the collection container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerBindings {
    /// Always `"listbox"`.
    pub role: &'static str,
    pub aria_multiselectable: bool,
}

impl ContainerBindings {
    pub fn new(multi_select: bool) -> Self {
        Self {
            role: "listbox",
            aria_multiselectable: multi_select,
        }
    }
}
