//! Keyboard cursor navigation over ordered collections.

pub mod cursor;
pub mod scroll;
pub mod strategy;

pub use cursor::{CursorNavigator, ItemBindings, NavigatorOptions};
pub use scroll::{scroll_into_view, ScrollState, StickyInsets};
pub use strategy::{
    clamp_index, step_index, ListStrategy, NavCommand, NavigationKind, NavigationStrategy,
    Orientation,
};
