//! Multi-item selection: click modifiers, clipboard, keyboard actions, focus.

pub mod bindings;
pub mod clipboard;
pub mod focus;
pub mod keymap;
pub mod manager;

pub use bindings::{ContainerBindings, SelectionItemBindings};
pub use clipboard::ClipboardBuffer;
pub use focus::{FocusRegistry, Focusable};
pub use keymap::{SelectionAction, SelectionKeymap};
pub use manager::{SelectionCallbacks, SelectionManager};
