//! Event types consumed by the engine and the next-tick queue.

pub mod input;
pub mod queue;

pub use input::{EventTarget, KeyEvent, Modifiers, PointerEvent};
pub use queue::TickQueue;
