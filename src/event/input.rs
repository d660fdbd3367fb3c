//! Input event types: key presses, pointer clicks, modifiers.
//!
//! [`KeyEvent`] carries what a keydown delivers in a browser-like host: the
//! logical `key` value (`"a"`, `"Escape"`, `"ArrowUp"`), the physical `code`
//! (`"KeyA"`, `"Slash"`), the modifier set, and whether the focused target
//! accepts text. Crossterm events convert via `From` impls so terminal hosts
//! can feed the engine without touching crossterm types elsewhere.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    /// Command on Apple keyboards, Windows/Super elsewhere.
    pub const META: Modifiers = Modifiers(8);

    const ALL: u8 = 0b1111;

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 & Self::ALL == 0
    }

    /// Drop any bits outside the four known modifiers.
    pub fn normalized(self) -> Modifiers {
        Modifiers(self.0 & Self::ALL)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// EventTarget
// ---------------------------------------------------------------------------

/// What kind of element had focus when the event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventTarget {
    /// Anything that does not accept typed text.
    #[default]
    Plain,
    /// A text input, textarea or content-editable element.
    Editable,
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keydown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key value, e.g. `"k"`, `"K"`, `"Escape"`, `"ArrowDown"`, `" "`.
    pub key: String,
    /// Physical key code, e.g. `"KeyK"`, `"Digit1"`, `"Slash"`. May be empty.
    pub code: String,
    pub modifiers: Modifiers,
    pub target: EventTarget,
    default_prevented: bool,
}

impl KeyEvent {
    /// Create a key event with no physical code and a plain target.
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            code: String::new(),
            modifiers,
            target: EventTarget::Plain,
            default_prevented: false,
        }
    }

    /// Set the physical key code (builder).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Mark the event as fired on a text-editable element (builder).
    pub fn in_editable(mut self) -> Self {
        self.target = EventTarget::Editable;
        self
    }

    /// Whether the event target accepts text input.
    pub fn is_editable_target(&self) -> bool {
        self.target == EventTarget::Editable
    }

    /// Ask the host to suppress its default action for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

// ---------------------------------------------------------------------------
// PointerEvent
// ---------------------------------------------------------------------------

/// A primary-button click on a collection item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerEvent {
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A click with the given modifiers held.
    pub fn new(modifiers: Modifiers) -> Self {
        Self { modifiers }
    }

    /// A click with no modifiers held.
    pub fn plain() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;

    let mut out = Modifiers::NONE;
    if m.contains(KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    if m.contains(KeyModifiers::SUPER) || m.contains(KeyModifiers::META) {
        out = out | Modifiers::META;
    }
    out
}

/// Convert a crossterm `KeyEvent` into our `KeyEvent`.
///
/// Terminals report no physical code, so `code` stays empty. `BackTab` is
/// reported as `Tab` with shift held.
impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyCode;

        let mut modifiers = convert_modifiers(ct.modifiers);
        let key = match ct.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_owned(),
            KeyCode::Esc => "Escape".to_owned(),
            KeyCode::Tab => "Tab".to_owned(),
            KeyCode::BackTab => {
                modifiers = modifiers | Modifiers::SHIFT;
                "Tab".to_owned()
            }
            KeyCode::Backspace => "Backspace".to_owned(),
            KeyCode::Delete => "Delete".to_owned(),
            KeyCode::Insert => "Insert".to_owned(),
            KeyCode::Left => "ArrowLeft".to_owned(),
            KeyCode::Right => "ArrowRight".to_owned(),
            KeyCode::Up => "ArrowUp".to_owned(),
            KeyCode::Down => "ArrowDown".to_owned(),
            KeyCode::Home => "Home".to_owned(),
            KeyCode::End => "End".to_owned(),
            KeyCode::PageUp => "PageUp".to_owned(),
            KeyCode::PageDown => "PageDown".to_owned(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "Unidentified".to_owned(),
        };
        KeyEvent::new(key, modifiers)
    }
}

/// Convert a crossterm mouse event into a click, keeping only its modifiers.
impl From<crossterm::event::MouseEvent> for PointerEvent {
    fn from(ct: crossterm::event::MouseEvent) -> Self {
        PointerEvent::new(convert_modifiers(ct.modifiers))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
