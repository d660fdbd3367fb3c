//! Matching a [`ParsedCombo`] against a [`KeyEvent`].
//!
//! Modifiers must match exactly: `cmd+k` does not fire for `cmd+shift+k`.
//! The primary key is compared through [`canonical_key`]; when the logical
//! key differs (shifted symbols, non-Latin layouts) the physical `code` is
//! translated and tried as a fallback.

use crate::event::{KeyEvent, Modifiers};
use crate::platform::Platform;

use super::parser::{canonical_key, ParsedCombo};

/// The exact modifier set a combo requires on `platform`.
pub fn expected_modifiers(combo: &ParsedCombo, platform: Platform) -> Modifiers {
    let apple = platform.is_apple();
    let mut mods = Modifiers::NONE;
    if combo.cmd && apple {
        mods = mods | Modifiers::META;
    }
    if combo.ctrl || (combo.cmd && !apple) {
        mods = mods | Modifiers::CTRL;
    }
    if combo.shift {
        mods = mods | Modifiers::SHIFT;
    }
    if combo.alt {
        mods = mods | Modifiers::ALT;
    }
    mods
}

/// Translate a physical key code into the key it produces on a US layout.
///
/// Returns `None` for codes with no sensible single-key equivalent.
pub fn code_to_key(code: &str) -> Option<String> {
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 {
            return Some(letter.to_ascii_lowercase());
        }
    }
    if let Some(digit) = code
        .strip_prefix("Digit")
        .or_else(|| code.strip_prefix("Numpad"))
    {
        if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) {
            return Some(digit.to_owned());
        }
    }

    let key = match code {
        "Slash" | "NumpadDivide" => "/",
        "Backslash" => "\\",
        "Period" | "NumpadDecimal" => ".",
        "Comma" => ",",
        "Semicolon" => ";",
        "Quote" => "'",
        "Backquote" => "`",
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Minus" | "NumpadSubtract" => "-",
        "Equal" => "=",
        "NumpadAdd" => "+",
        "NumpadMultiply" => "*",
        "Space" => "space",
        "Enter" | "NumpadEnter" => "enter",
        "Escape" => "escape",
        "Tab" => "tab",
        "Backspace" => "backspace",
        "Delete" => "delete",
        "ArrowUp" => "up",
        "ArrowDown" => "down",
        "ArrowLeft" => "left",
        "ArrowRight" => "right",
        "Home" => "home",
        "End" => "end",
        "PageUp" => "pageup",
        "PageDown" => "pagedown",
        _ => {
            let is_function_key = code.len() > 1
                && code.starts_with('F')
                && code[1..].chars().all(|c| c.is_ascii_digit());
            if is_function_key {
                return Some(code.to_ascii_lowercase());
            }
            return None;
        }
    };
    Some(key.to_owned())
}

/// Whether the event's key (or its physical code) is the combo's key.
fn key_matches(combo: &ParsedCombo, event: &KeyEvent) -> bool {
    if canonical_key(&event.key) == combo.key {
        return true;
    }
    code_to_key(&event.code).is_some_and(|key| key == combo.key)
}

/// Whether `event` triggers `combo` on `platform`.
pub fn matches(combo: &ParsedCombo, event: &KeyEvent, platform: Platform) -> bool {
    if !combo.is_matchable() {
        return false;
    }
    if event.modifiers.normalized() != expected_modifiers(combo, platform) {
        return false;
    }
    key_matches(combo, event)
}

impl ParsedCombo {
    /// Whether `event` triggers this combo on `platform`.
    pub fn matches(&self, event: &KeyEvent, platform: Platform) -> bool {
        matches(self, event, platform)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
