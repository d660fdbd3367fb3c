//! Pilot: drive a dispatcher with combo strings.
//!
//! Tests describe key presses the way shortcuts are registered (`"mod+k"`,
//! `"shift+escape"`). The pilot synthesizes the matching [`KeyEvent`] for its
//! platform and dispatches it.

use crate::combo::{expected_modifiers, ParsedCombo};
use crate::dispatch::{ShortcutDispatcher, ShortcutId};
use crate::event::{KeyEvent, Modifiers};
use crate::platform::Platform;

// ---------------------------------------------------------------------------
// Event synthesis
// ---------------------------------------------------------------------------

/// Build the key event a host would deliver for `combo` on `platform`.
///
/// Named keys get their browser key values (`"Escape"`, `"ArrowUp"`, `" "`),
/// shifted letters are uppercased, and letters and digits carry a physical
/// code. An unparseable combo yields an empty event that matches nothing.
pub fn key_event_for(combo: &str, platform: Platform) -> KeyEvent {
    let parsed = ParsedCombo::parse(combo);
    if !parsed.is_matchable() {
        return KeyEvent::new("", Modifiers::NONE);
    }

    let key = match parsed.key.as_str() {
        "escape" => "Escape".to_owned(),
        "enter" => "Enter".to_owned(),
        "space" => " ".to_owned(),
        "up" => "ArrowUp".to_owned(),
        "down" => "ArrowDown".to_owned(),
        "left" => "ArrowLeft".to_owned(),
        "right" => "ArrowRight".to_owned(),
        "delete" => "Delete".to_owned(),
        "backspace" => "Backspace".to_owned(),
        "home" => "Home".to_owned(),
        "end" => "End".to_owned(),
        "tab" => "Tab".to_owned(),
        other if parsed.shift && other.len() == 1 => other.to_uppercase(),
        other => other.to_owned(),
    };

    let code = match parsed.key.chars().next() {
        Some(c) if parsed.key.len() == 1 && c.is_ascii_alphabetic() => {
            format!("Key{}", c.to_ascii_uppercase())
        }
        Some(c) if parsed.key.len() == 1 && c.is_ascii_digit() => format!("Digit{c}"),
        _ => String::new(),
    };

    KeyEvent::new(key, expected_modifiers(&parsed, platform)).with_code(code)
}

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A dispatcher driver for tests.
///
/// # Examples
///
/// ```
/// use keyscope::dispatch::ShortcutDefinition;
/// use keyscope::platform::Platform;
/// use keyscope::testing::Pilot;
///
/// let pilot = Pilot::new(Platform::Apple);
/// let handle = pilot
///     .dispatcher()
///     .register(ShortcutDefinition::new("mod+k", |_| {}));
/// assert_eq!(pilot.press("cmd+k"), Some(handle.id()));
/// ```
#[derive(Debug, Clone)]
pub struct Pilot {
    dispatcher: ShortcutDispatcher,
    platform: Platform,
}

impl Pilot {
    /// A pilot with a fresh dispatcher for `platform`.
    pub fn new(platform: Platform) -> Self {
        Self {
            dispatcher: ShortcutDispatcher::with_platform(platform),
            platform,
        }
    }

    /// A pilot over an existing dispatcher.
    pub fn with_dispatcher(dispatcher: ShortcutDispatcher) -> Self {
        let platform = dispatcher.platform();
        Self {
            dispatcher,
            platform,
        }
    }

    pub fn dispatcher(&self) -> &ShortcutDispatcher {
        &self.dispatcher
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The event [`press`](Self::press) would dispatch.
    pub fn key_event(&self, combo: &str) -> KeyEvent {
        key_event_for(combo, self.platform)
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Press `combo` with focus outside any text field.
    pub fn press(&self, combo: &str) -> Option<ShortcutId> {
        self.dispatcher.dispatch(&mut self.key_event(combo))
    }

    /// Press `combo` with focus in a text field.
    pub fn press_in_editable(&self, combo: &str) -> Option<ShortcutId> {
        self.dispatcher
            .dispatch(&mut self.key_event(combo).in_editable())
    }

    /// Dispatch a prepared event and hand it back for inspection.
    pub fn press_event(&self, mut event: KeyEvent) -> (Option<ShortcutId>, KeyEvent) {
        let id = self.dispatcher.dispatch(&mut event);
        (id, event)
    }

    /// Press each combo in order, returning the winner of each press.
    pub fn press_sequence(&self, combos: &[&str]) -> Vec<Option<ShortcutId>> {
        combos.iter().map(|combo| self.press(combo)).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{ContextTag, Priority, ShortcutDefinition};

    #[test]
    fn synthesized_events() {
        let ev = key_event_for("mod+shift+p", Platform::Apple);
        assert_eq!(ev.key, "P");
        assert_eq!(ev.code, "KeyP");
        assert_eq!(ev.modifiers, Modifiers::META | Modifiers::SHIFT);

        let ev = key_event_for("ctrl+1", Platform::Other);
        assert_eq!((ev.key.as_str(), ev.code.as_str()), ("1", "Digit1"));
        assert_eq!(ev.modifiers, Modifiers::CTRL);

        assert_eq!(key_event_for("esc", Platform::Other).key, "Escape");
        assert_eq!(key_event_for("space", Platform::Other).key, " ");
        assert_eq!(key_event_for("cmd+", Platform::Other).key, "");
    }

    #[test]
    fn synthesized_events_match_their_combo() {
        for platform in [Platform::Apple, Platform::Other] {
            for combo in ["mod+k", "ctrl+alt+delete", "shift+up", "escape", "cmd+shift+/"] {
                let ev = key_event_for(combo, platform);
                assert!(ParsedCombo::parse(combo).matches(&ev, platform), "{combo}");
            }
        }
    }

    #[test]
    fn press_dispatches() {
        let pilot = Pilot::new(Platform::Other);
        let palette = pilot
            .dispatcher()
            .register(ShortcutDefinition::new("mod+k", |_| {}));
        let close = pilot.dispatcher().register(
            ShortcutDefinition::new("escape", |_| {})
                .with_context(ContextTag::COMMAND_PALETTE_OPEN)
                .with_priority(Priority::MODAL),
        );

        assert_eq!(pilot.press("mod+k"), Some(palette.id()));
        assert_eq!(pilot.press("escape"), None);

        pilot
            .dispatcher()
            .enable_context(ContextTag::COMMAND_PALETTE_OPEN);
        assert_eq!(
            pilot.press_sequence(&["escape", "mod+j"]),
            vec![Some(close.id()), None]
        );
        assert_eq!(pilot.press_in_editable("mod+k"), None);
    }

    #[test]
    fn press_event_returns_event() {
        let pilot = Pilot::with_dispatcher(ShortcutDispatcher::with_platform(Platform::Apple));
        let _h = pilot
            .dispatcher()
            .register(ShortcutDefinition::new("mod+s", |_| {}));
        let (id, event) = pilot.press_event(pilot.key_event("cmd+s"));
        assert!(id.is_some());
        assert!(event.default_prevented());
    }
}
