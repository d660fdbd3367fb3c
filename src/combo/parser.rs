//! Combo parsing: `"cmd+shift+p"` → [`ParsedCombo`].
//!
//! Two entry points:
//! - [`ParsedCombo::parse`] never fails. Unknown modifier segments are ignored
//!   and an empty or keyless combo yields a value that matches no event.
//! - [`ParsedCombo::try_parse`] is strict and reports a [`ComboError`], for
//!   tooling and configuration validation.

use std::fmt;
use std::str::FromStr;

use super::tokenizer::{tokenize, Token};

// ---------------------------------------------------------------------------
// ComboError
// ---------------------------------------------------------------------------

/// Errors from strict combo parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComboError {
    #[error("combo is empty")]
    Empty,
    #[error("combo `{combo}` has no primary key")]
    MissingKey { combo: String },
    #[error("unknown modifier `{modifier}` in combo `{combo}`")]
    UnknownModifier { combo: String, modifier: String },
    #[error("modifier `{modifier}` appears more than once in combo `{combo}`")]
    DuplicateModifier { combo: String, modifier: String },
}

// ---------------------------------------------------------------------------
// Modifier names
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModifierName {
    Cmd,
    Ctrl,
    Shift,
    Alt,
}

fn modifier_name(segment: &str) -> Option<ModifierName> {
    match segment {
        "cmd" | "command" | "mod" => Some(ModifierName::Cmd),
        "ctrl" | "control" => Some(ModifierName::Ctrl),
        "shift" => Some(ModifierName::Shift),
        "alt" | "option" => Some(ModifierName::Alt),
        _ => None,
    }
}

/// Canonical spelling of a key name.
///
/// Applied to combo keys, event keys and translated event codes alike, so
/// `"esc"`, `"Escape"` and `"escape"` all compare equal.
pub fn canonical_key(key: &str) -> String {
    let lower = key.to_lowercase();
    let canonical = match lower.as_str() {
        "esc" | "escape" => "escape",
        "return" | "enter" => "enter",
        " " | "space" | "spacebar" => "space",
        "arrowup" | "up" => "up",
        "arrowdown" | "down" => "down",
        "arrowleft" | "left" => "left",
        "arrowright" | "right" => "right",
        "del" | "delete" => "delete",
        _ => return lower,
    };
    canonical.to_owned()
}

/// Split the token stream into segments.
///
/// A `+` directly after another `+` (or at the very start) is the plus key
/// itself, so `"cmd++"` yields `["cmd", "+"]`. A trailing separator yields an
/// empty final segment.
fn segments(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut expect_segment = true;

    for (token, text) in tokenize(input) {
        match token {
            Token::Segment => {
                out.push(text);
                expect_segment = false;
            }
            Token::Plus if expect_segment => {
                out.push(text);
                expect_segment = false;
            }
            Token::Plus => expect_segment = true,
        }
    }

    if expect_segment && !out.is_empty() {
        out.push(String::new());
    }
    out
}

// ---------------------------------------------------------------------------
// ParsedCombo
// ---------------------------------------------------------------------------

/// A key combination: one primary key plus a modifier set.
///
/// `cmd` is the platform mod key (Command on Apple, Control elsewhere);
/// `ctrl` is always the literal Control key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParsedCombo {
    /// Canonical primary key. Empty when the combo had no usable key.
    pub key: String,
    pub cmd: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ParsedCombo {
    /// Parse permissively. Never fails.
    pub fn parse(combo: &str) -> Self {
        let parts = segments(&combo.to_lowercase());
        let Some((last, modifiers)) = parts.split_last() else {
            return Self::default();
        };

        let mut parsed = ParsedCombo {
            key: canonical_key(last),
            ..Self::default()
        };
        for segment in modifiers {
            match modifier_name(segment) {
                Some(ModifierName::Cmd) => parsed.cmd = true,
                Some(ModifierName::Ctrl) => parsed.ctrl = true,
                Some(ModifierName::Shift) => parsed.shift = true,
                Some(ModifierName::Alt) => parsed.alt = true,
                None => {}
            }
        }
        parsed
    }

    /// Parse strictly, rejecting anything [`parse`](Self::parse) would
    /// silently paper over.
    pub fn try_parse(combo: &str) -> Result<Self, ComboError> {
        let lower = combo.to_lowercase();
        let parts = segments(&lower);
        let Some((last, modifiers)) = parts.split_last() else {
            return Err(ComboError::Empty);
        };

        if last.is_empty() || modifier_name(last).is_some() {
            return Err(ComboError::MissingKey {
                combo: combo.to_owned(),
            });
        }

        let mut seen = Vec::with_capacity(modifiers.len());
        for segment in modifiers {
            let Some(name) = modifier_name(segment) else {
                return Err(ComboError::UnknownModifier {
                    combo: combo.to_owned(),
                    modifier: segment.clone(),
                });
            };
            if seen.contains(&name) {
                return Err(ComboError::DuplicateModifier {
                    combo: combo.to_owned(),
                    modifier: segment.clone(),
                });
            }
            seen.push(name);
        }

        Ok(Self::parse(&lower))
    }

    /// Whether this combo can match any event at all.
    pub fn is_matchable(&self) -> bool {
        !self.key.is_empty()
    }

    /// Whether any modifier is requested.
    pub fn has_modifiers(&self) -> bool {
        self.cmd || self.ctrl || self.shift || self.alt
    }
}

impl FromStr for ParsedCombo {
    type Err = ComboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

/// Canonical form: `cmd+ctrl+alt+shift+key`. Two combos that match the same
/// events render identically.
impl fmt::Display for ParsedCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (on, name) in [
            (self.cmd, "cmd"),
            (self.ctrl, "ctrl"),
            (self.alt, "alt"),
            (self.shift, "shift"),
        ] {
            if on {
                write!(f, "{name}+")?;
            }
        }
        f.write_str(&self.key)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Permissive parse ─────────────────────────────────────────────

    #[test]
    fn parse_single_key() {
        let parsed = ParsedCombo::parse("escape");
        assert_eq!(parsed.key, "escape");
        assert!(!parsed.has_modifiers());
    }

    #[test]
    fn parse_modifiers() {
        let parsed = ParsedCombo::parse("cmd+shift+p");
        assert_eq!(
            parsed,
            ParsedCombo {
                key: "p".into(),
                cmd: true,
                ctrl: false,
                shift: true,
                alt: false,
            }
        );
    }

    #[test]
    fn parse_modifier_aliases() {
        assert!(ParsedCombo::parse("command+k").cmd);
        assert!(ParsedCombo::parse("mod+k").cmd);
        assert!(ParsedCombo::parse("control+k").ctrl);
        assert!(ParsedCombo::parse("option+k").alt);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ParsedCombo::parse("Cmd+Shift+P"), ParsedCombo::parse("cmd+shift+p"));
    }

    #[test]
    fn parse_key_aliases() {
        assert_eq!(ParsedCombo::parse("esc").key, "escape");
        assert_eq!(ParsedCombo::parse("return").key, "enter");
        assert_eq!(ParsedCombo::parse("arrowup").key, "up");
        assert_eq!(ParsedCombo::parse("ArrowDown").key, "down");
        assert_eq!(ParsedCombo::parse("del").key, "delete");
    }

    #[test]
    fn parse_plus_key() {
        let parsed = ParsedCombo::parse("cmd++");
        assert_eq!(parsed.key, "+");
        assert!(parsed.cmd);
        assert_eq!(ParsedCombo::parse("+").key, "+");
    }

    #[test]
    fn parse_ignores_unknown_modifiers() {
        let parsed = ParsedCombo::parse("hyper+k");
        assert_eq!(parsed.key, "k");
        assert!(!parsed.has_modifiers());
    }

    #[test]
    fn parse_malformed_is_unmatchable() {
        assert!(!ParsedCombo::parse("").is_matchable());
        assert!(!ParsedCombo::parse("cmd+").is_matchable());
        assert!(ParsedCombo::parse("k").is_matchable());
    }

    // ── Strict parse ─────────────────────────────────────────────────

    #[test]
    fn try_parse_ok() {
        let parsed: ParsedCombo = "ctrl+alt+delete".parse().unwrap();
        assert!(parsed.ctrl && parsed.alt);
        assert_eq!(parsed.key, "delete");
    }

    #[test]
    fn try_parse_empty() {
        assert_eq!(ParsedCombo::try_parse("  "), Err(ComboError::Empty));
    }

    #[test]
    fn try_parse_missing_key() {
        assert!(matches!(
            ParsedCombo::try_parse("cmd+"),
            Err(ComboError::MissingKey { .. })
        ));
        assert!(matches!(
            ParsedCombo::try_parse("cmd+shift"),
            Err(ComboError::MissingKey { .. })
        ));
    }

    #[test]
    fn try_parse_unknown_modifier() {
        let err = ParsedCombo::try_parse("hyper+k").unwrap_err();
        assert_eq!(
            err,
            ComboError::UnknownModifier {
                combo: "hyper+k".into(),
                modifier: "hyper".into(),
            }
        );
        assert_eq!(err.to_string(), "unknown modifier `hyper` in combo `hyper+k`");
    }

    #[test]
    fn try_parse_duplicate_modifier() {
        assert!(matches!(
            ParsedCombo::try_parse("cmd+mod+k"),
            Err(ComboError::DuplicateModifier { .. })
        ));
    }

    // ── Display ──────────────────────────────────────────────────────

    #[test]
    fn display_is_canonical() {
        assert_eq!(ParsedCombo::parse("shift+mod+P").to_string(), "cmd+shift+p");
        assert_eq!(ParsedCombo::parse("option+control+esc").to_string(), "ctrl+alt+escape");
    }
}
