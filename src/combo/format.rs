//! Human-readable combo labels for menus, tooltips and cheatsheets.
//!
//! Apple platforms get concatenated glyphs (`⌘⇧P`); everything else gets
//! `+`-joined words (`Ctrl+Shift+P`).

use crate::platform::Platform;

use super::parser::ParsedCombo;

/// Label for the platform mod key.
pub fn modifier_label(platform: Platform) -> &'static str {
    match platform {
        Platform::Apple => "⌘",
        Platform::Other => "Ctrl",
    }
}

fn key_label(key: &str) -> String {
    match key {
        "escape" => "Esc".to_owned(),
        "enter" => "↵".to_owned(),
        "space" => "Space".to_owned(),
        "up" => "↑".to_owned(),
        "down" => "↓".to_owned(),
        "left" => "←".to_owned(),
        "right" => "→".to_owned(),
        other => other.to_uppercase(),
    }
}

/// Render `combo` for display on `platform`.
pub fn format_combo(combo: &str, platform: Platform) -> String {
    ParsedCombo::parse(combo).format(platform)
}

impl ParsedCombo {
    /// Render this combo for display on `platform`.
    pub fn format(&self, platform: Platform) -> String {
        match platform {
            Platform::Apple => {
                let mut out = String::new();
                if self.cmd {
                    out.push('⌘');
                }
                if self.ctrl {
                    out.push('⌃');
                }
                if self.alt {
                    out.push('⌥');
                }
                if self.shift {
                    out.push('⇧');
                }
                out.push_str(&key_label(&self.key));
                out
            }
            Platform::Other => {
                let mut parts: Vec<String> = Vec::with_capacity(4);
                if self.cmd || self.ctrl {
                    parts.push("Ctrl".to_owned());
                }
                if self.alt {
                    parts.push("Alt".to_owned());
                }
                if self.shift {
                    parts.push("Shift".to_owned());
                }
                parts.push(key_label(&self.key));
                parts.join("+")
            }
        }
    }
}
