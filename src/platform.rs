//! Platform detection for modifier aliasing.
//!
//! The "mod" key is Command on Apple platforms and Control everywhere else.
//! Every matcher takes a [`Platform`] explicitly; [`Platform::current`] is the
//! process-wide default, detected once.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::event::Modifiers;

/// Which modifier convention applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS, iOS, iPadOS: mod is Command (meta).
    Apple,
    /// Everything else: mod is Control.
    Other,
}

impl Platform {
    /// Classify a platform string (`navigator.platform`, `std::env::consts::OS`).
    pub fn from_platform_str(platform: &str) -> Self {
        let lower = platform.to_ascii_lowercase();
        let apple = ["mac", "iphone", "ipad", "ipod", "darwin", "ios"]
            .iter()
            .any(|needle| lower.contains(needle));
        if apple {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    /// The host platform, detected on first call and cached.
    pub fn current() -> Self {
        static DETECTED: OnceLock<Platform> = OnceLock::new();
        *DETECTED.get_or_init(|| Platform::from_platform_str(std::env::consts::OS))
    }

    pub fn is_apple(self) -> bool {
        self == Platform::Apple
    }

    /// The modifier bit that "mod"/"cmd" resolves to on this platform.
    pub fn mod_modifier(self) -> Modifiers {
        match self {
            Platform::Apple => Modifiers::META,
            Platform::Other => Modifiers::CTRL,
        }
    }

    /// Whether the platform mod key is held in `modifiers`.
    pub fn mod_pressed(self, modifiers: Modifiers) -> bool {
        modifiers.contains(self.mod_modifier())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
