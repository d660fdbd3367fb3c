//! Engine configuration.
//!
//! [`EngineConfig`] gathers the tunables a host may want to load from its own
//! settings file: the platform override, fuzzy search defaults, navigator
//! defaults, and remapped selection keys. It derives `Deserialize`; hosts
//! pick the format.

use serde::{Deserialize, Deserializer};

use crate::combo::ComboError;
use crate::fuzzy::FuzzyOptions;
use crate::navigation::NavigatorOptions;
use crate::platform::Platform;
use crate::selection::{SelectionAction, SelectionKeymap};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors from validating an [`EngineConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid combo for `{action:?}`: {source}")]
    InvalidCombo {
        action: SelectionAction,
        #[source]
        source: ComboError,
    },
    #[error("fuzzy threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
}

// ---------------------------------------------------------------------------
// KeyOverride
// ---------------------------------------------------------------------------

/// Rebinds one selection action to a combo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyOverride {
    pub action: SelectionAction,
    pub combo: String,
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Configuration for the engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Force a platform. `None` (or `"auto"`) detects the host.
    #[serde(deserialize_with = "platform_setting")]
    pub platform: Option<Platform>,
    pub fuzzy: FuzzyOptions,
    pub navigation: NavigatorOptions,
    /// Applied in order on top of the default selection keymap.
    pub keymap: Vec<KeyOverride>,
}

/// Accepts `"auto"`, `"apple"`, `"other"` or null.
fn platform_setting<'de, D>(deserializer: D) -> Result<Option<Platform>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Setting {
        Auto,
        Apple,
        Other,
    }

    Ok(match Option::<Setting>::deserialize(deserializer)? {
        None | Some(Setting::Auto) => None,
        Some(Setting::Apple) => Some(Platform::Apple),
        Some(Setting::Other) => Some(Platform::Other),
    })
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a platform (builder).
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set fuzzy search defaults (builder).
    pub fn with_fuzzy(mut self, fuzzy: FuzzyOptions) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Set navigator defaults (builder).
    pub fn with_navigation(mut self, navigation: NavigatorOptions) -> Self {
        self.navigation = navigation;
        self
    }

    /// Rebind a selection action (builder).
    pub fn with_key(mut self, action: SelectionAction, combo: impl Into<String>) -> Self {
        self.keymap.push(KeyOverride {
            action,
            combo: combo.into(),
        });
        self
    }

    /// The configured platform, or the detected one.
    pub fn resolved_platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Check thresholds and keymap combos.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fuzzy.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.fuzzy.threshold));
        }
        self.selection_keymap().map(|_| ())
    }

    /// The default selection keymap with every override applied.
    pub fn selection_keymap(&self) -> Result<SelectionKeymap, ConfigError> {
        let mut keymap = SelectionKeymap::default();
        for entry in &self.keymap {
            keymap
                .rebind(entry.action, &entry.combo)
                .map_err(|source| ConfigError::InvalidCombo {
                    action: entry.action,
                    source,
                })?;
        }
        Ok(keymap)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Orientation;

    #[test]
    fn defaults() {
        let config = EngineConfig::new();
        assert!(config.platform.is_none());
        assert_eq!(config.fuzzy, FuzzyOptions::default());
        assert_eq!(config.navigation, NavigatorOptions::default());
        assert!(config.keymap.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders() {
        let config = EngineConfig::new()
            .with_platform(Platform::Apple)
            .with_fuzzy(FuzzyOptions::new().with_limit(5))
            .with_navigation(NavigatorOptions::new().with_orientation(Orientation::Horizontal))
            .with_key(SelectionAction::Clear, "ctrl+g");

        assert_eq!(config.resolved_platform(), Platform::Apple);
        assert_eq!(config.fuzzy.limit, Some(5));
        assert_eq!(config.navigation.orientation, Orientation::Horizontal);
        assert_eq!(
            config.selection_keymap().unwrap().combos_for(SelectionAction::Clear),
            vec!["ctrl+g"]
        );
    }

    #[test]
    fn platform_setting_values() {
        let parse = |json: &str| serde_json::from_str::<EngineConfig>(json).map(|c| c.platform);
        assert_eq!(parse(r#"{"platform":"auto"}"#).ok(), Some(None));
        assert_eq!(parse(r#"{"platform":null}"#).ok(), Some(None));
        assert_eq!(parse(r#"{}"#).ok(), Some(None));
        assert_eq!(parse(r#"{"platform":"apple"}"#).ok(), Some(Some(Platform::Apple)));
        assert_eq!(parse(r#"{"platform":"other"}"#).ok(), Some(Some(Platform::Other)));
        assert!(parse(r#"{"platform":"windows"}"#).is_err());
    }

    #[test]
    fn invalid_threshold() {
        let config = EngineConfig::new().with_fuzzy(FuzzyOptions::new().with_threshold(1.5));
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOutOfRange(1.5)));
    }

    #[test]
    fn invalid_combo() {
        let config = EngineConfig::new().with_key(SelectionAction::Copy, "cmd+");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCombo { action: SelectionAction::Copy, .. }
        ));
        assert_eq!(
            err.to_string(),
            "invalid combo for `Copy`: combo `cmd+` has no primary key"
        );
    }
}
