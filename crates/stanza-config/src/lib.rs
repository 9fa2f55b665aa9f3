//! Stanza configuration system
//!
//! This crate provides centralized configuration management for Stanza,
//! loading settings from `stanza.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Stanza
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StanzaConfig {
    /// Editor surface settings
    pub editor: EditorConfig,
    /// Effect authoring defaults
    pub effects: EffectsConfig,
    /// Style engine settings
    pub engine: EngineConfig,
}

/// Editor surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Breakpoint tab selected when the inspector opens (desktop, tablet, mobile)
    pub default_breakpoint: Option<String>,
    /// Interaction state tab selected when the inspector opens (none, hover, pressed, focused)
    pub default_state: Option<String>,
}

/// Defaults applied when a new effect is enabled
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Duration for a freshly enabled effect in milliseconds
    pub default_duration_ms: f32,
    /// Named easing for a freshly enabled effect (linear, ease, ease_in, ease_out, ease_in_out)
    pub default_easing: Option<String>,
    /// Step between stagger delays in milliseconds
    pub stagger_amount_ms: f32,
}

/// Style engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject edits naming unknown properties instead of ignoring them
    pub strict_properties: bool,
    /// Diagnostic categories to enable (comma-separated; mirrors STANZA_DIAGNOSTICS)
    pub diagnostics: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_breakpoint: None,
            default_state: None,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 300.0,
            default_easing: None,
            stagger_amount_ms: 100.0,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_properties: false,
            diagnostics: None,
        }
    }
}

impl StanzaConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the stanza.toml configuration file
    ///
    /// # Returns
    /// * `Ok(StanzaConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (stanza.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("stanza.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        // Editor settings
        if let Ok(breakpoint) = std::env::var("STANZA_DEFAULT_BREAKPOINT") {
            self.editor.default_breakpoint = Some(breakpoint);
        }
        if let Ok(state) = std::env::var("STANZA_DEFAULT_STATE") {
            self.editor.default_state = Some(state);
        }

        // Effect defaults
        if let Ok(val) = std::env::var("STANZA_EFFECT_DURATION_MS") {
            if let Ok(duration) = val.parse::<f32>() {
                self.effects.default_duration_ms = duration;
            }
        }
        if let Ok(easing) = std::env::var("STANZA_EFFECT_EASING") {
            self.effects.default_easing = Some(easing);
        }
        if let Ok(val) = std::env::var("STANZA_STAGGER_AMOUNT_MS") {
            if let Ok(amount) = val.parse::<f32>() {
                self.effects.stagger_amount_ms = amount;
            }
        }

        // Engine settings
        if let Ok(val) = std::env::var("STANZA_STRICT_PROPERTIES") {
            self.engine.strict_properties = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(diagnostics) = std::env::var("STANZA_DIAGNOSTICS") {
            self.engine.diagnostics = Some(diagnostics);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from stanza.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StanzaConfig::default();
        assert_eq!(config.effects.default_duration_ms, 300.0);
        assert_eq!(config.effects.stagger_amount_ms, 100.0);
        assert!(!config.engine.strict_properties);
        assert!(config.editor.default_breakpoint.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let config = StanzaConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: StanzaConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.effects.default_duration_ms,
            config.effects.default_duration_ms
        );
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if stanza.toml doesn't exist
        let config = StanzaConfig::load_or_default();
        assert_eq!(config.effects.default_duration_ms, 300.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[editor]
default_breakpoint = "mobile"

[effects]
default_duration_ms = 450.0
default_easing = "ease_out"

[engine]
strict_properties = true
"#
        )
        .unwrap();

        let config = StanzaConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.editor.default_breakpoint.as_deref(), Some("mobile"));
        assert_eq!(config.effects.default_duration_ms, 450.0);
        assert_eq!(config.effects.default_easing.as_deref(), Some("ease_out"));
        assert!(config.engine.strict_properties);
        // Sections not present in the file fall back to defaults.
        assert_eq!(config.effects.stagger_amount_ms, 100.0);
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let result = StanzaConfig::load_from_file("/nonexistent/stanza.toml");
        assert!(result.is_err());
    }
}
