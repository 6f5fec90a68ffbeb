//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::fling::FlingThresholds;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_TOML.get();
        debug!(custom = custom.is_some(), "loading settings");
        let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub fling: FlingSettings,
    pub shift: ShiftSettings,
    pub input: InputSettings,
}

impl Settings {
    pub fn fling_thresholds(&self) -> FlingThresholds {
        FlingThresholds {
            min_distance: self.fling.min_distance,
            min_velocity: self.fling.min_velocity,
        }
    }

    /// The kigou fallback as a single char. Validation guarantees exactly one.
    pub fn kigou_fallback_char(&self) -> char {
        self.input.kigou_fallback.chars().next().unwrap_or('？')
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlingSettings {
    pub min_distance: f32,
    pub min_velocity: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShiftSettings {
    pub double_tap_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub word_separators: String,
    pub kigou_fallback: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_threshold {
        ($section:ident . $field:ident) => {
            if !s.$section.$field.is_finite() || s.$section.$field < 0.0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be finite and non-negative".to_string(),
                });
            }
        };
    }

    check_threshold!(fling.min_distance);
    check_threshold!(fling.min_velocity);

    if s.shift.double_tap_ms == 0 {
        return Err(SettingsError::InvalidValue {
            field: "shift.double_tap_ms".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if s.input.kigou_fallback.chars().count() != 1 {
        return Err(SettingsError::InvalidValue {
            field: "input.kigou_fallback".to_string(),
            reason: "must be exactly one character".to_string(),
        });
    }

    Ok(())
}
