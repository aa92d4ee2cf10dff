//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Expiry alert settings (on/off, how many days ahead)
//! - Recipe generation delay
//! - Dietary restrictions
//! - Default log filter
//!
//! Configuration is stored at `~/.config/freshkeep/config.toml`. Domain
//! data (inventory, recipes, shopping list) is never written here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::generation::DEFAULT_GENERATION_DELAY;
use crate::store::DEFAULT_EXPIRY_WINDOW_DAYS;

/// Widest accepted "expiring soon" window, in days.
pub const MAX_DAYS_BEFORE_EXPIRY: u32 = 3650;

/// Expiry alert configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub expiry_alerts: bool,
    /// Width of the "expiring soon" window.
    #[serde(default = "default_days_before_expiry")]
    pub days_before_expiry: u32,
}

/// Recipe generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipesConfig {
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/freshkeep/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub recipes: RecipesConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}
fn default_days_before_expiry() -> u32 {
    DEFAULT_EXPIRY_WINDOW_DAYS as u32
}
fn default_generation_delay_ms() -> u64 {
    DEFAULT_GENERATION_DELAY.as_millis() as u64
}
fn default_log_filter() -> String {
    "warn".into()
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            expiry_alerts: true,
            days_before_expiry: default_days_before_expiry(),
        }
    }
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(format!("cannot parse '{value}' as bool: {e}")))?,
                ),
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?,
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit
    /// the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let days = self.notifications.days_before_expiry;
        if days > MAX_DAYS_BEFORE_EXPIRY {
            return Err(ConfigError::InvalidValue {
                key: "notifications.days_before_expiry".to_string(),
                message: format!("{days} exceeds the maximum of {MAX_DAYS_BEFORE_EXPIRY} days"),
            });
        }
        Ok(())
    }

    /// Every leaf key with its current value, in `key = value` form.
    pub fn entries(&self) -> Vec<(String, String)> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (k, v) in map {
                        let key = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{prefix}.{k}")
                        };
                        walk(&key, v, out);
                    }
                }
                serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
                other => out.push((prefix.to_string(), other.to_string())),
            }
        }

        let mut out = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            walk("", &json, &mut out);
        }
        out
    }

    /// Window used for the derived expiring list.
    pub fn expiry_window(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.notifications.days_before_expiry))
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.recipes.generation_delay_ms)
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("falling back to default config: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert!(parsed.notifications.expiry_alerts);
        assert_eq!(parsed.notifications.days_before_expiry, 3);
        assert_eq!(parsed.recipes.generation_delay_ms, 1500);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[notifications]\ndays_before_expiry = 5\n").unwrap();
        assert_eq!(parsed.notifications.days_before_expiry, 5);
        assert!(parsed.notifications.expiry_alerts);
        assert_eq!(parsed.logging.filter, "warn");
        assert_eq!(parsed.expiry_window(), chrono::Duration::days(5));
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("notifications.expiry_alerts").as_deref(), Some("true"));
        assert_eq!(cfg.get("recipes.generation_delay_ms").as_deref(), Some("1500"));
        assert_eq!(cfg.get("logging.filter").as_deref(), Some("warn"));
        assert!(cfg.get("notifications.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.set("notifications.expiry_alerts", "false").unwrap();
        cfg.set("notifications.days_before_expiry", "7").unwrap();
        cfg.set("preferences.dietary_restrictions", r#"["vegetarian"]"#).unwrap();
        cfg.set("logging.filter", "freshkeep_core=debug").unwrap();

        assert!(!cfg.notifications.expiry_alerts);
        assert_eq!(cfg.notifications.days_before_expiry, 7);
        assert_eq!(cfg.preferences.dietary_restrictions, vec!["vegetarian"]);
        assert_eq!(cfg.logging.filter, "freshkeep_core=debug");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("notifications.nonexistent_key", "1").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
        assert!(cfg.set("", "1").is_err());
    }

    #[test]
    fn set_bounds_expiry_window() {
        let mut cfg = Config::default();
        let err = cfg.set("notifications.days_before_expiry", "200000000").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg.notifications.days_before_expiry, 3);

        cfg.set("notifications.days_before_expiry", &MAX_DAYS_BEFORE_EXPIRY.to_string()).unwrap();
        assert_eq!(cfg.notifications.days_before_expiry, MAX_DAYS_BEFORE_EXPIRY);
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        let err = cfg.set("notifications.expiry_alerts", "not_a_bool").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::InvalidValue { .. })));
        assert!(cfg.set("recipes.generation_delay_ms", "-5").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn entries_lists_every_leaf() {
        let keys: Vec<_> = Config::default().entries().into_iter().map(|(k, _)| k).collect();
        assert!(keys.contains(&"notifications.days_before_expiry".to_string()));
        assert!(keys.contains(&"preferences.dietary_restrictions".to_string()));
        assert!(keys.contains(&"logging.filter".to_string()));
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let mut changed = cfg.clone();
        changed.set("recipes.generation_delay_ms", "10").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().recipes.generation_delay_ms, 10);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "notifications = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::LoadFailed { .. })));
    }
}
