mod config;

pub use config::{Config, LoggingConfig, NotificationsConfig, PreferencesConfig, RecipesConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the FreshKeep config directory, creating it if needed.
///
/// `FRESHKEEP_HOME` overrides the location outright. Otherwise this is
/// `~/.config/freshkeep[-dev]/`, with `FRESHKEEP_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("FRESHKEEP_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("FRESHKEEP_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("freshkeep-dev")
            } else {
                base_dir.join("freshkeep")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
