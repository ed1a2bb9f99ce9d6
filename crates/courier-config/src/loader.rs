//! TOML config loading: read from path or platform default.

use std::path::{Path, PathBuf};

use courier_common::ConfigError;
use tracing::{info, warn};

use crate::schema::CourierConfig;
use crate::validation;

/// Default config file contents, written on first launch.
const DEFAULT_CONFIG_TOML: &str = r#"# Courier configuration.
# Every key is optional; missing keys fall back to the built-in defaults.

[window]
width = 1200
height = 670
title = "Courier"
maximize = true

[layout]
# Width in pixels reserved on the left edge for the side menu.
side_menu_width = 250
# Height in pixels reserved along the top edge. Zero disables it.
top_strip_height = 0

[polling]
# Interval between unread probe ticks, in milliseconds.
unread_interval_ms = 1000
# Settle delay before page-load automation runs, in milliseconds.
inject_settle_ms = 2000
# Zoom factor applied to provider views after their first page load.
page_zoom = 0.9

[storage]
# data_dir = "/path/to/courier-data"
"#;

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("courier").join("config.toml"))
}

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<CourierConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: CourierConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} — using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, creates a default config file and returns
/// defaults.
pub fn load_default() -> Result<CourierConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(CourierConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Write the documented default config file.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
